//! hostbeat: host change-reporting agent
//!
//! Wires the sampler, change detector and reporter into the periodic agent
//! loop; the binary in `main.rs` adds CLI, configuration and signal handling.

pub mod agent;
pub mod config;
pub mod signals;

pub use agent::Agent;
pub use config::AgentConfig;
