//! hostbeat-sampler: host state sampling
//!
//! Provides the `Sampler` trait and the `sysinfo`-backed implementation that
//! reads current host facts into a `Snapshot`.

pub mod error;
pub mod system;
pub mod traits;

pub use error::SamplingError;
pub use system::SystemSampler;
pub use traits::Sampler;
