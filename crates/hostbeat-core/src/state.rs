//! Agent lifecycle state machine

/// States of the agent lifecycle
///
/// The lifecycle is a straight line: `Starting` performs the collector
/// reachability gate, `Ready` marks the baseline capture, `Running` is the
/// periodic sample-diff-report cycle, `Stopping` is entered on a termination
/// signal and `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    Starting,
    Ready,
    Running,
    Stopping,
    Stopped,
}

impl std::fmt::Display for AgentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentState::Starting => write!(f, "starting"),
            AgentState::Ready => write!(f, "ready"),
            AgentState::Running => write!(f, "running"),
            AgentState::Stopping => write!(f, "stopping"),
            AgentState::Stopped => write!(f, "stopped"),
        }
    }
}
