//! The periodic sample-diff-report loop

use std::sync::Arc;
use std::time::Duration;

use hostbeat_client::{Reporter, TransportError};
use hostbeat_core::{AgentState, Snapshot, diff};
use hostbeat_sampler::Sampler;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// The agent loop
///
/// Owns the one retained previous snapshot; sampling, diffing and reporting
/// run sequentially inside a single task, so no tick's reports ever
/// interleave with another's.
pub struct Agent {
    sampler: Arc<dyn Sampler>,
    reporter: Reporter,
    interval: Duration,
    state: AgentState,
    /// None until the baseline is captured
    previous: Option<Snapshot>,
}

impl Agent {
    /// Create an agent over a sampler and reporter
    pub fn new(sampler: Arc<dyn Sampler>, reporter: Reporter, interval: Duration) -> Self {
        Self {
            sampler,
            reporter,
            interval,
            state: AgentState::Starting,
            previous: None,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> AgentState {
        self.state
    }

    fn transition(&mut self, next: AgentState) {
        info!(from = %self.state, to = %next, "agent state transition");
        self.state = next;
    }

    /// Run the agent until the token is cancelled
    ///
    /// The first successful sample becomes the baseline and is never
    /// reported. Sampling failures skip the tick; report failures drop that
    /// delta. Both are logged, neither stops the loop.
    ///
    /// # Errors
    /// Returns an error only when the startup reachability probe fails; the
    /// caller should exit non-zero without entering the periodic cycle.
    pub async fn run(&mut self, shutdown: CancellationToken) -> Result<(), TransportError> {
        if let Err(e) = self.reporter.probe().await {
            error!(url = %self.reporter.collector_url(), error = %e, "collector is not reachable");
            return Err(e);
        }
        info!(url = %self.reporter.collector_url(), "collector is reachable");
        self.transition(AgentState::Ready);

        self.transition(AgentState::Running);
        self.tick().await;

        loop {
            tokio::select! {
                () = shutdown.cancelled() => break,
                () = tokio::time::sleep(self.interval) => {}
            }
            self.tick().await;
        }

        self.transition(AgentState::Stopping);
        info!("agent shutting down");
        self.transition(AgentState::Stopped);

        Ok(())
    }

    /// One sample-diff-report cycle
    async fn tick(&mut self) {
        let snapshot = match self.sampler.sample().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // Previous snapshot stays untouched
                error!(error = %e, "sampling failed, skipping this tick");
                return;
            }
        };

        match &self.previous {
            None => info!("baseline snapshot captured"),
            Some(previous) => {
                let changes = diff(previous, &snapshot);
                for (field, value) in changes.iter() {
                    info!(field = %field, "field changed");
                    if let Err(e) = self.reporter.report_field(field.name(), value).await {
                        error!(field = %field, error = %e, "failed to report change, dropping delta");
                    }
                }
            }
        }

        self.previous = Some(snapshot);
    }
}
