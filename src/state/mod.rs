mod roster;
mod round;
mod session;

use crate::analysis::AnalysisProvider;
use crate::types::*;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state: one live session behind a lock, plus the client
/// for the remote analysis service.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub analysis: Arc<dyn AnalysisProvider>,
}

impl AppState {
    pub fn new(analysis: Arc<dyn AnalysisProvider>) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new())),
            analysis,
        }
    }

    /// Get a snapshot of the current session
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Resolve the opposing player's guess against the pending scenario.
    ///
    /// The remote call happens outside the session lock; whichever resolution
    /// lands last wins. A failed call is logged for the operator and returns
    /// the round to AwaitingSubmission with scores untouched, so the player
    /// can simply resubmit.
    pub async fn resolve_guess(&self, guess: Guess) -> Result<Session, String> {
        let scenario = {
            let session = self.session.read().await;
            session
                .pending_scenario()
                .ok_or("No scenario is awaiting a guess")?
                .to_string()
        };

        match self.analysis.analyze(&scenario).await {
            Ok(ruling) => {
                let mut session = self.session.write().await;
                session.apply_ruling(guess, ruling)?;
                Ok(session.clone())
            }
            Err(e) => {
                tracing::error!("Analysis request failed during guess resolution: {}", e);
                let mut session = self.session.write().await;
                session.abort_pending_guess();
                Ok(session.clone())
            }
        }
    }

    /// Run a single-query analysis. On failure the previous result (if any)
    /// stays on screen; the error goes to the operator log only.
    pub async fn analyze_single(&self, text: &str) -> Result<Session, String> {
        if text.is_empty() {
            return Err("Scenario text must not be empty".to_string());
        }
        {
            let session = self.session.read().await;
            if !matches!(session.mode, SessionMode::SingleQuery { .. }) {
                return Err("Not in single-query mode".to_string());
            }
        }

        match self.analysis.analyze(text).await {
            Ok(ruling) => {
                let mut session = self.session.write().await;
                session.record_single_result(ruling)?;
                Ok(session.clone())
            }
            Err(e) => {
                tracing::error!("Analysis request failed for single query: {}", e);
                Ok(self.snapshot().await)
            }
        }
    }
}
