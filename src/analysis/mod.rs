mod http;

use crate::types::Ruling;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub use http::HttpAnalysisProvider;

/// Result type for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while consulting the remote analysis service. The
/// session layer treats all of them the same way (log and drop the pending
/// action), but the distinction is useful in operator logs.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis request failed: {0}")]
    ApiError(String),

    #[error("analysis request timed out after {0:?}")]
    Timeout(Duration),

    #[error("analysis response parsing failed: {0}")]
    ParseError(String),
}

/// Boundary to the remote service that rules on submitted scenarios
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// Submit a natural-language scenario and get a verdict record back
    async fn analyze(&self, situation: &str) -> AnalysisResult<Ruling>;

    /// Get the name of this provider
    fn name(&self) -> &str;
}

/// Configuration for the analysis client
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Base URL of the analysis service (the `/analyze` path is appended)
    pub base_url: String,
    /// Timeout for each analysis request
    pub timeout: Duration,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = std::env::var("ANALYSIS_BASE_URL")
            .ok()
            .and_then(|url| {
                let trimmed = url.trim().trim_end_matches('/');
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or(defaults.base_url);

        let timeout = std::env::var("ANALYSIS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self { base_url, timeout }
    }

    /// Build the provider this config describes
    pub fn build_provider(&self) -> Arc<dyn AnalysisProvider> {
        Arc::new(HttpAnalysisProvider::new(
            self.base_url.clone(),
            self.timeout,
        ))
    }
}
