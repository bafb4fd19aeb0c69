use super::*;
use serde::Serialize;
use std::time::Duration;

/// Client for the HTTP analysis service
pub struct HttpAnalysisProvider {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpAnalysisProvider {
    /// Create a new provider for the given base URL
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();

        Self {
            base_url,
            timeout,
            client,
        }
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    situation: &'a str,
}

#[async_trait]
impl AnalysisProvider for HttpAnalysisProvider {
    async fn analyze(&self, situation: &str) -> AnalysisResult<Ruling> {
        let url = format!("{}/analyze", self.base_url);
        let body = AnalyzeRequest { situation };

        // Execute with timeout
        let response = tokio::time::timeout(
            self.timeout,
            self.client.post(&url).json(&body).send(),
        )
        .await
        .map_err(|_| AnalysisError::Timeout(self.timeout))?
        .map_err(|e| AnalysisError::ApiError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalysisError::ApiError(format!(
                "analysis service returned status: {}",
                response.status()
            )));
        }

        let ruling: Ruling = response
            .json()
            .await
            .map_err(|e| AnalysisError::ParseError(e.to_string()))?;

        Ok(ruling)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Only run with the analysis service running locally
    async fn test_analyze_against_local_service() {
        let provider = HttpAnalysisProvider::new(
            "http://localhost:5000".to_string(),
            Duration::from_secs(30),
        );

        let ruling = provider
            .analyze("It is legal to paint the sky green")
            .await
            .unwrap();

        println!("Verdict: {:?}", ruling.verdict);
        println!("Reasoning: {}", ruling.reasoning);
        assert!(!ruling.reasoning.is_empty());
    }
}
