use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

use crate::models::{ClassificationRequest, ClassificationResult, UpstreamHealth};

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for the external ML classification service.
///
/// Classification is best-effort: any failure (network error, timeout,
/// non-2xx status, unreadable payload) degrades to the neutral fallback
/// result, so bookmark creation never depends on the classifier being up.
pub struct ClassifierClient {
    http_client: Client,
    base_url: String,
}

impl ClassifierClient {
    /// Create a new classifier client. `timeout_ms` bounds each classify call.
    pub fn new(base_url: String, timeout_ms: u64) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url,
        }
    }

    /// Ask the classifier to categorize a bookmark. Never fails; returns the
    /// fallback result when the upstream cannot produce a verdict.
    pub async fn classify(
        &self,
        url: &str,
        title: &str,
        description: Option<&str>,
    ) -> ClassificationResult {
        let request = ClassificationRequest {
            url: url.to_string(),
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
        };

        let endpoint = format!("{}/classify", self.base_url);

        match self.http_client.post(&endpoint).json(&request).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<ClassificationResult>().await {
                    Ok(result) => {
                        let result = result.normalize();
                        info!(
                            "Classified '{}' as '{}' (confidence {})",
                            title, result.category, result.confidence
                        );
                        result
                    }
                    Err(e) => {
                        warn!("Classifier returned an unreadable payload: {}", e);
                        ClassificationResult::fallback()
                    }
                }
            }
            Ok(response) => {
                warn!("Classifier returned HTTP {}", response.status());
                ClassificationResult::fallback()
            }
            Err(e) => {
                if e.is_timeout() {
                    warn!("Classifier request timed out: {}", e);
                } else {
                    warn!("Classifier unreachable: {}", e);
                }
                ClassificationResult::fallback()
            }
        }
    }

    /// Probe the classifier's /health endpoint with a short timeout. True
    /// only when the upstream answers 2xx and reports itself "healthy".
    pub async fn health_check(&self) -> bool {
        let endpoint = format!("{}/health", self.base_url);

        match self
            .http_client
            .get(&endpoint)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                match response.json::<UpstreamHealth>().await {
                    Ok(health) => health.status == "healthy",
                    Err(_) => false,
                }
            }
            _ => false,
        }
    }
}

impl Clone for ClassifierClient {
    fn clone(&self) -> Self {
        Self {
            http_client: self.http_client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}
