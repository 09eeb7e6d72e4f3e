use serde::{Deserialize, Serialize};

pub const FALLBACK_CATEGORY: &str = "uncategorized";

/// Payload sent to the ML classifier. The classifier speaks snake_case,
/// unlike our own camelCase surface.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRequest {
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Classifier verdict for a single bookmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: String,
    pub confidence: f64,
    #[serde(default)]
    pub suggested_tags: Vec<String>,
}

impl ClassificationResult {
    /// Neutral result used whenever the classifier cannot be reached.
    pub fn fallback() -> Self {
        Self {
            category: FALLBACK_CATEGORY.to_string(),
            confidence: 0.0,
            suggested_tags: Vec::new(),
        }
    }

    /// Clamp confidence into [0, 100] and round to two decimals so the
    /// stored value is stable regardless of upstream noise.
    pub fn normalize(mut self) -> Self {
        self.confidence = (self.confidence.clamp(0.0, 100.0) * 100.0).round() / 100.0;
        self
    }
}

/// Health payload reported by the classifier's own /health endpoint.
#[derive(Debug, Deserialize)]
pub struct UpstreamHealth {
    pub status: String,
}

/// Health status we report for the classifier dependency.
#[derive(Debug, Serialize)]
pub struct MlHealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_neutral() {
        let result = ClassificationResult::fallback();
        assert_eq!(result.category, "uncategorized");
        assert_eq!(result.confidence, 0.0);
        assert!(result.suggested_tags.is_empty());
    }

    #[test]
    fn test_normalize_clamps_and_rounds() {
        let result = ClassificationResult {
            category: "development".to_string(),
            confidence: 87.456,
            suggested_tags: vec![],
        };
        assert_eq!(result.normalize().confidence, 87.46);

        let wild = ClassificationResult {
            category: "development".to_string(),
            confidence: 250.0,
            suggested_tags: vec![],
        };
        assert_eq!(wild.normalize().confidence, 100.0);

        let negative = ClassificationResult {
            category: "development".to_string(),
            confidence: -3.0,
            suggested_tags: vec![],
        };
        assert_eq!(negative.normalize().confidence, 0.0);
    }

    #[test]
    fn test_missing_suggested_tags_defaults_empty() {
        let parsed: ClassificationResult =
            serde_json::from_str(r#"{"category":"news","confidence":55.0}"#)
                .expect("should deserialize without suggested_tags");
        assert!(parsed.suggested_tags.is_empty());
    }
}
