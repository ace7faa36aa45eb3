//! Analytics configuration

use serde::{Deserialize, Serialize};

/// Third-party pixel configuration
///
/// Persisted as `{ "id": ..., "testCode": ... }`. An empty `pixel_id`
/// suppresses all event emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(rename = "id", default)]
    pub pixel_id: String,
    /// Out-of-band correlation tag isolating test traffic downstream
    #[serde(rename = "testCode", default)]
    pub test_event_code: String,
}

impl AnalyticsConfig {
    /// Whether emission is enabled at all
    pub fn is_enabled(&self) -> bool {
        !self.pixel_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_shape() {
        let cfg = AnalyticsConfig {
            pixel_id: "123456".to_string(),
            test_event_code: "TEST77".to_string(),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"id":"123456","testCode":"TEST77"}"#);

        let back: AnalyticsConfig = serde_json::from_str(r#"{"id":"9"}"#).unwrap();
        assert_eq!(back.pixel_id, "9");
        assert_eq!(back.test_event_code, "");
    }

    #[test]
    fn test_is_enabled() {
        assert!(!AnalyticsConfig::default().is_enabled());
        let cfg = AnalyticsConfig {
            pixel_id: "1".to_string(),
            test_event_code: String::new(),
        };
        assert!(cfg.is_enabled());
    }
}
