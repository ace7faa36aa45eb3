//! Snapshot Exporter
//!
//! Serializes the full catalog + configuration into a re-loadable textual
//! snapshot the operator saves back over the application's static
//! configuration source. Output is deterministic for a given state (struct
//! field order is the block order), so repeated exports of unchanged state
//! are byte-identical and diff cleanly.

use shared::{AppError, AppResult, StoreConfig};

/// Render a configuration snapshot
///
/// Blocks, in order: analytics configuration, reference data (cities,
/// categories), product array.
pub fn generate(config: &StoreConfig) -> AppResult<String> {
    let mut text = serde_json::to_string_pretty(config)
        .map_err(|e| AppError::storage_write(format!("snapshot serialize failed: {e}")))?;
    text.push('\n');
    Ok(text)
}

/// Parse a snapshot back into a configuration
pub fn parse(text: &str) -> AppResult<StoreConfig> {
    serde_json::from_str(text)
        .map_err(|e| AppError::storage_corrupt(format!("snapshot parse failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_repeated_exports_byte_identical() {
        let config = StoreConfig::default();
        assert_eq!(generate(&config).unwrap(), generate(&config).unwrap());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let config = StoreConfig::default();
        let text = generate(&config).unwrap();
        let back = parse(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_block_order() {
        let text = generate(&StoreConfig::default()).unwrap();
        let analytics = text.find("\"analytics\"").unwrap();
        let cities = text.find("\"cities\"").unwrap();
        let categories = text.find("\"categories\"").unwrap();
        let products = text.find("\"products\"").unwrap();
        assert!(analytics < cities && cities < categories && categories < products);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse("not a snapshot").unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageCorrupt);
    }
}
