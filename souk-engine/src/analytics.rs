//! Analytics Event Emitter
//!
//! De-duplicates and dispatches tracked commerce events to an external sink.
//! Emission is gated on the configured pixel id; sink initialization happens
//! at most once per distinct pixel id per process lifetime. A sink failure
//! is never allowed to block the triggering operation.

use parking_lot::RwLock;
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::Arc;

use shared::{AnalyticsConfig, AppResult, Order, Product};

use crate::storage::{ANALYTICS_KEY, Store};
use crate::store::SelectionObserver;

/// Fixed currency code attached to purchase values
pub const CURRENCY: &str = "MAD";

/// Catalog-view event name
pub const EVENT_VIEW_CONTENT: &str = "ViewContent";
/// Purchase event name
pub const EVENT_PURCHASE: &str = "Purchase";

// =============================================================================
// Sink
// =============================================================================

/// External analytics client boundary
///
/// Fire-and-forget: the engine never consumes data coming back from the
/// sink, and emission errors are non-fatal.
pub trait AnalyticsSink: Send + Sync {
    /// Configure the external client for a pixel id
    fn init(&self, pixel_id: &str) -> AppResult<()>;
    /// Forward an event; `test_event_code` is an out-of-band correlation tag
    fn emit(&self, event: &str, payload: &Value, test_event_code: Option<&str>) -> AppResult<()>;
}

/// Sink that forwards events to the tracing log (development host)
#[derive(Debug, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn init(&self, pixel_id: &str) -> AppResult<()> {
        tracing::info!(pixel_id, "analytics sink initialized");
        Ok(())
    }

    fn emit(&self, event: &str, payload: &Value, test_event_code: Option<&str>) -> AppResult<()> {
        tracing::info!(event, %payload, test_event_code, "analytics event");
        Ok(())
    }
}

/// Recording sink for tests and host diagnostics
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub inits: RwLock<Vec<String>>,
    pub events: RwLock<Vec<(String, Value, Option<String>)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events with the given name
    pub fn events_named(&self, name: &str) -> Vec<Value> {
        self.events
            .read()
            .iter()
            .filter(|(event, _, _)| event == name)
            .map(|(_, payload, _)| payload.clone())
            .collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn init(&self, pixel_id: &str) -> AppResult<()> {
        self.inits.write().push(pixel_id.to_string());
        Ok(())
    }

    fn emit(&self, event: &str, payload: &Value, test_event_code: Option<&str>) -> AppResult<()> {
        self.events.write().push((
            event.to_string(),
            payload.clone(),
            test_event_code.map(|c| c.to_string()),
        ));
        Ok(())
    }
}

// =============================================================================
// Emitter
// =============================================================================

pub struct AnalyticsEmitter {
    config: RwLock<AnalyticsConfig>,
    sink: Arc<dyn AnalyticsSink>,
    /// Pixel ids the sink was already initialized for (init is idempotent)
    initialized: RwLock<HashSet<String>>,
    /// Last product id a view event was fired for
    last_viewed: RwLock<Option<String>>,
    store: Arc<Store>,
}

impl AnalyticsEmitter {
    /// Load the configuration from the analytics namespace
    ///
    /// `default` is the static configuration used when nothing is persisted
    /// yet.
    pub fn load(store: Arc<Store>, sink: Arc<dyn AnalyticsSink>, default: AnalyticsConfig) -> Self {
        let config: AnalyticsConfig = store.load(ANALYTICS_KEY, default);
        let emitter = Self {
            config: RwLock::new(config),
            sink,
            initialized: RwLock::new(HashSet::new()),
            last_viewed: RwLock::new(None),
            store,
        };
        emitter.ensure_init();
        emitter
    }

    /// Current configuration
    pub fn config(&self) -> AnalyticsConfig {
        self.config.read().clone()
    }

    /// Replace and persist the configuration
    pub fn update_config(&self, config: AnalyticsConfig) -> AppResult<()> {
        self.store.save(ANALYTICS_KEY, &config)?;
        *self.config.write() = config;
        self.ensure_init();
        Ok(())
    }

    /// Initialize the sink for the configured pixel id, at most once per id
    fn ensure_init(&self) {
        let config = self.config.read().clone();
        if !config.is_enabled() {
            return;
        }
        let mut initialized = self.initialized.write();
        if initialized.contains(&config.pixel_id) {
            return;
        }
        match self.sink.init(&config.pixel_id) {
            Ok(()) => {
                initialized.insert(config.pixel_id);
            }
            Err(e) => tracing::warn!(error = %e, "analytics sink init failed"),
        }
    }

    /// Forward an event to the sink
    ///
    /// No-op while the pixel id is empty. Sink failures are swallowed: the
    /// triggering user-facing operation must never be blocked.
    pub fn emit(&self, event: &str, payload: Value) {
        let config = self.config.read().clone();
        if !config.is_enabled() {
            return;
        }
        self.ensure_init();
        let test_code = if config.test_event_code.is_empty() {
            None
        } else {
            Some(config.test_event_code.as_str())
        };
        if let Err(e) = self.sink.emit(event, &payload, test_code) {
            tracing::warn!(event, error = %e, "analytics sink unavailable, event dropped");
        }
    }

    /// Fire the purchase event for a freshly created order
    pub fn track_purchase(&self, order: &Order) {
        self.emit(
            EVENT_PURCHASE,
            json!({
                "content_ids": [order.product_id],
                "content_name": order.product_title,
                "content_type": "product",
                "value": order.product_price,
                "currency": CURRENCY,
            }),
        );
    }

    fn track_view(&self, product: &Product) {
        self.emit(
            EVENT_VIEW_CONTENT,
            json!({
                "content_ids": [product.id],
                "content_name": product.title,
                "content_type": "product",
                "value": product.price,
                "currency": CURRENCY,
            }),
        );
    }
}

impl SelectionObserver for AnalyticsEmitter {
    /// Fire the view event once per distinct product-selection transition.
    /// Repeated notifications of the same value are ignored.
    fn selection_changed(&self, product: Option<&Product>) {
        let mut last = self.last_viewed.write();
        match product {
            Some(p) => {
                if last.as_deref() == Some(p.id.as_str()) {
                    return;
                }
                *last = Some(p.id.clone());
                self.track_view(p);
            }
            None => *last = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn emitter_with(config: AnalyticsConfig) -> (Arc<AnalyticsEmitter>, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let store = Arc::new(Store::new(Box::new(MemoryStorage::new())));
        let emitter = Arc::new(AnalyticsEmitter::load(store, sink.clone(), config));
        (emitter, sink)
    }

    fn enabled_config() -> AnalyticsConfig {
        AnalyticsConfig {
            pixel_id: "424242".to_string(),
            test_event_code: String::new(),
        }
    }

    fn product_a() -> Product {
        Product {
            id: "1".to_string(),
            title: "Montre".to_string(),
            thumbnail: "/images/montre.jpg".to_string(),
            gallery_images: vec![],
            price: 100.0,
            description: String::new(),
            category: Default::default(),
            stock_status: Default::default(),
            rating: 0.0,
            reviews_count: 0,
            shipping_time: String::new(),
        }
    }

    #[test]
    fn test_emit_suppressed_without_pixel_id() {
        let (emitter, sink) = emitter_with(AnalyticsConfig::default());
        emitter.emit(EVENT_VIEW_CONTENT, json!({}));
        assert!(sink.events.read().is_empty());
        assert!(sink.inits.read().is_empty());
    }

    #[test]
    fn test_init_once_per_pixel_id() {
        let (emitter, sink) = emitter_with(enabled_config());
        emitter.emit("A", json!({}));
        emitter.emit("B", json!({}));
        assert_eq!(sink.inits.read().as_slice(), ["424242"]);

        // Re-configuring with the same id does not re-init
        emitter.update_config(enabled_config()).unwrap();
        assert_eq!(sink.inits.read().len(), 1);

        // A distinct id initializes again
        emitter
            .update_config(AnalyticsConfig {
                pixel_id: "777".to_string(),
                test_event_code: String::new(),
            })
            .unwrap();
        assert_eq!(sink.inits.read().as_slice(), ["424242", "777"]);
    }

    #[test]
    fn test_test_event_code_attached() {
        let (emitter, sink) = emitter_with(AnalyticsConfig {
            pixel_id: "424242".to_string(),
            test_event_code: "TEST99".to_string(),
        });
        emitter.emit(EVENT_PURCHASE, json!({"value": 1}));
        let events = sink.events.read();
        assert_eq!(events[0].2.as_deref(), Some("TEST99"));
    }

    #[test]
    fn test_view_dedup_per_transition() {
        let (emitter, sink) = emitter_with(enabled_config());
        let a = product_a();

        emitter.selection_changed(Some(&a));
        emitter.selection_changed(Some(&a));
        assert_eq!(sink.events_named(EVENT_VIEW_CONTENT).len(), 1);

        // Clearing then re-selecting is a new transition
        emitter.selection_changed(None);
        emitter.selection_changed(Some(&a));
        assert_eq!(sink.events_named(EVENT_VIEW_CONTENT).len(), 2);
    }

    #[test]
    fn test_purchase_payload() {
        let (emitter, sink) = emitter_with(enabled_config());
        let order = Order {
            order_id: "ORD-TEST00000".to_string(),
            product_id: "2".to_string(),
            product_title: "Sac".to_string(),
            product_price: 200.0,
            customer: Default::default(),
            order_date: String::new(),
            status: Default::default(),
        };
        emitter.track_purchase(&order);
        let payloads = sink.events_named(EVENT_PURCHASE);
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0]["value"], 200.0);
        assert_eq!(payloads[0]["currency"], "MAD");
        assert_eq!(payloads[0]["content_ids"][0], "2");
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        struct FailingSink;
        impl AnalyticsSink for FailingSink {
            fn init(&self, _pixel_id: &str) -> AppResult<()> {
                Err(shared::AppError::collaborator("offline"))
            }
            fn emit(&self, _e: &str, _p: &Value, _t: Option<&str>) -> AppResult<()> {
                Err(shared::AppError::collaborator("offline"))
            }
        }
        let store = Arc::new(Store::new(Box::new(MemoryStorage::new())));
        let emitter = AnalyticsEmitter::load(store, Arc::new(FailingSink), enabled_config());
        // Must not panic or propagate
        emitter.emit(EVENT_VIEW_CONTENT, json!({}));
    }
}
