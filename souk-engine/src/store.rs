//! Store Controller - single owner of the application state
//!
//! All UI surfaces read and mutate through this controller; there are no
//! ambient globals. The controller owns the catalog, the order ledger, the
//! admin credential, the analytics emitter, and the "currently selected
//! product", and publishes one selection-change notification per logical
//! transition to its subscribers (the deep-link synchronizer and the
//! analytics emitter subscribe independently, each idempotent with respect
//! to repeated notifications of the same value).

use parking_lot::RwLock;
use std::sync::Arc;

use shared::models::config::CITIES;
use shared::{AnalyticsConfig, AppError, AppResult, Category, CustomerInfo, Order, Product, StoreConfig};

use crate::analytics::{AnalyticsEmitter, AnalyticsSink};
use crate::auth::AdminAuth;
use crate::catalog::CatalogManager;
use crate::deeplink::{DeepLinkSync, Location};
use crate::orders::OrderLedger;
use crate::snapshot;
use crate::storage::{SessionFlags, StorageBackend, Store};

/// Subscriber to product-selection transitions
///
/// Notified once per logical transition; implementations must tolerate
/// repeated notifications of the same value.
pub trait SelectionObserver: Send + Sync {
    fn selection_changed(&self, product: Option<&Product>);
}

pub struct StoreController {
    catalog: CatalogManager,
    orders: OrderLedger,
    auth: AdminAuth,
    analytics: Arc<AnalyticsEmitter>,
    deeplink: Arc<DeepLinkSync>,
    selection: RwLock<Option<String>>,
    gallery_index: RwLock<usize>,
    observers: RwLock<Vec<Arc<dyn SelectionObserver>>>,
}

impl StoreController {
    /// Boot the engine
    ///
    /// Loads every persisted namespace (seeding the catalog from the static
    /// configuration on first run), wires the built-in subscribers, and
    /// restores the deep-link selection when the location carries a known
    /// product id. An unknown id is ignored and the parameter removed.
    pub fn boot(
        backend: Box<dyn StorageBackend>,
        session: SessionFlags,
        sink: Arc<dyn AnalyticsSink>,
        location: Arc<dyn Location>,
        config: StoreConfig,
    ) -> AppResult<Self> {
        let store = Arc::new(Store::new(backend));

        let catalog = CatalogManager::load(store.clone());
        if catalog.is_empty() {
            catalog.replace_all(config.products.clone())?;
        }
        let orders = OrderLedger::load(store.clone());
        let auth = AdminAuth::load(store.clone(), session);
        let analytics = Arc::new(AnalyticsEmitter::load(store, sink, config.analytics.clone()));
        let deeplink = Arc::new(DeepLinkSync::new(location));

        let controller = Self {
            catalog,
            orders,
            auth,
            analytics: analytics.clone(),
            deeplink: deeplink.clone(),
            selection: RwLock::new(None),
            gallery_index: RwLock::new(0),
            observers: RwLock::new(vec![
                deeplink.clone() as Arc<dyn SelectionObserver>,
                analytics as Arc<dyn SelectionObserver>,
            ]),
        };

        match controller.deeplink.restore() {
            Some(id) if controller.catalog.get(&id).is_some() => {
                controller.select_product(Some(&id))?;
            }
            Some(id) => {
                tracing::debug!(id, "deep link references unknown product, clearing");
                controller.deeplink.sync(None);
            }
            None => {}
        }

        tracing::info!(
            products = controller.catalog.len(),
            orders = controller.orders.len(),
            "store engine booted"
        );
        Ok(controller)
    }

    // =========================================================================
    // Components
    // =========================================================================

    pub fn catalog(&self) -> &CatalogManager {
        &self.catalog
    }

    pub fn orders(&self) -> &OrderLedger {
        &self.orders
    }

    pub fn auth(&self) -> &AdminAuth {
        &self.auth
    }

    pub fn analytics(&self) -> &AnalyticsEmitter {
        &self.analytics
    }

    /// Register an additional selection subscriber
    pub fn subscribe(&self, observer: Arc<dyn SelectionObserver>) {
        self.observers.write().push(observer);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Change the currently viewed product
    ///
    /// Selecting the already-selected product is a no-op. A change resets
    /// the active gallery image to the product's primary image and notifies
    /// every subscriber exactly once.
    pub fn select_product(&self, id: Option<&str>) -> AppResult<()> {
        let product = match id {
            Some(id) => Some(
                self.catalog
                    .get(id)
                    .ok_or_else(|| AppError::not_found("Product"))?,
            ),
            None => None,
        };

        {
            let mut selection = self.selection.write();
            if selection.as_deref() == id {
                return Ok(());
            }
            *selection = id.map(|s| s.to_string());
        }
        *self.gallery_index.write() = 0;

        for observer in self.observers.read().iter() {
            observer.selection_changed(product.as_ref());
        }
        Ok(())
    }

    /// Id of the currently selected product
    pub fn selected_id(&self) -> Option<String> {
        self.selection.read().clone()
    }

    /// Currently selected product, if any
    pub fn selected_product(&self) -> Option<Product> {
        let id = self.selection.read().clone()?;
        self.catalog.get(&id)
    }

    /// Active gallery image index of the selected product
    pub fn gallery_index(&self) -> usize {
        *self.gallery_index.read()
    }

    /// Switch the active gallery image
    pub fn set_gallery_index(&self, index: usize) -> AppResult<()> {
        let product = self
            .selected_product()
            .ok_or_else(|| AppError::validation("no product selected"))?;
        if index > 0 && index >= product.gallery_images.len() {
            return Err(AppError::validation("gallery image index out of range"));
        }
        *self.gallery_index.write() = index;
        Ok(())
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Confirm a checkout: create the order, then fire the purchase event
    ///
    /// The analytics sink never blocks or fails the order.
    pub fn checkout(&self, product_id: &str, customer: &CustomerInfo) -> AppResult<Order> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| AppError::not_found("Product"))?;
        let order = self.orders.create(&product, customer)?;
        self.analytics.track_purchase(&order);
        Ok(order)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace and persist the analytics configuration
    pub fn update_analytics_config(&self, config: AnalyticsConfig) -> AppResult<()> {
        self.analytics.update_config(config)
    }

    /// Export the current catalog + configuration as a re-loadable snapshot
    pub fn generate_snapshot(&self) -> AppResult<String> {
        snapshot::generate(&StoreConfig {
            analytics: self.analytics.config(),
            cities: CITIES.iter().map(|c| c.to_string()).collect(),
            categories: Category::ALL.to_vec(),
            products: self.catalog.list_all(),
        })
    }
}
