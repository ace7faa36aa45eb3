//! Souk engine - client-side state & synchronization engine
//!
//! The single owner of the product catalog, the order ledger, the admin
//! credential, and analytics event emission for a single-tenant storefront.
//! All durable state lives in versioned key/value namespaces behind the
//! [`storage::StorageBackend`] trait; the UI host reads and mutates only
//! through [`store::StoreController`], never through ambient globals.
//!
//! # Modules
//!
//! - [`storage`] - persistent store adapter (fail-soft load, whole-namespace save)
//! - [`catalog`] - product collection management
//! - [`orders`] - append-only order ledger
//! - [`auth`] - admin credential and session flag
//! - [`analytics`] - de-duplicated commerce event emission
//! - [`deeplink`] - `?p=<product-id>` URL synchronization
//! - [`images`] - image-upload collaborator boundary
//! - [`snapshot`] - re-loadable configuration snapshot export
//! - [`store`] - the controller tying everything together

pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod deeplink;
pub mod images;
pub mod orders;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use analytics::{AnalyticsEmitter, AnalyticsSink, LogSink, RecordingSink};
pub use auth::{AdminAuth, DEFAULT_ADMIN_SECRET};
pub use catalog::CatalogManager;
pub use deeplink::{DeepLinkSync, Location, MemoryLocation};
pub use images::{FileImageSource, ImageSource};
pub use orders::OrderLedger;
pub use storage::{FileStorage, MemoryStorage, SessionFlags, StorageBackend, Store};
pub use store::{SelectionObserver, StoreController};
