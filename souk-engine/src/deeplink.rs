//! Deep-Link Synchronizer
//!
//! Keeps the location's `p` query parameter equal to the id of the
//! currently selected product: added when a product becomes selected,
//! removed when the selection is cleared, restored into the initial
//! selection on process start. Rewrites extend history, they never
//! trigger a navigation.

use parking_lot::RwLock;
use std::sync::Arc;
use url::Url;

use shared::Product;

use crate::store::SelectionObserver;

/// Query parameter carrying the selected product id
pub const PRODUCT_PARAM: &str = "p";

/// Externally visible location reference
///
/// `replace` extends history without reloading; the host wires this to its
/// actual navigation facility.
pub trait Location: Send + Sync {
    fn current(&self) -> Url;
    fn replace(&self, url: Url);
}

/// In-memory location for tests and headless hosts
#[derive(Debug)]
pub struct MemoryLocation {
    url: RwLock<Url>,
}

impl MemoryLocation {
    pub fn new(url: Url) -> Self {
        Self { url: RwLock::new(url) }
    }

    /// Parse a base URL; fails on malformed input
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(input)?))
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        // Known-good literal
        Self::new(Url::parse("https://souk.example/").expect("valid base URL"))
    }
}

impl Location for MemoryLocation {
    fn current(&self) -> Url {
        self.url.read().clone()
    }

    fn replace(&self, url: Url) {
        *self.url.write() = url;
    }
}

pub struct DeepLinkSync {
    location: Arc<dyn Location>,
}

impl DeepLinkSync {
    pub fn new(location: Arc<dyn Location>) -> Self {
        Self { location }
    }

    /// Product id currently carried by the location, if any
    pub fn restore(&self) -> Option<String> {
        let url = self.location.current();
        url.query_pairs()
            .find(|(k, _)| k == PRODUCT_PARAM)
            .map(|(_, v)| v.into_owned())
    }

    /// Rewrite the location so `p` matches `selection`
    ///
    /// Idempotent: a rewrite only happens when the parameter actually
    /// differs. Other query parameters are preserved in order.
    pub fn sync(&self, selection: Option<&str>) {
        let url = self.location.current();
        let current: Option<String> = url
            .query_pairs()
            .find(|(k, _)| k == PRODUCT_PARAM)
            .map(|(_, v)| v.into_owned());
        if current.as_deref() == selection {
            return;
        }

        let others: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(k, _)| k != PRODUCT_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut next = url.clone();
        if others.is_empty() && selection.is_none() {
            next.set_query(None);
        } else {
            let mut pairs = next.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(others.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            if let Some(id) = selection {
                pairs.append_pair(PRODUCT_PARAM, id);
            }
            drop(pairs);
        }
        tracing::debug!(url = %next, "location rewritten");
        self.location.replace(next);
    }
}

impl SelectionObserver for DeepLinkSync {
    fn selection_changed(&self, product: Option<&Product>) {
        self.sync(product.map(|p| p.id.as_str()));
    }
}
