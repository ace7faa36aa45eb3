//! Catalog Manager - product collection with write-through persistence
//!
//! Owns the product collection in insertion order. Every successful mutation
//! persists the full collection under the products namespace before
//! returning; a rejected mutation never touches storage or memory.

use parking_lot::RwLock;
use std::sync::Arc;

use shared::{AppError, AppResult, CategoryFilter, Product};

use crate::storage::{PRODUCTS_KEY, Store};

pub struct CatalogManager {
    products: RwLock<Vec<Product>>,
    store: Arc<Store>,
}

impl CatalogManager {
    /// Load the catalog from the products namespace
    pub fn load(store: Arc<Store>) -> Self {
        let products: Vec<Product> = store.load(PRODUCTS_KEY, Vec::new());
        tracing::debug!(count = products.len(), "catalog loaded");
        Self {
            products: RwLock::new(products),
            store,
        }
    }

    /// Number of products in the catalog
    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    /// All products, insertion order
    pub fn list_all(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    /// Products matching a category filter; [`CategoryFilter::All`] means no filter
    pub fn list_by_category(&self, filter: CategoryFilter) -> Vec<Product> {
        self.products
            .read()
            .iter()
            .filter(|p| filter.matches(p.category))
            .cloned()
            .collect()
    }

    /// Lookup by id
    pub fn get(&self, id: &str) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    /// Insert or replace a product
    ///
    /// A matching `id` is replaced in place (position preserved); otherwise
    /// the product is appended. `title`, `price` and `thumbnail` are
    /// mandatory; all other fields may be blank.
    pub fn upsert(&self, product: Product) -> AppResult<()> {
        validate(&product)?;

        let mut products = self.products.write();
        let mut next = products.clone();
        match next.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product.clone(),
            None => next.push(product.clone()),
        }

        // Persist before committing so a failed write leaves memory unchanged
        self.store.save(PRODUCTS_KEY, &next)?;
        *products = next;
        tracing::info!(id = %product.id, title = %product.title, "product saved");
        Ok(())
    }

    /// Delete by id; a missing id is a no-op, not an error
    pub fn remove(&self, id: &str) -> AppResult<()> {
        let mut products = self.products.write();
        if !products.iter().any(|p| p.id == id) {
            return Ok(());
        }
        let next: Vec<Product> = products.iter().filter(|p| p.id != id).cloned().collect();
        self.store.save(PRODUCTS_KEY, &next)?;
        *products = next;
        tracing::info!(id, "product removed");
        Ok(())
    }

    /// Replace the whole catalog (first-boot seeding, snapshot re-load)
    pub fn replace_all(&self, seed: Vec<Product>) -> AppResult<()> {
        let mut products = self.products.write();
        self.store.save(PRODUCTS_KEY, &seed)?;
        *products = seed;
        tracing::info!(count = products.len(), "catalog replaced");
        Ok(())
    }
}

fn validate(product: &Product) -> AppResult<()> {
    if product.title.trim().is_empty() {
        return Err(AppError::required_field("title"));
    }
    if product.price <= 0.0 {
        return Err(AppError::validation("price must be greater than zero"));
    }
    if product.thumbnail.trim().is_empty() {
        return Err(AppError::required_field("thumbnail"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageBackend};
    use shared::models::product::Category;
    use shared::ErrorCode;

    fn product(id: &str, title: &str, price: f64, category: Category) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            thumbnail: format!("/images/{id}.jpg"),
            gallery_images: vec![],
            price,
            description: String::new(),
            category,
            stock_status: Default::default(),
            rating: 0.0,
            reviews_count: 0,
            shipping_time: String::new(),
        }
    }

    fn catalog_with_backend() -> (CatalogManager, MemoryStorage) {
        let backend = MemoryStorage::new();
        let store = Arc::new(Store::new(Box::new(backend.clone())));
        (CatalogManager::load(store), backend)
    }

    #[test]
    fn test_upsert_appends_and_replaces_in_place() {
        let (catalog, _) = catalog_with_backend();
        catalog.upsert(product("1", "A", 100.0, Category::Electronics)).unwrap();
        catalog.upsert(product("2", "B", 200.0, Category::Fashion)).unwrap();

        let mut updated = product("1", "A2", 150.0, Category::Electronics);
        updated.description = "edited".to_string();
        catalog.upsert(updated).unwrap();

        let all = catalog.list_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "1");
        assert_eq!(all[0].title, "A2");
        assert_eq!(all[1].id, "2");
    }

    #[test]
    fn test_upsert_rejects_missing_mandatory_fields() {
        let (catalog, backend) = catalog_with_backend();

        let no_title = product("1", "  ", 100.0, Category::Electronics);
        let err = catalog.upsert(no_title).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let zero_price = product("1", "A", 0.0, Category::Electronics);
        assert_eq!(
            catalog.upsert(zero_price).unwrap_err().code,
            ErrorCode::ValidationFailed
        );

        let mut no_thumb = product("1", "A", 100.0, Category::Electronics);
        no_thumb.thumbnail = String::new();
        assert_eq!(
            catalog.upsert(no_thumb).unwrap_err().code,
            ErrorCode::RequiredField
        );

        // Rejected upserts never mutate the catalog and never call persistence
        assert!(catalog.is_empty());
        assert!(backend.read(PRODUCTS_KEY).is_none());
    }

    #[test]
    fn test_remove_and_persisted_state() {
        let (catalog, backend) = catalog_with_backend();
        catalog.upsert(product("1", "A", 100.0, Category::Electronics)).unwrap();
        catalog.upsert(product("2", "B", 200.0, Category::Fashion)).unwrap();

        catalog.remove("1").unwrap();
        let all = catalog.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "2");

        // Reload from the same backend observes the removal
        let store = Arc::new(Store::new(Box::new(backend)));
        let reloaded = CatalogManager::load(store);
        let all = reloaded.list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "2");
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (catalog, backend) = catalog_with_backend();
        catalog.remove("ghost").unwrap();
        assert!(backend.read(PRODUCTS_KEY).is_none());
    }

    #[test]
    fn test_list_by_category() {
        let (catalog, _) = catalog_with_backend();
        catalog.upsert(product("1", "A", 100.0, Category::Electronics)).unwrap();
        catalog.upsert(product("2", "B", 200.0, Category::Fashion)).unwrap();
        catalog.upsert(product("3", "C", 300.0, Category::Fashion)).unwrap();

        assert_eq!(catalog.list_by_category(CategoryFilter::All).len(), 3);
        let fashion = catalog.list_by_category(CategoryFilter::Only(Category::Fashion));
        assert_eq!(fashion.len(), 2);
        assert!(fashion.iter().all(|p| p.category == Category::Fashion));
    }
}
