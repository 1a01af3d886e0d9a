//! Storage port — repository trait for product persistence.

use std::future::Future;

use catalog_domain::error::CatalogError;
use catalog_domain::id::ProductId;
use catalog_domain::product::Product;

/// Persistence store owning product lifetime.
///
/// Each method is a single store operation; callers never span a
/// transaction across calls.
pub trait ProductRepository {
    /// Insert a new product and return it as stored.
    fn create(&self, product: Product) -> impl Future<Output = Result<Product, CatalogError>> + Send;

    /// Fetch one product, `None` when the id is unknown.
    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, CatalogError>> + Send;

    /// Fetch every product, in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    /// Overwrite every stored field of the product with the same id.
    ///
    /// Resolves to `None` when no such product exists.
    fn update(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Option<Product>, CatalogError>> + Send;

    /// Remove a product. Resolves to `false` when nothing was removed.
    fn delete(&self, id: ProductId) -> impl Future<Output = Result<bool, CatalogError>> + Send;
}
