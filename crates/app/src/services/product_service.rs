//! Product service — use-cases behind the `/categories/` resource.

use catalog_domain::error::{CatalogError, NotFoundError};
use catalog_domain::id::ProductId;
use catalog_domain::product::{Product, ProductBuilder};

use crate::ports::ProductRepository;

const ENTITY: &str = "Product";

fn not_found(id: ProductId) -> CatalogError {
    NotFoundError {
        entity: ENTITY,
        id: id.to_string(),
    }
    .into()
}

/// Application service for product CRUD operations.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new product after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn create_product(&self, product: Product) -> Result<Product, CatalogError> {
        product.validate()?;
        let created = self.repo.create(product).await?;
        tracing::info!(product_name = %created.name, "product created");
        Ok(created)
    }

    /// Look up a product by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no product with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.repo.get_all().await
    }

    /// Store a full replacement of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if invariants fail,
    /// [`CatalogError::NotFound`] if the product no longer exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn update_product(&self, product: Product) -> Result<Product, CatalogError> {
        product.validate()?;
        let id = product.id;
        self.repo.update(product).await?.ok_or_else(|| not_found(id))
    }

    /// Replace the product `id` with the fields held by `builder`.
    ///
    /// The product must exist before the payload is validated. Its id and
    /// creation time carry over; every other field comes from `builder`, so
    /// optional fields left unset are reset to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when `id` is unknown,
    /// [`CatalogError::Validation`] when the builder holds invalid fields,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, builder))]
    pub async fn replace_product(
        &self,
        id: ProductId,
        builder: ProductBuilder,
    ) -> Result<Product, CatalogError> {
        let existing = self.get_product(id).await?;
        let replacement = builder.id(id).created_at(existing.created_at).build()?;
        self.update_product(replacement).await
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no product with `id` exists,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        if self.repo.delete(id).await? {
            tracing::info!("product deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
