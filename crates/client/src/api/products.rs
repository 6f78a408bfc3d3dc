//! Product endpoints (`/productos`).

use tienda_core::ProductId;

use crate::error::ApiError;
use crate::models::{NewProduct, Page, Product, ProductFilter, ProductUpdate};

use super::ApiClient;

const PRODUCTS: &str = "/productos";

impl ApiClient {
    /// List products matching `filter`, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Page<Product>, ApiError> {
        self.get(PRODUCTS, Some(filter)).await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with a 404 if the product does not exist.
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.get(&format!("{PRODUCTS}/{id}"), None::<&()>).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.post(PRODUCTS, product).await
    }

    /// Update a product. Only the fields present in `update` change.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn update_product(
        &self,
        id: ProductId,
        update: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        self.patch(&format!("{PRODUCTS}/{id}"), Some(update)).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("{PRODUCTS}/{id}")).await
    }

    /// Flip a product's active flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn toggle_product_active(&self, id: ProductId) -> Result<Product, ApiError> {
        // The backend expects an empty JSON object here.
        self.patch(
            &format!("{PRODUCTS}/{id}/toggle-activo"),
            Some(&serde_json::json!({})),
        )
        .await
    }
}
