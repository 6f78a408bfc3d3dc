//! Order endpoints (`/pedidos`).

use serde::Serialize;

use tienda_core::{OrderId, OrderStatus};

use crate::error::ApiError;
use crate::models::{NewOrder, Order, OrderFilter, OrderStats, Page};

use super::ApiClient;

const ORDERS: &str = "/pedidos";

#[derive(Serialize)]
struct StatusChange {
    #[serde(rename = "estado")]
    status: OrderStatus,
}

impl ApiClient {
    /// Create an order. The backend resolves prices and computes totals.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        self.post(ORDERS, order).await
    }

    /// List orders matching `filter`, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Page<Order>, ApiError> {
        self.get(ORDERS, Some(filter)).await
    }

    /// Fetch a single order by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with a 404 if the order does not exist.
    pub async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.get(&format!("{ORDERS}/{id}"), None::<&()>).await
    }

    /// Aggregate order statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn order_stats(&self) -> Result<OrderStats, ApiError> {
        self.get(&format!("{ORDERS}/estadisticas"), None::<&()>)
            .await
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the transition is invalid.
    pub async fn set_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.patch(&format!("{ORDERS}/{id}/estado"), Some(&StatusChange { status }))
            .await
    }

    /// Cancel an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the order cannot be
    /// cancelled.
    pub async fn cancel_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.patch(&format!("{ORDERS}/{id}/cancelar"), None::<&()>)
            .await
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn delete_order(&self, id: OrderId) -> Result<(), ApiError> {
        self.delete(&format!("{ORDERS}/{id}")).await
    }
}
