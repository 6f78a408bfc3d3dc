//! Order (pedido) wire types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use tienda_core::{OrderDetailId, OrderId, OrderStatus, ProductId, UserId};

use super::page::SortOrder;

/// One line of an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    /// Absent on lines that have not been persisted yet.
    #[serde(rename = "idDetalle", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderDetailId>,
    #[serde(rename = "idProducto")]
    pub product_id: ProductId,
    /// Filled in by the backend.
    #[serde(
        rename = "nombreProducto",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub product_name: Option<String>,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,
    pub subtotal: f64,
}

/// An order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "idPedido")]
    pub id: OrderId,
    #[serde(rename = "idCliente")]
    pub customer_id: UserId,
    #[serde(rename = "nombreCliente", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "cedula", default)]
    pub national_id: Option<String>,
    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
    pub total: f64,
    #[serde(rename = "metodoPago")]
    pub payment_method: String,
    #[serde(rename = "direccion", default)]
    pub address: Option<String>,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
    #[serde(rename = "detalles", default)]
    pub details: Option<Vec<OrderDetail>>,
}

/// One line of an order being created. Pricing is resolved server-side.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrderItem {
    #[serde(rename = "idProducto")]
    pub product_id: ProductId,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Payload for creating an order.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    #[serde(rename = "metodoPago")]
    pub payment_method: String,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "observaciones", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "detalles")]
    pub items: Vec<NewOrderItem>,
}

/// Listing filter for orders.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(rename = "fechaDesde", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "fechaHasta", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Aggregate order statistics from `/pedidos/estadisticas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStats {
    #[serde(rename = "totalPedidos")]
    pub total_orders: u64,
    #[serde(rename = "totalVentas")]
    pub total_sales: f64,
    #[serde(rename = "porEstado")]
    pub by_status: OrderStatusBreakdown,
}

/// Per-status order counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusBreakdown {
    #[serde(rename = "pendientes")]
    pub pending: u64,
    #[serde(rename = "confirmados")]
    pub confirmed: u64,
    #[serde(rename = "enProceso")]
    pub processing: u64,
    #[serde(rename = "enviados")]
    pub shipped: u64,
    #[serde(rename = "entregados")]
    pub delivered: u64,
    #[serde(rename = "cancelados")]
    pub cancelled: u64,
}
