//! Invoice (factura) wire types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use tienda_core::{InvoiceDetailId, InvoiceId, InvoiceStatus, OrderId, ProductId, UserId};

/// One line of an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDetail {
    #[serde(rename = "idDetalle")]
    pub id: InvoiceDetailId,
    #[serde(rename = "idFactura")]
    pub invoice_id: InvoiceId,
    #[serde(rename = "idProducto")]
    pub product_id: ProductId,
    #[serde(rename = "nombreProducto")]
    pub product_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,
    #[serde(rename = "descuento")]
    pub discount: f64,
    pub subtotal: f64,
}

/// An invoice as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "idFactura")]
    pub id: InvoiceId,
    #[serde(rename = "numeroFactura")]
    pub number: String,
    /// Present when the invoice was issued from an order; `None` for
    /// direct invoices.
    #[serde(rename = "idPedido", default)]
    pub order_id: Option<OrderId>,
    #[serde(rename = "idCliente")]
    pub customer_id: UserId,
    #[serde(rename = "nombreCliente")]
    pub customer_name: String,
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "fechaEmision")]
    pub issued_at: DateTime<Utc>,
    pub subtotal: f64,
    #[serde(rename = "descuento")]
    pub discount: f64,
    #[serde(rename = "porcentajeIva")]
    pub vat_rate: f64,
    #[serde(rename = "iva")]
    pub vat: f64,
    pub total: f64,
    #[serde(rename = "formaPago")]
    pub payment_method: String,
    #[serde(rename = "estado")]
    pub status: InvoiceStatus,
    #[serde(rename = "observaciones", default)]
    pub notes: Option<String>,
    #[serde(rename = "fechaAutorizacion", default)]
    pub authorized_at: Option<DateTime<Utc>>,
    #[serde(rename = "detalles", default)]
    pub details: Option<Vec<InvoiceDetail>>,
}

/// One line of an invoice being created.
#[derive(Debug, Clone, Serialize)]
pub struct NewInvoiceItem {
    #[serde(rename = "idProducto")]
    pub product_id: ProductId,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,
    #[serde(rename = "descuento", skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

/// Payload for creating a direct invoice (no originating order).
#[derive(Debug, Clone, Serialize)]
pub struct NewInvoice {
    #[serde(rename = "idCliente")]
    pub customer_id: UserId,
    #[serde(rename = "nombreCliente")]
    pub customer_name: String,
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "direccion", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "formaPago")]
    pub payment_method: String,
    #[serde(rename = "observaciones", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "descuento", skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(rename = "detalles")]
    pub items: Vec<NewInvoiceItem>,
}

/// Payload for updating an invoice's status or notes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceUpdate {
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(rename = "observaciones", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Listing filter for invoices.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceFilter {
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(rename = "fechaDesde", skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(rename = "fechaHasta", skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "numeroFactura", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}
