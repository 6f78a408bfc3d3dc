//! Invoicing endpoints (`/facturacion`).

use tienda_core::{InvoiceId, UserId};

use crate::error::ApiError;
use crate::models::{Invoice, InvoiceFilter, InvoiceUpdate, NewInvoice, Page};

use super::ApiClient;

const INVOICES: &str = "/facturacion";

impl ApiClient {
    /// Issue a direct invoice (not backed by an order).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn create_direct_invoice(&self, invoice: &NewInvoice) -> Result<Invoice, ApiError> {
        self.post(&format!("{INVOICES}/directa"), invoice).await
    }

    /// List invoices matching `filter`, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn list_invoices(&self, filter: &InvoiceFilter) -> Result<Page<Invoice>, ApiError> {
        self.get(INVOICES, Some(filter)).await
    }

    /// Fetch a single invoice by ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with a 404 if the invoice does not exist.
    pub async fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, ApiError> {
        self.get(&format!("{INVOICES}/{id}"), None::<&()>).await
    }

    /// Update an invoice's status and/or notes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the transition is invalid.
    pub async fn set_invoice_status(
        &self,
        id: InvoiceId,
        update: &InvoiceUpdate,
    ) -> Result<Invoice, ApiError> {
        self.patch(&format!("{INVOICES}/{id}/estado"), Some(update))
            .await
    }

    /// Look an invoice up by its printed number.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with a 404 if no invoice has that number.
    pub async fn invoice_by_number(&self, number: &str) -> Result<Invoice, ApiError> {
        self.get(&format!("{INVOICES}/numero/{number}"), None::<&()>)
            .await
    }

    /// All invoices issued to a customer. Unpaginated.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it.
    pub async fn invoices_for_customer(
        &self,
        customer_id: UserId,
    ) -> Result<Vec<Invoice>, ApiError> {
        self.get(&format!("{INVOICES}/cliente/{customer_id}"), None::<&()>)
            .await
    }
}
