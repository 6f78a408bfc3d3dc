//! Invoicing commands.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;

use tienda_client::models::{InvoiceFilter, InvoiceUpdate, NewInvoice, NewInvoiceItem};
use tienda_core::{InvoiceId, InvoiceStatus, UserId};
use tienda_storefront::Route;

use super::{CliError, authorize, print_json, state};
use crate::commands::orders::CartItem;

pub async fn list(
    status: Option<InvoiceStatus>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Invoices).await?;

    let filter = InvoiceFilter {
        status,
        date_from,
        date_to,
        page,
        limit,
        ..InvoiceFilter::default()
    };
    let page = state.client().list_invoices(&filter).await?;
    print_json(&page)
}

pub async fn get(id: InvoiceId) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Invoices).await?;

    let invoice = state.client().get_invoice(id).await?;
    print_json(&invoice)
}

/// Issue an invoice with no originating order. Lines are priced from the
/// current catalog.
pub async fn create_direct(
    customer: UserId,
    customer_name: String,
    national_id: String,
    items: &[CartItem],
    payment_method: String,
    notes: Option<String>,
) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::DirectInvoice).await?;

    let mut lines = Vec::with_capacity(items.len());
    for item in items {
        let product = state.client().get_product(item.product_id).await?;
        let unit_price = product.price.to_f64().ok_or_else(|| {
            CliError::InvalidArg(format!("product {} has an unrepresentable price", product.id))
        })?;
        lines.push(NewInvoiceItem {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price,
            discount: None,
        });
    }

    let invoice = NewInvoice {
        customer_id: customer,
        customer_name,
        national_id,
        address: None,
        phone: None,
        email: None,
        payment_method,
        notes,
        discount: None,
        items: lines,
    };
    let issued = state.client().create_direct_invoice(&invoice).await?;
    println!("Invoice {} issued, total {}", issued.number, issued.total);
    print_json(&issued)
}

pub async fn set_status(id: InvoiceId, status: InvoiceStatus) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Invoices).await?;

    let update = InvoiceUpdate {
        status: Some(status),
        notes: None,
    };
    let invoice = state.client().set_invoice_status(id, &update).await?;
    println!("Invoice {} is now {}", invoice.number, invoice.status);
    Ok(())
}

pub async fn by_number(number: &str) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Invoices).await?;

    let invoice = state.client().invoice_by_number(number).await?;
    print_json(&invoice)
}

pub async fn by_client(customer: UserId) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Invoices).await?;

    let invoices = state.client().invoices_for_customer(customer).await?;
    print_json(&invoices)
}
