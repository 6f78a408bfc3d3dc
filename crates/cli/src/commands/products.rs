//! Catalog commands.

use rust_decimal::Decimal;

use tienda_client::models::{NewProduct, ProductFilter, ProductUpdate, SortOrder};
use tienda_core::ProductId;
use tienda_storefront::Route;

use super::{CliError, authorize, print_json, state};

pub async fn list(
    search: Option<String>,
    active: Option<bool>,
    page: Option<u32>,
    limit: Option<u32>,
    sort_by: Option<String>,
    sort_order: Option<SortOrder>,
) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Products).await?;

    let filter = ProductFilter {
        search,
        active,
        page,
        limit,
        sort_by,
        sort_order,
    };
    let page = state.client().list_products(&filter).await?;
    print_json(&page)
}

pub async fn get(id: ProductId) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Products).await?;

    let product = state.client().get_product(id).await?;
    print_json(&product)
}

pub async fn create(name: String, description: String, price: Decimal) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Products).await?;

    let product = state
        .client()
        .create_product(&NewProduct {
            name,
            description,
            price,
        })
        .await?;
    print_json(&product)
}

pub async fn update(
    id: ProductId,
    name: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Products).await?;

    let update = ProductUpdate {
        name,
        description,
        price,
    };
    let product = state.client().update_product(id, &update).await?;
    print_json(&product)
}

pub async fn delete(id: ProductId) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Products).await?;

    state.client().delete_product(id).await?;
    println!("Deleted product {id}");
    Ok(())
}

pub async fn toggle(id: ProductId) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Products).await?;

    let product = state.client().toggle_product_active(id).await?;
    println!(
        "Product {} is now {}",
        product.id,
        if product.active { "active" } else { "inactive" }
    );
    Ok(())
}
