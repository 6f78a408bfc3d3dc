//! Order commands.
//!
//! `create` drives the same cart the storefront uses: each `--item`
//! argument adds a line (fetching the product so the cart can price it),
//! the running total is shown, and the cart's lines become the order
//! payload.

use std::str::FromStr;

use chrono::NaiveDate;

use tienda_client::models::{NewOrder, OrderFilter};
use tienda_core::{OrderId, OrderStatus, ProductId};
use tienda_storefront::Route;

use super::{CliError, authorize, print_json, state};

/// A `<product-id>:<quantity>` pair from the command line.
#[derive(Debug, Clone, Copy)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl FromStr for CartItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <product-id>:<quantity>, got `{s}`"))?;
        let product_id = id
            .parse()
            .map_err(|_| format!("invalid product id `{id}`"))?;
        let quantity: u32 = quantity
            .parse()
            .map_err(|_| format!("invalid quantity `{quantity}`"))?;
        if quantity == 0 {
            return Err("quantity must be at least 1".to_owned());
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

pub async fn list(
    status: Option<OrderStatus>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Orders).await?;

    let filter = OrderFilter {
        status,
        date_from,
        date_to,
        page,
        limit,
        ..OrderFilter::default()
    };
    let page = state.client().list_orders(&filter).await?;
    print_json(&page)
}

pub async fn get(id: OrderId) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Orders).await?;

    let order = state.client().get_order(id).await?;
    print_json(&order)
}

/// Fill the cart from the command line and place the order.
pub async fn create(
    items: &[CartItem],
    payment_method: String,
    address: Option<String>,
    notes: Option<String>,
) -> Result<(), CliError> {
    let mut state = state()?;
    authorize(&state, Route::CreateOrder).await?;

    for item in items {
        let product = state.client().get_product(item.product_id).await?;
        if !product.active {
            return Err(CliError::InvalidArg(format!(
                "product {} ({}) is not available",
                product.id, product.name
            )));
        }
        state.cart_mut().add(product, item.quantity);
    }

    let cart = state.cart();
    println!("Cart: {} item(s), total {}", cart.count(), cart.total());
    for line in cart.lines() {
        println!(
            "  {} x{} = {}",
            line.product().name,
            line.quantity(),
            line.subtotal()
        );
    }

    let order = NewOrder {
        payment_method,
        address,
        notes,
        items: cart.order_items(),
    };
    let placed = state.client().create_order(&order).await?;
    state.cart_mut().clear();

    println!("Order {} placed ({})", placed.id, placed.status);
    print_json(&placed)
}

pub async fn set_status(id: OrderId, status: OrderStatus) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Orders).await?;

    let order = state.client().set_order_status(id, status).await?;
    println!("Order {} is now {}", order.id, order.status);
    Ok(())
}

pub async fn cancel(id: OrderId) -> Result<(), CliError> {
    let state = state()?;
    authorize(&state, Route::Orders).await?;

    let order = state.client().cancel_order(id).await?;
    println!("Order {} is now {}", order.id, order.status);
    Ok(())
}

pub async fn delete(id: OrderId) -> Result<(), CliError> {
    let state = state()?;
    let session = authorize(&state, Route::Orders).await?;
    super::require_roles(&session, &["ADMIN"])?;

    state.client().delete_order(id).await?;
    println!("Deleted order {id}");
    Ok(())
}

pub async fn stats() -> Result<(), CliError> {
    let state = state()?;
    let session = authorize(&state, Route::Orders).await?;
    super::require_roles(&session, &["ADMIN", "SUPERVISOR"])?;

    let stats = state.client().order_stats().await?;
    print_json(&stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_item_parses_id_and_quantity() {
        let item: CartItem = "3:2".parse().unwrap();
        assert_eq!(item.product_id, ProductId::new(3));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn cart_item_rejects_malformed_input() {
        assert!("3".parse::<CartItem>().is_err());
        assert!("x:2".parse::<CartItem>().is_err());
        assert!("3:zero".parse::<CartItem>().is_err());
        assert!("3:0".parse::<CartItem>().is_err());
    }
}
