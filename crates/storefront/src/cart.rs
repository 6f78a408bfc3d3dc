//! Shopping cart store.
//!
//! Purely local state: the cart is never sent to the backend as-is, it
//! only feeds order creation. Invariants: at most one line per product
//! identity, and a line's subtotal is always `quantity x unit price` -
//! it is recomputed on every mutation and cannot be set directly.
//!
//! Cart operations never fail; mutations on an absent product are no-ops.

use rust_decimal::Decimal;

use tienda_client::models::{NewOrderItem, Product};
use tienda_core::ProductId;

/// One product entry in the cart with its quantity and derived subtotal.
#[derive(Debug, Clone)]
pub struct CartLine {
    product: Product,
    quantity: u32,
    subtotal: Decimal,
}

impl CartLine {
    fn new(product: Product, quantity: u32) -> Self {
        let subtotal = product.price * Decimal::from(quantity);
        Self {
            product,
            quantity,
            subtotal,
        }
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.subtotal = self.product.price * Decimal::from(quantity);
    }

    /// The product snapshot this line was created from.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `quantity x unit price`, kept in sync by every mutation.
    #[must_use]
    pub const fn subtotal(&self) -> Decimal {
        self.subtotal
    }
}

/// The shopping cart: an ordered sequence of lines plus the panel flag.
///
/// An owned value - consumers receive a `&mut CartStore` instead of
/// reaching for a process-wide singleton.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    open: bool,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            open: false,
        }
    }

    /// Add `quantity` units of a product. An existing line for the same
    /// product is incremented; otherwise a new line is appended. No stock
    /// check and no upper bound - that is the backend's concern.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if let Some(line) = self.line_mut(product.id) {
            // Cart mutations never fail; an absurd quantity pins at the
            // maximum instead of overflowing.
            let merged = line.quantity.saturating_add(quantity);
            line.set_quantity(merged);
        } else {
            self.lines.push(CartLine::new(product, quantity));
        }
    }

    /// Remove the line for `product_id`. No-op if absent.
    pub fn remove(&mut self, product_id: ProductId) {
        self.lines.retain(|line| line.product.id != product_id);
    }

    /// Set the quantity for `product_id`. Zero removes the line; absent
    /// products are a no-op.
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            line.set_quantity(quantity);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line subtotals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of all line quantities, pinned at `u32::MAX`.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the cart panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the cart panel flag.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// The cart contents as order-creation items.
    #[must_use]
    pub fn order_items(&self) -> Vec<NewOrderItem> {
        self.lines
            .iter()
            .map(|line| NewOrderItem {
                product_id: line.product.id,
                quantity: line.quantity,
            })
            .collect()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product.id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i32, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("producto-{id}"),
            description: String::new(),
            price: price.parse().unwrap(),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn repeated_adds_accumulate_quantity_and_subtotal() {
        let mut cart = CartStore::new();
        cart.add(product(1, "10.00"), 2);
        assert_eq!(cart.total(), dec("20.00"));
        assert_eq!(cart.count(), 2);

        cart.add(product(1, "10.00"), 3);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total(), dec("50.00"));
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn remove_then_add_yields_a_fresh_line() {
        let mut cart = CartStore::new();
        cart.add(product(1, "10.00"), 4);
        cart.remove(ProductId::new(1));
        cart.add(product(1, "10.00"), 1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(), dec("10.00"));
    }

    #[test]
    fn zero_quantity_is_equivalent_to_remove() {
        let mut cart = CartStore::new();
        cart.add(product(1, "10.00"), 2);
        cart.set_quantity(ProductId::new(1), 0);
        assert!(cart.is_empty());

        // Removing twice is a no-op.
        cart.remove(ProductId::new(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_recomputes_subtotal() {
        let mut cart = CartStore::new();
        cart.add(product(1, "10.00"), 2);
        cart.add(product(1, "10.00"), 3);
        cart.set_quantity(ProductId::new(1), 1);
        assert_eq!(cart.total(), dec("10.00"));
        assert_eq!(cart.count(), 1);

        cart.remove(ProductId::new(1));
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn set_quantity_on_absent_product_is_a_noop() {
        let mut cart = CartStore::new();
        cart.add(product(1, "10.00"), 2);
        cart.set_quantity(ProductId::new(99), 7);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn totals_sum_across_lines() {
        let mut cart = CartStore::new();
        cart.add(product(1, "10.00"), 2);
        cart.add(product(2, "3.50"), 4);
        assert_eq!(cart.total(), dec("34.00"));
        assert_eq!(cart.count(), 6);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn huge_quantities_saturate_instead_of_overflowing() {
        let mut cart = CartStore::new();
        cart.add(product(1, "1.00"), u32::MAX);
        cart.add(product(1, "1.00"), 1);
        assert_eq!(cart.lines()[0].quantity(), u32::MAX);

        cart.add(product(2, "1.00"), 1);
        assert_eq!(cart.count(), u32::MAX);
    }

    #[test]
    fn panel_flag_toggles() {
        let mut cart = CartStore::new();
        assert!(!cart.is_open());
        cart.toggle_open();
        assert!(cart.is_open());
        cart.toggle_open();
        assert!(!cart.is_open());
    }

    #[test]
    fn order_items_mirror_the_lines() {
        let mut cart = CartStore::new();
        cart.add(product(1, "10.00"), 2);
        cart.add(product(2, "3.50"), 1);

        let items = cart.order_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_id, ProductId::new(1));
        assert_eq!(items[0].quantity, 2);
    }
}
