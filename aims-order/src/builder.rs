use crate::models::{Invoice, Order, OrderLineItem};
use aims_catalog::CartLineItem;

/// Turns cart contents into orders and orders into invoices
pub struct OrderBuilder;

impl OrderBuilder {
    /// Copy every cart line into a new order, keeping order, quantity and price.
    /// Availability must already have been checked.
    pub fn create_order(items: &[CartLineItem]) -> Order {
        let mut order = Order::new();

        for item in items {
            order.add_item(OrderLineItem::from(item));
        }

        order
    }

    pub fn create_invoice(order: Order) -> Invoice {
        Invoice::new(order)
    }
}
