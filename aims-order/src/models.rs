use aims_catalog::{CartLineItem, Media};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A media item as it was ordered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderLineItem {
    pub media: Media,
    pub quantity: u32,
    pub price: i64,
}

impl OrderLineItem {
    pub fn new(media: Media, quantity: u32, price: i64) -> Self {
        Self {
            media,
            quantity,
            price,
        }
    }

    /// Price times quantity, saturating at the `i64` bounds
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}

impl From<&CartLineItem> for OrderLineItem {
    fn from(item: &CartLineItem) -> Self {
        Self::new(item.media.clone(), item.quantity, item.price)
    }
}

/// Built once per checkout attempt from the cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub items: Vec<OrderLineItem>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn add_item(&mut self, item: OrderLineItem) {
        self.items.push(item);
    }

    /// Sum of price times quantity over all line items, saturating
    pub fn amount(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.line_total()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub order: Order,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(order: Order) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            created_at: Utc::now(),
        }
    }

    pub fn amount(&self) -> i64 {
        self.order.amount()
    }
}
