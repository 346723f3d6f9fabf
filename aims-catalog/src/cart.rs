use crate::inventory::StockManager;
use crate::product::Media;
use serde::{Deserialize, Serialize};

/// One media item in the cart with the quantity requested
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLineItem {
    pub media: Media,
    pub quantity: u32,
    /// Unit price at the time the item was added
    pub price: i64,
}

impl CartLineItem {
    pub fn new(media: Media, quantity: u32) -> Self {
        let price = media.price;
        Self {
            media,
            quantity,
            price,
        }
    }
}

/// Shopping cart for the current session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add media to the cart. Adding the same media again raises its quantity,
    /// capped at `u32::MAX`.
    pub fn add_media(&mut self, media: Media, quantity: u32) {
        if quantity == 0 {
            return;
        }

        match self.items.iter_mut().find(|i| i.media.id == media.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(CartLineItem::new(media, quantity)),
        }
    }

    pub fn remove_media(&mut self, media_id: i32) -> Option<CartLineItem> {
        let index = self.items.iter().position(|i| i.media.id == media_id)?;
        Some(self.items.remove(index))
    }

    pub fn empty_cart(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items, saturating
    pub fn total_media(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of unit price times quantity, saturating at the `i64` bounds
    pub fn subtotal(&self) -> i64 {
        self.items.iter().fold(0i64, |acc, i| {
            acc.saturating_add(i.price.saturating_mul(i64::from(i.quantity)))
        })
    }

    /// Fail on the first line item the shelf cannot cover
    pub fn check_availability_of_product(&self, stock: &StockManager) -> Result<(), AvailabilityError> {
        if self.is_empty() {
            return Err(AvailabilityError::EmptyCart);
        }

        for item in &self.items {
            if !stock.can_supply(item.media.id, item.quantity) {
                let available = stock.available(item.media.id);
                tracing::warn!(
                    "Media {} ({}) not available: requested {}, available {}",
                    item.media.id, item.media.title, item.quantity, available
                );
                return Err(AvailabilityError::MediaNotAvailable {
                    media_id: item.media.id,
                    title: item.media.title.clone(),
                    requested: item.quantity,
                    available,
                });
            }
        }

        Ok(())
    }
}

/// What the checkout flow needs from whoever owns the cart
pub trait CartProvider {
    /// Fails when any line item cannot be supplied
    fn check_availability_of_product(&self) -> Result<(), AvailabilityError>;

    /// Line items in the order they were added
    fn line_items(&self) -> &[CartLineItem];
}

/// A cart checked against the store's own shelf
#[derive(Debug, Clone, Default)]
pub struct InStoreCart {
    pub cart: Cart,
    pub stock: StockManager,
}

impl InStoreCart {
    pub fn new(cart: Cart, stock: StockManager) -> Self {
        Self { cart, stock }
    }
}

impl CartProvider for InStoreCart {
    fn check_availability_of_product(&self) -> Result<(), AvailabilityError> {
        self.cart.check_availability_of_product(&self.stock)
    }

    fn line_items(&self) -> &[CartLineItem] {
        self.cart.items()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AvailabilityError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Media {media_id} ({title}) not available: requested {requested}, available {available}")]
    MediaNotAvailable {
        media_id: i32,
        title: String,
        requested: u32,
        available: u32,
    },
}
