use std::collections::HashMap;

/// In-memory count of units on the shelf, keyed by media id
#[derive(Debug, Clone, Default)]
pub struct StockManager {
    stock: HashMap<i32, u32>,
}

impl StockManager {
    pub fn new() -> Self {
        Self {
            stock: HashMap::new(),
        }
    }

    /// Set the available quantity for a media item, replacing any previous count
    pub fn set_stock(&mut self, media_id: i32, quantity: u32) {
        self.stock.insert(media_id, quantity);
    }

    /// Units available; unknown media have none
    pub fn available(&self, media_id: i32) -> u32 {
        self.stock.get(&media_id).copied().unwrap_or(0)
    }

    /// Whether `quantity` units can be sold right now
    pub fn can_supply(&self, media_id: i32, quantity: u32) -> bool {
        self.available(media_id) >= quantity
    }
}
