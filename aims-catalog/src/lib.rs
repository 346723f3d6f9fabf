pub mod product;
pub mod inventory;
pub mod cart;

pub use product::{Media, MediaType};
pub use inventory::StockManager;
pub use cart::{AvailabilityError, Cart, CartLineItem, CartProvider, InStoreCart};
