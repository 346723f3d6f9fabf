pub mod models;
pub mod builder;
pub mod fees;
pub mod rush;
pub mod delivery;
pub mod flow;

#[cfg(test)]
mod test_support;

pub use models::{Invoice, Order, OrderLineItem};
pub use builder::OrderBuilder;
pub use fees::{FixedFraction, FractionSource, PercentageFeeCalculator, ShippingFeeCalculator, ThreadRngSource};
pub use rush::{RushEligibility, RushOrderError, RushOrderRequest};
pub use delivery::DeliveryInfo;
pub use flow::{Checkout, PlaceOrderError, PlaceOrderFlow};
