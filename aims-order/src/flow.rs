use crate::builder::OrderBuilder;
use crate::delivery::DeliveryInfo;
use crate::fees::ShippingFeeCalculator;
use crate::models::{Invoice, Order};
use aims_catalog::{AvailabilityError, CartProvider};
use aims_core::CoreError;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Everything a successful checkout produces
#[derive(Debug, Clone, Serialize)]
pub struct Checkout {
    pub invoice: Invoice,
    pub delivery_info: DeliveryInfo,
    pub shipping_fee: i64,
}

impl Checkout {
    pub fn total(&self) -> i64 {
        self.invoice.amount().saturating_add(self.shipping_fee)
    }
}

/// Drives one customer's checkout, step by step.
///
/// Holds no state between calls besides its collaborators; a failing step
/// leaves it to the caller not to run the later ones. [`PlaceOrderFlow::checkout`]
/// runs all of them in order.
pub struct PlaceOrderFlow<C: CartProvider> {
    cart: C,
    fee_calculator: Arc<dyn ShippingFeeCalculator>,
}

impl<C: CartProvider> PlaceOrderFlow<C> {
    pub fn new(cart: C, fee_calculator: Arc<dyn ShippingFeeCalculator>) -> Self {
        Self { cart, fee_calculator }
    }

    pub fn cart(&self) -> &C {
        &self.cart
    }

    /// Check that every product in the cart can be supplied
    pub fn place_order(&self) -> Result<(), PlaceOrderError> {
        self.cart.check_availability_of_product()?;
        Ok(())
    }

    pub fn create_order(&self) -> Order {
        let order = OrderBuilder::create_order(self.cart.line_items());
        tracing::info!("Created order {} with {} line items", order.id, order.items.len());
        order
    }

    pub fn create_invoice(&self, order: Order) -> Invoice {
        OrderBuilder::create_invoice(order)
    }

    /// Log the submitted details, then validate them
    pub fn process_delivery_info(&self, info: &HashMap<String, String>) -> bool {
        let delivery_info = DeliveryInfo::from_map(info);
        Self::log_delivery_info(&delivery_info);
        delivery_info.is_valid()
    }

    fn log_delivery_info(delivery_info: &DeliveryInfo) {
        tracing::info!("Process Delivery Info");
        tracing::info!("{:?}", delivery_info);
    }

    /// Address, name and phone number all valid
    pub fn validate_delivery_info(&self, info: &HashMap<String, String>) -> bool {
        DeliveryInfo::from_map(info).is_valid()
    }

    /// Like [`PlaceOrderFlow::validate_delivery_info`] but names the first invalid field
    pub fn check_delivery_info(&self, info: &HashMap<String, String>) -> Result<DeliveryInfo, PlaceOrderError> {
        let delivery_info = DeliveryInfo::from_map(info);
        Self::log_delivery_info(&delivery_info);

        delivery_info.check().map_err(|e| {
            tracing::warn!("Delivery info rejected: {}", e);
            PlaceOrderError::InvalidDeliveryInfo(e)
        })?;

        Ok(delivery_info)
    }

    pub fn calculate_shipping_fee(&self, order: &Order) -> i64 {
        self.fee_calculator.calculate_shipping_fee(order)
    }

    /// Availability, order, invoice, delivery info, fee; stops at the first failure
    pub fn checkout(&self, info: &HashMap<String, String>) -> Result<Checkout, PlaceOrderError> {
        self.place_order()?;

        let order = self.create_order();
        let invoice = self.create_invoice(order);
        let delivery_info = self.check_delivery_info(info)?;
        let shipping_fee = self.calculate_shipping_fee(&invoice.order);

        tracing::info!(
            "Checkout complete for order {}: amount {}, shipping {}",
            invoice.order.id,
            invoice.amount(),
            shipping_fee
        );

        Ok(Checkout {
            invoice,
            delivery_info,
            shipping_fee,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlaceOrderError {
    #[error("Product availability check failed: {0}")]
    Availability(#[from] AvailabilityError),

    #[error("Invalid delivery info: {0}")]
    InvalidDeliveryInfo(#[from] CoreError),
}
