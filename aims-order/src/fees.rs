use crate::models::Order;
use aims_config::ShippingRules;
use rand::Rng;
use std::sync::Arc;

/// Estimates the shipping fee for an order
pub trait ShippingFeeCalculator: Send + Sync {
    fn calculate_shipping_fee(&self, order: &Order) -> i64;
}

/// Source of fractions in `[0, 1)`
pub trait FractionSource: Send + Sync {
    fn next_fraction(&self) -> f64;
}

/// Draws from the thread-local generator on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl FractionSource for ThreadRngSource {
    fn next_fraction(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always returns the same fraction
#[derive(Debug, Clone, Copy)]
pub struct FixedFraction(pub f64);

impl FractionSource for FixedFraction {
    fn next_fraction(&self) -> f64 {
        self.0
    }
}

/// Fee is a random share of the order amount, below `max_rate`.
///
/// The result is a non-negative integer strictly below `max_rate * amount`
/// (zero when the amount is zero). It is an estimate and is not reproducible
/// unless a [`FixedFraction`] is injected.
pub struct PercentageFeeCalculator {
    source: Arc<dyn FractionSource>,
    max_rate: f64,
}

impl PercentageFeeCalculator {
    pub fn new(source: Arc<dyn FractionSource>, max_rate: f64) -> Self {
        Self {
            source,
            max_rate: max_rate.max(0.0),
        }
    }

    pub fn from_rules(rules: &ShippingRules) -> Self {
        Self::new(Arc::new(ThreadRngSource), rules.max_fee_rate)
    }
}

impl Default for PercentageFeeCalculator {
    fn default() -> Self {
        Self::from_rules(&ShippingRules::default())
    }
}

impl ShippingFeeCalculator for PercentageFeeCalculator {
    fn calculate_shipping_fee(&self, order: &Order) -> i64 {
        let amount = order.amount().max(0);
        let fraction = self.source.next_fraction().clamp(0.0, 1.0 - f64::EPSILON);
        let bound = self.max_rate * amount as f64;

        let mut fees = (fraction * bound) as i64;
        // Rounding can land exactly on the bound for large amounts
        if bound > 0.0 && fees as f64 >= bound {
            fees = (bound.ceil() as i64 - 1).max(0);
        }

        tracing::info!("Order Amount: {} -- Shipping Fees: {}", amount, fees);
        fees
    }
}
