//! Shipping cost calculator (the strategy context).

use patterns_shared::PatternError;

use crate::{
    company::ShippingCompany,
    order::{Order, Weighted},
};

/// Delegates pricing to the [`ShippingCompany`] it was built with
pub struct ShippingCalculator {
    /// ShippingCompany（料金計算戦略の抽象化）
    shipping_company: Box<dyn ShippingCompany>,
}

impl ShippingCalculator {
    pub fn new(shipping_company: Box<dyn ShippingCompany>) -> Self {
        Self { shipping_company }
    }

    /// Shipping cost of a single order
    pub fn calculate(&self, order: &dyn Weighted) -> Result<f64, PatternError> {
        let cost = self.shipping_company.calculate(order)?;
        tracing::debug!("Calculated shipping cost {}", cost);
        Ok(cost)
    }

    /// Total shipping cost of a batch of orders, each priced separately
    ///
    /// Stops at the first failing order.
    pub fn calculate_all(&self, orders: &[Order]) -> Result<f64, PatternError> {
        orders.iter().try_fold(0.0, |total, order| {
            Ok::<_, PatternError>(total + self.calculate(order)?)
        })
    }
}
