//! Tag-branching calculator kept for comparison with the strategy version.

use patterns_shared::PatternError;

use crate::order::Weighted;

/// Calculator that picks the pricing rule by checking the carrier name
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyShippingCalculator;

impl LegacyShippingCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Price `order` with the rule named by `method` (`fedex`, `aramex`, `dhl`)
    pub fn calculate(&self, order: &dyn Weighted, method: &str) -> Result<f64, PatternError> {
        let weight = order.weight();
        match method {
            "fedex" => Ok(weight * 10.0 + 15.0),
            "aramex" => Ok(weight * 8.0 + 10.0),
            "dhl" => Ok(weight * 12.0 + 20.0),
            _ => Err(PatternError::invalid("Unknown shipping method")),
        }
    }
}
