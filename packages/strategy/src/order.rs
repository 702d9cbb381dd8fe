//! Orders priced by the shipping strategies.

use patterns_shared::PatternError;

/// Anything with a shipping weight can be priced
#[cfg_attr(test, mockall::automock)]
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// An order; only its weight matters for shipping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Order {
    weight: f64,
}

impl Order {
    /// Create an order, rejecting negative or non-finite weights
    pub fn new(weight: f64) -> Result<Self, PatternError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(PatternError::invalid(format!(
                "Order weight must be a non-negative number, got {weight}"
            )));
        }
        Ok(Self { weight })
    }
}

impl Weighted for Order {
    fn weight(&self) -> f64 {
        self.weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_zero_and_positive_weights() {
        // テスト項目: 0 以上の重さは受け付ける
        // given (前提条件):
        let weights = [0.0, 5.0, 12.5];

        for weight in weights {
            // when (操作):
            let order = Order::new(weight);

            // then (期待する結果):
            assert_eq!(order.map(|o| o.weight()), Ok(weight));
        }
    }

    #[test]
    fn test_new_rejects_negative_weight() {
        // テスト項目: 負の重さは InvalidOperation になる
        // when (操作):
        let result = Order::new(-1.0);

        // then (期待する結果):
        assert!(matches!(result, Err(PatternError::InvalidOperation(_))));
    }

    #[test]
    fn test_new_rejects_non_finite_weight() {
        // テスト項目: NaN や無限大は InvalidOperation になる
        for weight in [f64::NAN, f64::INFINITY] {
            // when (操作):
            let result = Order::new(weight);

            // then (期待する結果):
            assert!(matches!(result, Err(PatternError::InvalidOperation(_))));
        }
    }
}
