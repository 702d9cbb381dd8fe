//! Shipping companies (the interchangeable strategies)
//!
//! Each carrier prices an order as a linear function of its weight:
//!
//! | Carrier | Cost            |
//! |---------|-----------------|
//! | FedEx   | `weight*10+15`  |
//! | Aramex  | `weight*8+10`   |
//! | DHL     | `weight*12+20`  |

use patterns_shared::PatternError;

use crate::order::Weighted;

/// Pricing strategy used by [`ShippingCalculator`](crate::ShippingCalculator).
///
/// The provided `calculate` is the abstract placeholder and fails with
/// [`PatternError::NotImplemented`].
pub trait ShippingCompany: Send + Sync {
    /// Shipping cost for `order`
    fn calculate(&self, _order: &dyn Weighted) -> Result<f64, PatternError> {
        Err(PatternError::NotImplemented("ShippingCompany::calculate"))
    }
}

/// Carrier that relies on the abstract placeholder
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedShippingCompany;

impl ShippingCompany for UnimplementedShippingCompany {}

#[derive(Debug, Clone, Copy, Default)]
pub struct Fedex;

impl ShippingCompany for Fedex {
    fn calculate(&self, order: &dyn Weighted) -> Result<f64, PatternError> {
        Ok(order.weight() * 10.0 + 15.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Aramex;

impl ShippingCompany for Aramex {
    fn calculate(&self, order: &dyn Weighted) -> Result<f64, PatternError> {
        Ok(order.weight() * 8.0 + 10.0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dhl;

impl ShippingCompany for Dhl {
    fn calculate(&self, order: &dyn Weighted) -> Result<f64, PatternError> {
        Ok(order.weight() * 12.0 + 20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{MockWeighted, Order};

    fn order(weight: f64) -> Order {
        Order::new(weight).unwrap()
    }

    // Parcel from another domain: anything exposing a weight can be priced
    struct Parcel {
        grams: f64,
    }

    impl Weighted for Parcel {
        fn weight(&self) -> f64 {
            self.grams / 1000.0
        }
    }

    #[test]
    fn test_fedex_formula() {
        // テスト項目: FedEx は weight*10+15
        // given (前提条件):
        let company = Fedex;

        // when (操作):
        let cost = company.calculate(&order(5.0));

        // then (期待する結果):
        assert_eq!(cost, Ok(65.0));
    }

    #[test]
    fn test_aramex_formula() {
        // テスト項目: Aramex は weight*8+10
        // given (前提条件):
        let company = Aramex;

        // when (操作):
        let cost = company.calculate(&order(5.0));

        // then (期待する結果):
        assert_eq!(cost, Ok(50.0));
    }

    #[test]
    fn test_dhl_formula() {
        // テスト項目: DHL は weight*12+20
        // given (前提条件):
        let company = Dhl;

        // when (操作):
        let cost = company.calculate(&order(5.0));

        // then (期待する結果):
        assert_eq!(cost, Ok(80.0));
    }

    #[test]
    fn test_zero_weight_costs_base_fee() {
        // テスト項目: 重さ 0 の場合は基本料金のみ
        // given (前提条件):
        let empty = order(0.0);

        // when (操作):
        let costs = [
            Fedex.calculate(&empty),
            Aramex.calculate(&empty),
            Dhl.calculate(&empty),
        ];

        // then (期待する結果):
        assert_eq!(costs, [Ok(15.0), Ok(10.0), Ok(20.0)]);
    }

    #[test]
    fn test_formulas_hold_across_weights() {
        // テスト項目: 各社の料金が重さの一次関数に一致する
        for weight in [0.0, 1.0, 2.5, 7.0, 100.0] {
            let o = order(weight);

            // then (期待する結果):
            assert_eq!(Fedex.calculate(&o), Ok(weight * 10.0 + 15.0));
            assert_eq!(Aramex.calculate(&o), Ok(weight * 8.0 + 10.0));
            assert_eq!(Dhl.calculate(&o), Ok(weight * 12.0 + 20.0));
        }
    }

    #[test]
    fn test_prices_any_weighted_value() {
        // テスト項目: Order 以外の Weighted な値も料金計算できる
        // given (前提条件): 5000 g = 5 kg
        let parcel = Parcel { grams: 5000.0 };

        // when (操作):
        let cost = Aramex.calculate(&parcel);

        // then (期待する結果):
        assert_eq!(cost, Ok(50.0));
    }

    #[test]
    fn test_company_reads_weight_only() {
        // テスト項目: 料金計算は weight() だけを参照する
        // given (前提条件):
        let mut weighted = MockWeighted::new();
        weighted.expect_weight().times(1).return_const(2.0);

        // when (操作):
        let cost = Dhl.calculate(&weighted);

        // then (期待する結果):
        assert_eq!(cost, Ok(44.0));
    }

    #[test]
    fn test_placeholder_calculate_is_not_implemented() {
        // テスト項目: プレースホルダの calculate は NotImplemented を返し、重さを参照しない
        // given (前提条件):
        let company = UnimplementedShippingCompany;
        let mut weighted = MockWeighted::new();
        weighted.expect_weight().never();

        // when (操作):
        let result = company.calculate(&weighted);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(PatternError::NotImplemented("ShippingCompany::calculate"))
        );
    }
}
