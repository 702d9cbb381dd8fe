//! Strategy pattern exercise.
//!
//! `ShippingCalculator` takes its pricing strategy from outside and never
//! checks which carrier it was given.

pub mod calculator;
pub mod company;
pub mod legacy;
pub mod order;

pub use calculator::ShippingCalculator;
pub use company::{Aramex, Dhl, Fedex, ShippingCompany, UnimplementedShippingCompany};
pub use legacy::LegacyShippingCalculator;
pub use order::{Order, Weighted};
