//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64` on the models (the shape the desktop bridge
//! serializes); every calculation is done using `Decimal` internally, then
//! converted back to `f64` rounded to 2 decimal places.

use crate::menu::Product;
use crate::orders::OrderError;
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per product (R$1,000,000)
const MAX_PRICE: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Validate a product before it enters an order
///
/// The price must be finite, non-negative and below [`MAX_PRICE`].
pub fn validate_product(product: &Product) -> Result<(), OrderError> {
    let price = product.price;
    if !price.is_finite() || price < 0.0 || price > MAX_PRICE {
        return Err(OrderError::InvalidPrice {
            name: product.name.clone(),
            price,
        });
    }
    Ok(())
}

/// Format a monetary value as Brazilian currency, e.g. `R$25.00`
pub fn format_brl(value: f64) -> String {
    format!("R${:.2}", value)
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}
