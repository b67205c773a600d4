//! Indicator computations.
//!
//! The engine carries a single indicator — the trailing simple moving
//! average — computed once over the full series and zipped back onto the
//! points by [`crate::signal::annotate`].

pub mod sma;

pub use sma::sma_of_series;

/// Create price points from raw prices for testing.
///
/// Dates are sequential ISO days starting 2025-06-01; volume is left unset.
#[cfg(test)]
pub fn make_points(prices: &[f64]) -> Vec<crate::domain::PricePoint> {
    use crate::domain::PricePoint;
    let base_date = chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| {
            PricePoint::new(
                (base_date + chrono::Duration::days(i as i64)).to_string(),
                price,
            )
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
