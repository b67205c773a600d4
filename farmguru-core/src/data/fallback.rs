//! Fallback market data for commodities absent from the dataset.

use crate::domain::Signal;
use crate::signal::MarketReport;

/// Typical modal prices (₹/quintal) used when no series exists for a
/// commodity. Matched case-insensitively.
const BASE_PRICES: &[(&str, f64)] = &[
    ("tomato", 2500.0),
    ("onion", 1800.0),
    ("potato", 1200.0),
    ("wheat", 2100.0),
    ("rice", 2800.0),
    ("maize", 1900.0),
];

const DEFAULT_BASE_PRICE: f64 = 2000.0;

/// Base price for a commodity, or a generic default for unknown ones.
pub fn base_price(commodity: &str) -> f64 {
    let needle = commodity.to_lowercase();
    BASE_PRICES
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, price)| *price)
        .unwrap_or(DEFAULT_BASE_PRICE)
}

/// HOLD report with an indicative base price, produced when a
/// (commodity, mandi) pair has no series. The history is empty and the
/// signal is pinned to HOLD; there is nothing to classify.
pub fn fallback_report(commodity: &str, mandi: &str, window: usize) -> MarketReport {
    let base = base_price(commodity);
    MarketReport {
        commodity: commodity.to_string(),
        mandi: mandi.to_string(),
        window,
        latest_price: Some(base),
        moving_average: Some(base * 0.95),
        signal: Signal::Hold,
        analysis: format!(
            "Limited price data available for {commodity} in {mandi}. \
             Monitor market trends closely."
        ),
        history: Vec::new(),
    }
}
