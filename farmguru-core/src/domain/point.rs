//! Price points — the fundamental market data unit.

use serde::{Deserialize, Serialize};

/// A single observation in a commodity price series.
///
/// The `date` is an opaque calendar-date label (ISO `YYYY-MM-DD` in the
/// bundled dataset); the engine never parses it and never re-sorts — series
/// are supplied chronologically ascending. Prices are modal mandi prices in
/// rupees per quintal. `volume` is reported arrivals and is not used by the
/// signal computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
    pub volume: Option<u64>,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, price: f64) -> Self {
        Self {
            date: date.into(),
            price,
            volume: None,
        }
    }

    /// Basic sanity check: price is finite and non-negative.
    pub fn is_sane(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}

/// A [`PricePoint`] extended with its trailing simple moving average.
///
/// `sma` is `None` when fewer than `window` points exist at or before this
/// one. Serializes `None` as JSON `null` for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoint {
    pub date: String,
    pub price: f64,
    pub volume: Option<u64>,
    pub sma: Option<f64>,
}

impl AnnotatedPoint {
    pub fn from_point(point: &PricePoint, sma: Option<f64>) -> Self {
        Self {
            date: point.date.clone(),
            price: point.price,
            volume: point.volume,
            sma,
        }
    }
}
