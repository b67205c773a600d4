//! Signal engine — moving-average annotation and BUY/SELL/HOLD
//! classification.
//!
//! Both operations are pure: each call recomputes from scratch over the
//! supplied series, and identical input yields identical output. The
//! classifier looks only at the final annotated point.

pub mod report;

pub use report::MarketReport;

use crate::domain::{AnnotatedPoint, PricePoint, Signal};
use crate::indicators::sma_of_series;

/// Default moving-average window, in observations (one per calendar day in
/// the bundled dataset).
pub const DEFAULT_WINDOW: usize = 7;

#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("moving-average window must be >= 1, got {0}")]
    InvalidWindow(usize),
}

/// Annotate a price series with its trailing simple moving average.
///
/// Output has exactly the input's length and ordering. `sma` is `None` for
/// the first `window - 1` points and the mean of the `window` most recent
/// prices everywhere after. An empty series yields an empty output.
///
/// Rejects `window == 0` rather than producing silently wrong output.
pub fn annotate(
    series: &[PricePoint],
    window: usize,
) -> Result<Vec<AnnotatedPoint>, SignalError> {
    if window == 0 {
        return Err(SignalError::InvalidWindow(window));
    }

    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let averages = sma_of_series(&prices, window);

    Ok(series
        .iter()
        .zip(averages)
        .map(|(point, sma)| AnnotatedPoint::from_point(point, sma))
        .collect())
}

/// Classify the latest annotated point into a trading signal.
///
/// Total function: an absent point or an absent average resolves to
/// [`Signal::Hold`]. Price above the average reads SELL, below reads BUY
/// (mean-reversion convention), exactly on it HOLD.
pub fn classify(last: Option<&AnnotatedPoint>) -> Signal {
    let Some(point) = last else {
        return Signal::Hold;
    };
    let Some(sma) = point.sma else {
        return Signal::Hold;
    };

    if point.price > sma {
        Signal::Sell
    } else if point.price < sma {
        Signal::Buy
    } else {
        Signal::Hold
    }
}

/// Annotate a series and classify its final point in one step.
pub fn latest_signal(series: &[PricePoint], window: usize) -> Result<Signal, SignalError> {
    let annotated = annotate(series, window)?;
    Ok(classify(annotated.last()))
}
