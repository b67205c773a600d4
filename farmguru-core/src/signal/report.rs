//! Market report — annotated series, signal, and a farmer-facing
//! explanation for one commodity/mandi pair.

use serde::{Deserialize, Serialize};

use crate::domain::{AnnotatedPoint, PricePoint, Signal};
use crate::signal::{annotate, classify, SignalError};

/// Everything the presentation layer needs to render a market page:
/// the latest price, its trailing average, the derived signal, a short
/// plain-language analysis, and the full annotated history for charting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketReport {
    pub commodity: String,
    pub mandi: String,
    pub window: usize,
    pub latest_price: Option<f64>,
    pub moving_average: Option<f64>,
    pub signal: Signal,
    pub analysis: String,
    pub history: Vec<AnnotatedPoint>,
}

impl MarketReport {
    /// Annotate `series`, classify its final point, and render the
    /// analysis text.
    pub fn build(
        commodity: &str,
        mandi: &str,
        series: &[PricePoint],
        window: usize,
    ) -> Result<Self, SignalError> {
        let history = annotate(series, window)?;
        let last = history.last();
        let signal = classify(last);
        let latest_price = last.map(|p| p.price);
        let moving_average = last.and_then(|p| p.sma);
        let analysis = render_analysis(commodity, mandi, window, latest_price, moving_average, signal);

        Ok(Self {
            commodity: commodity.to_string(),
            mandi: mandi.to_string(),
            window,
            latest_price,
            moving_average,
            signal,
            analysis,
            history,
        })
    }
}

/// Percentage gap between the latest price and its moving average.
/// A zero average (all-zero window) pins the gap to zero.
fn change_pct(price: f64, average: f64) -> f64 {
    if average == 0.0 {
        0.0
    } else {
        (price - average) / average * 100.0
    }
}

fn render_analysis(
    commodity: &str,
    mandi: &str,
    window: usize,
    latest_price: Option<f64>,
    moving_average: Option<f64>,
    signal: Signal,
) -> String {
    let (Some(price), Some(average)) = (latest_price, moving_average) else {
        return format!(
            "Limited price data available for {commodity} in {mandi}. \
             Monitor market trends closely."
        );
    };

    let pct = change_pct(price, average);
    match signal {
        Signal::Sell => format!(
            "Price above {window}-day average by {pct:.1}%. Consider selling."
        ),
        Signal::Buy => format!(
            "Price below {window}-day average by {:.1}%. May be a good buying opportunity.",
            pct.abs()
        ),
        Signal::Hold => format!(
            "Price near {window}-day average ({pct:+.1}%). \
             Stable market conditions. Hold current position."
        ),
    }
}
