//! Trading signal — three-valued recommendation derived from the latest
//! annotated point.

use serde::{Deserialize, Serialize};
use std::fmt;

/// BUY / SELL / HOLD recommendation.
///
/// The classifier encodes a mean-reversion heuristic: price above its
/// trailing average reads as SELL (expect pullback), price below as BUY
/// (expect reversion upward). HOLD is the default for insufficient data
/// and for price exactly on the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
