//! Static market data — CSV ingestion, keyed lookup, and fallback prices.
//!
//! The dataset is bundled at compile time; nothing here touches the
//! network or writes to disk.

pub mod dataset;
pub mod fallback;

pub use dataset::{DataError, MarketDataset};
pub use fallback::{base_price, fallback_report};
