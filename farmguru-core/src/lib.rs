//! FarmGuru Core — market signal engine for agricultural price series.
//!
//! This crate contains the computational heart of FarmGuru's market page:
//! - Domain types (price points, annotated points, signals)
//! - Trailing simple-moving-average annotation
//! - BUY/SELL/HOLD classification of the latest point
//! - Market reports with a plain-language analysis string
//! - Bundled static dataset with CSV ingestion and validation
//!
//! Everything is synchronous and pure: each computation runs from scratch
//! over an in-memory series, with no shared state between invocations.

pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod signal;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all public types are Send + Sync, so a
    /// presentation layer may compute reports off the render thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PricePoint>();
        require_sync::<domain::PricePoint>();
        require_send::<domain::AnnotatedPoint>();
        require_sync::<domain::AnnotatedPoint>();
        require_send::<domain::Signal>();
        require_sync::<domain::Signal>();

        require_send::<signal::MarketReport>();
        require_sync::<signal::MarketReport>();
        require_send::<signal::SignalError>();
        require_sync::<signal::SignalError>();

        require_send::<data::MarketDataset>();
        require_sync::<data::MarketDataset>();
        require_send::<data::DataError>();
        require_sync::<data::DataError>();

        require_send::<config::SignalConfig>();
        require_sync::<config::SignalConfig>();
    }
}
