//! Market dataset — CSV ingestion with validation and keyed series lookup.

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::data::fallback::fallback_report;
use crate::domain::{Commodity, Mandi, PricePoint};
use crate::signal::{MarketReport, SignalError};

const BUNDLED_CSV: &str = include_str!("market_sample.csv");

/// One row of the `commodity,mandi,date,price,volume` CSV schema.
/// The volume column may be empty.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    commodity: String,
    mandi: String,
    date: String,
    price: f64,
    #[serde(default)]
    volume: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid price {price} for {commodity}/{mandi} on {date}")]
    InvalidPrice {
        commodity: String,
        mandi: String,
        date: String,
        price: f64,
    },

    #[error("unparseable date {date:?} for {commodity}/{mandi} (expected YYYY-MM-DD)")]
    InvalidDate {
        commodity: String,
        mandi: String,
        date: String,
    },

    #[error("out-of-order date {date} for {commodity}/{mandi}: series must be chronologically ascending")]
    OutOfOrder {
        commodity: String,
        mandi: String,
        date: String,
    },
}

/// In-memory price series keyed by (commodity, mandi), both lowercased.
///
/// Ingestion validates what the signal engine assumes and never checks
/// again: prices are finite and non-negative, dates parse as calendar
/// dates, and every series is strictly chronologically ascending. Past
/// this boundary the engine treats dates as opaque labels.
#[derive(Debug, Clone, Default)]
pub struct MarketDataset {
    series: BTreeMap<(Commodity, Mandi), Vec<PricePoint>>,
}

impl MarketDataset {
    /// The static dataset compiled into the crate.
    pub fn bundled() -> Self {
        Self::from_csv_str(BUNDLED_CSV).expect("bundled market data is valid")
    }

    pub fn from_csv_str(data: &str) -> Result<Self, DataError> {
        Self::from_reader(data.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DataError> {
        Self::from_reader(File::open(path)?)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DataError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut series: BTreeMap<(Commodity, Mandi), Vec<PricePoint>> = BTreeMap::new();
        let mut last_dates: BTreeMap<(Commodity, Mandi), NaiveDate> = BTreeMap::new();

        for record in csv_reader.deserialize() {
            let record: PriceRecord = record?;
            let key = (record.commodity.to_lowercase(), record.mandi.to_lowercase());

            let point = PricePoint {
                date: record.date.clone(),
                price: record.price,
                volume: record.volume,
            };
            if !point.is_sane() {
                return Err(DataError::InvalidPrice {
                    commodity: record.commodity,
                    mandi: record.mandi,
                    date: record.date,
                    price: record.price,
                });
            }

            let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|_| {
                DataError::InvalidDate {
                    commodity: record.commodity.clone(),
                    mandi: record.mandi.clone(),
                    date: record.date.clone(),
                }
            })?;
            if let Some(&last) = last_dates.get(&key) {
                if date <= last {
                    return Err(DataError::OutOfOrder {
                        commodity: record.commodity,
                        mandi: record.mandi,
                        date: record.date,
                    });
                }
            }
            last_dates.insert(key.clone(), date);

            series.entry(key).or_default().push(point);
        }

        Ok(Self { series })
    }

    /// Series for a (commodity, mandi) pair. Lookup is case-insensitive.
    pub fn series(&self, commodity: &str, mandi: &str) -> Option<&[PricePoint]> {
        let key = (commodity.to_lowercase(), mandi.to_lowercase());
        self.series.get(&key).map(Vec::as_slice)
    }

    /// All (commodity, mandi) pairs, sorted.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.series
            .keys()
            .map(|(commodity, mandi)| (commodity.as_str(), mandi.as_str()))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Build a [`MarketReport`] for a pair, falling back to an indicative
    /// HOLD report when the pair has no series.
    pub fn report(
        &self,
        commodity: &str,
        mandi: &str,
        window: usize,
    ) -> Result<MarketReport, SignalError> {
        if window == 0 {
            return Err(SignalError::InvalidWindow(window));
        }
        match self.series(commodity, mandi) {
            Some(series) => MarketReport::build(commodity, mandi, series, window),
            None => Ok(fallback_report(commodity, mandi, window)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Signal;

    const SMALL_CSV: &str = "\
commodity,mandi,date,price,volume
tomato,pune,2025-06-01,2500,100
tomato,pune,2025-06-02,2550,
onion,nashik,2025-06-01,1800,80
";

    #[test]
    fn parses_series_per_key() {
        let dataset = MarketDataset::from_csv_str(SMALL_CSV).unwrap();
        assert_eq!(dataset.len(), 2);

        let tomato = dataset.series("tomato", "pune").unwrap();
        assert_eq!(tomato.len(), 2);
        assert_eq!(tomato[0].price, 2500.0);
        assert_eq!(tomato[0].volume, Some(100));
        assert_eq!(tomato[1].volume, None);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dataset = MarketDataset::from_csv_str(SMALL_CSV).unwrap();
        assert!(dataset.series("Tomato", "PUNE").is_some());
        assert!(dataset.series("tomato", "agra").is_none());
    }

    #[test]
    fn rejects_negative_price() {
        let csv = "commodity,mandi,date,price,volume\ntomato,pune,2025-06-01,-5,\n";
        let err = MarketDataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataError::InvalidPrice { .. }));
    }

    #[test]
    fn rejects_unparseable_date() {
        let csv = "commodity,mandi,date,price,volume\ntomato,pune,June 1st,2500,\n";
        let err = MarketDataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataError::InvalidDate { .. }));
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let csv = "\
commodity,mandi,date,price,volume
tomato,pune,2025-06-02,2500,
tomato,pune,2025-06-01,2450,
";
        let err = MarketDataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataError::OutOfOrder { .. }));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let csv = "\
commodity,mandi,date,price,volume
tomato,pune,2025-06-01,2500,
tomato,pune,2025-06-01,2450,
";
        let err = MarketDataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataError::OutOfOrder { .. }));
    }

    #[test]
    fn interleaved_keys_keep_independent_order() {
        let csv = "\
commodity,mandi,date,price,volume
tomato,pune,2025-06-01,2500,
onion,nashik,2025-06-05,1800,
tomato,pune,2025-06-02,2550,
onion,nashik,2025-06-06,1820,
";
        let dataset = MarketDataset::from_csv_str(csv).unwrap();
        assert_eq!(dataset.series("tomato", "pune").unwrap().len(), 2);
        assert_eq!(dataset.series("onion", "nashik").unwrap().len(), 2);
    }

    #[test]
    fn report_for_missing_key_falls_back() {
        let dataset = MarketDataset::from_csv_str(SMALL_CSV).unwrap();
        let report = dataset.report("rice", "indore", 7).unwrap();
        assert_eq!(report.signal, Signal::Hold);
        assert!(report.history.is_empty());
    }

    #[test]
    fn report_rejects_zero_window_even_for_missing_key() {
        let dataset = MarketDataset::from_csv_str(SMALL_CSV).unwrap();
        assert!(dataset.report("rice", "indore", 0).is_err());
        assert!(dataset.report("tomato", "pune", 0).is_err());
    }

    #[test]
    fn bundled_dataset_loads() {
        let dataset = MarketDataset::bundled();
        assert!(!dataset.is_empty());
        assert!(dataset.series("tomato", "pune").is_some());
    }
}
