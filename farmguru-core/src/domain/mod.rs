//! Domain types for the FarmGuru signal engine.

pub mod point;
pub mod signal;

pub use point::{AnnotatedPoint, PricePoint};
pub use signal::Signal;

/// Commodity name, lowercased for dataset lookup.
pub type Commodity = String;

/// Mandi (regional produce market) name, lowercased for dataset lookup.
pub type Mandi = String;
