// src/metrics/mod.rs
pub mod derived;
pub mod summary;

pub use derived::{derive_all, DerivedMetrics};
pub use summary::SeasonSummary;
