// src/gamelog/mod.rs
pub mod models;
pub mod normalize;

// Re-export key record types for convenience
pub use models::{GameRecord, GameResult, RawRow, Venue};
pub use normalize::normalize_rows;
