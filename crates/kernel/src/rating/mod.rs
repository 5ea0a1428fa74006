//! Rating statistics derived from a game's reviews.
//!
//! This module provides:
//! - compute_average: rounded mean rating
//! - compute_histogram: per-value review counts
//! - aggregate: writes both back onto a `VideoGame`

mod aggregator;
mod histogram;

pub use aggregator::{aggregate, compute_average, compute_histogram};
pub use histogram::RatingHistogram;
