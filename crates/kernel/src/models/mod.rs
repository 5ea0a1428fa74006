//! Catalog data model.

pub mod review;
pub mod tag;
pub mod video_game;

pub use review::{MAX_COMMENT_LENGTH, MAX_RATING, MIN_RATING, Rating, RatingOutOfRange, Review};
pub use tag::{Tag, TagUniverse, TagUniverseError};
pub use video_game::{VideoGame, slugify};
