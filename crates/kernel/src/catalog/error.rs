//! Catalog errors.

use thiserror::Error;

/// Errors raised while building or querying the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The query referenced tag ids outside the tag universe.
    ///
    /// `unknown` lists every offending id in ascending order.
    #[error("invalid query: unknown tag ids {unknown:?}")]
    InvalidQuery { unknown: Vec<i64> },

    /// A game was loaded carrying a tag the universe does not know.
    #[error("game {game_id}: carries unknown tag id {tag_id}")]
    UnknownGameTag { game_id: i64, tag_id: i64 },
}
