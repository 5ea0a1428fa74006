//! Catalog filter resolution.
//!
//! A query is validated against the tag universe before any game is looked
//! at; an unknown tag id rejects the whole query. Matching games keep their
//! original relative order.

use tracing::{debug, warn};

use super::{CatalogError, CatalogQuery};
use crate::models::{TagUniverse, VideoGame};

/// Check that every tag id in `query` exists in `universe`.
pub fn validate_query(universe: &TagUniverse, query: &CatalogQuery) -> Result<(), CatalogError> {
    let unknown: Vec<i64> = query
        .tag_ids
        .iter()
        .copied()
        .filter(|id| !universe.contains(*id))
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        warn!(?unknown, "rejecting catalog query with unknown tag ids");
        Err(CatalogError::InvalidQuery { unknown })
    }
}

/// Check whether a single game satisfies every clause of `query`.
///
/// The search clause is a case-insensitive title substring match; the tag
/// clause requires the game to carry all selected tags.
pub fn matches(game: &VideoGame, query: &CatalogQuery) -> bool {
    let title_matches = query
        .search_text()
        .is_none_or(|search| game.title.to_lowercase().contains(&search.to_lowercase()));

    title_matches && query.tag_ids.is_subset(&game.tags)
}

/// Validate `query` and return the matching games in their original order.
pub fn filter<'a>(
    games: &'a [VideoGame],
    universe: &TagUniverse,
    query: &CatalogQuery,
) -> Result<Vec<&'a VideoGame>, CatalogError> {
    validate_query(universe, query)?;

    let matched: Vec<&VideoGame> = games.iter().filter(|g| matches(g, query)).collect();

    debug!(
        search = query.search_text().unwrap_or_default(),
        tags = ?query.tag_ids,
        candidates = games.len(),
        matched = matched.len(),
        "filtered catalog"
    );

    Ok(matched)
}
