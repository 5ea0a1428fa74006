//! In-memory catalog service.
//!
//! Holds one consistent snapshot of the tag universe and the game collection
//! and ties the filter, pager, review acceptance, and rating aggregation
//! together.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::{CATALOG_PAGE_SIZE, CatalogError, CatalogPage, CatalogQuery, filter, paginate};
use crate::error::{AppError, AppResult};
use crate::models::{TagUniverse, VideoGame};
use crate::rating::aggregate;
use crate::review::ReviewForm;

/// Catalog of video games over a fixed tag universe.
#[derive(Debug, Clone)]
pub struct CatalogService {
    tags: TagUniverse,
    games: Vec<VideoGame>,
}

impl CatalogService {
    /// Load a catalog snapshot.
    ///
    /// Every game's tags must belong to `tags`. Slugs are made unique, and
    /// rating statistics are recomputed for every game once its reviews are
    /// loaded.
    pub fn new(tags: TagUniverse, mut games: Vec<VideoGame>) -> Result<Self, CatalogError> {
        for game in &games {
            if let Some(&tag_id) = game.tags.iter().find(|id| !tags.contains(**id)) {
                return Err(CatalogError::UnknownGameTag {
                    game_id: game.id,
                    tag_id,
                });
            }
        }

        assign_unique_slugs(&mut games);
        games.iter_mut().for_each(aggregate);

        info!(tags = tags.len(), games = games.len(), "catalog loaded");

        Ok(Self { tags, games })
    }

    pub fn tags(&self) -> &TagUniverse {
        &self.tags
    }

    /// All games in catalog order.
    pub fn games(&self) -> &[VideoGame] {
        &self.games
    }

    /// Filter the catalog and return the requested 1-indexed page.
    pub fn list(
        &self,
        query: &CatalogQuery,
        page: usize,
    ) -> Result<CatalogPage<&VideoGame>, CatalogError> {
        let matched = filter(&self.games, &self.tags, query)?;
        let items = paginate(&matched, CATALOG_PAGE_SIZE, page).to_vec();

        debug!(page, on_page = items.len(), total = matched.len(), "listed catalog page");

        Ok(CatalogPage::new(items, matched.len(), page, CATALOG_PAGE_SIZE))
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&VideoGame> {
        self.games.iter().find(|g| g.slug == slug)
    }

    /// Accept a review for the game at `slug` and refresh its statistics.
    pub fn submit_review(&mut self, slug: &str, form: &ReviewForm) -> AppResult<&VideoGame> {
        let Some(game) = self.games.iter_mut().find(|g| g.slug == slug) else {
            return Err(AppError::NotFound);
        };

        let review = form.validate(game).map_err(|errors| {
            warn!(slug, author = %form.author, errors = errors.len(), "review rejected");
            AppError::Validation(errors)
        })?;

        info!(slug, author = %review.author, rating = %review.rating, "review accepted");

        game.reviews.push(review);
        aggregate(game);

        Ok(&*game)
    }
}

/// Give every game a distinct, non-empty slug.
///
/// An empty slug falls back to `game-{id}`. A slug already taken by an
/// earlier game gets the first free `-2`, `-3`, ... suffix.
fn assign_unique_slugs(games: &mut [VideoGame]) {
    let mut taken = HashSet::with_capacity(games.len());

    for game in games.iter_mut() {
        if game.slug.is_empty() {
            game.slug = format!("game-{}", game.id);
        }

        let mut candidate = game.slug.clone();
        let mut suffix = 2;
        while taken.contains(&candidate) {
            candidate = format!("{}-{suffix}", game.slug);
            suffix += 1;
        }

        if candidate != game.slug {
            debug!(game_id = game.id, from = %game.slug, to = %candidate, "deduplicated slug");
            game.slug = candidate.clone();
        }
        taken.insert(candidate);
    }
}
