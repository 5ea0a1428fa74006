//! CLI command implementations.
//!
//! Each command runs against an in-memory catalog and returns its output as
//! pretty-printed JSON.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::catalog::{CatalogQuery, CatalogService};
use crate::error::AppError;
use crate::models::VideoGame;
use crate::review::ReviewForm;

/// A game together with the names of its tags.
#[derive(Debug, Serialize)]
struct GameDetail<'a> {
    #[serde(flatten)]
    game: &'a VideoGame,
    tag_names: Vec<&'a str>,
}

/// List one page of games matching `query`.
pub fn cmd_list(catalog: &CatalogService, query: &CatalogQuery, page: usize) -> Result<String> {
    let page = catalog.list(query, page).map_err(AppError::from)?;
    to_json(&page)
}

/// Show a single game by slug, with its tag names resolved.
pub fn cmd_show(catalog: &CatalogService, slug: &str) -> Result<String> {
    let game = catalog.find_by_slug(slug).ok_or(AppError::NotFound)?;
    let tag_names = game
        .tags
        .iter()
        .filter_map(|&id| catalog.tags().get(id))
        .map(|tag| tag.name.as_str())
        .collect();

    to_json(&GameDetail { game, tag_names })
}

/// List the tag universe.
pub fn cmd_tags(catalog: &CatalogService) -> Result<String> {
    to_json(catalog.tags())
}

/// Submit a review and show the updated game.
pub fn cmd_review(catalog: &mut CatalogService, slug: &str, form: &ReviewForm) -> Result<String> {
    let game = catalog
        .submit_review(slug, form)
        .with_context(|| format!("failed to review '{slug}'"))?;
    to_json(game)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
