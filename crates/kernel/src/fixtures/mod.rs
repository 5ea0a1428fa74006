//! Deterministic seed data for the catalog.
//!
//! Builds a fixed set of tags, a run of video games each tagged with five
//! consecutive tags, and reviews from small groups of users. Everything is
//! derived from a single `u64` seed so the same configuration always yields
//! the same catalog.

use anyhow::{Context, Result, bail};
use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::catalog::CatalogService;
use crate::models::{Rating, Review, Tag, TagUniverse, VideoGame};
use crate::rating::aggregate;

/// Genre names used for the seeded tags, ids assigned from 1.
pub const TAG_NAMES: [&str; 25] = [
    "Action",
    "Adventure",
    "Arcade",
    "Card Game",
    "Casual",
    "City Builder",
    "Co-op",
    "Fighting",
    "Horror",
    "Indie",
    "Metroidvania",
    "MMO",
    "Open World",
    "Platformer",
    "Puzzle",
    "Racing",
    "Roguelike",
    "RPG",
    "Sandbox",
    "Shooter",
    "Simulation",
    "Sports",
    "Stealth",
    "Strategy",
    "Survival",
];

/// Number of consecutive tags attached to each game.
pub const TAGS_PER_GAME: usize = 5;

/// Number of users that review the same games.
pub const USERS_PER_GROUP: usize = 5;

const SENTENCES: [&str; 8] = [
    "Tight controls and a soundtrack that sticks with you.",
    "The difficulty curve spikes hard in the second half.",
    "A charming world that rewards careful exploration.",
    "Performance dips in busy scenes but never breaks the flow.",
    "The story is thin, the mechanics carry everything.",
    "Hours disappear before you notice.",
    "Menus are clumsy and the tutorial overstays its welcome.",
    "Local co-op is where this one really shines.",
];

/// Sizing and seed for fixture generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    pub seed: u64,
    pub games: usize,
    pub users: usize,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            games: 50,
            users: 10,
        }
    }
}

/// Generated seed data.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub tags: Vec<Tag>,
    pub users: Vec<String>,
    pub games: Vec<VideoGame>,
}

impl Fixtures {
    /// Load the fixtures into a catalog.
    pub fn into_catalog(self) -> Result<CatalogService> {
        let universe = TagUniverse::new(self.tags).context("fixture tags are not unique")?;
        CatalogService::new(universe, self.games).context("fixture games reference unknown tags")
    }
}

/// Generate fixtures for `config`.
pub fn generate(config: &FixtureConfig) -> Result<Fixtures> {
    if config.users == 0 {
        bail!("fixture generation needs at least one user");
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    let tags: Vec<Tag> = TAG_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| Tag::new(id, *name))
        .collect();

    let users: Vec<String> = (0..config.users).map(|n| format!("user+{n}")).collect();
    let groups: Vec<&[String]> = users.chunks(USERS_PER_GROUP).collect();

    let first_release =
        NaiveDate::from_ymd_opt(2020, 1, 1).context("invalid fixture base release date")?;

    let mut games = Vec::with_capacity(config.games);
    for index in 0..config.games {
        let release_date = first_release
            .checked_add_days(Days::new(index as u64 * 7))
            .context("fixture release date out of range")?;

        let mut game = VideoGame::new(index as i64 + 1, format!("Video Game {index}"), release_date)
            .with_description(paragraph(&mut rng, 4))
            .with_test(paragraph(&mut rng, 3))
            .with_editorial_rating(
                Rating::try_from((index % 5) as i64 + 1).context("editorial rating out of range")?,
            );

        for offset in 0..TAGS_PER_GAME {
            game.add_tag(&tags[(index + offset) % tags.len()]);
        }

        for author in groups[index % groups.len()] {
            let rating = Rating::try_from(rng.gen_range(1..=5_i64))
                .context("generated rating out of range")?;
            game.reviews
                .push(Review::new(author.clone(), rating, paragraph(&mut rng, 1)));
            aggregate(&mut game);
        }

        games.push(game);
    }

    info!(
        seed = config.seed,
        tags = tags.len(),
        users = users.len(),
        games = games.len(),
        "generated fixtures"
    );

    Ok(Fixtures { tags, users, games })
}

fn paragraph(rng: &mut StdRng, sentences: usize) -> String {
    (0..sentences)
        .filter_map(|_| SENTENCES.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}
