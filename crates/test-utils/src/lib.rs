//! Ludex test utilities.
//!
//! Helpers for integration testing: game and tag fixtures, review builders,
//! and assertion utilities for catalog testing.

use chrono::NaiveDate;
use ludex_kernel::models::{Rating, Review, Tag, TagUniverse, VideoGame};
use ludex_kernel::rating::aggregate;

/// Release date used by every test game.
#[allow(clippy::expect_used)]
pub fn test_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date")
}

/// Create a test game with default values.
pub fn test_game(id: i64, title: &str) -> TestGame {
    TestGame {
        id,
        title: title.to_string(),
        release_date: test_release_date(),
        tags: Vec::new(),
        ratings: Vec::new(),
    }
}

/// Tags with ids `1..=count`, named `Tag {id}`.
pub fn test_tags(count: i64) -> Vec<Tag> {
    (1..=count).map(|id| Tag::new(id, format!("Tag {id}"))).collect()
}

/// Tag universe with ids `1..=count`.
#[allow(clippy::expect_used)]
pub fn test_universe(count: i64) -> TagUniverse {
    TagUniverse::new(test_tags(count)).expect("test tag ids are unique")
}

/// Reviews with the given ratings, authored by `user+0`, `user+1`, ...
///
/// Values outside 1..=5 are skipped.
pub fn test_reviews(ratings: &[i64]) -> Vec<Review> {
    ratings
        .iter()
        .filter_map(|&value| Rating::try_from(value).ok())
        .enumerate()
        .map(|(i, rating)| Review::new(format!("user+{i}"), rating, "test comment"))
        .collect()
}

/// A test game builder.
#[derive(Debug, Clone)]
pub struct TestGame {
    pub id: i64,
    pub title: String,
    pub release_date: NaiveDate,
    pub tags: Vec<i64>,
    pub ratings: Vec<i64>,
}

impl TestGame {
    /// Set the tag ids.
    pub fn with_tags(mut self, tags: &[i64]) -> Self {
        self.tags = tags.to_vec();
        self
    }

    /// Set the review ratings.
    pub fn with_ratings(mut self, ratings: &[i64]) -> Self {
        self.ratings = ratings.to_vec();
        self
    }

    /// Build the game without computing rating statistics.
    pub fn build_raw(self) -> VideoGame {
        let mut game = VideoGame::new(self.id, self.title, self.release_date);
        game.tags.extend(self.tags);
        game.reviews = test_reviews(&self.ratings);
        game
    }

    /// Build the game with rating statistics up to date.
    pub fn build(self) -> VideoGame {
        let mut game = self.build_raw();
        aggregate(&mut game);
        game
    }
}

/// Assertion helpers for catalog content.
pub mod assert {
    use ludex_kernel::models::VideoGame;

    /// Assert that games appear with exactly these ids, in order.
    pub fn ids(games: &[&VideoGame], expected: &[i64]) {
        let actual: Vec<i64> = games.iter().map(|g| g.id).collect();
        assert_eq!(actual, expected, "game ids mismatch");
    }

    /// Assert that a game's derived statistics match its reviews.
    pub fn stats_consistent(game: &VideoGame) {
        assert_eq!(
            game.rating_histogram.total() as usize,
            game.reviews.len(),
            "histogram of '{}' does not sum to its review count",
            game.title
        );
        assert_eq!(
            game.average_rating.is_some(),
            !game.reviews.is_empty(),
            "average of '{}' presence does not match reviews",
            game.title
        );
    }

    /// Assert that a string contains a substring.
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }
}
