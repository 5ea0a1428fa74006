//! Video game model.
//!
//! Video games are the catalog entries. Each carries a set of tags and an
//! insertion-ordered list of reviews, plus two fields derived from those
//! reviews (`average_rating` and `rating_histogram`) that are kept current by
//! [`crate::rating::aggregate`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Rating, Review, Tag};
use crate::rating::RatingHistogram;

/// Video game record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoGame {
    pub id: i64,

    pub title: String,

    /// URL-safe identifier derived from the title.
    pub slug: String,

    pub description: String,

    /// Editorial test write-up.
    #[serde(default)]
    pub test: String,

    pub release_date: NaiveDate,

    /// Score given by the editorial test, independent of user reviews.
    #[serde(default)]
    pub editorial_rating: Option<Rating>,

    /// Tag ids carried by this game.
    #[serde(default)]
    pub tags: BTreeSet<i64>,

    /// Reviews in submission order.
    #[serde(default)]
    pub reviews: Vec<Review>,

    /// Rounded mean of all review ratings; `None` while there are no reviews.
    #[serde(default)]
    pub average_rating: Option<u8>,

    #[serde(default)]
    pub rating_histogram: RatingHistogram,
}

impl VideoGame {
    /// Create a game with no tags and no reviews.
    pub fn new(id: i64, title: impl Into<String>, release_date: NaiveDate) -> Self {
        let title = title.into();
        let slug = slugify(&title);
        Self {
            id,
            title,
            slug,
            description: String::new(),
            test: String::new(),
            release_date,
            editorial_rating: None,
            tags: BTreeSet::new(),
            reviews: Vec::new(),
            average_rating: None,
            rating_histogram: RatingHistogram::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_test(mut self, test: impl Into<String>) -> Self {
        self.test = test.into();
        self
    }

    pub fn with_editorial_rating(mut self, rating: Rating) -> Self {
        self.editorial_rating = Some(rating);
        self
    }

    /// Attach a tag. Adding a tag twice is a no-op.
    pub fn add_tag(&mut self, tag: &Tag) {
        self.tags.insert(tag.id);
    }

    pub fn has_tag(&self, tag_id: i64) -> bool {
        self.tags.contains(&tag_id)
    }

    /// Check whether `author` has already reviewed this game.
    pub fn has_review_by(&self, author: &str) -> bool {
        self.reviews.iter().any(|r| r.author == author)
    }
}

/// Convert a title into a URL-safe slug.
///
/// Lowercases, folds common Latin diacritics to their base letter, and
/// replaces every run of other characters with a single hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase).map(fold_diacritic) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
