//! Per-value rating counts.

use serde::{Deserialize, Serialize};

use crate::models::Rating;

/// Number of reviews for each rating value, 1 through 5.
///
/// The counts always sum to the number of reviews they were built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingHistogram {
    pub one: u32,
    pub two: u32,
    pub three: u32,
    pub four: u32,
    pub five: u32,
}

impl RatingHistogram {
    /// Count of reviews with the given rating.
    pub fn count(&self, rating: Rating) -> u32 {
        match rating.get() {
            1 => self.one,
            2 => self.two,
            3 => self.three,
            4 => self.four,
            _ => self.five,
        }
    }

    pub fn increment(&mut self, rating: Rating) {
        let slot = match rating.get() {
            1 => &mut self.one,
            2 => &mut self.two,
            3 => &mut self.three,
            4 => &mut self.four,
            _ => &mut self.five,
        };
        *slot += 1;
    }

    /// Sum of all buckets.
    pub fn total(&self) -> u32 {
        self.one + self.two + self.three + self.four + self.five
    }

    /// `(rating, count)` pairs, lowest rating first.
    pub fn iter(&self) -> impl Iterator<Item = (Rating, u32)> + '_ {
        Rating::all().map(move |r| (r, self.count(r)))
    }
}

impl FromIterator<Rating> for RatingHistogram {
    fn from_iter<I: IntoIterator<Item = Rating>>(iter: I) -> Self {
        let mut histogram = Self::default();
        for rating in iter {
            histogram.increment(rating);
        }
        histogram
    }
}
