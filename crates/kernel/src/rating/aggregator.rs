//! Rating aggregation.
//!
//! Both statistics are rebuilt from the full review list on every call. There
//! is no running state to keep in sync, so repeated calls on an unchanged list
//! always agree and the order reviews were added in does not matter.

use tracing::debug;

use super::RatingHistogram;
use crate::models::{Review, VideoGame};

/// Arithmetic mean of all ratings, rounded half up.
///
/// Returns `None` for an empty slice. The result always lies in `1..=5`.
pub fn compute_average(reviews: &[Review]) -> Option<u8> {
    if reviews.is_empty() {
        return None;
    }

    let count = reviews.len() as u64;
    let sum: u64 = reviews.iter().map(|r| u64::from(r.rating.get())).sum();

    // floor(sum / count + 1/2) in integer arithmetic.
    let rounded = (2 * sum + count) / (2 * count);
    u8::try_from(rounded).ok()
}

/// Fresh per-value counts over every review.
pub fn compute_histogram(reviews: &[Review]) -> RatingHistogram {
    reviews.iter().map(|r| r.rating).collect()
}

/// Recompute and store a game's derived rating fields.
pub fn aggregate(game: &mut VideoGame) {
    game.average_rating = compute_average(&game.reviews);
    game.rating_histogram = compute_histogram(&game.reviews);

    debug!(
        game_id = game.id,
        reviews = game.reviews.len(),
        average = ?game.average_rating,
        "aggregated ratings"
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::Rating;

    fn reviews(ratings: &[i64]) -> Vec<Review> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Review::new(format!("user+{i}"), Rating::try_from(value).unwrap(), "")
            })
            .collect()
    }

    #[test]
    fn average_empty_is_none() {
        assert_eq!(compute_average(&[]), None);
    }

    #[test]
    fn average_single_review_is_exact() {
        for value in 1..=5 {
            assert_eq!(compute_average(&reviews(&[value])), Some(value as u8));
        }
    }

    #[test]
    fn average_rounds_up_from_point_six() {
        let list = reviews(&[1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5]);
        assert_eq!(compute_average(&list), Some(4));
    }

    #[test]
    fn average_rounds_half_up() {
        assert_eq!(compute_average(&reviews(&[2, 3])), Some(3));
        assert_eq!(compute_average(&reviews(&[4, 5])), Some(5));
        assert_eq!(compute_average(&reviews(&[1, 2])), Some(2));
    }

    #[test]
    fn average_rounds_down_below_half() {
        // 10 / 3 = 3.33
        assert_eq!(compute_average(&reviews(&[3, 3, 4])), Some(3));
        // 7 / 3 = 2.33
        assert_eq!(compute_average(&reviews(&[1, 1, 5])), Some(2));
    }

    #[test]
    fn average_ignores_order() {
        let forward = reviews(&[1, 5, 5, 2]);
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(compute_average(&forward), compute_average(&backward));
    }

    #[test]
    fn histogram_empty_is_zero() {
        assert_eq!(compute_histogram(&[]), RatingHistogram::default());
    }

    #[test]
    fn histogram_counts_each_value() {
        let histogram = compute_histogram(&reviews(&[1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5]));
        assert_eq!(
            histogram,
            RatingHistogram {
                one: 1,
                two: 2,
                three: 3,
                four: 4,
                five: 5,
            }
        );
    }

    #[test]
    fn aggregate_is_idempotent() {
        let mut game = VideoGame::new(
            1,
            "Video Game 1",
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        game.reviews = reviews(&[4, 5, 2]);

        aggregate(&mut game);
        let first = (game.average_rating, game.rating_histogram);
        aggregate(&mut game);
        assert_eq!((game.average_rating, game.rating_histogram), first);
        assert_eq!(game.average_rating, Some(4));
        assert_eq!(game.rating_histogram.total(), 3);
    }

    #[test]
    fn aggregate_replaces_stale_state() {
        let mut game = VideoGame::new(
            1,
            "Video Game 1",
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        game.average_rating = Some(1);
        game.rating_histogram.five = 9;

        aggregate(&mut game);
        assert_eq!(game.average_rating, None);
        assert_eq!(game.rating_histogram, RatingHistogram::default());
    }
}
