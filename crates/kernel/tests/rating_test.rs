#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Rating aggregation integration tests.
//!
//! Tests for average rating and per-value histogram computation.

use ludex_kernel::models::Rating;
use ludex_kernel::rating::{RatingHistogram, aggregate, compute_average, compute_histogram};
use ludex_test_utils::{assert, test_game, test_reviews};

const SPREAD: [i64; 15] = [1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5];

// -------------------------------------------------------------------------
// Average tests
// -------------------------------------------------------------------------

#[test]
fn no_review_has_no_average() {
    let mut game = test_game(1, "Video Game 0").build_raw();
    aggregate(&mut game);
    assert_eq!(game.average_rating, None);
}

#[test]
fn one_review_average_is_its_rating() {
    let mut game = test_game(1, "Video Game 0").with_ratings(&[5]).build_raw();
    aggregate(&mut game);
    assert_eq!(game.average_rating, Some(5));
}

#[test]
fn many_reviews_average_rounds_to_nearest() {
    let mut game = test_game(1, "Video Game 0")
        .with_ratings(&SPREAD)
        .build_raw();
    aggregate(&mut game);
    assert_eq!(game.average_rating, Some(4));
}

#[test]
fn average_stays_within_bounds() {
    for ratings in [&[1, 1, 1][..], &[5, 5][..], &[1, 5][..], &[1, 2][..]] {
        let average = compute_average(&test_reviews(ratings)).unwrap();
        assert!((1..=5).contains(&average), "{ratings:?} -> {average}");
    }
}

#[test]
fn half_boundary_rounds_up() {
    assert_eq!(compute_average(&test_reviews(&[3, 4])), Some(4));
    assert_eq!(compute_average(&test_reviews(&[1, 1, 2, 2])), Some(2));
}

// -------------------------------------------------------------------------
// Histogram tests
// -------------------------------------------------------------------------

#[test]
fn no_review_histogram_is_empty() {
    assert_eq!(compute_histogram(&[]), RatingHistogram::default());
}

#[test]
fn one_review_histogram() {
    let histogram = compute_histogram(&test_reviews(&[5]));
    assert_eq!(
        histogram,
        RatingHistogram {
            five: 1,
            ..RatingHistogram::default()
        }
    );
}

#[test]
fn many_reviews_histogram() {
    let histogram = compute_histogram(&test_reviews(&SPREAD));
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
fn histogram_buckets_match_occurrences() {
    let ratings = [2, 5, 5, 1, 2, 2, 4];
    let histogram = compute_histogram(&test_reviews(&ratings));

    assert_eq!(histogram.total() as usize, ratings.len());
    for (rating, count) in histogram.iter() {
        let expected = ratings
            .iter()
            .filter(|&&r| Rating::try_from(r).unwrap() == rating)
            .count();
        assert_eq!(count as usize, expected, "bucket {rating}");
    }
}

// -------------------------------------------------------------------------
// Recompute semantics
// -------------------------------------------------------------------------

#[test]
fn repeated_aggregation_is_stable() {
    let mut game = test_game(1, "Video Game 0")
        .with_ratings(&[2, 4, 5])
        .build_raw();

    aggregate(&mut game);
    let first = (game.average_rating, game.rating_histogram);
    aggregate(&mut game);
    aggregate(&mut game);

    assert_eq!((game.average_rating, game.rating_histogram), first);
}

#[test]
fn aggregation_after_each_review_matches_batch() {
    let all = test_reviews(&SPREAD);

    let mut incremental = test_game(1, "Video Game 0").build_raw();
    for review in &all {
        incremental.reviews.push(review.clone());
        aggregate(&mut incremental);
        assert::stats_consistent(&incremental);
    }

    let batch = test_game(1, "Video Game 0").with_ratings(&SPREAD).build();

    assert_eq!(incremental.average_rating, batch.average_rating);
    assert_eq!(incremental.rating_histogram, batch.rating_histogram);
}

#[test]
fn insertion_order_does_not_matter() {
    let mut reversed = SPREAD;
    reversed.reverse();

    let a = test_game(1, "A").with_ratings(&SPREAD).build();
    let b = test_game(2, "B").with_ratings(&reversed).build();

    assert_eq!(a.average_rating, b.average_rating);
    assert_eq!(a.rating_histogram, b.rating_histogram);
}
