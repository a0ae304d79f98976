//! # Reviews
//!
//! Review ordering and the small rendering rules around reviews.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Review;

/// Shown in place of a review date that cannot be parsed.
pub const INVALID_DATE: &str = "ERROR";

/// Number of stars in a rating row.
pub const STAR_COUNT: usize = 5;

// =============================================================================
// Sort Mode
// =============================================================================

/// How reviews are ordered on a product page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSort {
    /// Highest to Lowest
    #[default]
    RatingDesc,
    /// Lowest to Highest
    RatingAsc,
    /// Newest to Oldest
    DateDesc,
    /// Oldest to Newest
    DateAsc,
}

impl ReviewSort {
    pub const ALL: [ReviewSort; 4] = [
        ReviewSort::RatingDesc,
        ReviewSort::RatingAsc,
        ReviewSort::DateDesc,
        ReviewSort::DateAsc,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewSort::RatingDesc => "Highest to Lowest",
            ReviewSort::RatingAsc => "Lowest to Highest",
            ReviewSort::DateDesc => "Newest to Oldest",
            ReviewSort::DateAsc => "Oldest to Newest",
        }
    }
}

impl std::fmt::Display for ReviewSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the reviews ordered by `mode`.
///
/// The sort is stable: reviews with equal keys keep their original relative
/// order. Dates compare as their ISO-8601 strings.
pub fn sort_reviews(reviews: &[Review], mode: ReviewSort) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    match mode {
        ReviewSort::RatingDesc => sorted.sort_by(|a, b| b.rating.cmp(&a.rating)),
        ReviewSort::RatingAsc => sorted.sort_by(|a, b| a.rating.cmp(&b.rating)),
        ReviewSort::DateDesc => sorted.sort_by(|a, b| b.date.cmp(&a.date)),
        ReviewSort::DateAsc => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
    }
    sorted
}

// =============================================================================
// Rendering Helpers
// =============================================================================

/// Formats a review timestamp as a long date, e.g. `"May 23, 2024"`.
///
/// Malformed input yields [`INVALID_DATE`] instead of failing the view.
pub fn format_review_date(date: &str) -> String {
    match DateTime::parse_from_rfc3339(date) {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Fraction of star `index` (0-based) filled for `rating`, in `[0, 1]`.
///
/// ## Example
/// ```rust
/// use imarket_core::reviews::star_fill;
///
/// // 3.5 stars: three full, one half, one empty
/// let fills: Vec<f64> = (0..5).map(|i| star_fill(3.5, i)).collect();
/// assert_eq!(fills, vec![1.0, 1.0, 1.0, 0.5, 0.0]);
/// ```
pub fn star_fill(rating: f64, index: usize) -> f64 {
    (rating - index as f64).clamp(0.0, 1.0)
}

/// Fill fractions for a whole rating row.
pub fn star_row(rating: f64) -> [f64; STAR_COUNT] {
    std::array::from_fn(|i| star_fill(rating, i))
}

// =============================================================================
// Unit Tests
// =============================================================================
