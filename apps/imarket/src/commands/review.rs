//! # Review Commands
//!
//! Reviews for the product page, in the order the user picked.

use imarket_core::reviews::{format_review_date, sort_reviews, star_row, STAR_COUNT};
use imarket_core::{Review, ReviewSort};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;

/// A review ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub reviewer_name: String,
    pub rating: i32,
    pub stars: [f64; STAR_COUNT],
    pub comment: String,
    /// Raw ISO-8601 timestamp.
    pub date: String,
    /// `"May 23, 2024"`, or `"ERROR"` when the timestamp is malformed.
    pub date_label: String,
}

impl From<&Review> for ReviewDto {
    fn from(r: &Review) -> Self {
        ReviewDto {
            reviewer_name: r.reviewer_name.clone(),
            rating: r.rating,
            stars: star_row(f64::from(r.rating)),
            comment: r.comment.clone(),
            date: r.date.clone(),
            date_label: format_review_date(&r.date),
        }
    }
}

/// One entry of the sort menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: ReviewSort,
    pub label: &'static str,
}

/// Gets a product's reviews, sorted by `sort` (default: highest rating
/// first). Ties keep their feed order.
pub fn get_reviews(
    catalog: &CatalogState,
    product_id: i64,
    sort: Option<ReviewSort>,
) -> Result<Vec<ReviewDto>, ApiError> {
    let sort = sort.unwrap_or_default();
    debug!(product_id = %product_id, sort = %sort, "get_reviews command");

    let reviews = catalog.with_catalog(|c| {
        c.get(product_id)
            .map(|p| sort_reviews(&p.reviews, sort))
    })?;

    Ok(reviews.iter().map(ReviewDto::from).collect())
}

/// The sort menu, in display order.
pub fn review_sort_options() -> Vec<SortOption> {
    ReviewSort::ALL
        .iter()
        .map(|&value| SortOption {
            value,
            label: value.label(),
        })
        .collect()
}
