//! Named song filters: mood synonym groups and feature presets.
//!
//! Each filter pairs a predicate over a [`SongRecord`](crate::model::SongRecord)
//! with a sort order. Unknown names parse to `None`; the caller decides the
//! fallback.

pub mod feature;
pub mod mood;

pub use feature::Feature;
pub use mood::Mood;

use std::cmp::Ordering;

pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

pub(crate) fn ascending(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
