//! Sort helpers for search results
//!
//! All sorts are stable so the storage ranking remains the tie-break.
//! Records missing the sorted field go last regardless of direction.

use super::types::{SortMode, Vehicle};
use std::cmp::Ordering;

/// Apply a sort mode to a result set in place
///
/// `Relevance` leaves the storage order untouched.
pub fn apply_sort(vehicles: &mut [Vehicle], mode: SortMode) {
    match mode {
        SortMode::Relevance => {}
        SortMode::Distance => {
            vehicles.sort_by(|a, b| compare_f64_asc(a.distance_miles, b.distance_miles));
        }
        SortMode::YearDesc => vehicles.sort_by(|a, b| b.year.cmp(&a.year)),
        SortMode::YearAsc => vehicles.sort_by(|a, b| a.year.cmp(&b.year)),
        SortMode::PriceAsc => vehicles.sort_by(|a, b| compare_asc(a.price, b.price)),
        SortMode::PriceDesc => vehicles.sort_by(|a, b| compare_desc(a.price, b.price)),
        SortMode::MileageAsc => vehicles.sort_by(|a, b| compare_asc(a.mileage, b.mileage)),
        SortMode::MileageDesc => vehicles.sort_by(|a, b| compare_desc(a.mileage, b.mileage)),
    }
}

/// Ascending comparison with `None` sorted last
fn compare_asc<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Descending comparison with `None` still sorted last
fn compare_desc<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending float comparison with `None` sorted last; NaN compares equal
fn compare_f64_asc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
