//! Dealer diversification for ranked search results
//!
//! Takes an already-ranked vehicle list and spreads selections across
//! distinct dealers with a round-robin sweep, so no single dealership
//! dominates the top of a results page. The relative order within each
//! dealer's listings and the first-seen order of dealers are preserved,
//! keeping the output deterministic and pagination stable.

use super::types::{SortMode, Vehicle};
use std::collections::HashMap;
use std::collections::VecDeque;

/// Re-order a ranked result set round-robin by dealer
///
/// Returns at most `max_results` records. Buckets are swept in first-seen
/// dealer order; each sweep takes the next not-yet-emitted record from every
/// non-empty bucket. Exhausted buckets are skipped without disturbing the
/// sweep order of the rest.
///
/// Pure and deterministic: identical inputs produce identical output.
pub fn diversify_by_dealer(vehicles: Vec<Vehicle>, max_results: usize) -> Vec<Vehicle> {
    if vehicles.is_empty() || max_results == 0 {
        return Vec::new();
    }

    // Single left-to-right pass captures first-seen dealer order implicitly.
    let mut dealer_order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, VecDeque<Vehicle>> = HashMap::new();

    for vehicle in vehicles {
        let key = vehicle.dealer_id.clone();
        match buckets.get_mut(&key) {
            Some(bucket) => bucket.push_back(vehicle),
            None => {
                dealer_order.push(key.clone());
                buckets.insert(key, VecDeque::from([vehicle]));
            }
        }
    }

    let mut output = Vec::with_capacity(max_results);
    'sweep: loop {
        let mut emitted = false;
        for dealer in &dealer_order {
            if output.len() >= max_results {
                break 'sweep;
            }
            if let Some(vehicle) = buckets.get_mut(dealer).and_then(VecDeque::pop_front) {
                output.push(vehicle);
                emitted = true;
            }
        }
        if !emitted {
            break;
        }
    }

    output
}

/// Whether diversification applies for the given sort key
///
/// Price and mileage sorts encode explicit ranking intent that a dealer
/// shuffle would visibly violate, so they are left untouched, as is any
/// unrecognized sort key.
pub fn should_apply_diversification(sort: Option<&str>) -> bool {
    matches!(
        SortMode::parse(sort),
        Some(SortMode::Relevance)
            | Some(SortMode::Distance)
            | Some(SortMode::YearDesc)
            | Some(SortMode::YearAsc)
    )
}
