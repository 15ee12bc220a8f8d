//! Search domain types

use serde::{Deserialize, Serialize};

/// A vehicle listing as surfaced by search
///
/// The diversifier only reads `dealer_id`; everything else is display data
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Listing identifier
    pub id: String,
    /// Identity of the selling dealership
    pub dealer_id: String,
    /// Display name of the dealership
    pub dealer_name: String,
    /// Manufacturer
    pub make: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: u16,
    /// Asking price in whole dollars
    pub price: Option<u32>,
    /// Odometer reading in miles
    pub mileage: Option<u32>,
    /// Distance from the searcher's location in miles
    pub distance_miles: Option<f64>,
    /// Bridge-page URL routing to the dealer site
    pub detail_url: String,
}

/// Active sort mode for a search request
///
/// Parsed from the query-string sort key. Unrecognized keys parse to `None`
/// so callers fall back to storage order and skip diversification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Ranking order as returned by storage
    Relevance,
    /// Nearest first
    Distance,
    /// Newest model year first
    YearDesc,
    /// Oldest model year first
    YearAsc,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Lowest mileage first
    MileageAsc,
    /// Highest mileage first
    MileageDesc,
}

impl SortMode {
    /// Parse a query-string sort key; `None` input means the default sort
    pub fn parse(key: Option<&str>) -> Option<SortMode> {
        match key {
            None | Some("") => Some(SortMode::Relevance),
            Some("relevance") => Some(SortMode::Relevance),
            Some("distance") => Some(SortMode::Distance),
            Some("year_desc") => Some(SortMode::YearDesc),
            Some("year_asc") => Some(SortMode::YearAsc),
            Some("price_asc") => Some(SortMode::PriceAsc),
            Some("price_desc") => Some(SortMode::PriceDesc),
            Some("mileage_asc") => Some(SortMode::MileageAsc),
            Some("mileage_desc") => Some(SortMode::MileageDesc),
            Some(_) => None,
        }
    }
}

/// Filter set pushed down to the inventory store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Manufacturer filter (case-insensitive exact match)
    pub make: Option<String>,
    /// Model filter (case-insensitive exact match)
    pub model: Option<String>,
    /// Minimum asking price
    pub price_min: Option<u32>,
    /// Maximum asking price
    pub price_max: Option<u32>,
    /// Minimum model year
    pub year_min: Option<u16>,
    /// Maximum model year
    pub year_max: Option<u16>,
    /// Maximum odometer reading
    pub mileage_max: Option<u32>,
    /// Search radius in miles
    pub max_distance_miles: Option<f64>,
    /// Size of the ranked pool to return
    pub limit: usize,
}

/// Distinct filter values available in the inventory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct makes, sorted
    pub makes: Vec<String>,
    /// Distinct models, sorted
    pub models: Vec<String>,
    /// Distinct model years, newest first
    pub years: Vec<u16>,
}
