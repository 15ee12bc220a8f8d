//! Vehicle search API endpoints
//!
//! The search and filter-options routes: identify the caller, enforce the
//! composed quota policies, fetch the ranked pool, sort, diversify when the
//! sort mode allows it, and slice the requested page.

use crate::core::rate_limit::{identify, RateLimitResult};
use crate::core::search::{
    apply_sort, diversify_by_dealer, should_apply_diversification, FilterOptions, SearchFilters,
    SortMode, Vehicle,
};
use crate::server::routes::{ApiResponse, PaginationMeta};
use crate::server::state::AppState;
use crate::utils::error::{CarzoError, Result};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configure search routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/search", web::get().to(search))
            .route("/filter-options", web::get().to(filter_options)),
    );
}

/// Search request query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Manufacturer filter
    pub make: Option<String>,
    /// Model filter
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
    pub radius: Option<f64>,
    /// Sort key
    pub sort: Option<String>,
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Results per page
    pub page_size: Option<u32>,
}

impl SearchQuery {
    /// Validate query parameters
    fn validate(&self) -> Result<()> {
        if self.page == Some(0) {
            return Err(CarzoError::Validation(
                "Page must be greater than 0".to_string(),
            ));
        }
        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(CarzoError::Validation(
                    "price_min cannot exceed price_max".to_string(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.year_min, self.year_max) {
            if min > max {
                return Err(CarzoError::Validation(
                    "year_min cannot exceed year_max".to_string(),
                ));
            }
        }
        if let Some(radius) = self.radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(CarzoError::Validation(
                    "radius must be a non-negative number".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Convert to the filter set pushed down to storage
    fn to_filters(&self, pool: usize) -> SearchFilters {
        SearchFilters {
            make: self.make.clone(),
            model: self.model.clone(),
            price_min: self.price_min,
            price_max: self.price_max,
            year_min: self.year_min,
            year_max: self.year_max,
            mileage_max: self.mileage_max,
            max_distance_miles: self.radius,
            limit: pool,
        }
    }
}

/// Search response payload
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The page of vehicle listings
    pub vehicles: Vec<Vehicle>,
    /// Pagination metadata over the full result pool
    pub pagination: PaginationMeta,
    /// Whether dealer diversification was applied
    pub diversified: bool,
}

/// Vehicle search endpoint
/// GET /api/search
pub async fn search(
    req: HttpRequest,
    query: web::Query<SearchQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let identifier = identify(&req, &state.config.rate_limit.user_cookie);
    let policies = [state.presets.search.clone(), state.presets.burst.clone()];
    let decision = state.limiter.check_all(&identifier, &policies).await;

    if !decision.allowed {
        return Ok(too_many_requests(&decision));
    }

    query.validate()?;

    let search_config = &state.config.search;
    let page = query.page.unwrap_or(1);
    let page_size = search_config.clamp_page_size(query.page_size);
    let filters = query.to_filters(search_config.result_pool as usize);

    let mut vehicles = state.inventory.search(&filters).await?;
    let total = vehicles.len() as u64;

    if let Some(mode) = SortMode::parse(query.sort.as_deref()) {
        apply_sort(&mut vehicles, mode);
    }

    let sort_key = query.sort.as_deref();
    let diversified = search_config.diversify && should_apply_diversification(sort_key);
    if diversified {
        let pool = vehicles.len();
        vehicles = diversify_by_dealer(vehicles, pool);
    }

    let offset = ((page - 1) as usize).saturating_mul(page_size as usize);
    let page_items: Vec<Vehicle> = vehicles
        .into_iter()
        .skip(offset)
        .take(page_size as usize)
        .collect();

    debug!(
        identifier = %identifier,
        total = total,
        page = page,
        diversified = diversified,
        "Search completed"
    );

    let response = SearchResponse {
        vehicles: page_items,
        pagination: PaginationMeta::new(page, page_size, total),
        diversified,
    };

    let mut http = HttpResponse::Ok().json(ApiResponse::success(response));
    append_rate_headers(&mut http, &decision);
    Ok(http)
}

/// Filter options endpoint
/// GET /api/filter-options
pub async fn filter_options(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let identifier = identify(&req, &state.config.rate_limit.user_cookie);
    let policies = [
        state.presets.filter_options.clone(),
        state.presets.burst.clone(),
    ];
    let decision = state.limiter.check_all(&identifier, &policies).await;

    if !decision.allowed {
        return Ok(too_many_requests(&decision));
    }

    let options: FilterOptions = state.inventory.filter_options().await?;

    let mut http = HttpResponse::Ok().json(ApiResponse::success(options));
    append_rate_headers(&mut http, &decision);
    Ok(http)
}

/// Build a 429 response naming the failed policy, with rate headers
fn too_many_requests(decision: &RateLimitResult) -> HttpResponse {
    let failed = decision.failed_check.as_deref().unwrap_or("rate_limit");
    let mut http = HttpResponse::TooManyRequests().json(ApiResponse::<()>::error(format!(
        "Rate limit exceeded for {}",
        failed
    )));
    append_rate_headers(&mut http, decision);
    http
}

/// Attach the standard rate-limit headers to a response
fn append_rate_headers(response: &mut HttpResponse, decision: &RateLimitResult) {
    let headers = response.headers_mut();
    insert_header(headers, "x-ratelimit-limit", decision.limit.to_string());
    insert_header(headers, "x-ratelimit-remaining", decision.remaining.to_string());
    insert_header(headers, "x-ratelimit-reset", decision.reset_ms.to_string());
}

fn insert_header(
    headers: &mut actix_web::http::header::HeaderMap,
    name: &'static str,
    value: String,
) {
    if let Ok(value) = HeaderValue::from_str(&value) {
        headers.insert(HeaderName::from_static(name), value);
    }
}
