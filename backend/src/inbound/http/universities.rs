//! University directory read endpoints.
//!
//! ```text
//! GET /api/v1/universities
//! GET /api/v1/universities/compare?first=..&second=..
//! GET /api/v1/universities/{id}
//! GET /api/v1/countries
//! ```
//!
//! Successful responses share the `{ "success": true, ... }` envelope the
//! directory front-end expects.

use actix_web::{HttpRequest, get, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, University, UniversityComparison, UniversityId, compare};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query_params::UniversityListParams;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, duplicate_selection_error, parse_university_id, require_university_id,
};

const ID: FieldName = FieldName::new("id");
const FIRST: FieldName = FieldName::new("first");
const SECOND: FieldName = FieldName::new("second");

/// Envelope for the filtered university list.
#[derive(Debug, Serialize, ToSchema)]
pub struct UniversityListResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = 1)]
    pub count: usize,
    pub data: Vec<University>,
}

/// Envelope for the distinct country list.
#[derive(Debug, Serialize, ToSchema)]
pub struct CountryListResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(example = 12)]
    pub count: usize,
    #[schema(example = json!(["Australia", "Canada"]))]
    pub data: Vec<String>,
}

/// Envelope for a single university.
#[derive(Debug, Serialize, ToSchema)]
pub struct UniversityResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: University,
}

/// Envelope for a comparison of two universities.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComparisonResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: UniversityComparison,
}

/// Query parameters for the comparison endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompareParams {
    /// Identifier of the first university.
    #[param(value_type = u32)]
    pub first: Option<String>,
    /// Identifier of the second university.
    #[param(value_type = u32)]
    pub second: Option<String>,
}

fn lookup(state: &HttpState, id: UniversityId) -> ApiResult<University> {
    state
        .universities
        .find_by_id(id)
        .ok_or_else(|| Error::not_found(format!("university {id} does not exist")))
}

/// List universities matching the query-string criteria.
#[utoipa::path(
    get,
    path = "/api/v1/universities",
    description = "Filter and sort the university directory. Empty, malformed or repeated parameters never fail the request; a repeated key keeps its first value. Example request: GET /api/v1/universities?country=UK&sortBy=ranking",
    params(UniversityListParams),
    responses(
        (status = 200, description = "Matching universities", body = UniversityListResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["universities"],
    operation_id = "listUniversities"
)]
#[get("/universities")]
pub async fn list_universities(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> web::Json<UniversityListResponse> {
    let query = UniversityListParams::from_query_string(req.query_string()).into_filter_query();
    let data = state.universities.filter(&query);
    debug!(count = data.len(), ?query, "universities filtered");
    web::Json(UniversityListResponse {
        success: true,
        count: data.len(),
        data,
    })
}

/// Compare two universities side by side.
#[utoipa::path(
    get,
    path = "/api/v1/universities/compare",
    params(CompareParams),
    responses(
        (status = 200, description = "Comparison of the two universities", body = ComparisonResponse),
        (status = 400, description = "Missing, malformed or identical ids", body = Error),
        (status = 404, description = "Unknown university id", body = Error)
    ),
    tags = ["universities"],
    operation_id = "compareUniversities"
)]
#[get("/universities/compare")]
pub async fn compare_universities(
    state: web::Data<HttpState>,
    params: web::Query<CompareParams>,
) -> ApiResult<web::Json<ComparisonResponse>> {
    let CompareParams { first, second } = params.into_inner();
    let first = require_university_id(first.as_deref(), FIRST)?;
    let second = require_university_id(second.as_deref(), SECOND)?;
    if first == second {
        return Err(duplicate_selection_error(SECOND, second));
    }

    let comparison = compare(lookup(&state, first)?, lookup(&state, second)?);
    debug!(%first, %second, best_value = ?comparison.best_value, "universities compared");
    Ok(web::Json(ComparisonResponse {
        success: true,
        data: comparison,
    }))
}

/// Fetch a single university by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/universities/{id}",
    params(("id" = u32, Path, description = "University identifier")),
    responses(
        (status = 200, description = "The university", body = UniversityResponse),
        (status = 400, description = "Malformed id", body = Error),
        (status = 404, description = "Unknown university id", body = Error)
    ),
    tags = ["universities"],
    operation_id = "getUniversity"
)]
#[get("/universities/{id}")]
pub async fn get_university(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UniversityResponse>> {
    let id = parse_university_id(&path, ID)?;
    let data = lookup(&state, id)?;
    Ok(web::Json(UniversityResponse {
        success: true,
        data,
    }))
}

/// List the distinct countries present in the directory.
#[utoipa::path(
    get,
    path = "/api/v1/countries",
    responses(
        (status = 200, description = "Distinct countries in ascending order", body = CountryListResponse)
    ),
    tags = ["universities"],
    operation_id = "listCountries"
)]
#[get("/countries")]
pub async fn list_countries(state: web::Data<HttpState>) -> web::Json<CountryListResponse> {
    let data = state.universities.unique_countries();
    debug!(count = data.len(), "countries listed");
    web::Json(CountryListResponse {
        success: true,
        count: data.len(),
        data,
    })
}

/// Register the directory endpoints on a scope.
///
/// `compare` is registered before `{id}` so the literal segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_universities)
        .service(compare_universities)
        .service(get_university)
        .service(list_countries);
}
