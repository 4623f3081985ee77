//! Lenient parsing of the university list query string.
//!
//! Browsers send every form field, filled or not, so an empty value means the
//! criterion is absent. Values that do not parse are dropped as well: the
//! request still succeeds and the drop is logged at `debug` with the field
//! name. A repeated key keeps its first value.

use std::str::FromStr;

use actix_web::web;
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::{FilterQuery, SortKey, SortOrder};

/// Raw query parameters accepted by `GET /api/v1/universities`.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UniversityListParams {
    /// Case-insensitive substring of name, city or country.
    pub search: Option<String>,
    /// Exact country name, ignoring case.
    pub country: Option<String>,
    #[param(value_type = Option<f64>)]
    pub min_tuition: Option<String>,
    #[param(value_type = Option<f64>)]
    pub max_tuition: Option<String>,
    #[param(value_type = Option<f64>)]
    pub min_ranking: Option<String>,
    #[param(value_type = Option<f64>)]
    pub max_ranking: Option<String>,
    /// Inclusive lower bound on the founding year.
    #[param(value_type = Option<i32>)]
    pub established_after: Option<String>,
    #[param(value_type = Option<bool>)]
    pub scholarship_available: Option<String>,
    #[param(value_type = Option<f64>)]
    pub max_ielts: Option<String>,
    /// `tuition` or `ranking`.
    #[param(value_type = Option<SortKey>)]
    pub sort_by: Option<String>,
    /// `asc` (default) or `desc`.
    #[param(value_type = Option<SortOrder>)]
    pub order: Option<String>,
}

fn present(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

fn parse_with<T>(
    field: &'static str,
    raw: Option<String>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let raw = present(raw)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        debug!(field, value = %raw, "ignoring malformed query parameter");
    }
    parsed
}

fn finite_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn boolean(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn token<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

impl UniversityListParams {
    /// Read parameters from a raw query string.
    ///
    /// Unknown keys are ignored and only the first value of a repeated key is
    /// kept. A query string that cannot be decoded yields no criteria.
    pub fn from_query_string(query: &str) -> Self {
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(web::Query::into_inner)
            .unwrap_or_else(|err| {
                debug!(error = %err, "ignoring undecodable query string");
                Vec::new()
            });
        Self::from_pairs(pairs)
    }

    /// Collect parameters from decoded key/value pairs, first value wins.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let Some(slot) = params.slot(&key) else {
                continue;
            };
            if slot.is_some() {
                debug!(field = %key, value = %value, "ignoring repeated query parameter");
            } else {
                *slot = Some(value);
            }
        }
        params
    }

    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        let slot = match key {
            "search" => &mut self.search,
            "country" => &mut self.country,
            "minTuition" => &mut self.min_tuition,
            "maxTuition" => &mut self.max_tuition,
            "minRanking" => &mut self.min_ranking,
            "maxRanking" => &mut self.max_ranking,
            "establishedAfter" => &mut self.established_after,
            "scholarshipAvailable" => &mut self.scholarship_available,
            "maxIelts" => &mut self.max_ielts,
            "sortBy" => &mut self.sort_by,
            "order" => &mut self.order,
            _ => return None,
        };
        Some(slot)
    }

    /// Convert the raw strings into a [`FilterQuery`].
    pub fn into_filter_query(self) -> FilterQuery {
        FilterQuery {
            search: present(self.search),
            country: present(self.country),
            min_tuition: parse_with("minTuition", self.min_tuition, finite_number),
            max_tuition: parse_with("maxTuition", self.max_tuition, finite_number),
            min_ranking: parse_with("minRanking", self.min_ranking, finite_number),
            max_ranking: parse_with("maxRanking", self.max_ranking, finite_number),
            established_after: parse_with("establishedAfter", self.established_after, token::<i32>),
            scholarship_available: parse_with(
                "scholarshipAvailable",
                self.scholarship_available,
                boolean,
            ),
            max_ielts: parse_with("maxIelts", self.max_ielts, finite_number),
            sort_by: parse_with("sortBy", self.sort_by, token::<SortKey>),
            order: parse_with("order", self.order, token::<SortOrder>).unwrap_or_default(),
        }
    }
}
