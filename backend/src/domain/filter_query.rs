//! Filter criteria accepted by the query engine.
//!
//! Every criterion is optional and the present ones combine with AND. A query
//! is built per request, handed to the engine once and then dropped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Numeric field a result set can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Annual tuition fee.
    Tuition,
    /// Ranking position.
    Ranking,
}

/// Sort direction; ascending unless stated otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest value first.
    #[default]
    Asc,
    /// Largest value first.
    Desc,
}

/// Error returned when a sort key or order token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken {
    kind: &'static str,
    value: String,
}

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownToken {}

impl FromStr for SortKey {
    type Err = UnknownToken;

    /// Parse `tuition` or `ranking`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("tuition") {
            Ok(Self::Tuition)
        } else if s.eq_ignore_ascii_case("ranking") {
            Ok(Self::Ranking)
        } else {
            Err(UnknownToken {
                kind: "sort key",
                value: s.to_owned(),
            })
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownToken;

    /// Parse `asc` or `desc`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(UnknownToken {
                kind: "sort order",
                value: s.to_owned(),
            })
        }
    }
}

/// Optional criteria narrowing and ordering the university collection.
///
/// Numeric bounds are `f64` so callers can pass fractional limits; the
/// engine compares them against the integer record fields without rounding.
///
/// # Examples
/// ```
/// use university_directory::domain::{FilterQuery, SortKey, SortOrder};
///
/// let query = FilterQuery::default()
///     .with_country("UK")
///     .with_max_tuition(30_000.0)
///     .with_sort(SortKey::Ranking, SortOrder::Asc);
/// assert_eq!(query.country.as_deref(), Some("UK"));
/// assert!(query.min_tuition.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    /// Case-insensitive substring of name, city or country.
    pub search: Option<String>,
    /// Exact country name, compared ignoring ASCII case.
    pub country: Option<String>,
    /// Inclusive lower bound on the tuition fee.
    pub min_tuition: Option<f64>,
    /// Inclusive upper bound on the tuition fee.
    pub max_tuition: Option<f64>,
    /// Inclusive lower bound on the ranking position.
    pub min_ranking: Option<f64>,
    /// Inclusive upper bound on the ranking position.
    pub max_ranking: Option<f64>,
    /// Inclusive lower bound on the founding year.
    pub established_after: Option<i32>,
    /// Required scholarship availability; `Some(false)` is a real criterion.
    pub scholarship_available: Option<bool>,
    /// Inclusive upper bound on the IELTS requirement.
    pub max_ielts: Option<f64>,
    /// Sort key; `None` keeps insertion order.
    pub sort_by: Option<SortKey>,
    /// Direction applied when `sort_by` is set.
    pub order: SortOrder,
}

impl FilterQuery {
    /// Set the search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Set the country criterion.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the minimum tuition fee.
    #[must_use]
    pub fn with_min_tuition(mut self, bound: f64) -> Self {
        self.min_tuition = Some(bound);
        self
    }

    /// Set the maximum tuition fee.
    #[must_use]
    pub fn with_max_tuition(mut self, bound: f64) -> Self {
        self.max_tuition = Some(bound);
        self
    }

    /// Set the best ranking position to include.
    #[must_use]
    pub fn with_min_ranking(mut self, bound: f64) -> Self {
        self.min_ranking = Some(bound);
        self
    }

    /// Set the worst ranking position to include.
    #[must_use]
    pub fn with_max_ranking(mut self, bound: f64) -> Self {
        self.max_ranking = Some(bound);
        self
    }

    /// Keep universities founded in `year` or later.
    #[must_use]
    pub fn with_established_after(mut self, year: i32) -> Self {
        self.established_after = Some(year);
        self
    }

    /// Require the given scholarship availability.
    #[must_use]
    pub fn with_scholarship_available(mut self, available: bool) -> Self {
        self.scholarship_available = Some(available);
        self
    }

    /// Set the maximum IELTS requirement.
    #[must_use]
    pub fn with_max_ielts(mut self, bound: f64) -> Self {
        self.max_ielts = Some(bound);
        self
    }

    /// Sort results by `key` in the given direction.
    #[must_use]
    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = Some(key);
        self.order = order;
        self
    }

    /// Search term after trimming, or `None` when blank or absent.
    pub fn search_term(&self) -> Option<&str> {
        non_blank(self.search.as_deref())
    }

    /// Country criterion, or `None` when blank or absent.
    ///
    /// Unlike the search term the value is not trimmed: `" UK"` matches no
    /// record.
    pub fn country_criterion(&self) -> Option<&str> {
        self.country
            .as_deref()
            .filter(|country| !country.trim().is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|term| !term.is_empty())
}
