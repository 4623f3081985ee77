//! University records served by the directory.
//!
//! A [`University`] is an immutable value object. Construction goes through
//! [`University::try_new`], which checks the record invariants once so every
//! later consumer can rely on them.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

/// Highest IELTS band score.
pub const IELTS_BAND_MAX: f64 = 9.0;

/// Stable identifier of a university within the collection.
///
/// # Examples
/// ```
/// use university_directory::domain::UniversityId;
///
/// let id = UniversityId::new(4);
/// assert_eq!(id.get(), 4);
/// assert_eq!(id.to_string(), "4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = u32, example = 4)]
pub struct UniversityId(u32);

impl UniversityId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UniversityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UniversityId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Validation failures raised while constructing a [`University`].
#[derive(Debug, Clone, PartialEq)]
pub enum UniversityValidationError {
    /// The name was empty or whitespace.
    EmptyName,
    /// The country was empty or whitespace.
    EmptyCountry,
    /// The city was empty or whitespace.
    EmptyCity,
    /// Ranking positions start at 1.
    RankingBelowOne,
    /// IELTS requirement outside the 0.0 to 9.0 band range, or not finite.
    IeltsOutOfRange(f64),
}

impl fmt::Display for UniversityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "university name must not be empty"),
            Self::EmptyCountry => write!(f, "university country must not be empty"),
            Self::EmptyCity => write!(f, "university city must not be empty"),
            Self::RankingBelowOne => write!(f, "university ranking must be at least 1"),
            Self::IeltsOutOfRange(value) => write!(
                f,
                "IELTS requirement {value} must be between 0.0 and {IELTS_BAND_MAX}"
            ),
        }
    }
}

impl std::error::Error for UniversityValidationError {}

/// Unvalidated input for [`University::try_new`].
#[derive(Debug, Clone, PartialEq)]
pub struct UniversityDraft {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub city: String,
    pub tuition_fee: u32,
    pub ranking: u32,
    pub established_year: i32,
    pub scholarship_available: bool,
    pub ielts_requirement: f64,
}

/// A university record.
///
/// ## Invariants
/// - `name`, `country` and `city` are non-empty after trimming.
/// - `ranking` is at least 1; 1 is the best position.
/// - `ielts_requirement` is finite and within 0.0 to 9.0.
///
/// Serialises with camelCase keys (`tuitionFee`, `establishedYear`,
/// `scholarshipAvailable`, `ieltsRequirement`).
///
/// # Examples
/// ```
/// use university_directory::domain::{University, UniversityDraft};
///
/// let record = University::try_new(UniversityDraft {
///     id: 4,
///     name: "Harvard University".into(),
///     country: "USA".into(),
///     city: "Cambridge".into(),
///     tuition_fee: 54_000,
///     ranking: 1,
///     established_year: 1636,
///     scholarship_available: true,
///     ielts_requirement: 7.0,
/// })
/// .expect("valid record");
/// assert_eq!(record.ranking(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct University {
    id: UniversityId,
    #[schema(example = "Harvard University")]
    name: String,
    #[schema(example = "USA")]
    country: String,
    #[schema(example = "Cambridge")]
    city: String,
    #[schema(example = 54000)]
    tuition_fee: u32,
    #[schema(example = 1, minimum = 1)]
    ranking: u32,
    #[schema(example = 1636)]
    established_year: i32,
    scholarship_available: bool,
    #[schema(example = 7.0, minimum = 0.0, maximum = 9.0)]
    ielts_requirement: f64,
}

fn require_text(value: &str, error: UniversityValidationError) -> Result<(), UniversityValidationError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}

impl University {
    /// Validate `draft` and build a record.
    ///
    /// Checks run in field order and the first failure is reported.
    pub fn try_new(draft: UniversityDraft) -> Result<Self, UniversityValidationError> {
        require_text(&draft.name, UniversityValidationError::EmptyName)?;
        require_text(&draft.country, UniversityValidationError::EmptyCountry)?;
        require_text(&draft.city, UniversityValidationError::EmptyCity)?;
        if draft.ranking == 0 {
            return Err(UniversityValidationError::RankingBelowOne);
        }
        let ielts = draft.ielts_requirement;
        if !ielts.is_finite() || !(0.0..=IELTS_BAND_MAX).contains(&ielts) {
            return Err(UniversityValidationError::IeltsOutOfRange(ielts));
        }

        Ok(Self {
            id: UniversityId::new(draft.id),
            name: draft.name,
            country: draft.country,
            city: draft.city,
            tuition_fee: draft.tuition_fee,
            ranking: draft.ranking,
            established_year: draft.established_year,
            scholarship_available: draft.scholarship_available,
            ielts_requirement: ielts,
        })
    }

    pub fn id(&self) -> UniversityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Annual tuition in whole currency units; 0 means tuition-free.
    pub fn tuition_fee(&self) -> u32 {
        self.tuition_fee
    }

    pub fn ranking(&self) -> u32 {
        self.ranking
    }

    pub fn established_year(&self) -> i32 {
        self.established_year
    }

    pub fn scholarship_available(&self) -> bool {
        self.scholarship_available
    }

    pub fn ielts_requirement(&self) -> f64 {
        self.ielts_requirement
    }
}

impl TryFrom<UniversityDraft> for University {
    type Error = UniversityValidationError;

    fn try_from(draft: UniversityDraft) -> Result<Self, Self::Error> {
        Self::try_new(draft)
    }
}

#[cfg(test)]
mod tests {
    //! Validation coverage for university records.

    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn draft() -> UniversityDraft {
        UniversityDraft {
            id: 7,
            name: "ETH Zurich".into(),
            country: "Switzerland".into(),
            city: "Zurich".into(),
            tuition_fee: 1_500,
            ranking: 7,
            established_year: 1855,
            scholarship_available: true,
            ielts_requirement: 7.0,
        }
    }

    #[rstest]
    fn accepts_valid_draft(draft: UniversityDraft) {
        let record = University::try_new(draft).expect("valid draft");
        assert_eq!(record.id(), UniversityId::new(7));
        assert_eq!(record.city(), "Zurich");
        assert_eq!(record.tuition_fee(), 1_500);
    }

    #[rstest]
    #[case::blank_name(|d: &mut UniversityDraft| d.name = "  ".into(), UniversityValidationError::EmptyName)]
    #[case::blank_country(|d: &mut UniversityDraft| d.country = String::new(), UniversityValidationError::EmptyCountry)]
    #[case::blank_city(|d: &mut UniversityDraft| d.city = "\t".into(), UniversityValidationError::EmptyCity)]
    #[case::zero_ranking(|d: &mut UniversityDraft| d.ranking = 0, UniversityValidationError::RankingBelowOne)]
    #[case::ielts_too_high(|d: &mut UniversityDraft| d.ielts_requirement = 9.5, UniversityValidationError::IeltsOutOfRange(9.5))]
    #[case::ielts_negative(|d: &mut UniversityDraft| d.ielts_requirement = -1.0, UniversityValidationError::IeltsOutOfRange(-1.0))]
    fn rejects_invalid_drafts(
        mut draft: UniversityDraft,
        #[case] mutate: fn(&mut UniversityDraft),
        #[case] expected: UniversityValidationError,
    ) {
        mutate(&mut draft);
        assert_eq!(University::try_new(draft), Err(expected));
    }

    #[rstest]
    fn rejects_nan_ielts(mut draft: UniversityDraft) {
        draft.ielts_requirement = f64::NAN;
        assert!(matches!(
            University::try_new(draft),
            Err(UniversityValidationError::IeltsOutOfRange(_))
        ));
    }

    #[rstest]
    fn zero_tuition_is_allowed(mut draft: UniversityDraft) {
        draft.tuition_fee = 0;
        assert!(University::try_new(draft).is_ok());
    }

    #[rstest]
    fn serialises_camel_case(draft: UniversityDraft) {
        let record = University::try_new(draft).expect("valid draft");
        let value = serde_json::to_value(record).expect("serialise");
        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "ETH Zurich",
                "country": "Switzerland",
                "city": "Zurich",
                "tuitionFee": 1500,
                "ranking": 7,
                "establishedYear": 1855,
                "scholarshipAvailable": true,
                "ieltsRequirement": 7.0
            })
        );
    }
}
