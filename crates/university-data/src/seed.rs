//! Raw university records as stored in the dataset.

use serde::{Deserialize, Serialize};

/// One university as it appears in the dataset JSON.
///
/// Field names are camelCase on the wire. The backend converts seeds into its
/// validated `University` value object.
///
/// # Example
///
/// ```
/// use university_data::UniversitySeed;
///
/// let json = r#"{
///     "id": 14,
///     "name": "ETH Zurich",
///     "country": "Switzerland",
///     "city": "Zurich",
///     "tuitionFee": 1500,
///     "ranking": 11,
///     "establishedYear": 1855,
///     "scholarshipAvailable": false,
///     "ieltsRequirement": 7.0
/// }"#;
///
/// let seed: UniversitySeed = serde_json::from_str(json).expect("valid seed");
/// assert_eq!(seed.city, "Zurich");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct UniversitySeed {
    /// Stable identifier, unique within the dataset.
    pub id: u32,
    /// Institution name.
    pub name: String,
    /// Country the institution is located in.
    pub country: String,
    /// City the institution is located in.
    pub city: String,
    /// Annual tuition in whole currency units; zero means free.
    pub tuition_fee: u32,
    /// Global ranking position; 1 is best.
    pub ranking: u32,
    /// Calendar year of establishment.
    pub established_year: i32,
    /// Whether scholarships are offered.
    pub scholarship_available: bool,
    /// Minimum IELTS band required for admission.
    pub ielts_requirement: f64,
}
