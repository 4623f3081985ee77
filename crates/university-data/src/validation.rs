//! Field constraints applied to every dataset record.
//!
//! # Validation Rules
//!
//! - `name`, `country` and `city` must not be blank
//! - `ranking` must be at least 1
//! - `ieltsRequirement` must be finite and within [`IELTS_MIN`]..=[`IELTS_MAX`]

use crate::seed::UniversitySeed;

/// Lowest IELTS band accepted in the dataset.
pub const IELTS_MIN: f64 = 0.0;

/// Highest IELTS band accepted in the dataset.
pub const IELTS_MAX: f64 = 9.0;

/// Returns the first violated constraint for `seed`, if any.
pub(crate) fn record_issue(seed: &UniversitySeed) -> Option<&'static str> {
    if seed.name.trim().is_empty() {
        return Some("name must not be empty");
    }
    if seed.country.trim().is_empty() {
        return Some("country must not be empty");
    }
    if seed.city.trim().is_empty() {
        return Some("city must not be empty");
    }
    if seed.ranking == 0 {
        return Some("ranking must be at least 1");
    }
    if !is_valid_ielts(seed.ielts_requirement) {
        return Some("ieltsRequirement must be between 0.0 and 9.0");
    }
    None
}

fn is_valid_ielts(band: f64) -> bool {
    band.is_finite() && (IELTS_MIN..=IELTS_MAX).contains(&band)
}

#[cfg(test)]
mod tests {
    //! Covers per-record constraint checks.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn seed() -> UniversitySeed {
        UniversitySeed {
            id: 1,
            name: "University of Oxford".to_owned(),
            country: "UK".to_owned(),
            city: "Oxford".to_owned(),
            tuition_fee: 35_000,
            ranking: 5,
            established_year: 1096,
            scholarship_available: true,
            ielts_requirement: 7.0,
        }
    }

    #[rstest]
    fn accepts_well_formed_record(seed: UniversitySeed) {
        assert_eq!(record_issue(&seed), None);
    }

    #[rstest]
    fn accepts_free_tuition(mut seed: UniversitySeed) {
        seed.tuition_fee = 0;
        assert_eq!(record_issue(&seed), None);
    }

    #[rstest]
    #[case::blank_name("   ", "UK", "Oxford", "name must not be empty")]
    #[case::blank_country("Oxford", "", "Oxford", "country must not be empty")]
    #[case::blank_city("Oxford", "UK", "\t", "city must not be empty")]
    fn rejects_blank_text(
        mut seed: UniversitySeed,
        #[case] name: &str,
        #[case] country: &str,
        #[case] city: &str,
        #[case] expected: &str,
    ) {
        seed.name = name.to_owned();
        seed.country = country.to_owned();
        seed.city = city.to_owned();
        assert_eq!(record_issue(&seed), Some(expected));
    }

    #[rstest]
    fn rejects_zero_ranking(mut seed: UniversitySeed) {
        seed.ranking = 0;
        assert_eq!(record_issue(&seed), Some("ranking must be at least 1"));
    }

    #[rstest]
    #[case(-0.5)]
    #[case(9.5)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_out_of_range_ielts(mut seed: UniversitySeed, #[case] band: f64) {
        seed.ielts_requirement = band;
        assert_eq!(
            record_issue(&seed),
            Some("ieltsRequirement must be between 0.0 and 9.0")
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(9.0)]
    fn accepts_ielts_bounds(mut seed: UniversitySeed, #[case] band: f64) {
        seed.ielts_requirement = band;
        assert_eq!(record_issue(&seed), None);
    }
}
