//! Side-by-side comparison of two universities.

use serde::Serialize;
use utoipa::ToSchema;

use super::{University, UniversityId};

/// Two records with the verdicts shown in a comparison view.
///
/// `best_value` names the record that is both strictly cheaper and strictly
/// better ranked than the other. When neither dominates, it is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UniversityComparison {
    pub first: University,
    pub second: University,
    /// Record with the lower tuition; `None` on a tie.
    #[schema(value_type = Option<u32>)]
    pub cheaper: Option<UniversityId>,
    /// Record with the better (numerically lower) ranking; `None` on a tie.
    #[schema(value_type = Option<u32>)]
    pub higher_ranked: Option<UniversityId>,
    #[schema(value_type = Option<u32>)]
    pub best_value: Option<UniversityId>,
}

fn lower_of(first: &University, second: &University, key: fn(&University) -> u32) -> Option<UniversityId> {
    match key(first).cmp(&key(second)) {
        std::cmp::Ordering::Less => Some(first.id()),
        std::cmp::Ordering::Greater => Some(second.id()),
        std::cmp::Ordering::Equal => None,
    }
}

/// Compare two records.
///
/// # Examples
/// ```
/// use university_directory::domain::compare;
/// use university_directory::outbound::reference_catalogue;
/// use university_directory::domain::UniversityId;
///
/// let catalogue = reference_catalogue().expect("embedded dataset");
/// let harvard = catalogue.find_by_id(UniversityId::new(4)).expect("Harvard");
/// let oxford = catalogue.find_by_id(UniversityId::new(7)).expect("Oxford");
/// let comparison = compare(harvard.clone(), oxford.clone());
/// assert_eq!(comparison.higher_ranked, Some(harvard.id()));
/// assert_eq!(comparison.cheaper, Some(oxford.id()));
/// assert!(comparison.best_value.is_none());
/// ```
pub fn compare(first: University, second: University) -> UniversityComparison {
    let cheaper = lower_of(&first, &second, University::tuition_fee);
    let higher_ranked = lower_of(&first, &second, University::ranking);
    let best_value = cheaper.filter(|id| higher_ranked == Some(*id));
    UniversityComparison {
        first,
        second,
        cheaper,
        higher_ranked,
        best_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UniversityDraft;
    use rstest::rstest;

    fn record(id: u32, tuition_fee: u32, ranking: u32) -> University {
        University::try_new(UniversityDraft {
            id,
            name: format!("University {id}"),
            country: "UK".into(),
            city: "London".into(),
            tuition_fee,
            ranking,
            established_year: 1900,
            scholarship_available: true,
            ielts_requirement: 6.5,
        })
        .expect("valid test record")
    }

    #[rstest]
    #[case::first_dominates((1, 10_000, 5), (2, 20_000, 9), Some(1))]
    #[case::second_dominates((1, 20_000, 9), (2, 10_000, 5), Some(2))]
    #[case::cheaper_but_worse((1, 10_000, 9), (2, 20_000, 5), None)]
    #[case::equal_tuition((1, 10_000, 5), (2, 10_000, 9), None)]
    #[case::equal_ranking((1, 10_000, 5), (2, 20_000, 5), None)]
    fn best_value_requires_strict_dominance(
        #[case] first: (u32, u32, u32),
        #[case] second: (u32, u32, u32),
        #[case] expected: Option<u32>,
    ) {
        let comparison = compare(
            record(first.0, first.1, first.2),
            record(second.0, second.1, second.2),
        );
        assert_eq!(comparison.best_value, expected.map(UniversityId::new));
    }

    #[rstest]
    fn reports_individual_verdicts() {
        let comparison = compare(record(1, 10_000, 9), record(2, 20_000, 5));
        assert_eq!(comparison.cheaper, Some(UniversityId::new(1)));
        assert_eq!(comparison.higher_ranked, Some(UniversityId::new(2)));
    }
}
