//! Filtering and sorting over the university collection.
//!
//! [`filter_universities`] is a pure function: it never mutates its input and
//! returns a fresh `Vec` on every call. Criteria run as independent AND
//! stages in a fixed order, then the survivors are optionally stable-sorted.

use std::cmp::Ordering;

use super::{FilterQuery, SortKey, SortOrder, University};

/// Apply `query` to `records`.
///
/// Unset criteria do not filter. Bounds that are NaN never compare true, so
/// they produce an empty result rather than an error. Without a sort key the
/// input order is preserved; with one, records with equal keys keep their
/// input order in both directions.
///
/// # Examples
/// ```
/// use university_directory::domain::{filter_universities, FilterQuery};
/// use university_directory::outbound::reference_catalogue;
///
/// let catalogue = reference_catalogue().expect("embedded dataset");
/// let query = FilterQuery::default().with_search("harvard");
/// let found = filter_universities(catalogue.all(), &query);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name(), "Harvard University");
/// ```
pub fn filter_universities(records: &[University], query: &FilterQuery) -> Vec<University> {
    let search = query.search_term().map(str::to_ascii_lowercase);
    let country = query.country_criterion();

    let mut matched: Vec<University> = records
        .iter()
        .filter(|u| search.as_deref().is_none_or(|term| matches_search(u, term)))
        .filter(|u| country.is_none_or(|c| u.country().eq_ignore_ascii_case(c)))
        .filter(|u| at_least(u.tuition_fee(), query.min_tuition))
        .filter(|u| at_most(u.tuition_fee(), query.max_tuition))
        .filter(|u| at_least(u.ranking(), query.min_ranking))
        .filter(|u| at_most(u.ranking(), query.max_ranking))
        .filter(|u| {
            query
                .established_after
                .is_none_or(|year| u.established_year() >= year)
        })
        .filter(|u| {
            query
                .scholarship_available
                .is_none_or(|wanted| u.scholarship_available() == wanted)
        })
        .filter(|u| {
            query
                .max_ielts
                .is_none_or(|bound| u.ielts_requirement() <= bound)
        })
        .cloned()
        .collect();

    if let Some(key) = query.sort_by {
        sort_stable(&mut matched, key, query.order);
    }
    matched
}

/// `term` must already be lowercased.
fn matches_search(university: &University, term: &str) -> bool {
    [university.name(), university.city(), university.country()]
        .iter()
        .any(|field| field.to_ascii_lowercase().contains(term))
}

fn at_least(value: u32, bound: Option<f64>) -> bool {
    bound.is_none_or(|min| f64::from(value) >= min)
}

fn at_most(value: u32, bound: Option<f64>) -> bool {
    bound.is_none_or(|max| f64::from(value) <= max)
}

fn sort_key(university: &University, key: SortKey) -> u32 {
    match key {
        SortKey::Tuition => university.tuition_fee(),
        SortKey::Ranking => university.ranking(),
    }
}

// `sort_by` is a stable merge sort. Reversing the comparator rather than the
// output keeps ties in input order for descending sorts too.
fn sort_stable(records: &mut [University], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering: Ordering = sort_key(a, key).cmp(&sort_key(b, key));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    //! Stage-by-stage coverage using a small synthetic collection.

    use super::*;
    use crate::domain::UniversityDraft;
    use rstest::{fixture, rstest};

    #[expect(clippy::too_many_arguments, reason = "test record builder")]
    fn record(
        id: u32,
        name: &str,
        country: &str,
        city: &str,
        tuition_fee: u32,
        ranking: u32,
        established_year: i32,
        scholarship_available: bool,
        ielts_requirement: f64,
    ) -> University {
        University::try_new(UniversityDraft {
            id,
            name: name.into(),
            country: country.into(),
            city: city.into(),
            tuition_fee,
            ranking,
            established_year,
            scholarship_available,
            ielts_requirement,
        })
        .expect("valid test record")
    }

    #[fixture]
    fn records() -> Vec<University> {
        vec![
            record(1, "Alpha Institute", "UK", "London", 30_000, 10, 1900, true, 6.5),
            record(2, "Beta College", "USA", "Boston", 50_000, 3, 1850, false, 7.0),
            record(3, "Gamma University", "Germany", "Berlin", 0, 40, 1950, true, 6.0),
            record(4, "Delta School", "uk", "Leeds", 30_000, 25, 2000, false, 5.5),
        ]
    }

    fn ids(result: &[University]) -> Vec<u32> {
        result.iter().map(|u| u.id().get()).collect()
    }

    #[rstest]
    fn empty_query_returns_everything_in_order(records: Vec<University>) {
        let result = filter_universities(&records, &FilterQuery::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case::name("beta", vec![2])]
    #[case::city("BERLIN", vec![3])]
    #[case::country("Uk", vec![1, 4])]
    #[case::padded("  school ", vec![4])]
    #[case::whitespace("   ", vec![1, 2, 3, 4])]
    #[case::no_match("zzz", vec![])]
    fn search_matches_name_city_or_country(
        records: Vec<University>,
        #[case] term: &str,
        #[case] expected: Vec<u32>,
    ) {
        let result = filter_universities(&records, &FilterQuery::default().with_search(term));
        assert_eq!(ids(&result), expected);
    }

    #[rstest]
    fn country_is_case_insensitive_equality(records: Vec<University>) {
        let result = filter_universities(&records, &FilterQuery::default().with_country("UK"));
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[rstest]
    fn country_does_not_match_substrings(records: Vec<University>) {
        let result = filter_universities(&records, &FilterQuery::default().with_country("U"));
        assert!(result.is_empty());
    }

    #[rstest]
    fn tuition_bounds_are_inclusive(records: Vec<University>) {
        let query = FilterQuery::default()
            .with_min_tuition(30_000.0)
            .with_max_tuition(50_000.0);
        assert_eq!(ids(&filter_universities(&records, &query)), vec![1, 2, 4]);
    }

    #[rstest]
    fn inverted_range_is_empty(records: Vec<University>) {
        let query = FilterQuery::default()
            .with_min_tuition(50_000.0)
            .with_max_tuition(30_000.0);
        assert!(filter_universities(&records, &query).is_empty());
    }

    #[rstest]
    fn fractional_bounds_are_not_rounded(records: Vec<University>) {
        let query = FilterQuery::default().with_max_ranking(9.5);
        assert_eq!(ids(&filter_universities(&records, &query)), vec![2]);
    }

    #[rstest]
    fn ranking_bounds_filter(records: Vec<University>) {
        let query = FilterQuery::default()
            .with_min_ranking(10.0)
            .with_max_ranking(25.0);
        assert_eq!(ids(&filter_universities(&records, &query)), vec![1, 4]);
    }

    #[rstest]
    fn established_after_is_inclusive(records: Vec<University>) {
        let query = FilterQuery::default().with_established_after(1950);
        assert_eq!(ids(&filter_universities(&records, &query)), vec![3, 4]);
    }

    #[rstest]
    #[case(true, vec![1, 3])]
    #[case(false, vec![2, 4])]
    fn scholarship_filter_applies_for_both_values(
        records: Vec<University>,
        #[case] wanted: bool,
        #[case] expected: Vec<u32>,
    ) {
        let query = FilterQuery::default().with_scholarship_available(wanted);
        assert_eq!(ids(&filter_universities(&records, &query)), expected);
    }

    #[rstest]
    fn max_ielts_is_inclusive(records: Vec<University>) {
        let query = FilterQuery::default().with_max_ielts(6.0);
        assert_eq!(ids(&filter_universities(&records, &query)), vec![3, 4]);
    }

    #[rstest]
    fn nan_bound_yields_empty_result(records: Vec<University>) {
        let query = FilterQuery::default().with_min_tuition(f64::NAN);
        assert!(filter_universities(&records, &query).is_empty());
    }

    #[rstest]
    fn criteria_combine_with_and(records: Vec<University>) {
        let query = FilterQuery::default()
            .with_country("uk")
            .with_scholarship_available(true);
        assert_eq!(ids(&filter_universities(&records, &query)), vec![1]);
    }

    #[rstest]
    #[case(SortKey::Ranking, SortOrder::Asc, vec![2, 1, 4, 3])]
    #[case(SortKey::Ranking, SortOrder::Desc, vec![3, 4, 1, 2])]
    #[case(SortKey::Tuition, SortOrder::Asc, vec![3, 1, 4, 2])]
    #[case(SortKey::Tuition, SortOrder::Desc, vec![2, 1, 4, 3])]
    fn sorting_is_stable_in_both_directions(
        records: Vec<University>,
        #[case] key: SortKey,
        #[case] order: SortOrder,
        #[case] expected: Vec<u32>,
    ) {
        let query = FilterQuery::default().with_sort(key, order);
        assert_eq!(ids(&filter_universities(&records, &query)), expected);
    }

    #[rstest]
    fn input_is_left_untouched(records: Vec<University>) {
        let before = records.clone();
        let query = FilterQuery::default().with_sort(SortKey::Tuition, SortOrder::Desc);
        let _ = filter_universities(&records, &query);
        assert_eq!(records, before);
    }
}
