//! Property-based tests for ranking and scoring.
//!
//! # Invariants tested
//!
//! - **Self-exclusion:** the self-person never appears in its own ranking.
//! - **Ordering:** scores are non-increasing along the result.
//! - **Determinism:** ranking the same inputs twice yields identical output.
//! - **Distance monotonicity:** moving a candidate further away never raises
//!   the proximity term.
//! - **Exhaustion:** a cursor advanced `len` times stays exhausted.

use geo::Coord;
use informatch_core::{
    PersonRecord, WeightConfig, WeightedScorer, extract_traits, geodesic_distance_km, rank,
    test_support,
};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["Sport", "Art", "Music"];
const SPECIFIC: [&str; 3] = ["Tennis", "Painting", "Jazz"];

fn person_strategy() -> impl Strategy<Value = (usize, usize, f64, f64, bool)> {
    (
        0..CATEGORIES.len(),
        0..SPECIFIC.len(),
        -80.0_f64..80.0,
        -170.0_f64..170.0,
        any::<bool>(),
    )
}

/// Strategy producing populations with unique ids `P0..Pn`.
fn population_strategy() -> impl Strategy<Value = Vec<PersonRecord>> {
    proptest::collection::vec(person_strategy(), 1..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (category, specific, lat, lon, matched_first))| {
                let former: &[&str] = if matched_first { &["P0"] } else { &[] };
                test_support::person(
                    &format!("P{idx}"),
                    CATEGORIES.get(category).copied().unwrap_or_default(),
                    SPECIFIC.get(specific).copied().unwrap_or_default(),
                    (lat, lon),
                    former,
                )
            })
            .collect()
    })
}

fn weights_strategy() -> impl Strategy<Value = WeightConfig> {
    (
        -50.0_f64..50.0,
        -50.0_f64..50.0,
        -10.0_f64..10.0,
        0.0_f64..200.0,
        -50.0_f64..50.0,
    )
        .prop_map(
            |(category, specific_category, multiple_interests, distance, former_match)| {
                WeightConfig {
                    category,
                    specific_category,
                    multiple_interests,
                    distance,
                    former_match,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ranking_excludes_self_and_is_sorted(
        people in population_strategy(),
        weights in weights_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let traits = extract_traits(&people);
        let me = pick.get(&people);
        let result = rank(&me.id, &people, weights, &traits).expect("rank");

        prop_assert_eq!(result.len(), people.len() - 1);
        prop_assert!(result.iter().all(|m| m.candidate.id != me.id));
        let sorted = result.entries().windows(2).all(|pair| match pair {
            [left, right] => left.score >= right.score,
            _ => false,
        });
        prop_assert!(sorted, "scores out of order");
    }

    #[test]
    fn ranking_is_deterministic(
        people in population_strategy(),
        weights in weights_strategy(),
    ) {
        let traits = extract_traits(&people);
        let first = rank(&"P0".into(), &people, weights, &traits).expect("rank");
        let second = rank(&"P0".into(), &people, weights, &traits).expect("rank");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn proximity_never_grows_with_distance(
        distance_weight in 0.0_f64..500.0,
        near_lat in 0.0_f64..40.0,
        extra in 0.0_f64..40.0,
    ) {
        let scorer = WeightedScorer::new(WeightConfig {
            distance: distance_weight,
            ..WeightConfig::default()
        });
        let me = PersonRecord::new("me", Coord { x: 0.0, y: 0.0 });
        let near = PersonRecord::new("near", Coord { x: 0.0, y: near_lat });
        let far = PersonRecord::new("far", Coord { x: 0.0, y: near_lat + extra });
        let people = [me, near, far];
        let traits = extract_traits(&people);
        let [me_ref, near_ref, far_ref] = &people;

        let near_terms = scorer.breakdown(me_ref, near_ref, &traits).expect("near");
        let far_terms = scorer.breakdown(me_ref, far_ref, &traits).expect("far");
        prop_assert!(
            geodesic_distance_km(me_ref.location, far_ref.location)
                >= geodesic_distance_km(me_ref.location, near_ref.location)
        );
        prop_assert!(far_terms.proximity <= near_terms.proximity);
        prop_assert!(near_terms.proximity <= distance_weight);
        prop_assert!(far_terms.proximity >= 0.0);
    }

    #[test]
    fn cursor_exhausts_after_len_advances(
        people in population_strategy(),
        extra_advances in 0_usize..4,
    ) {
        let traits = extract_traits(&people);
        let result = rank(&"P0".into(), &people, WeightConfig::default(), &traits).expect("rank");
        let mut cursor = result.cursor();
        for _ in 0..result.len() {
            prop_assert!(cursor.current(&result).is_some());
            cursor.advance();
        }
        for _ in 0..extra_advances {
            prop_assert!(cursor.current(&result).is_none());
            cursor.advance();
        }
        prop_assert!(cursor.is_exhausted(&result));
    }
}
