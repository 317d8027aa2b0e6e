//! Ranking behaviour over small, hand-built populations.

use informatch_core::{
    Cursor, PersonRecord, RankError, Scorer, TraitSet, WeightConfig, WeightedScorer,
    extract_traits, extract_traits_with, rank,
};
use informatch_core::test_support::{
    category_and_history_weights, empty_traits, person, tennis_and_painting,
};
use rstest::{fixture, rstest};

const TOLERANCE: f64 = 1e-9;

#[fixture]
fn population() -> Vec<PersonRecord> {
    tennis_and_painting()
}

fn ids_and_scores<'a>(
    people: &'a [PersonRecord],
    self_id: &str,
    weights: WeightConfig,
    traits: &TraitSet,
) -> Vec<(&'a str, f64)> {
    rank(&self_id.into(), people, weights, traits)
        .expect("rank")
        .iter()
        .map(|m| (m.candidate.id.as_str(), m.score))
        .collect()
}

#[rstest]
fn tennis_players_rank_above_the_painter(population: Vec<PersonRecord>) {
    let traits = empty_traits(&population);
    let ranked = ids_and_scores(&population, "U1", category_and_history_weights(), &traits);
    assert_eq!(ranked, [("U2", 30.0), ("U3", 0.0)]);
}

#[rstest]
#[case("U1")]
#[case("U2")]
#[case("U3")]
fn the_self_person_is_never_ranked(population: Vec<PersonRecord>, #[case] self_id: &str) {
    let traits = extract_traits(&population);
    let result =
        rank(&self_id.into(), &population, WeightConfig::default(), &traits).expect("rank");
    assert_eq!(result.len(), population.len() - 1);
    assert!(result.iter().all(|m| m.candidate.id.as_str() != self_id));
}

#[rstest]
fn ranking_twice_gives_identical_output(population: Vec<PersonRecord>) {
    let traits = extract_traits(&population);
    let first = ids_and_scores(&population, "U3", WeightConfig::default(), &traits);
    let second = ids_and_scores(&population, "U3", WeightConfig::default(), &traits);
    assert_eq!(first, second);
}

#[rstest]
fn tied_scores_keep_population_order() {
    let people: Vec<PersonRecord> = ["A", "E", "B", "D", "C"]
        .into_iter()
        .map(|id| person(id, "Music", "Jazz", (10.0, 10.0), &[]))
        .collect();
    let traits = extract_traits(&people);
    let ranked = ids_and_scores(&people, "A", WeightConfig::default(), &traits);
    let order: Vec<&str> = ranked.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, ["E", "B", "D", "C"]);
    assert!(ranked.windows(2).all(|pair| match pair {
        [(_, left), (_, right)] => (left - right).abs() <= TOLERANCE,
        _ => false,
    }));
}

#[rstest]
fn external_interests_drive_the_overlap_term() {
    let people = vec![
        person("U01", "Sport", "Tennis", (0.0, 0.0), &[]),
        person("U02", "Art", "Film", (0.0, 0.0), &[]),
        person("U03", "Art", "Dance", (0.0, 0.0), &[]),
    ];
    let external = TraitSet::new()
        .with_traits("U01", ["Music", "Movies"])
        .with_traits("U02", ["Movies", "Gaming"])
        .with_traits("U03", ["Gaming", "Swimming"]);
    let traits = extract_traits_with(&people, &external);
    let weights = WeightConfig {
        category: 0.0,
        specific_category: 0.0,
        multiple_interests: 5.0,
        distance: 0.0,
        former_match: 0.0,
    };
    let ranked = ids_and_scores(&people, "U01", weights, &traits);
    assert_eq!(ranked, [("U02", 5.0), ("U03", 0.0)]);
}

#[rstest]
fn closer_candidates_score_higher_on_distance_alone() {
    let people = vec![
        person("me", "", "", (48.85, 2.35), &[]),
        person("far", "", "", (-33.86, 151.21), &[]),
        person("mid", "", "", (40.71, -74.0), &[]),
        person("near", "", "", (51.50, -0.12), &[]),
    ];
    let traits = empty_traits(&people);
    let weights = WeightConfig {
        category: 0.0,
        specific_category: 0.0,
        multiple_interests: 0.0,
        distance: 100.0,
        former_match: 0.0,
    };
    let ranked = ids_and_scores(&people, "me", weights, &traits);
    let order: Vec<&str> = ranked.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, ["near", "mid", "far"]);
    assert!(ranked.iter().all(|(_, score)| *score > 0.0 && *score <= 100.0));
}

#[rstest]
fn unknown_self_person_aborts_ranking(population: Vec<PersonRecord>) {
    let traits = extract_traits(&population);
    let err = rank(&"U404".into(), &population, WeightConfig::default(), &traits)
        .expect_err("U404 is absent");
    assert!(matches!(err, RankError::NotFound { .. }));
    assert_eq!(err.to_string(), "no person with id U404 in the population");
}

#[rstest]
fn rank_scores_agree_with_the_weighted_scorer(population: Vec<PersonRecord>) {
    let traits = extract_traits(&population);
    let weights = WeightConfig::default();
    let scorer = WeightedScorer::new(weights);
    let result = rank(&"U1".into(), &population, weights, &traits).expect("rank");
    for entry in &result {
        let direct = scorer
            .score(result.person(), entry.candidate, &traits)
            .expect("score");
        assert!((direct - entry.score).abs() <= TOLERANCE);
    }
}

#[rstest]
fn reranking_for_a_new_person_resets_the_cursor(population: Vec<PersonRecord>) {
    let traits = extract_traits(&population);
    let first = rank(&"U1".into(), &population, WeightConfig::default(), &traits).expect("rank");
    let mut cursor = first.cursor();
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_exhausted(&first));

    let second = rank(&"U3".into(), &population, WeightConfig::default(), &traits).expect("rank");
    cursor.reset();
    assert_eq!(cursor, Cursor::new());
    assert_eq!(
        cursor.current(&second).map(|m| m.candidate.id.as_str()),
        second.get(0).map(|m| m.candidate.id.as_str())
    );
}
