//! Score how well a candidate suits the self-person.
//!
//! The [`Scorer`] trait assigns a compatibility score to a candidate
//! [`PersonRecord`] relative to the person matches are ranked for.
//! [`WeightedScorer`] is the standard implementation: an additive blend of a
//! category term, a shared-interest term, a proximity term, and a match
//! history term.

use crate::{PersonRecord, ScoreError, TraitSet, WeightConfig, geodesic_distance_km};

/// Calculate a compatibility score for a candidate.
///
/// Higher scores indicate a better match. Scores are not normalised and may
/// be negative. Implementations must be thread-safe (`Send` + `Sync`) and
/// deterministic: identical inputs yield identical scores.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use informatch_core::{PersonRecord, ScoreError, Scorer, TraitSet};
///
/// struct SameCategory;
///
/// impl Scorer for SameCategory {
///     fn score(
///         &self,
///         person: &PersonRecord,
///         candidate: &PersonRecord,
///         _traits: &TraitSet,
///     ) -> Result<f64, ScoreError> {
///         Ok(if person.category == candidate.category { 1.0 } else { 0.0 })
///     }
/// }
///
/// let ada = PersonRecord::new("U01", Coord { x: 0.0, y: 0.0 }).with_categories("Art", "Film");
/// let bo = PersonRecord::new("U02", Coord { x: 0.0, y: 0.0 }).with_categories("Art", "Dance");
/// assert_eq!(SameCategory.score(&ada, &bo, &TraitSet::new()), Ok(1.0));
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score of `candidate` from the point of view of `person`.
    ///
    /// # Errors
    /// Returns [`ScoreError::MissingTraits`] when the scorer needs traits that
    /// `traits` does not hold.
    fn score(
        &self,
        person: &PersonRecord,
        candidate: &PersonRecord,
        traits: &TraitSet,
    ) -> Result<f64, ScoreError>;
}

/// Per-term contributions to a weighted score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Category bonus, including the conditional specific-category bonus.
    pub category: f64,
    /// Shared trait count multiplied by the interest weight.
    pub shared_interests: f64,
    /// Proximity reward, `max(0, distance_weight / (1 + km))`.
    pub proximity: f64,
    /// Former-match adjustment.
    pub history: f64,
    /// Geodesic distance between the two people in kilometres.
    pub distance_km: f64,
}

impl ScoreBreakdown {
    /// Sum the four terms in scoring order.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "the score is an additive blend")]
    pub fn total(&self) -> f64 {
        self.category + self.shared_interests + self.proximity + self.history
    }
}

/// Additive scorer driven by a [`WeightConfig`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use informatch_core::{PersonRecord, Scorer, WeightConfig, WeightedScorer, extract_traits};
///
/// let people = vec![
///     PersonRecord::new("U01", Coord { x: 0.0, y: 0.0 }).with_categories("Sport", "Tennis"),
///     PersonRecord::new("U02", Coord { x: 0.0, y: 0.0 }).with_categories("Sport", "Tennis"),
/// ];
/// let traits = extract_traits(&people);
/// let scorer = WeightedScorer::new(WeightConfig {
///     multiple_interests: 0.0,
///     distance: 0.0,
///     ..WeightConfig::default()
/// });
/// let [ada, bo] = people.as_slice() else { unreachable!() };
/// assert_eq!(scorer.score(ada, bo, &traits), Ok(30.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightedScorer {
    weights: WeightConfig,
}

impl WeightedScorer {
    /// Build a scorer using `weights`.
    #[must_use]
    pub const fn new(weights: WeightConfig) -> Self {
        Self { weights }
    }

    /// Return the configured weights.
    #[must_use]
    pub const fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Compute each term of the score separately.
    ///
    /// # Errors
    /// Returns [`ScoreError::MissingTraits`] when either person is absent from
    /// `traits`.
    pub fn breakdown(
        &self,
        person: &PersonRecord,
        candidate: &PersonRecord,
        traits: &TraitSet,
    ) -> Result<ScoreBreakdown, ScoreError> {
        let overlap = traits.overlap(&person.id, &candidate.id)?;
        let distance_km = geodesic_distance_km(person.location, candidate.location);
        Ok(ScoreBreakdown {
            category: self.category_term(person, candidate),
            shared_interests: self.interest_term(overlap),
            proximity: self.proximity_term(distance_km),
            history: self.history_term(person, candidate),
            distance_km,
        })
    }

    // The specific-category bonus only applies on top of a category match.
    #[expect(clippy::float_arithmetic, reason = "bonuses accumulate additively")]
    fn category_term(&self, person: &PersonRecord, candidate: &PersonRecord) -> f64 {
        if person.category != candidate.category {
            return 0.0;
        }
        if person.specific_category == candidate.specific_category {
            self.weights.category + self.weights.specific_category
        } else {
            self.weights.category
        }
    }

    #[expect(clippy::float_arithmetic, reason = "weight scales with overlap count")]
    fn interest_term(&self, overlap: usize) -> f64 {
        let count = u32::try_from(overlap).unwrap_or(u32::MAX);
        self.weights.multiple_interests * f64::from(count)
    }

    #[expect(clippy::float_arithmetic, reason = "proximity decays with distance")]
    fn proximity_term(&self, distance_km: f64) -> f64 {
        (self.weights.distance / (1.0 + distance_km)).max(0.0)
    }

    fn history_term(&self, person: &PersonRecord, candidate: &PersonRecord) -> f64 {
        if person.has_matched_with(&candidate.id) {
            self.weights.former_match
        } else {
            0.0
        }
    }
}

impl Scorer for WeightedScorer {
    fn score(
        &self,
        person: &PersonRecord,
        candidate: &PersonRecord,
        traits: &TraitSet,
    ) -> Result<f64, ScoreError> {
        self.breakdown(person, candidate, traits)
            .map(|terms| terms.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    const TOLERANCE: f64 = 1e-9;

    fn person(id: &str, category: &str, specific: &str) -> PersonRecord {
        PersonRecord::new(id, Coord { x: 0.0, y: 0.0 }).with_categories(category, specific)
    }

    fn empty_traits(people: &[&PersonRecord]) -> TraitSet {
        people
            .iter()
            .map(|p| (p.id.clone(), std::collections::BTreeSet::new()))
            .collect()
    }

    #[fixture]
    fn category_only() -> WeightedScorer {
        WeightedScorer::new(WeightConfig {
            category: 10.0,
            specific_category: 20.0,
            multiple_interests: 0.0,
            distance: 0.0,
            former_match: -10.0,
        })
    }

    #[rstest]
    #[case(("Sport", "Tennis"), ("Sport", "Tennis"), 30.0)]
    #[case(("Sport", "Tennis"), ("Sport", "Golf"), 10.0)]
    #[case(("Sport", "Tennis"), ("Art", "Painting"), 0.0)]
    // Matching specific categories count for nothing across categories.
    #[case(("A", "Shared"), ("B", "Shared"), 0.0)]
    fn category_term_is_conditional(
        category_only: WeightedScorer,
        #[case] left: (&str, &str),
        #[case] right: (&str, &str),
        #[case] expected: f64,
    ) {
        let ada = person("U01", left.0, left.1);
        let bo = person("U02", right.0, right.1);
        let traits = empty_traits(&[&ada, &bo]);
        let score = category_only.score(&ada, &bo, &traits).expect("score");
        assert!((score - expected).abs() <= TOLERANCE);
    }

    #[rstest]
    fn shared_interests_scale_with_overlap() {
        let scorer = WeightedScorer::new(WeightConfig {
            category: 0.0,
            specific_category: 0.0,
            multiple_interests: 5.0,
            distance: 0.0,
            former_match: 0.0,
        });
        let ada = person("U01", "", "");
        let bo = person("U02", "", "");
        let traits = TraitSet::new()
            .with_traits("U01", ["Music", "Movies", "Gaming"])
            .with_traits("U02", ["Movies", "Gaming", "Swimming"]);
        assert_eq!(scorer.score(&ada, &bo, &traits), Ok(10.0));
    }

    #[rstest]
    fn missing_traits_fail_fast(category_only: WeightedScorer) {
        let ada = person("U01", "Sport", "Tennis");
        let bo = person("U02", "Sport", "Tennis");
        let traits = TraitSet::new().with_traits("U01", ["Sport"]);
        assert_eq!(
            category_only.score(&ada, &bo, &traits),
            Err(ScoreError::MissingTraits { id: "U02".into() })
        );
    }

    #[rstest]
    fn proximity_is_bounded_by_distance_weight() {
        let scorer = WeightedScorer::new(WeightConfig {
            category: 0.0,
            specific_category: 0.0,
            multiple_interests: 0.0,
            distance: 100.0,
            former_match: 0.0,
        });
        let ada = person("U01", "", "");
        let mut bo = person("U02", "", "");
        let traits = empty_traits(&[&ada, &bo]);
        let near = scorer.breakdown(&ada, &bo, &traits).expect("breakdown");
        assert!((near.proximity - 100.0).abs() <= TOLERANCE);

        bo.location = Coord { x: 1.0, y: 0.0 };
        let far = scorer.breakdown(&ada, &bo, &traits).expect("breakdown");
        assert!(far.proximity < near.proximity);
        assert!(far.proximity > 0.0);
        assert!((far.proximity - 100.0 / (1.0 + far.distance_km)).abs() <= TOLERANCE);
    }

    #[rstest]
    fn negative_distance_weight_never_penalises() {
        let scorer = WeightedScorer::new(WeightConfig {
            distance: -50.0,
            ..WeightConfig::default()
        });
        let ada = person("U01", "", "");
        let bo = person("U02", "", "");
        let traits = empty_traits(&[&ada, &bo]);
        let terms = scorer.breakdown(&ada, &bo, &traits).expect("breakdown");
        assert_eq!(terms.proximity, 0.0);
    }

    #[rstest]
    fn history_only_checks_the_self_person(category_only: WeightedScorer) {
        let ada = person("U01", "Sport", "Tennis").with_former_matches(["U02"]);
        let bo = person("U02", "Sport", "Tennis").with_former_matches(["U03"]);
        let traits = empty_traits(&[&ada, &bo]);
        assert_eq!(category_only.score(&ada, &bo, &traits), Ok(20.0));
        // Bo's history does not mention Ada, so no penalty applies.
        assert_eq!(category_only.score(&bo, &ada, &traits), Ok(30.0));
    }

    #[rstest]
    fn breakdown_total_matches_score() {
        let scorer = WeightedScorer::default();
        let ada = person("U01", "Sport", "Tennis").with_former_matches(["U02"]);
        let mut bo = person("U02", "Sport", "Golf");
        bo.location = Coord { x: 13.4, y: 52.5 };
        let traits = TraitSet::new()
            .with_traits("U01", ["Sport", "Tennis"])
            .with_traits("U02", ["Sport", "Golf"]);
        let terms = scorer.breakdown(&ada, &bo, &traits).expect("breakdown");
        assert_eq!(terms.category, 10.0);
        assert_eq!(terms.shared_interests, 5.0);
        assert_eq!(terms.history, -10.0);
        assert_eq!(scorer.score(&ada, &bo, &traits), Ok(terms.total()));
    }
}
