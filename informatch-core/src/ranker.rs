//! Rank every candidate in a population for one self-person.

use std::cmp::Ordering;

use log::debug;

use crate::{
    Cursor, PersonId, PersonRecord, RankError, Scorer, TraitSet, WeightConfig, WeightedScorer,
};

/// A candidate paired with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate<'a> {
    /// The scored person, borrowed from the population snapshot.
    pub candidate: &'a PersonRecord,
    /// Score relative to the self-person.
    pub score: f64,
}

/// Candidates for one self-person, best first.
///
/// Entries are sorted by score descending; equal scores keep the order in
/// which the candidates appeared in the population. A result is produced
/// fresh by every call to [`rank`] and never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    person: &'a PersonRecord,
    entries: Vec<RankedCandidate<'a>>,
}

impl<'a> MatchResult<'a> {
    /// The self-person the candidates were ranked for.
    #[must_use]
    pub const fn person(&self) -> &'a PersonRecord {
        self.person
    }

    /// Return the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RankedCandidate<'a>> {
        self.entries.get(index)
    }

    /// All entries in rank order.
    #[must_use]
    pub fn entries(&self) -> &[RankedCandidate<'a>] {
        &self.entries
    }

    /// Iterate over entries in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, RankedCandidate<'a>> {
        self.entries.iter()
    }

    /// Number of ranked candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no candidates were ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A cursor positioned on the best candidate.
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        Cursor::new()
    }
}

impl<'r, 'a> IntoIterator for &'r MatchResult<'a> {
    type Item = &'r RankedCandidate<'a>;
    type IntoIter = std::slice::Iter<'r, RankedCandidate<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Rank every other person in `population` for `self_id`.
///
/// Uses a [`WeightedScorer`] built from `weights`.
///
/// # Errors
/// Returns [`RankError::NotFound`] when no record has `self_id`, and
/// [`RankError::Score`] when a candidate is missing from `traits`. No partial
/// result is returned.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use informatch_core::{PersonRecord, WeightConfig, extract_traits, rank};
///
/// let people = vec![
///     PersonRecord::new("U01", Coord { x: 0.0, y: 0.0 }).with_categories("Sport", "Tennis"),
///     PersonRecord::new("U02", Coord { x: 5.0, y: 5.0 }).with_categories("Art", "Film"),
///     PersonRecord::new("U03", Coord { x: 0.0, y: 0.1 }).with_categories("Sport", "Golf"),
/// ];
/// let traits = extract_traits(&people);
/// let result = rank(&"U01".into(), &people, WeightConfig::default(), &traits)
///     .expect("U01 is in the population");
///
/// let order: Vec<&str> = result.iter().map(|m| m.candidate.id.as_str()).collect();
/// assert_eq!(order, ["U03", "U02"]);
/// ```
pub fn rank<'a>(
    self_id: &PersonId,
    population: &'a [PersonRecord],
    weights: WeightConfig,
    traits: &TraitSet,
) -> Result<MatchResult<'a>, RankError> {
    rank_with(&WeightedScorer::new(weights), self_id, population, traits)
}

/// Rank every other person in `population` for `self_id` using `scorer`.
///
/// # Errors
/// As for [`rank`].
pub fn rank_with<'a, S>(
    scorer: &S,
    self_id: &PersonId,
    population: &'a [PersonRecord],
    traits: &TraitSet,
) -> Result<MatchResult<'a>, RankError>
where
    S: Scorer + ?Sized,
{
    let person = find_person(self_id, population)?;
    let mut entries = population
        .iter()
        .filter(|candidate| candidate.id != person.id)
        .map(|candidate| {
            scorer
                .score(person, candidate, traits)
                .map(|score| RankedCandidate { candidate, score })
        })
        .collect::<Result<Vec<_>, _>>()?;
    // `sort_by` is stable, so ties keep population order.
    entries.sort_by(|left, right| descending(left.score, right.score));
    debug!("Ranked {} candidates for person {}", entries.len(), person.id);
    Ok(MatchResult { person, entries })
}

/// Look up a person by id, returning the first record that carries it.
///
/// # Errors
/// Returns [`RankError::NotFound`] when no record matches.
pub fn find_person<'a>(
    id: &PersonId,
    population: &'a [PersonRecord],
) -> Result<&'a PersonRecord, RankError> {
    population
        .iter()
        .find(|person| &person.id == id)
        .ok_or_else(|| RankError::NotFound { id: id.clone() })
}

fn descending(left: f64, right: f64) -> Ordering {
    right.total_cmp(&left)
}
