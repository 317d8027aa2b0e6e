//! Trait sets: the tokens used to measure shared interests.
//!
//! By default each person's traits are their category and specific category.
//! Callers holding a richer, externally curated interest list can supply it
//! per person; those lists take precedence over the derived pair.

use std::collections::{BTreeSet, HashMap};

use log::warn;

use crate::{PersonId, PersonRecord, ScoreError};

/// Trait tokens for every person in a population, keyed by id.
///
/// # Examples
/// ```
/// use informatch_core::{PersonId, TraitSet};
///
/// let traits = TraitSet::new()
///     .with_traits("U01", ["Music", "Movies"])
///     .with_traits("U02", ["Movies", "Gaming"]);
/// let overlap = traits
///     .overlap(&PersonId::from("U01"), &PersonId::from("U02"))
///     .expect("both ids present");
/// assert_eq!(overlap, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TraitSet {
    traits: HashMap<PersonId, BTreeSet<String>>,
}

impl TraitSet {
    /// Construct an empty trait map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the traits recorded for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &PersonId) -> Option<&BTreeSet<String>> {
        self.traits.get(id)
    }

    /// Report whether `id` has an entry.
    #[must_use]
    pub fn contains(&self, id: &PersonId) -> bool {
        self.traits.contains_key(id)
    }

    /// Insert or replace the traits for `id`.
    pub fn insert<I, T>(&mut self, id: impl Into<PersonId>, traits: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.traits
            .insert(id.into(), traits.into_iter().map(Into::into).collect());
    }

    /// Insert traits while returning `self` for chaining.
    #[must_use]
    pub fn with_traits<I, T>(mut self, id: impl Into<PersonId>, traits: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.insert(id, traits);
        self
    }

    /// Count the traits shared by two people.
    ///
    /// # Errors
    /// Returns [`ScoreError::MissingTraits`] naming the first id without an
    /// entry.
    pub fn overlap(&self, left: &PersonId, right: &PersonId) -> Result<usize, ScoreError> {
        let left_traits = self.require(left)?;
        let right_traits = self.require(right)?;
        Ok(left_traits.intersection(right_traits).count())
    }

    /// Number of people with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Report whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, &BTreeSet<String>)> {
        self.traits.iter()
    }

    fn require(&self, id: &PersonId) -> Result<&BTreeSet<String>, ScoreError> {
        self.traits
            .get(id)
            .ok_or_else(|| ScoreError::MissingTraits { id: id.clone() })
    }
}

impl FromIterator<(PersonId, BTreeSet<String>)> for TraitSet {
    fn from_iter<I: IntoIterator<Item = (PersonId, BTreeSet<String>)>>(iter: I) -> Self {
        Self {
            traits: iter.into_iter().collect(),
        }
    }
}

/// Derive `{category, specific_category}` traits for every record.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use informatch_core::{PersonRecord, extract_traits};
///
/// let people = vec![
///     PersonRecord::new("U01", Coord { x: 0.0, y: 0.0 }).with_categories("Sport", "Tennis"),
/// ];
/// let traits = extract_traits(&people);
/// let derived = traits.get(&"U01".into()).expect("traits for U01");
/// assert!(derived.contains("Sport") && derived.contains("Tennis"));
/// ```
#[must_use]
pub fn extract_traits(population: &[PersonRecord]) -> TraitSet {
    population
        .iter()
        .map(|person| (person.id.clone(), category_traits(person)))
        .collect()
}

/// Derive traits, preferring `external` interest lists where present.
///
/// Entries in `external` for ids outside the population are ignored.
#[must_use]
pub fn extract_traits_with(population: &[PersonRecord], external: &TraitSet) -> TraitSet {
    let traits: TraitSet = population
        .iter()
        .map(|person| {
            let set = external
                .get(&person.id)
                .cloned()
                .unwrap_or_else(|| category_traits(person));
            (person.id.clone(), set)
        })
        .collect();
    let ignored = external
        .iter()
        .filter(|&(id, _)| !traits.contains(id))
        .count();
    if ignored > 0 {
        warn!("Ignored {ignored} external interest entries for ids outside the population");
    }
    traits
}

fn category_traits(person: &PersonRecord) -> BTreeSet<String> {
    BTreeSet::from([person.category.clone(), person.specific_category.clone()])
}
