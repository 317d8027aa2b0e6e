//! Population builders shared by unit, behaviour, and downstream tests.

use std::collections::BTreeSet;

use geo::Coord;

use crate::{PersonRecord, TraitSet, WeightConfig};

/// Build a person with categories, a `(latitude, longitude)` location, and
/// match history.
#[must_use]
pub fn person(
    id: &str,
    category: &str,
    specific_category: &str,
    (latitude, longitude): (f64, f64),
    former_matches: &[&str],
) -> PersonRecord {
    PersonRecord::new(
        id,
        Coord {
            x: longitude,
            y: latitude,
        },
    )
    .with_name(format!("Person {id}"))
    .with_categories(category, specific_category)
    .with_former_matches(former_matches.iter().copied())
}

/// Three people: two tennis players at the origin and a painter nearby who
/// previously matched the first tennis player.
#[must_use]
pub fn tennis_and_painting() -> Vec<PersonRecord> {
    vec![
        person("U1", "Sport", "Tennis", (0.0, 0.0), &[]),
        person("U2", "Sport", "Tennis", (0.0, 0.0), &[]),
        person("U3", "Art", "Painting", (1.0, 1.0), &["U1"]),
    ]
}

/// Weights that isolate the category and history terms.
#[must_use]
pub const fn category_and_history_weights() -> WeightConfig {
    WeightConfig {
        category: 10.0,
        specific_category: 20.0,
        multiple_interests: 0.0,
        distance: 0.0,
        former_match: -10.0,
    }
}

/// An empty trait set for every person in `people`.
#[must_use]
pub fn empty_traits(people: &[PersonRecord]) -> TraitSet {
    people
        .iter()
        .map(|p| (p.id.clone(), BTreeSet::new()))
        .collect()
}
