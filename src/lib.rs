//! Facade crate for the Informatch matching engine.
//!
//! This crate re-exports the core scoring and ranking API and, with the
//! `loader` feature, the dataset and interest-file loaders.
//!
//! # Examples
//! ```
//! use informatch_engine::{Coord, PersonRecord, WeightConfig, extract_traits, rank};
//!
//! let people = vec![
//!     PersonRecord::new("U01", Coord { x: 13.40, y: 52.52 }).with_categories("Music", "Jazz"),
//!     PersonRecord::new("U02", Coord { x: 13.38, y: 52.53 }).with_categories("Music", "Jazz"),
//! ];
//! let traits = extract_traits(&people);
//! let result = rank(&"U01".into(), &people, WeightConfig::default(), &traits)
//!     .expect("U01 is present");
//! assert_eq!(result.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub use informatch_core::{
    Cursor, LocationError, MatchResult, NearestMatch, PersonId, PersonRecord, RankError,
    RankedCandidate, ScoreBreakdown, ScoreError, Scorer, TraitSet, WeightConfig,
    WeightConfigError, WeightedScorer, extract_traits, extract_traits_with,
    find_nearest_with_interest, find_person, geodesic_distance_km, parse_location, rank,
    rank_with, validate_coordinates,
};

/// Coordinate type used for person locations (`x = longitude`, `y = latitude`).
pub use informatch_core::geo::Coord;

#[cfg(feature = "loader")]
pub use informatch_data::{
    InterestsError, LoadError, load_interests, load_people, read_interests, read_people,
};
