//! Core domain types for the Informatch engine.
//!
//! The crate scores and ranks candidate matches for one person in a small
//! population. Data flows in one direction:
//!
//! 1. [`extract_traits`] derives a [`TraitSet`] from the population.
//! 2. [`rank`] scores every other person with a [`WeightedScorer`] and sorts
//!    them into a [`MatchResult`].
//! 3. A [`Cursor`] owned by the presentation layer walks the result one
//!    candidate at a time.
//!
//! Every operation is a pure function of an immutable population snapshot.
//!
//! # Examples
//! ```
//! use geo::Coord;
//! use informatch_core::{PersonRecord, WeightConfig, extract_traits, rank};
//!
//! let people = vec![
//!     PersonRecord::new("U1", Coord { x: 0.0, y: 0.0 }).with_categories("Sport", "Tennis"),
//!     PersonRecord::new("U2", Coord { x: 0.0, y: 0.0 }).with_categories("Sport", "Tennis"),
//! ];
//! let traits = extract_traits(&people);
//! let result = rank(&"U1".into(), &people, WeightConfig::default(), &traits)
//!     .expect("U1 is present");
//! let mut cursor = result.cursor();
//! assert_eq!(cursor.current(&result).map(|m| m.candidate.id.as_str()), Some("U2"));
//! cursor.advance();
//! assert!(cursor.current(&result).is_none());
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cursor;
pub mod error;
pub mod location;
pub mod nearest;
pub mod person;
pub mod ranker;
pub mod scorer;
pub mod traits;
pub mod weights;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

/// The `geo` crate, for building [`geo::Coord`] locations.
pub use geo;

pub use cursor::Cursor;
pub use error::{RankError, ScoreError};
pub use location::{LocationError, geodesic_distance_km, parse_location, validate_coordinates};
pub use nearest::{NearestMatch, find_nearest_with_interest};
pub use person::{PersonId, PersonRecord};
pub use ranker::{MatchResult, RankedCandidate, find_person, rank, rank_with};
pub use scorer::{ScoreBreakdown, Scorer, WeightedScorer};
pub use traits::{TraitSet, extract_traits, extract_traits_with};
pub use weights::{WeightConfig, WeightConfigError};
