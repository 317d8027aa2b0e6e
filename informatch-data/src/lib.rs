//! Data access for the Informatch engine.
//!
//! Responsibilities:
//! - Read people from headered CSV datasets into [`PersonRecord`] values.
//! - Read external interest sets from JSON into a [`TraitSet`].
//! - Open files through `cap-std` with UTF-8 paths.
//!
//! Boundaries:
//! - Do not encode scoring or ranking rules (live in `informatch-core`).
//!
//! Invariants:
//! - Every loaded population has unique ids and range-checked locations.
//!
//! [`PersonRecord`]: informatch_core::PersonRecord
//! [`TraitSet`]: informatch_core::TraitSet

#![forbid(unsafe_code)]

pub mod fs;
pub mod interests;
pub mod people;

pub use interests::{InterestsError, load_interests, read_interests};
pub use people::{LoadError, load_people, read_people};
