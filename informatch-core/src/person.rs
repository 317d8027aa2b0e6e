//! People taking part in matching.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use geo::Coord;

/// Unique identifier of a person within a population.
///
/// # Examples
/// ```
/// use informatch_core::PersonId;
///
/// let id = PersonId::from("U01");
/// assert_eq!(id.as_str(), "U01");
/// assert_eq!(id.to_string(), "U01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PersonId(String);

impl PersonId {
    /// Wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One row of the dataset.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`, already
/// range-checked by whoever built the record. Records are treated as
/// immutable snapshots by the scorer and ranker.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use informatch_core::PersonRecord;
///
/// let person = PersonRecord::new("U01", Coord { x: 13.4, y: 52.5 })
///     .with_name("Ada")
///     .with_categories("Sport", "Tennis")
///     .with_former_matches(["U07"]);
///
/// assert_eq!(person.id.as_str(), "U01");
/// assert!(person.has_matched_with(&"U07".into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonRecord {
    /// Unique identifier.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Gender code as found in the dataset, typically `F` or `M`.
    pub gender: String,
    /// Broad interest category, e.g. `Sport`.
    pub category: String,
    /// Narrower category within `category`, e.g. `Tennis`.
    pub specific_category: String,
    /// Free-form self description.
    pub description: String,
    /// Home location.
    pub location: Coord<f64>,
    /// Identifiers of people this person has matched with before.
    pub former_matches: BTreeSet<PersonId>,
}

impl PersonRecord {
    /// Construct a record with empty display fields and no match history.
    pub fn new(id: impl Into<PersonId>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            gender: String::new(),
            category: String::new(),
            specific_category: String::new(),
            description: String::new(),
            location,
            former_matches: BTreeSet::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the gender code.
    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Set both the broad and the specific category.
    #[must_use]
    pub fn with_categories(
        mut self,
        category: impl Into<String>,
        specific_category: impl Into<String>,
    ) -> Self {
        self.category = category.into();
        self.specific_category = specific_category.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the match history.
    #[must_use]
    pub fn with_former_matches<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PersonId>,
    {
        self.former_matches = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Report whether `other` appears in this person's match history.
    #[must_use]
    pub fn has_matched_with(&self, other: &PersonId) -> bool {
        self.former_matches.contains(other)
    }

    /// Human readable gender: `F` reads as "Woman", anything else as "Man".
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use informatch_core::PersonRecord;
    ///
    /// let person = PersonRecord::new("U01", Coord { x: 0.0, y: 0.0 }).with_gender("F");
    /// assert_eq!(person.gender_label(), "Woman");
    /// ```
    #[must_use]
    pub fn gender_label(&self) -> &'static str {
        if self.gender.trim() == "F" {
            "Woman"
        } else {
            "Man"
        }
    }
}
