//! Load a population from a headered CSV dataset.
//!
//! Header spellings vary between datasets, so each column accepts a few
//! aliases. Locations are parsed and range-checked once here; the core only
//! ever sees typed coordinates.

use std::collections::HashSet;
use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use informatch_core::{LocationError, PersonId, PersonRecord, parse_location};
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::fs::open_utf8_file;

const FORMER_MATCH_SEPARATOR: char = ';';

/// Errors returned while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be opened.
    #[error("failed to open dataset at {path}: {source}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Path that was opened.
        path: Utf8PathBuf,
    },
    /// The CSV could not be read or a row did not match the expected columns.
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),
    /// A row held a location that is not a valid `lat,lon` pair.
    #[error("row {row}: malformed location for person {id}: {source}")]
    MalformedLocation {
        /// One-based data row, not counting the header.
        row: usize,
        /// Identifier of the offending person.
        id: PersonId,
        /// Parse or range failure.
        #[source]
        source: LocationError,
    },
    /// A row reused an id already seen earlier in the dataset.
    #[error("row {row}: duplicate person id {id}")]
    DuplicateId {
        /// One-based data row, not counting the header.
        row: usize,
        /// Repeated identifier.
        id: PersonId,
    },
}

#[derive(Debug, Deserialize)]
struct PersonRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Gender", default)]
    gender: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(
        rename = "Spesific_category",
        alias = "Spesific category",
        alias = "Specific_category",
        alias = "Specific category"
    )]
    specific_category: String,
    #[serde(rename = "Descriptions", alias = "Description", default)]
    description: String,
    #[serde(rename = "Coordinate", alias = "Locations", alias = "Location")]
    location: String,
    #[serde(rename = "Former Matched", alias = "Former_Matched", default)]
    former_matches: String,
}

impl PersonRow {
    fn into_record(self, row: usize) -> Result<PersonRecord, LoadError> {
        let id = PersonId::new(self.id);
        let location =
            parse_location(&self.location).map_err(|source| LoadError::MalformedLocation {
                row,
                id: id.clone(),
                source,
            })?;
        let former_matches = split_former_matches(&id, &self.former_matches);
        Ok(PersonRecord::new(id, location)
            .with_name(self.name)
            .with_gender(self.gender)
            .with_categories(self.category, self.specific_category)
            .with_description(self.description)
            .with_former_matches(former_matches))
    }
}

fn split_former_matches(id: &PersonId, raw: &str) -> Vec<PersonId> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    let tokens: Vec<&str> = raw.split(FORMER_MATCH_SEPARATOR).map(str::trim).collect();
    let blanks = tokens.iter().filter(|token| token.is_empty()).count();
    if blanks > 0 {
        warn!("Ignoring {blanks} blank former-match entries for person {id}");
    }
    tokens
        .into_iter()
        .filter(|token| !token.is_empty())
        .map(PersonId::from)
        .collect()
}

/// Read people from CSV text.
///
/// Surrounding whitespace is trimmed from every field. Former matches are
/// `;`-separated ids; blank entries are dropped.
///
/// # Errors
/// Returns [`LoadError::Csv`] for unreadable CSV or missing required columns,
/// [`LoadError::MalformedLocation`] for a bad location, and
/// [`LoadError::DuplicateId`] when an id repeats.
///
/// # Examples
/// ```
/// use informatch_data::read_people;
///
/// let csv = "\
/// ID,Name,Gender,Category,Spesific category,Descriptions,Coordinate,Former Matched
/// U01,Ada,F,Sport,Tennis,Likes clay courts,\"52.52,13.40\",U02;U03
/// U02,Ben,M,Art,Painting,Oil on canvas,\"48.85,2.35\",
/// ";
/// let people = read_people(csv.as_bytes()).expect("valid dataset");
/// assert_eq!(people.len(), 2);
/// assert_eq!(people[0].former_matches.len(), 2);
/// assert_eq!(people[1].gender_label(), "Man");
/// ```
pub fn read_people<R: Read>(reader: R) -> Result<Vec<PersonRecord>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut seen = HashSet::new();
    let mut people = Vec::new();
    for (index, result) in csv_reader.deserialize::<PersonRow>().enumerate() {
        let row = index + 1;
        let record = result?.into_record(row)?;
        if !seen.insert(record.id.clone()) {
            return Err(LoadError::DuplicateId {
                row,
                id: record.id,
            });
        }
        people.push(record);
    }
    debug!("Loaded {} people from dataset", people.len());
    Ok(people)
}

/// Read people from the CSV file at `path`.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened, otherwise as
/// for [`read_people`].
pub fn load_people(path: &Utf8Path) -> Result<Vec<PersonRecord>, LoadError> {
    let file = open_utf8_file(path).map_err(|source| LoadError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    read_people(file)
}
