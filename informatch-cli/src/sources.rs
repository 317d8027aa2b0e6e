//! Input validation and population loading shared by the subcommands.

use camino::Utf8Path;
use informatch_core::{PersonRecord, TraitSet, extract_traits, extract_traits_with};
use informatch_data::{fs::file_is_file, load_interests, load_people};
use log::debug;

use crate::CliError;

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) if path.exists() => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// People from a dataset together with the traits used to score them.
#[derive(Debug)]
pub(crate) struct Population {
    pub(crate) people: Vec<PersonRecord>,
    pub(crate) traits: TraitSet,
}

impl Population {
    /// Load the dataset and derive traits, preferring interest overrides when
    /// an interests file is given.
    pub(crate) fn load(dataset: &Utf8Path, interests: Option<&Utf8Path>) -> Result<Self, CliError> {
        let people = load_people(dataset)?;
        let traits = match interests {
            Some(path) => extract_traits_with(&people, &load_interests(path)?),
            None => extract_traits(&people),
        };
        debug!(
            "Loaded {} people and {} trait sets from {dataset}",
            people.len(),
            traits.len()
        );
        Ok(Self { people, traits })
    }
}
