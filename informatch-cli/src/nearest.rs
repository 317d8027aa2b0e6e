//! Nearest command implementation for the Informatch CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use informatch_core::{NearestMatch, PersonId, find_nearest_with_interest};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::{Population, require_existing};
use crate::{
    ARG_DATASET, ARG_INTEREST, ARG_INTERESTS, ARG_PERSON_ID, CliError, ENV_NEAREST_DATASET,
    ENV_NEAREST_INTEREST, ENV_NEAREST_PERSON_ID,
};

/// CLI arguments for the `nearest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "nearest",
    long_about = "Find the geographically closest other person whose traits \
                 include the given interest. Prints the match with its \
                 distance in kilometres, or null when nobody shares it.",
    about = "Find the closest person sharing an interest"
)]
#[ortho_config(prefix = "INFORMATCH")]
pub(crate) struct NearestArgs {
    /// Identifier of the person to search from.
    #[arg(value_name = "person-id")]
    #[serde(default)]
    pub(crate) person_id: Option<String>,
    /// Trait the match must hold, e.g. a category or an interest.
    #[arg(long = ARG_INTEREST, value_name = "trait")]
    #[serde(default)]
    pub(crate) interest: Option<String>,
    /// Path to the CSV dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Path to a JSON file of interest sets that override derived traits.
    #[arg(long = ARG_INTERESTS, value_name = "path")]
    #[serde(default)]
    pub(crate) interests: Option<Utf8PathBuf>,
}

impl NearestArgs {
    pub(crate) fn into_config(self) -> Result<NearestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearestConfig::try_from(merged)
    }
}

/// Resolved `nearest` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NearestConfig {
    pub(crate) person_id: PersonId,
    pub(crate) interest: String,
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) interests: Option<Utf8PathBuf>,
}

impl NearestConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)?;
        if let Some(interests) = &self.interests {
            require_existing(interests, ARG_INTERESTS)?;
        }
        Ok(())
    }
}

impl TryFrom<NearestArgs> for NearestConfig {
    type Error = CliError;

    fn try_from(args: NearestArgs) -> Result<Self, Self::Error> {
        let person_id = args.person_id.ok_or(CliError::MissingArgument {
            field: ARG_PERSON_ID,
            env: ENV_NEAREST_PERSON_ID,
        })?;
        let interest = args.interest.ok_or(CliError::MissingArgument {
            field: ARG_INTEREST,
            env: ENV_NEAREST_INTEREST,
        })?;
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_NEAREST_DATASET,
        })?;
        Ok(Self {
            person_id: PersonId::new(person_id),
            interest,
            dataset,
            interests: args.interests,
        })
    }
}

/// JSON output of the `nearest` command when a match exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct NearestReport {
    pub(crate) id: PersonId,
    pub(crate) name: String,
    pub(crate) gender: String,
    pub(crate) category: String,
    pub(crate) specific_category: String,
    pub(crate) distance_km: f64,
}

impl From<NearestMatch<'_>> for NearestReport {
    fn from(found: NearestMatch<'_>) -> Self {
        let candidate = found.candidate;
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            gender: candidate.gender_label().to_owned(),
            category: candidate.category.clone(),
            specific_category: candidate.specific_category.clone(),
            distance_km: found.distance_km,
        }
    }
}

pub(crate) fn run_nearest_with(args: NearestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_nearest(args)?;
    crate::write_json(writer, &report)
}

fn execute_nearest(args: NearestArgs) -> Result<Option<NearestReport>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let population = Population::load(&config.dataset, config.interests.as_deref())?;
    let nearest = find_nearest_with_interest(
        &config.person_id,
        &population.people,
        &config.interest,
        &population.traits,
    )?;
    Ok(nearest.map(NearestReport::from))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NearestConfig, CliError> {
    let merged = NearestArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NearestConfig::try_from(merged)
}
