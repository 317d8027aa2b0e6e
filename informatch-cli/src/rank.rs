//! Rank command implementation for the Informatch CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use informatch_core::{
    MatchResult, PersonId, PersonRecord, RankError, ScoreBreakdown, TraitSet, WeightConfig,
    WeightedScorer, rank_with,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::sources::{Population, require_existing};
use crate::{
    ARG_CATEGORY_WEIGHT, ARG_DATASET, ARG_DISTANCE_WEIGHT, ARG_FORMER_MATCH_WEIGHT, ARG_INTERESTS,
    ARG_LIMIT, ARG_MULTIPLE_INTERESTS_WEIGHT, ARG_PERSON_ID, ARG_SPECIFIC_CATEGORY_WEIGHT,
    CliError, ENV_RANK_DATASET, ENV_RANK_PERSON_ID,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "rank",
    long_about = "Rank every other person in a CSV dataset for one person and \
                 print the candidates best first. Weights default to the \
                 standard profile and can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Rank candidate matches for one person"
)]
#[ortho_config(prefix = "INFORMATCH")]
pub(crate) struct RankArgs {
    /// Identifier of the person to rank candidates for.
    #[arg(value_name = "person-id")]
    #[serde(default)]
    pub(crate) person_id: Option<String>,
    /// Path to the CSV dataset.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Path to a JSON file of interest sets that override derived traits.
    #[arg(long = ARG_INTERESTS, value_name = "path")]
    #[serde(default)]
    pub(crate) interests: Option<Utf8PathBuf>,
    /// Print at most this many candidates.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Reward for sharing a category.
    #[arg(long = ARG_CATEGORY_WEIGHT, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) category_weight: Option<f64>,
    /// Extra reward for also sharing the specific category.
    #[arg(
        long = ARG_SPECIFIC_CATEGORY_WEIGHT,
        value_name = "weight",
        allow_negative_numbers = true
    )]
    #[serde(default)]
    pub(crate) specific_category_weight: Option<f64>,
    /// Reward per shared interest.
    #[arg(
        long = ARG_MULTIPLE_INTERESTS_WEIGHT,
        value_name = "weight",
        allow_negative_numbers = true
    )]
    #[serde(default)]
    pub(crate) multiple_interests_weight: Option<f64>,
    /// Proximity reward scale.
    #[arg(long = ARG_DISTANCE_WEIGHT, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) distance_weight: Option<f64>,
    /// Adjustment for people matched before, usually negative.
    #[arg(long = ARG_FORMER_MATCH_WEIGHT, value_name = "weight", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) former_match_weight: Option<f64>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) person_id: PersonId,
    pub(crate) dataset: Utf8PathBuf,
    pub(crate) interests: Option<Utf8PathBuf>,
    pub(crate) limit: Option<usize>,
    pub(crate) weights: WeightConfig,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.dataset, ARG_DATASET)?;
        if let Some(interests) = &self.interests {
            require_existing(interests, ARG_INTERESTS)?;
        }
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let person_id = args.person_id.ok_or(CliError::MissingArgument {
            field: ARG_PERSON_ID,
            env: ENV_RANK_PERSON_ID,
        })?;
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_RANK_DATASET,
        })?;
        let defaults = WeightConfig::default();
        let weights = WeightConfig {
            category: args.category_weight.unwrap_or(defaults.category),
            specific_category: args
                .specific_category_weight
                .unwrap_or(defaults.specific_category),
            multiple_interests: args
                .multiple_interests_weight
                .unwrap_or(defaults.multiple_interests),
            distance: args.distance_weight.unwrap_or(defaults.distance),
            former_match: args.former_match_weight.unwrap_or(defaults.former_match),
        }
        .validate()?;
        Ok(Self {
            person_id: PersonId::new(person_id),
            dataset,
            interests: args.interests,
            limit: args.limit,
            weights,
        })
    }
}

/// JSON output of the `rank` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct RankReport {
    pub(crate) person: PersonId,
    pub(crate) weights: WeightConfig,
    pub(crate) candidates: Vec<CandidateReport>,
}

/// One ranked candidate as printed by the `rank` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CandidateReport {
    pub(crate) position: usize,
    pub(crate) id: PersonId,
    pub(crate) name: String,
    pub(crate) gender: String,
    pub(crate) category: String,
    pub(crate) specific_category: String,
    pub(crate) description: String,
    pub(crate) score: f64,
    pub(crate) breakdown: ScoreBreakdown,
}

impl RankReport {
    /// Walk `result` with a cursor, stopping after `limit` candidates.
    fn walk(
        result: &MatchResult<'_>,
        scorer: &WeightedScorer,
        traits: &TraitSet,
        limit: Option<usize>,
    ) -> Result<Self, CliError> {
        let person = result.person();
        let mut cursor = result.cursor();
        let mut candidates = Vec::new();
        while let Some(entry) = cursor.current(result) {
            if limit.is_some_and(|max| candidates.len() >= max) {
                break;
            }
            let breakdown = scorer
                .breakdown(person, entry.candidate, traits)
                .map_err(RankError::from)?;
            candidates.push(CandidateReport::new(
                cursor.index() + 1,
                entry.candidate,
                entry.score,
                breakdown,
            ));
            cursor.advance();
        }
        Ok(Self {
            person: person.id.clone(),
            weights: *scorer.weights(),
            candidates,
        })
    }
}

impl CandidateReport {
    fn new(
        position: usize,
        candidate: &PersonRecord,
        score: f64,
        breakdown: ScoreBreakdown,
    ) -> Self {
        Self {
            position,
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            gender: candidate.gender_label().to_owned(),
            category: candidate.category.clone(),
            specific_category: candidate.specific_category.clone(),
            description: candidate.description.clone(),
            score,
            breakdown,
        }
    }
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let report = execute_rank(args)?;
    crate::write_json(writer, &report)
}

fn execute_rank(args: RankArgs) -> Result<RankReport, CliError> {
    let config = resolve_rank_config(args)?;
    let population = Population::load(&config.dataset, config.interests.as_deref())?;
    let scorer = WeightedScorer::new(config.weights);
    let result = rank_with(
        &scorer,
        &config.person_id,
        &population.people,
        &population.traits,
    )?;
    RankReport::walk(&result, &scorer, &population.traits, config.limit)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
