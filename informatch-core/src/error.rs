//! Errors raised while scoring and ranking candidates.

use thiserror::Error;

use crate::PersonId;

/// Errors from [`crate::Scorer::score`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A person has no entry in the trait map.
    ///
    /// Trait extraction must run over the same population before scoring.
    #[error("no traits recorded for person {id}")]
    MissingTraits {
        /// Identifier absent from the trait map.
        id: PersonId,
    },
}

/// Errors from [`crate::rank`] and [`crate::find_nearest_with_interest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// No record in the population carries the requested id.
    #[error("no person with id {id} in the population")]
    NotFound {
        /// Requested self-person id.
        id: PersonId,
    },
    /// Scoring a candidate failed.
    #[error(transparent)]
    Score(#[from] ScoreError),
}
