//! Tunable weights for the match score.

use thiserror::Error;

/// Named weights applied to each term of the match score.
///
/// Weights are immutable for the duration of a ranking pass. By default
/// category matches and shared interests add to the score, proximity adds up
/// to `distance`, and repeat matches subtract.
///
/// # Examples
/// ```
/// use informatch_core::WeightConfig;
///
/// let weights = WeightConfig {
///     distance: 0.0,
///     ..WeightConfig::default()
/// };
/// assert_eq!(weights.category, 10.0);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightConfig {
    /// Bonus when both people share a category.
    pub category: f64,
    /// Extra bonus when the specific category matches as well.
    pub specific_category: f64,
    /// Bonus per shared trait.
    pub multiple_interests: f64,
    /// Proximity bonus at zero distance; decays as `distance / (1 + km)`.
    pub distance: f64,
    /// Adjustment when the candidate is a former match, usually negative.
    pub former_match: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            category: 10.0,
            specific_category: 20.0,
            multiple_interests: 5.0,
            distance: 100.0,
            former_match: -10.0,
        }
    }
}

/// Errors returned by [`WeightConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightConfigError {
    /// A weight was NaN or infinite.
    #[error("weight `{field}` must be a finite number")]
    NonFinite {
        /// Name of the offending weight.
        field: &'static str,
    },
}

impl WeightConfig {
    /// Check every weight is finite and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightConfigError::NonFinite`] naming the first bad weight.
    pub fn validate(self) -> Result<Self, WeightConfigError> {
        match self.fields().into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, _)) => Err(WeightConfigError::NonFinite { field }),
            None => Ok(self),
        }
    }

    const fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("category", self.category),
            ("specific_category", self.specific_category),
            ("multiple_interests", self.multiple_interests),
            ("distance", self.distance),
            ("former_match", self.former_match),
        ]
    }
}
