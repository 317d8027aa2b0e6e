//! Load external interest sets.
//!
//! The file is a JSON object mapping person ids to lists of traits:
//!
//! ```json
//! { "U01": ["Music", "Movies"], "U02": ["Movies", "Gaming"] }
//! ```

use std::io::{self, Read};

use camino::{Utf8Path, Utf8PathBuf};
use informatch_core::TraitSet;
use log::debug;
use thiserror::Error;

use crate::fs::open_utf8_file;

/// Errors returned while loading interest sets.
#[derive(Debug, Error)]
pub enum InterestsError {
    /// The interests file could not be opened.
    #[error("failed to open interests file at {path}: {source}")]
    Open {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
        /// Path that was opened.
        path: Utf8PathBuf,
    },
    /// The JSON was invalid or not an object of string lists.
    #[error("failed to parse interests: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read interest sets from JSON text.
///
/// Duplicate traits within one list collapse into a single entry.
///
/// # Errors
/// Returns [`InterestsError::Parse`] for malformed JSON.
///
/// # Examples
/// ```
/// use informatch_data::read_interests;
///
/// let traits = read_interests(r#"{"U01": ["Music", "Movies", "Music"]}"#.as_bytes())
///     .expect("valid interests");
/// assert_eq!(traits.get(&"U01".into()).map(|set| set.len()), Some(2));
/// ```
pub fn read_interests<R: Read>(reader: R) -> Result<TraitSet, InterestsError> {
    let traits: TraitSet = serde_json::from_reader(reader)?;
    debug!("Loaded interest sets for {} people", traits.len());
    Ok(traits)
}

/// Read interest sets from the JSON file at `path`.
///
/// # Errors
/// Returns [`InterestsError::Open`] when the file cannot be opened, otherwise
/// as for [`read_interests`].
pub fn load_interests(path: &Utf8Path) -> Result<TraitSet, InterestsError> {
    let file = open_utf8_file(path).map_err(|source| InterestsError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    read_interests(io::BufReader::new(file))
}
