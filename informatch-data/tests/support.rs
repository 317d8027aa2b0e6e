//! Fixture locations shared by the dataset integration tests.

use camino::Utf8PathBuf;

/// Directory containing the sample dataset and interests file.
pub fn fixtures_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path to the sample six-person dataset.
pub fn sample_dataset() -> Utf8PathBuf {
    fixtures_dir().join("people.csv")
}

/// Path to the sample interest overrides.
pub fn sample_interests() -> Utf8PathBuf {
    fixtures_dir().join("interests.json")
}
