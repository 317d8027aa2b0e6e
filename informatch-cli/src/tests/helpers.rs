//! Test helpers for writing datasets into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const SAMPLE_DATASET: &str = "\
ID,Name,Gender,Category,Spesific category,Descriptions,Coordinate,Former Matched
U01,Alice,F,Music,Jazz,Plays saxophone on weekends,\"52.5200,13.4050\",U04
U02,Bruno,M,Music,Jazz,Collects vinyl records,\"52.5300,13.3800\",
U03,Chloe,F,Music,Classical,Violinist in a community orchestra,\"48.8566,2.3522\",
U04,Dmitri,M,Sport,Tennis,Looking for a doubles partner,\"52.5100,13.4000\",U01
U05,Elena,F,Art,Painting,Watercolour landscapes,\"41.9028,12.4964\",U02;U03
U06,Farid,M,Sport,Climbing,Bouldering three times a week,\"47.3769,8.5417\",
";

pub(super) const SAMPLE_INTERESTS: &str = r#"{
  "U01": ["Music", "Movies"],
  "U02": ["Movies", "Gaming"],
  "U03": ["Gaming", "Swimming"]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding the sample dataset and interests file.
pub(super) struct Workspace {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) dataset: Utf8PathBuf,
    pub(super) interests: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let dataset = root.join("people.csv");
        let interests = root.join("interests.json");
        write_utf8(&dataset, SAMPLE_DATASET.as_bytes());
        write_utf8(&interests, SAMPLE_INTERESTS.as_bytes());
        Self {
            _tmp: tmp,
            root,
            dataset,
            interests,
        }
    }
}
