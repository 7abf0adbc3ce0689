// Integration test utilities and common code
// Shared by tests that need article files on disk

use std::path::{Path, PathBuf};
use std::fs;
use tempfile::TempDir;

/// Test fixture helper for creating temporary directories with article files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create an article text file with given content
    pub fn create_article_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }
}

/// Two-passage article with definitions in both passages
pub const ARTICLE_TEXT: &str = "Breast Cancer (BC) is the most common cancer in women.
Endocrine therapy (ET) remains the backbone of treatment.

Resistance is common. Trials of the selective estrogen receptor degrader (SERD)
fulvestrant continue.
";

/// Expected (short form, long form) pairs for ARTICLE_TEXT, sorted
pub const ARTICLE_EXPECTED: &[(&str, &str)] = &[
    ("BC", "Breast Cancer"),
    ("ET", "Endocrine therapy"),
    ("SERD", "selective estrogen receptor degrader"),
];
