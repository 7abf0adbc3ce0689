use anyhow::Result;
use glob::Pattern;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Default file name pattern for plain-text articles
pub const DEFAULT_PATTERN: &str = "*.txt";

/// Configuration for input file discovery
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Glob matched against file names found inside directories
    pub pattern: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

/// Result of file discovery validation
#[derive(Debug, Clone)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Expand input paths into article files
///
/// Explicit file paths are always taken; directories are walked recursively and
/// filtered by `config.pattern`. Files found in one directory come back sorted.
pub async fn collect_input_files<P: AsRef<Path>>(
    inputs: &[P],
    config: &DiscoveryConfig,
) -> Result<Vec<FileValidation>> {
    let pattern = Pattern::new(&config.pattern)
        .map_err(|e| anyhow::anyhow!("Invalid file pattern {:?}: {}", config.pattern, e))?;

    let mut files = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        match fs::metadata(input).await {
            Ok(metadata) if metadata.is_dir() => {
                info!("Walking directory: {}", input.display());
                for path in walk_directory(input.to_path_buf(), pattern.clone(), config.fail_fast).await? {
                    files.push(validate_file(path, config).await?);
                }
            }
            Ok(_) => files.push(validate_file(input.to_path_buf(), config).await?),
            Err(e) => {
                let error = format!("Cannot access input {}: {}", input.display(), e);
                warn!("{}", error);
                if config.fail_fast {
                    return Err(anyhow::anyhow!(error));
                }
                files.push(FileValidation {
                    path: input.to_path_buf(),
                    error: Some(error),
                });
            }
        }
    }

    let valid_count = files.iter().filter(|f| f.error.is_none()).count();
    let invalid_count = files.len() - valid_count;
    if invalid_count > 0 {
        warn!("Found {} inputs with validation issues", invalid_count);
    }
    info!("Input discovery summary: {} valid, {} invalid", valid_count, invalid_count);

    Ok(files)
}

/// Recursive directory walk on the blocking pool
async fn walk_directory(root: PathBuf, pattern: Pattern, fail_fast: bool) -> Result<Vec<PathBuf>> {
    tokio::task::spawn_blocking(move || {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&root).follow_links(false).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    let matches = entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| pattern.matches(name));
                    if entry.file_type().is_file() && matches {
                        debug!("Found matching file: {}", entry.path().display());
                        paths.push(entry.into_path());
                    }
                }
                Err(e) => {
                    let error_msg = format!("Directory walk error under {}: {}", root.display(), e);
                    warn!("{}", error_msg);
                    if fail_fast {
                        return Err(anyhow::anyhow!(error_msg));
                    }
                }
            }
        }
        Ok(paths)
    })
    .await?
}

async fn validate_file(path: PathBuf, config: &DiscoveryConfig) -> Result<FileValidation> {
    debug!("Validating file: {}", path.display());

    match fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => Ok(FileValidation { path, error: None }),
        Ok(_) => {
            let error = format!("Path is not a file: {}", path.display());
            warn!("{}", error);
            Ok(FileValidation {
                path,
                error: Some(error),
            })
        }
        Err(e) => {
            let error = format!("Cannot access file {}: {}", path.display(), e);
            warn!("{}", error);

            if config.fail_fast {
                Err(anyhow::anyhow!(error))
            } else {
                Ok(FileValidation {
                    path,
                    error: Some(error),
                })
            }
        }
    }
}

/// Convenience function returning only the valid article paths under a directory
pub async fn find_article_files<P: AsRef<Path>>(root_dir: P) -> Result<Vec<PathBuf>> {
    let config = DiscoveryConfig::default();
    let validations = collect_input_files(&[root_dir.as_ref()], &config).await?;

    Ok(validations
        .into_iter()
        .filter(|v| v.error.is_none())
        .map(|v| v.path)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = dir.join(name);
        if let Some(parent) = file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file_path, content).await?;
        Ok(file_path)
    }

    #[tokio::test]
    async fn test_discover_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = find_article_files(temp_dir.path()).await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_discover_matching_pattern_recursively() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "b.txt", "Second").await.unwrap();
        create_test_file(temp_dir.path(), "a.txt", "First").await.unwrap();
        create_test_file(temp_dir.path(), "nested/c.txt", "Nested").await.unwrap();
        create_test_file(temp_dir.path(), "notes.md", "Should not match").await.unwrap();

        let files = find_article_files(temp_dir.path()).await.unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[tokio::test]
    async fn test_custom_pattern() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "PMC123.txt", "x").await.unwrap();
        create_test_file(temp_dir.path(), "other.txt", "y").await.unwrap();

        let config = DiscoveryConfig {
            pattern: "PMC*.txt".to_string(),
            ..Default::default()
        };
        let files = collect_input_files(&[temp_dir.path()], &config).await.unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].path.ends_with("PMC123.txt"));
    }

    #[tokio::test]
    async fn test_explicit_file_bypasses_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "article.md", "x").await.unwrap();

        let files = collect_input_files(&[&path], &DiscoveryConfig::default()).await.unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].error.is_none());
    }

    #[tokio::test]
    async fn test_missing_input_reported() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let files = collect_input_files(&[&missing], &DiscoveryConfig::default()).await.unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].error.is_some());

        let config = DiscoveryConfig {
            fail_fast: true,
            ..Default::default()
        };
        assert!(collect_input_files(&[&missing], &config).await.is_err());
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = DiscoveryConfig {
            pattern: "[".to_string(),
            ..Default::default()
        };
        assert!(collect_input_files(&[temp_dir.path()], &config).await.is_err());
    }
}
