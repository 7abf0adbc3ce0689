use acronym_parser::discovery::{self, DiscoveryConfig};
use acronym_parser::document::{collect_definitions, Document};
use acronym_parser::reader::{AsyncFileReader, ReaderConfig};
use acronym_parser::{AcronymExtractor, ExtractorRules};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

/// Input path meaning "read the article from stdin"
const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// path<TAB>short form<TAB>long form
    Tsv,
    /// One JSON object per definition
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "acronym-parser")]
#[command(about = "Extract acronym definitions from scientific article text")]
#[command(version)]
struct Args {
    /// Article files or directories to scan ("-" reads stdin)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// File name pattern used inside directories
    #[arg(long, default_value = discovery::DEFAULT_PATTERN)]
    pattern: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,

    /// JSON file with extractor rules
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Letters allowed to stay unaligned (overrides rules file)
    #[arg(long)]
    max_missed_letters: Option<usize>,

    /// Longest short form considered, in characters (overrides rules file)
    #[arg(long)]
    max_acronym_length: Option<usize>,

    /// Characters that invalidate a long form
    #[arg(long, default_value = "\t")]
    delimiters: String,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,
}

#[derive(Debug, Serialize)]
struct DefinitionRecord<'a> {
    path: &'a str,
    short_form: &'a str,
    long_form: &'a str,
}

/// Defaults, then the rules file, then command-line overrides
fn load_rules(args: &Args) -> Result<ExtractorRules> {
    let mut rules = match &args.rules {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read rules file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid rules file {}", path.display()))?
        }
        None => ExtractorRules::default(),
    };

    if let Some(max_missed_letters) = args.max_missed_letters {
        rules.max_missed_letters = max_missed_letters;
    }
    if let Some(max_acronym_length) = args.max_acronym_length {
        rules.max_acronym_length = max_acronym_length;
    }

    if rules.max_acronym_length < 2 {
        anyhow::bail!("max_acronym_length must be at least 2, got {}", rules.max_acronym_length);
    }

    Ok(rules)
}

fn write_definitions(
    out: &mut impl Write,
    format: OutputFormat,
    path: &str,
    definitions: &[(String, String)],
) -> Result<()> {
    for (short_form, long_form) in definitions {
        match format {
            OutputFormat::Tsv => writeln!(out, "{path}\t{short_form}\t{long_form}")?,
            OutputFormat::Json => {
                let record = DefinitionRecord {
                    path,
                    short_form,
                    long_form,
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

async fn read_stdin() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("Failed to read article from stdin")?;
    Ok(text)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let rules = load_rules(&args)?;
    let extractor = AcronymExtractor::new(rules)?;
    let delimiters: Vec<char> = args.delimiters.chars().collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut total_definitions = 0usize;

    let (stdin_inputs, file_inputs): (Vec<&PathBuf>, Vec<&PathBuf>) = args
        .paths
        .iter()
        .partition(|p| p.as_path() == Path::new(STDIN_PATH));

    if !stdin_inputs.is_empty() {
        let document = Document::from_text(&read_stdin().await?);
        let definitions = collect_definitions(&extractor, &document, &delimiters);
        total_definitions += definitions.len();
        write_definitions(&mut out, args.format, STDIN_PATH, &definitions)?;
    }

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
        pattern: args.pattern.clone(),
    };
    let discovered = discovery::collect_input_files(&file_inputs, &discovery_config).await?;

    let reader = AsyncFileReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..Default::default()
    });

    let mut failed_files = 0usize;
    for file in &discovered {
        if let Some(ref error) = file.error {
            info!("Skipping {}: {}", file.path.display(), error);
            failed_files += 1;
            continue;
        }

        let (text, stats) = reader.read_document(&file.path).await?;
        if let Some(ref error) = stats.read_error {
            info!("Read error for {}: {}", stats.file_path, error);
            failed_files += 1;
            continue;
        }

        let document = Document::from_text(&text);
        let definitions = collect_definitions(&extractor, &document, &delimiters);
        info!(
            "{}: {} passages, {} definitions",
            stats.file_path,
            document.passages.len(),
            definitions.len()
        );

        total_definitions += definitions.len();
        write_definitions(&mut out, args.format, &stats.file_path, &definitions)?;
    }

    out.flush()?;
    info!(
        "Extraction complete: {} files, {} failed, {} definitions",
        discovered.len(),
        failed_files,
        total_definitions
    );

    Ok(())
}
