//! CLI support for generating identities from the command line.
//!
//! Settings are layered by OrthoConfig from command-line flags,
//! `IDENTITY_FORGE_*` environment variables and configuration files. The
//! binary delegates to [`execute`] so the whole flow can be exercised in
//! tests without spawning a process.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use rand::Rng;
use serde::Deserialize;
use tracing::info;

use crate::alias::AliasStyle;
use crate::atomic_io::write_atomic;
use crate::card::CardFormat;
use crate::generator::{GeneratorPolicy, IdentityGenerator};
use crate::record::IdentityRecord;
use crate::report::render_report;
use crate::vocabulary::VocabularyTables;

mod error;

pub use error::CliError;

const DEFAULT_COUNT: usize = 1;

/// Settings controlling a generation run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "IDENTITY_FORGE")]
pub struct ForgeSettings {
    /// Seed for the random source; a fresh seed is drawn when absent.
    pub seed: Option<u64>,
    /// Number of identities to generate.
    pub count: Option<usize>,
    /// Emit a JSON array instead of text reports.
    #[ortho_config(default = false)]
    pub json: bool,
    /// Path to a custom vocabulary JSON document.
    pub vocabulary: Option<PathBuf>,
    /// Alias style: `mixed`, `hex`, `emoticon` or `tagged`.
    pub alias_style: Option<String>,
    /// Render card numbers as 16 raw digits.
    #[ortho_config(default = false)]
    pub raw_cards: bool,
    /// Write the output to this file instead of stdout.
    pub output: Option<PathBuf>,
}

impl ForgeSettings {
    /// Return the configured record count, falling back to one.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Resolve the generator policy from the alias and card settings.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::AliasStyle`] if the alias style is unknown.
    pub fn policy(&self) -> Result<GeneratorPolicy, CliError> {
        let alias_style = match self.alias_style.as_deref() {
            Some(name) => name.parse::<AliasStyle>()?,
            None => AliasStyle::default(),
        };
        let card_format = if self.raw_cards {
            CardFormat::Compact
        } else {
            CardFormat::Grouped
        };
        Ok(GeneratorPolicy {
            alias_style,
            card_format,
            ..GeneratorPolicy::default()
        })
    }

    /// Load the configured vocabulary, or the built-in tables.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Vocabulary`] if a custom vocabulary file cannot be
    /// read or validated.
    pub fn vocabulary_tables(&self) -> Result<VocabularyTables, CliError> {
        match &self.vocabulary {
            Some(path) => Ok(VocabularyTables::from_file(path)?),
            None => Ok(VocabularyTables::default()),
        }
    }

    fn output_path(&self) -> Result<Option<Utf8PathBuf>, CliError> {
        self.output
            .clone()
            .map(|path| {
                Utf8PathBuf::from_path_buf(path).map_err(|path| CliError::NonUtf8Path { path })
            })
            .transpose()
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Seed used for the random source.
    pub seed: u64,
    /// Number of records generated.
    pub count: usize,
    /// File the records were written to, if not the output stream.
    pub destination: Option<Utf8PathBuf>,
}

/// Load settings from an argument iterator plus environment and files.
///
/// The first item is treated as the program name.
///
/// # Errors
///
/// Returns [`CliError::Config`] when flags or values cannot be parsed.
pub fn load_settings<I, T>(args: I) -> Result<ForgeSettings, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ForgeSettings::load_from_iter(args).map_err(|err| CliError::Config {
        message: err.to_string(),
    })
}

/// Generate identities per `settings` and write them to `out` or the
/// configured output file.
///
/// # Errors
///
/// Returns [`CliError`] when the policy or vocabulary is invalid, or the
/// output cannot be serialized or written.
pub fn execute<W: Write>(settings: &ForgeSettings, out: &mut W) -> Result<RunSummary, CliError> {
    let policy = settings.policy()?;
    let vocabulary = settings.vocabulary_tables()?;
    let destination = settings.output_path()?;
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    let count = settings.count();

    let generator = IdentityGenerator::with_policy(vocabulary, policy);
    let records = generator.generate_batch(seed, count);
    let rendered = render(&records, settings.json)?;

    match &destination {
        Some(path) => write_atomic(path, &rendered)?,
        None => out
            .write_all(rendered.as_bytes())
            .map_err(|err| CliError::Write {
                message: err.to_string(),
            })?,
    }

    info!(
        seed,
        count,
        destination = destination.as_ref().map_or("stdout", |path| path.as_str()),
        "generated identities"
    );
    Ok(RunSummary {
        seed,
        count,
        destination,
    })
}

/// Render records as a pretty JSON array or as concatenated text reports.
///
/// # Errors
///
/// Returns [`CliError::Serialize`] if JSON serialization fails.
pub fn render(records: &[IdentityRecord], json: bool) -> Result<String, CliError> {
    if json {
        let mut body =
            serde_json::to_string_pretty(records).map_err(|err| CliError::Serialize {
                message: err.to_string(),
            })?;
        body.push('\n');
        Ok(body)
    } else {
        Ok(records.iter().map(render_report).collect())
    }
}
