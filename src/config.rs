//! Runtime configuration for a populate run.

use crate::column::ColumnKind;
use crate::error::{PopulateError, Result};
use crate::locale::Locale;
use crate::seed::Seed;
use crate::writer::Escape;
use std::path::PathBuf;

/// Rows generated when `--lines` is not given
pub const DEFAULT_LINES: u64 = 1000;

/// Runtime configuration for generation
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    /// Column generator to run
    pub kind: ColumnKind,
    /// Locale for every kind except `siret`
    pub locale: Locale,
    /// Number of rows
    pub lines: u64,
    /// Random seed for reproducibility
    pub seed: Option<Seed>,
    /// Output file (None for stdout)
    pub output: Option<PathBuf>,
    /// Field escaping
    pub escape: Escape,
    /// Show progress
    pub progress: bool,
    /// Print a summary on stderr
    pub verbose: bool,
}

impl PopulateConfig {
    pub fn builder() -> PopulateConfigBuilder {
        PopulateConfigBuilder::default()
    }
}

/// Builder for PopulateConfig
#[derive(Default)]
pub struct PopulateConfigBuilder {
    kind: Option<ColumnKind>,
    locale: Option<Locale>,
    lines: Option<u64>,
    seed: Option<Seed>,
    output: Option<PathBuf>,
    escape: Escape,
    progress: bool,
    verbose: bool,
}

impl PopulateConfigBuilder {
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn lines(mut self, lines: u64) -> Self {
        self.lines = Some(lines);
        self
    }

    pub fn seed(mut self, seed: Option<Seed>) -> Self {
        self.seed = seed;
        self
    }

    pub fn output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    pub fn escape(mut self, escape: Escape) -> Self {
        self.escape = escape;
        self
    }

    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Result<PopulateConfig> {
        let kind = self.kind.ok_or_else(|| PopulateError::InvalidArgument {
            name: "--table",
            value: String::new(),
            reason: "a column kind is required".to_string(),
        })?;

        Ok(PopulateConfig {
            kind,
            locale: self.locale.unwrap_or_default(),
            lines: self.lines.unwrap_or(DEFAULT_LINES),
            seed: self.seed,
            output: self.output,
            escape: self.escape,
            progress: self.progress,
            verbose: self.verbose,
        })
    }
}

/// Parse `--lines`, rejecting negative and non-integer values
pub fn parse_line_count(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(n);
    }

    let reason = if trimmed.parse::<i64>().is_ok() {
        "must not be negative"
    } else {
        "expected a non-negative integer"
    };
    Err(PopulateError::InvalidArgument {
        name: "--lines",
        value: s.to_string(),
        reason: reason.to_string(),
    })
}
