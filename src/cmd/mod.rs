mod generate;
mod list;

use clap::Parser;
use populate::config::{parse_line_count, DEFAULT_LINES};
use populate::{ColumnKind, Escape, Locale, Seed};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "populate")]
#[command(version)]
#[command(
    about = "Generate fake column data as tab-separated rows for seeding test databases",
    long_about = None
)]
pub struct Cli {
    /// Column to generate: email, company, first_name, iban, last_name,
    /// lorem_ipsum, siret, city
    #[arg(long, required_unless_present = "list")]
    pub table: Option<ColumnKind>,

    /// Locale for generated values (siret is always fr_FR)
    #[arg(long, default_value = "en_US")]
    pub locale: Locale,

    /// Number of rows to generate
    #[arg(
        long,
        default_value_t = DEFAULT_LINES,
        value_parser = parse_line_count,
        allow_negative_numbers = true
    )]
    pub lines: u64,

    /// Seed for reproducible output (number or any text)
    #[arg(long)]
    pub seed: Option<Seed>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field escaping: quote (wrap values containing tabs or newlines) or none
    #[arg(long, default_value = "quote")]
    pub escape: Escape,

    /// Show progress on stderr
    #[arg(short, long)]
    pub progress: bool,

    /// Print a summary on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// List supported column kinds and locales, then exit
    #[arg(long)]
    pub list: bool,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    if cli.list {
        return list::run();
    }

    generate::run(
        cli.table,
        cli.locale,
        cli.lines,
        cli.seed,
        cli.output,
        cli.escape,
        cli.progress,
        cli.verbose,
    )
}
