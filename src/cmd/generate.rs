//! CLI handler for generating a column.

use indicatif::{ProgressBar, ProgressStyle};
use populate::{ColumnKind, Escape, Locale, PopulateConfig, Populator, Seed, TsvWriter};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Run generation with the given options
#[allow(clippy::too_many_arguments)]
pub fn run(
    table: Option<ColumnKind>,
    locale: Locale,
    lines: u64,
    seed: Option<Seed>,
    output: Option<PathBuf>,
    escape: Escape,
    progress: bool,
    verbose: bool,
) -> anyhow::Result<()> {
    let mut builder = PopulateConfig::builder()
        .locale(locale)
        .lines(lines)
        .seed(seed)
        .output(output)
        .escape(escape)
        .progress(progress)
        .verbose(verbose);
    if let Some(kind) = table {
        builder = builder.kind(kind);
    }
    let config = builder.build()?;

    if let Some(ref path) = config.output {
        let writer = TsvWriter::create(path, config.escape)?;
        let written = write_column(&config, writer)?;
        if config.verbose {
            eprintln!("Wrote {} rows to {}", written, path.display());
        }
    } else {
        let stdout = io::stdout();
        write_column(&config, TsvWriter::new(stdout.lock(), config.escape))?;
    }

    Ok(())
}

/// Generate every row of the configured column into `writer`
fn write_column<W: Write>(
    config: &PopulateConfig,
    mut writer: TsvWriter<W>,
) -> anyhow::Result<u64> {
    let start = Instant::now();
    let mut populator = Populator::new(config.locale, config.seed.as_ref());

    if config.kind == ColumnKind::City && config.verbose {
        eprintln!("Note: city is not implemented yet, no rows will be written");
    }

    let rows = populator.generate(config.kind, config.lines);

    let progress_bar = if config.progress {
        let pb = ProgressBar::new(rows.total());
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows ({percent}%) {msg}",
            )?
            .progress_chars("█▓▒░  ")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb.set_message(format!("Generating {}...", rows.kind()));
        Some(pb)
    } else {
        None
    };

    for row in rows {
        writer.write_row(&row?)?;
        if let Some(ref pb) = progress_bar {
            pb.inc(1);
        }
    }
    writer.flush()?;

    if let Some(pb) = progress_bar {
        pb.finish_with_message("done");
    }

    let written = writer.rows_written();
    if config.verbose {
        eprintln!(
            "Generated {} {} rows (locale: {}, seed: {}) in {:.2?}",
            written,
            config.kind,
            if config.kind.is_french_only() {
                Locale::FrFr
            } else {
                populator.locale()
            },
            config
                .seed
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "none".to_string()),
            start.elapsed()
        );
    }

    Ok(written)
}
