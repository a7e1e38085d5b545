use anyhow::{Result, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use studioscope_core::export::{self, ExportFormat};
use studioscope_core::record::{Category, EnrichmentRecord};
use studioscope_core::runlog::RunLogger;
use studioscope_core::{Pipeline, input};
use studioscope_crawler::{Fetcher, RateLimiter};
use tracing::info;

pub fn print_banner() {
    print_divider();
    println!("{}", "  STUDIOSCOPE".bright_white().bold());
    println!(
        "{}",
        "  polite enrichment for studio and artist websites".dimmed()
    );
    print_divider();
}

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

/// Expand `~` in user-supplied paths.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

/// Validate the politeness window before anything touches the network.
pub fn parse_delay_window(min_secs: f64, max_secs: f64) -> Result<(Duration, Duration), String> {
    if !min_secs.is_finite() || !max_secs.is_finite() || min_secs < 0.0 {
        return Err(format!(
            "politeness delays must be non-negative numbers, got {min_secs}..{max_secs}"
        ));
    }
    if max_secs < min_secs {
        return Err(format!(
            "--max-delay ({max_secs}) must not be below --min-delay ({min_secs})"
        ));
    }
    Ok((
        Duration::from_secs_f64(min_secs),
        Duration::from_secs_f64(max_secs),
    ))
}

/// Per-category record counts, in partition order.
pub fn summarize(records: &[EnrichmentRecord]) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| {
            (
                category,
                records.iter().filter(|r| r.category == category).count(),
            )
        })
        .collect()
}

pub async fn handle_enrich(args: &ArgMatches, quiet: bool) -> Result<()> {
    let input_path = expand_path(args.get_one::<String>("input").expect("has default"));
    let output_path = expand_path(args.get_one::<String>("output").expect("has default"));
    let log_path = expand_path(args.get_one::<String>("log").expect("has default"));

    let format_raw = args.get_one::<String>("format").expect("has default");
    let format = ExportFormat::from_str(format_raw).ok_or_else(|| {
        anyhow!("unknown output format '{format_raw}', expected csv or json")
    })?;

    let min_delay = *args.get_one::<f64>("min-delay").expect("has default");
    let max_delay = *args.get_one::<f64>("max-delay").expect("has default");
    let (min_delay, max_delay) = parse_delay_window(min_delay, max_delay).map_err(|e| anyhow!(e))?;

    let entities = input::read_entities(&input_path)?;

    let limiter = RateLimiter::new(min_delay, max_delay)?;
    let fetcher = Fetcher::new(limiter)?;
    let logger = RunLogger::open(&log_path)?;
    let mut pipeline = Pipeline::new(fetcher, logger);

    let bar = if quiet {
        None
    } else {
        let pb = ProgressBar::new(entities.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30}] {pos}/{len} {msg}")
                .expect("static template parses")
                .progress_chars("=> "),
        );
        Some(pb)
    };

    let records = pipeline
        .run_batch(&entities, |idx, entity| {
            if let Some(pb) = &bar {
                pb.set_position(idx as u64);
                pb.set_message(entity.name.clone());
            }
        })
        .await?;

    if let Some(pb) = &bar {
        pb.finish_with_message(format!("{} entities processed", records.len()));
    }

    let written = export::export_records(&records, &output_path, &format)?;
    info!(
        "enrichment complete: {} records, {} output files",
        records.len(),
        written.len()
    );

    if !quiet {
        println!();
        print_divider();
        println!("{}", "  ENRICHMENT SUMMARY".bright_white().bold());
        print_divider();
        for (category, count) in summarize(&records) {
            let label = match category {
                Category::Interdisciplinary => category.as_str().bright_green(),
                Category::GraphicOnly => category.as_str().bright_cyan(),
                Category::UnclearMissing => category.as_str().yellow(),
            };
            println!("  {:<18} {}", label, count);
        }
        println!();
        for path in &written {
            println!("  {} {}", "→".blue(), path.display());
        }
        println!("  {} run log at {}", "→".blue(), log_path.display());
    }

    Ok(())
}
