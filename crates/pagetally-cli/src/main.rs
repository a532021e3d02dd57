use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use pagetally::{
    AggregationResult, AggregatorSettings, Notice, NoticeSink, PageTally, TracingSink, from_fn,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pagetally")]
#[command(about = "pagetally - sum, count, average, min and max over sparse records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate records given as arguments, in a file, or on stdin.
    ///
    /// Records are integers; `null`, `none`, `nil` or `-` mark an absent record.
    Aggregate {
        #[arg(allow_negative_numbers = true)]
        records: Vec<String>,
        /// Read records from this file instead of the arguments.
        #[arg(long, short)]
        file: Option<PathBuf>,
        /// TOML settings file.
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Noun used in notices, overriding the settings file.
        #[arg(long)]
        label: Option<String>,
        /// Print the result and notices as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Aggregate {
            records,
            file,
            config,
            label,
            json,
        } => {
            let settings = load_settings(config, label)?;
            let text = read_input(&records, file)?;
            run_aggregate(&settings, &text, json)?;
        }
    }

    Ok(())
}

fn load_settings(config: Option<PathBuf>, label: Option<String>) -> Result<AggregatorSettings> {
    let mut settings = match config {
        Some(path) => AggregatorSettings::from_path(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => AggregatorSettings::default(),
    };
    if let Some(label) = label {
        settings = settings.with_record_label(label);
    }
    Ok(settings)
}

fn read_input(records: &[String], file: Option<PathBuf>) -> Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read records from {}", path.display()));
    }
    if !records.is_empty() {
        return Ok(records.join(" "));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read records from stdin")?;
    Ok(text)
}

fn run_aggregate(settings: &AggregatorSettings, text: &str, json: bool) -> Result<()> {
    let tally = PageTally::with_settings(settings.clone());
    let mut tracing_sink = TracingSink::with_label(settings.record_label.clone());
    let mut notices: Vec<Notice> = Vec::new();
    let sink = from_fn(|notice: &Notice| {
        notices.push(*notice);
        if !json {
            tracing_sink.notice(notice);
        }
    });

    let result = tally
        .aggregate_text(text, sink)
        .context("Failed to parse records")?;

    if json {
        print_json(&result, &notices, &settings.record_label)?;
    } else {
        print_table(&result);
    }
    Ok(())
}

fn print_json(result: &AggregationResult, notices: &[Notice], label: &str) -> Result<()> {
    let notices: Vec<serde_json::Value> = notices
        .iter()
        .map(|n| {
            serde_json::json!({
                "index": n.index(),
                "message": n.message(label),
            })
        })
        .collect();
    let output = serde_json::json!({
        "result": result.to_json(),
        "notices": notices,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render JSON")?
    );
    Ok(())
}

fn print_table(result: &AggregationResult) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["statistic", "value"]);

    table.add_row(vec!["total".to_string(), result.total.to_string()]);
    table.add_row(vec!["count".to_string(), result.count.to_string()]);
    table.add_row(vec!["average".to_string(), format_optional(result.average())]);
    table.add_row(vec!["min".to_string(), format_optional(result.min)]);
    table.add_row(vec!["max".to_string(), format_optional(result.max)]);
    table.add_row(vec![
        "skipped nulls".to_string(),
        result.skipped_nulls.to_string(),
    ]);
    table.add_row(vec![
        "skipped invalid".to_string(),
        result.skipped_invalid.to_string(),
    ]);

    println!("{table}");
    if result.is_null_or_empty() {
        println!("(no records)");
    } else {
        println!("({} records)", result.input.len());
    }
}

fn format_optional<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "NULL".to_string())
}
