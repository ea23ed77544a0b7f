use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use extrato_core::{InstitutionId, ParserConfig, ResultTable};
use extrato_ingest::{ExtractorOutcome, detect, extract_best, extract_detected, extract_direct};
use extrato_report::{handoff_text, render_table, summarize, to_json, write_csv};
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod config;
mod state;

use config::{OutputFormat, init_config, load_config};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("EXTRATO_BUILD_SHA"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "extrato",
    version,
    long_version = LONG_VERSION,
    about = "Extract transactions from Brazilian bank statement text"
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract transactions from statement text (a file, or `-` for stdin)
    Parse {
        input: String,

        /// Use this institution's grammar only (e.g. "bb", "itau", "nubank")
        #[arg(long, conflicts_with = "detect")]
        bank: Option<InstitutionId>,

        /// Detect the institution by keyword and use its grammar
        #[arg(long)]
        detect: bool,

        /// Year for dates printed without one (default: config, then current year)
        #[arg(long)]
        year: Option<i32>,

        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Print every extractor's row count and score to stderr (JSON with
        /// `--format json`)
        #[arg(long)]
        explain: bool,

        /// Print credit/debit totals after the rows
        #[arg(long)]
        summary: bool,
    },

    /// Print the institution detected for a statement
    Detect { input: String },

    /// Manage ~/.extrato/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Parse {
            input,
            bank,
            detect,
            year,
            format,
            explain,
            summary,
        } => {
            let cfg = load_config()?;
            let parser = year.map(ParserConfig::with_year).unwrap_or(cfg.parser);
            let format = format.unwrap_or(cfg.output.format);
            debug!(?parser, ?format, "effective settings");
            let text = read_input(&input)?;

            let (table, label) = if let Some(id) = bank {
                (extract_direct(id, &text, &parser), id.label())
            } else if detect {
                let (table, id) = extract_detected(&text, &parser);
                (table, id.label())
            } else {
                let best = extract_best(&text, &parser);
                if explain {
                    print_outcomes(&best.outcomes, format)?;
                }
                let label = best.label();
                (best.table, label)
            };

            if table.is_empty() {
                eprintln!("no transactions found");
                return Ok(());
            }
            eprintln!("{label}: {} transactions", table.len());

            print_table(&table, format)?;
            if summary {
                println!("\n{}", summarize(&table));
            }
        }

        Command::Detect { input } => {
            let text = read_input(&input)?;
            let id = detect(&text);
            println!("{id}");
            if id.is_unknown() {
                eprintln!("no institution keyword matched; `parse --detect` will use the generic grammar");
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => init_config()?,
            ConfigCommand::Show => {
                let cfg = load_config()?;
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

/// Statement text from a path, or stdin for `-`.
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading statement from stdin")?;
        return Ok(text);
    }

    let path = std::path::Path::new(input);
    if !path.exists() {
        bail!("statement not found: {}", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn print_table(table: &ResultTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(table)),
        OutputFormat::Csv => write_csv(table, std::io::stdout().lock())?,
        OutputFormat::Json => println!("{}", to_json(table)?),
        OutputFormat::Handoff => print!("{}", handoff_text(table)),
    }
    Ok(())
}

fn print_outcomes(outcomes: &[ExtractorOutcome], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(outcomes).context("serializing extractor outcomes")?;
        eprintln!("{json}");
        return Ok(());
    }
    for o in outcomes {
        let status = o.error.as_deref().unwrap_or("ok");
        eprintln!(
            "{:<18} candidates={:<4} rows={:<4} score={:>9.2} ({status})",
            o.institution.label(),
            o.candidates,
            o.rows,
            o.score.total()
        );
    }
    Ok(())
}
