use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use fabridge_core::{ConversionSummary, SourceFormat, summarize};
use fabridge_ingest::{convert_file, detect_file_format, output_path_for, write_records};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod preview;
mod state;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "fabridge",
    version,
    about = "Convert Starling and Revolut statement CSVs into FreeAgent bank imports"
)]
struct Cli {
    /// Log debug detail to stderr (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert statements, writing <name>_freeagent.csv next to each input
    Convert {
        /// Statement CSV files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// starling, revolut, freeagent or auto (defaults to config default_format)
        #[arg(long, short)]
        format: Option<String>,

        /// Write output here instead of next to the input
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Print converted CSV to stdout instead of writing files
        #[arg(long)]
        stdout: bool,

        /// Report each file as a JSON object
        #[arg(long)]
        json: bool,
    },

    /// Show converted records as a table without writing anything
    Preview {
        file: PathBuf,

        #[arg(long, short)]
        format: Option<String>,

        /// Rows to show (default from config, 20)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// List supported source formats and the columns each one needs
    Formats,

    /// Manage ~/.fabridge/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,
    /// Print the effective config
    Show,
}

#[derive(Debug, Serialize)]
struct FileReport {
    input: PathBuf,
    /// None when written to stdout
    output: Option<PathBuf>,
    format: SourceFormat,
    summary: ConversionSummary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = startup_config(&cli.command, &config::config_path()?)?;
    init_tracing(&cfg.log_level, cli.verbose);

    match cli.command {
        Command::Convert {
            files,
            format,
            out_dir,
            stdout,
            json,
        } => {
            let out_dir = out_dir.or_else(|| cfg.output_dir.clone());
            run_convert(&files, format.as_deref(), &cfg, out_dir.as_deref(), stdout, json)?;
        }

        Command::Preview {
            file,
            format,
            limit,
        } => {
            let format = resolve_format(format.as_deref(), &cfg, &file)?;
            let records = convert_file(&file, format)
                .with_context(|| format!("converting {}", file.display()))?;

            println!("{} ({})\n", file.display(), format);
            let limit = limit.unwrap_or(cfg.preview_limit);
            print!("{}", preview::render_table(&records, limit));
            println!("\n{}", summary_line(&summarize(&records)));
        }

        Command::Formats => {
            for format in SourceFormat::all() {
                let note = if format.has_header_row() { "" } else { "  [no header row]" };
                println!(
                    "{:<10} {:<11} {}{}",
                    format.name(),
                    format!("({})", format.code()),
                    format.required_columns().join(", "),
                    note
                );
            }
        }

        Command::Config { command } => run_config(&command)?,
    }

    Ok(())
}

/// Config commands must work even when config.toml does not parse, so they
/// start from defaults.
fn startup_config(command: &Command, path: &Path) -> Result<Config> {
    match command {
        Command::Config { .. } => Ok(Config::default()),
        _ => config::load_config_from(path),
    }
}

fn run_config(command: &ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init => config::init_config(),
        ConfigCommand::Show => {
            let path = config::config_path()?;
            println!("# {}", path.display());
            match config::load_config_from(&path) {
                Ok(cfg) => {
                    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
                }
                Err(e) => {
                    eprintln!("warning: {:#}", e);
                    let raw = fs::read_to_string(&path)
                        .with_context(|| format!("read {}", path.display()))?;
                    print!("{raw}");
                }
            }
            Ok(())
        }
    }
}

/// Convert every file, carrying on past failures; errors if any file failed.
fn run_convert(
    files: &[PathBuf],
    format: Option<&str>,
    cfg: &Config,
    out_dir: Option<&Path>,
    stdout: bool,
    json: bool,
) -> Result<()> {
    let mut failed = 0;

    for path in files {
        match convert_one(path, format, cfg, out_dir, stdout) {
            Ok(report) => print_report(&report, json, stdout)?,
            Err(e) => {
                failed += 1;
                eprintln!("error: {}: {:#}", path.display(), e);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} file(s) failed to convert", failed, files.len());
    }
    Ok(())
}

fn init_tracing(level: &str, verbose: bool) {
    let fallback = if verbose { "debug" } else { level };

    // stderr, so `convert --stdout` output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// `--format`, falling back to the config; `auto` sniffs the header row.
fn resolve_format(arg: Option<&str>, cfg: &Config, path: &Path) -> Result<SourceFormat> {
    let Some(choice) = arg.or(cfg.default_format.as_deref()) else {
        bail!("no source format selected (pass --format or set default_format in config.toml)");
    };

    if choice.trim().eq_ignore_ascii_case("auto") {
        let format = detect_file_format(path)?;
        tracing::info!(path = %path.display(), format = %format, "detected source format");
        return Ok(format);
    }

    Ok(choice.parse::<SourceFormat>()?)
}

fn convert_one(
    path: &Path,
    format: Option<&str>,
    cfg: &Config,
    out_dir: Option<&Path>,
    stdout: bool,
) -> Result<FileReport> {
    let format = resolve_format(format, cfg, path)?;
    let records = convert_file(path, format)?;

    // Nothing is written until the whole file has converted.
    let output = if stdout {
        write_records(io::stdout().lock(), &records)?;
        None
    } else {
        let out = output_path_for(path, out_dir);
        if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let file = File::create(&out).with_context(|| format!("write {}", out.display()))?;
        write_records(BufWriter::new(file), &records)?;
        Some(out)
    };

    Ok(FileReport {
        input: path.to_path_buf(),
        output,
        format,
        summary: summarize(&records),
    })
}

fn summary_line(s: &ConversionSummary) -> String {
    let mut line = format!(
        "{} records | in {:.2} | out {:.2} | net {:.2}",
        s.records, s.money_in, s.money_out.abs(), s.net
    );
    if let (Some(first), Some(last)) = (s.first_date, s.last_date) {
        line.push_str(&format!(
            " | {} to {}",
            first.format("%d/%m/%Y"),
            last.format("%d/%m/%Y")
        ));
    }
    line
}

fn print_report(report: &FileReport, json: bool, to_stderr: bool) -> Result<()> {
    let line = if json {
        serde_json::to_string(report).context("serialize report")?
    } else {
        let dest = report
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string());
        format!(
            "{} -> {} [{}] {}",
            report.input.display(),
            dest,
            report.format,
            summary_line(&report.summary)
        )
    };

    if to_stderr {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
    Ok(())
}
