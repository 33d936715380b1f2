mod render;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rtf2txt_core::{Conversion, ConvertConfig, Converter};
use rtf2txt_diagnostics as diag;
use rtf2txt_tables::{canonicalize, tables};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::{Format, display_source, print_summary, render_diagnostics};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "rtf2txt",
    version,
    about = "Extract plain text from Rich Text Format documents"
)]
struct Cli {
    /// Output mode: "pretty" writes plain text and coloured diagnostics,
    /// "json" writes a single machine-readable object.
    #[arg(long, global = true, value_enum, default_value_t = Format::Pretty)]
    output: Format,

    /// Log conversion progress to stderr (`RUST_LOG` takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Convert an RTF document to plain text.
    Convert {
        /// Input file, or `-` for stdin.
        file: String,
        /// Write the text to FILE instead of stdout.
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
        /// Also report control words missing from the vocabulary.
        #[arg(long, conflicts_with = "no_diagnostics")]
        report_unknown: bool,
        /// Do not collect diagnostics; the input is streamed instead of
        /// being read into memory first.
        #[arg(long)]
        no_diagnostics: bool,
    },

    /// Show how control words are classified (e.g. `fonttbl`, `f463`, `par`).
    Classify {
        /// Control words, with or without the leading backslash.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Explain a diagnostic ID (e.g. RTF1001).
    Explain { id: String },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Cmd::Convert {
            file,
            out,
            report_unknown,
            no_diagnostics,
        } => {
            let mut config = ConvertConfig::default();
            config.collect_diagnostics = !no_diagnostics;
            config.report_unknown_words = report_unknown;
            cmd_convert(&file, out.as_deref(), config, cli.output)?
        }
        Cmd::Classify { words } => cmd_classify(&words, cli.output)?,
        Cmd::Explain { id } => cmd_explain(&id, cli.output)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "rtf2txt_core=debug,rtf2txt_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_convert(
    file: &str,
    out: Option<&Path>,
    config: ConvertConfig,
    format: Format,
) -> Result<()> {
    let converter = Converter::with_config(config);
    let name = if file == "-" { "<stdin>" } else { file };

    // Diagnostics point into the source, so keep it around when they are wanted.
    let (conv, source) = if converter.config().collect_diagnostics {
        let bytes = read_input(file)?;
        let conv = converter
            .convert(&bytes[..])
            .with_context(|| format!("failed to convert {name}"))?;
        (conv, Some(bytes))
    } else {
        let conv = converter
            .convert(open_input(file)?)
            .with_context(|| format!("failed to convert {name}"))?;
        (conv, None)
    };
    debug!(
        bytes = conv.text.len(),
        diagnostics = conv.diagnostics.len(),
        "converted {name}"
    );

    if let Some(path) = out {
        fs::write(path, &conv.text)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "text": conv.text_lossy(),
                "diagnostics": conv.diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            if out.is_none() {
                write_stdout(&conv)?;
            }
            if let Some(bytes) = &source
                && !conv.diagnostics.is_empty()
            {
                render_diagnostics(&display_source(bytes), name, &conv.diagnostics);
                print_summary(&conv.diagnostics);
            }
        }
    }
    Ok(())
}

fn cmd_classify(words: &[String], format: Format) -> Result<()> {
    let tables = tables();
    let rows: Vec<_> = words
        .iter()
        .map(|raw| {
            let word = raw.strip_prefix('\\').unwrap_or(raw);
            let canonical = canonicalize(word);
            serde_json::json!({
                "word": word,
                "key": canonical.key,
                "param": canonical.param,
                "policy": tables.classify(word),
            })
        })
        .collect();

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        Format::Pretty => {
            use ariadne::Fmt;
            for row in &rows {
                let param = match row["param"].as_i64() {
                    Some(p) => p.to_string(),
                    None => "-".to_string(),
                };
                println!(
                    "{:<16} {:<16} {:>8}  {}",
                    row["word"].as_str().unwrap_or_default(),
                    row["key"].as_str().unwrap_or_default(),
                    param,
                    row["policy"]
                        .as_str()
                        .unwrap_or_default()
                        .fg(ariadne::Color::Cyan),
                );
            }
        }
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "id": id,
                "explanation": diag::explain(id),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            // The explanation is the command's output, so it goes to stdout.
            if let Some(text) = diag::explain(id) {
                use ariadne::Fmt;
                println!("{}: {}", id.fg(ariadne::Color::Cyan), text);
            } else {
                println!("{id}: (no explanation available)");
            }
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Read all of `file` (or stdin for `-`) into memory.
fn read_input(file: &str) -> Result<Vec<u8>> {
    if file == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read(file).with_context(|| format!("failed to read {file}"))
    }
}

/// Open `file` (or stdin for `-`) as a buffered stream.
fn open_input(file: &str) -> Result<Box<dyn BufRead>> {
    if file == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        let f = File::open(file).with_context(|| format!("failed to open {file}"))?;
        Ok(Box::new(BufReader::new(f)))
    }
}

fn write_stdout(conv: &Conversion) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(&conv.text)
        .and_then(|()| stdout.flush())
        .context("failed to write output")
}
