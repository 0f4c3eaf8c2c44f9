//! CLI entry point for logishield.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup and exit
//! codes. All business logic lives in the `logishield-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use logishield_app::{
    format_explanation, format_not_found, format_rules, parse_report_json, render_csv,
    render_markdown, run_audit, run_explain, runtime_error_report, serialize_report,
    status_exit_code, AuditInput, ExplainOutput, ResolutionLedger,
};
use logishield_settings::Overrides;
use logishield_types::LogishieldReport;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "logishield",
    version,
    about = "Trade compliance audits for shipment manifests"
)]
struct Cli {
    /// Path to logishield config TOML (a missing file means built-in defaults).
    #[arg(long, global = true, default_value = "logishield.toml")]
    config: Utf8PathBuf,

    /// Override regulation profile (default|electronics|empty).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit a manifest and write report artifacts.
    Audit {
        /// Path to the manifest JSON (object with `items`, or a bare array).
        #[arg(long)]
        manifest: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/logishield/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown summary alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown summary (if enabled).
        #[arg(long, default_value = "artifacts/logishield/summary.md")]
        markdown_out: Utf8PathBuf,

        /// Also write the CSV formal report to this path.
        #[arg(long)]
        csv_out: Option<Utf8PathBuf>,
    },

    /// Render a Markdown summary from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/logishield/report.json")]
        report: Utf8PathBuf,

        /// Resolution ledger to mark resolved rows.
        #[arg(long)]
        ledger: Option<Utf8PathBuf>,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render the CSV formal report from an existing JSON report.
    Csv {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/logishield/report.json")]
        report: Utf8PathBuf,

        /// Resolution ledger to mark resolved rows.
        #[arg(long)]
        ledger: Option<Utf8PathBuf>,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Mark flagged manifest rows as resolved (or reopen them).
    Resolve {
        /// Ledger file to update (created if missing).
        #[arg(long, default_value = "artifacts/logishield/ledger.json")]
        ledger: Utf8PathBuf,

        /// Zero-based item indexes, as reported in findings.
        #[arg(required = true)]
        indexes: Vec<usize>,

        /// Reopen the rows instead of resolving them.
        #[arg(long)]
        reopen: bool,
    },

    /// Print the effective regulation table.
    Rules,

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "regulation.export_license") or code (e.g., "unknown_code").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Audit {
            ref manifest,
            ref report_out,
            write_markdown,
            ref markdown_out,
            ref csv_out,
        } => cmd_audit(
            &cli,
            manifest,
            report_out,
            write_markdown.then_some(markdown_out.as_path()),
            csv_out.as_deref(),
        ),
        Commands::Md {
            ref report,
            ref ledger,
            ref output,
        } => cmd_render(report, ledger.as_deref(), output.as_deref(), render_markdown),
        Commands::Csv {
            ref report,
            ref ledger,
            ref output,
        } => cmd_render(report, ledger.as_deref(), output.as_deref(), render_csv),
        Commands::Resolve {
            ref ledger,
            ref indexes,
            reopen,
        } => cmd_resolve(ledger, indexes, reopen),
        Commands::Rules => cmd_rules(&cli),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
    }
}

/// Load config if present; missing file is allowed (defaults apply).
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "no config file; using built-in defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn cmd_audit(
    cli: &Cli,
    manifest_path: &Utf8Path,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
    csv_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;
        let manifest_text = std::fs::read_to_string(manifest_path)
            .with_context(|| format!("read manifest: {}", manifest_path))?;

        let output = run_audit(AuditInput {
            manifest_text: &manifest_text,
            config_text: &cfg_text,
            overrides: overrides(cli),
        })?;

        write_artifacts(&output.report, report_out, markdown_out, csv_out)?;
        Ok(status_exit_code(output.report.status))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!("{err:#}");
            let report = runtime_error_report(&format!("{err:#}"));
            if let Err(write_err) = write_report_file(report_out, &report) {
                tracing::warn!(path = %report_out, "runtime error report not written: {write_err:#}");
            }
            eprintln!("logishield error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_artifacts(
    report: &LogishieldReport,
    report_out: &Utf8Path,
    markdown_out: Option<&Utf8Path>,
    csv_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    write_report_file(report_out, report).context("write report json")?;
    tracing::info!(path = %report_out, "report written");

    if let Some(path) = markdown_out {
        write_text_file(path, &render_markdown(report, None)).context("write markdown")?;
    }
    if let Some(path) = csv_out {
        write_text_file(path, &render_csv(report, None)).context("write csv")?;
    }
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &LogishieldReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    create_parent_dir(path)?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    create_parent_dir(path)?;
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn create_parent_dir(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    Ok(())
}

fn read_ledger(path: &Utf8Path) -> anyhow::Result<ResolutionLedger> {
    match std::fs::read_to_string(path) {
        Ok(text) => ResolutionLedger::parse_json(&text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ResolutionLedger::default()),
        Err(err) => Err(err).with_context(|| format!("read ledger: {}", path)),
    }
}

fn cmd_render(
    report_path: &Utf8Path,
    ledger_path: Option<&Utf8Path>,
    output: Option<&Utf8Path>,
    render: fn(&LogishieldReport, Option<&ResolutionLedger>) -> String,
) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let ledger = ledger_path.map(read_ledger).transpose()?;

    let text = render(&report, ledger.as_ref());
    if let Some(out_path) = output {
        write_text_file(out_path, &text).context("write render output")?;
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn cmd_resolve(ledger_path: &Utf8Path, indexes: &[usize], reopen: bool) -> anyhow::Result<()> {
    let mut ledger = read_ledger(ledger_path)?;
    for &index in indexes {
        if reopen {
            ledger.reopen(index);
        } else {
            ledger.mark_resolved(index);
        }
    }
    tracing::info!(
        indexes = indexes.len(),
        reopen,
        resolved = ledger.resolved_count(),
        "ledger updated"
    );

    write_text_file(ledger_path, &ledger.to_json_pretty()?).context("write ledger")?;
    println!(
        "{} row(s) resolved in {}",
        ledger.resolved_count(),
        ledger_path
    );
    Ok(())
}

fn cmd_rules(cli: &Cli) -> anyhow::Result<()> {
    let cfg_text = read_config(&cli.config)?;
    let cfg = if cfg_text.trim().is_empty() {
        logishield_settings::LogishieldConfigV1::default()
    } else {
        logishield_settings::parse_config_toml(&cfg_text).context("parse config")?
    };
    let resolved =
        logishield_settings::resolve_config(cfg, overrides(cli)).context("resolve config")?;

    print!("{}", format_rules(&resolved.table));
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
