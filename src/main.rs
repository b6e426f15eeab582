//! tfdelta CLI - semantic diff for Terraform/HCL configuration trees
//!
//! Usage: tfdelta [OPTIONS] <ORIGINAL> <MODIFIED>
//!
//! Exit codes:
//!   0  no semantic changes
//!   1  changes found
//!   2  fatal error (IO, parse, mismatched input kinds)

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use tfdelta::{compare_paths, render_report, BlockMatching, Config};

/// tfdelta - semantic diff for Terraform/HCL configuration trees
#[derive(Parser, Debug)]
#[command(name = "tfdelta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Original snapshot (file or directory)
    original: PathBuf,

    /// Modified snapshot (file or directory)
    modified: PathBuf,

    /// Output a single JSON event instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Also print collected diagnostics
    #[arg(short, long)]
    verbose: bool,

    /// Block pairing policy
    #[arg(long, value_enum, value_name = "POLICY")]
    match_by: Option<BlockMatching>,

    /// Keep comparing nested blocks below levels with attribute changes
    #[arg(long)]
    descend_past_attributes: bool,

    /// Path to a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether any semantic change was found.
fn run(cli: &Cli) -> Result<bool> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // CLI flags take precedence over the config file.
    if let Some(policy) = cli.match_by {
        config.matching = policy;
    }
    if cli.descend_past_attributes {
        config.descend_past_attribute_changes = true;
    }

    let report = compare_paths(&cli.original, &cli.modified, &config)?;

    if cli.json {
        let output = serde_json::json!({
            "event": "diff",
            "original": cli.original.display().to_string(),
            "modified": cli.modified.display().to_string(),
            "changed": report.paths().collect::<Vec<_>>(),
            "diagnostics": report.diagnostics.len(),
            "has_changes": report.has_changes(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(report.has_changes());
    }

    if report.has_changes() {
        print!("{}", render_report(&report, cli.verbose));
        println!();
        println!(
            "Summary: {} changed path(s), {} diagnostic(s)",
            report.len(),
            report.diagnostics.len()
        );
    } else {
        if cli.verbose {
            print!("{}", render_report(&report, true));
        }
        println!("No semantic changes.");
    }

    Ok(report.has_changes())
}
