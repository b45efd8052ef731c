//! Main entry point for the debinfo CLI application.
//!
//! Prints the control metadata of one or more Debian binary packages,
//! either as parsed fields or as the raw `./control` file.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use debinfo::{Cli, ControlInfo, extract_control_bytes, parse_control_info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so raw output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    let show_separator = cli.files.len() > 1 && !cli.is_quiet();
    let mut stdout = io::stdout().lock();

    for file in &cli.files {
        if show_separator {
            writeln!(stdout, "--- {} ---", file)?;
        }

        let content = extract_control_bytes(file)
            .with_context(|| format!("Failed to read control data from {}", file))?;

        if cli.raw {
            stdout.write_all(&content)?;
        } else {
            let info = parse_control_info(&String::from_utf8_lossy(&content));
            print_info(&mut stdout, &info)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Write the tracked fields as `Key: Value` lines, skipping empty ones.
fn print_info(out: &mut impl Write, info: &ControlInfo) -> io::Result<()> {
    for (key, value) in info.fields() {
        if value.is_empty() {
            continue;
        }
        writeln!(out, "{}: {}", key, value)?;
    }
    Ok(())
}
