//! # Tirilla CLI
//!
//! Command-line interface for receipt markup rendering and printing.
//!
//! ## Usage
//!
//! ```bash
//! # Write an SVG preview of a receipt to stdout
//! tirilla preview receipt.txt > receipt.svg
//!
//! # Preview markup piped through stdin
//! echo 'text|Hello' | tirilla preview -
//!
//! # Save receipt.txt.svg and send the job to the configured printer
//! tirilla print receipt.txt
//!
//! # Use an alternate configuration directory
//! PRINTER_CONFIG_DIR=kitchen tirilla print order.txt
//! ```
//!
//! Diagnostics go to stderr; stdout carries only artifact bytes. Exit code
//! is 0 on success and 1 on any failure, including usage errors.

use clap::{Parser, Subcommand};
use std::env;
use std::process;

use tirilla::diag::StderrSink;
use tirilla::{Pipeline, ReceiptRenderer, TirillaError};

/// Tirilla - receipt markup renderer and printer utility
#[derive(Parser, Debug)]
#[command(name = "tirilla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render markup to SVG on stdout
    Preview {
        /// Receipt markup file, or `-` to read stdin
        file: Option<String>,
    },
    /// Save an SVG preview, then send the job to the network printer
    Print {
        /// Receipt markup file, or `-` to read stdin
        file: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), TirillaError> {
    let cli = Cli::parse();
    let config_dir = env::var("PRINTER_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let sink = StderrSink;

    match cli.command {
        Commands::Preview { file } => {
            let file = require_file(file, "preview");
            Pipeline::new(ReceiptRenderer, config_dir, &sink).preview(&file)
        }
        Commands::Print { file } => {
            let file = require_file(file, "print");
            Pipeline::new(ReceiptRenderer, config_dir, &sink)
                .print(&file)
                .await
        }
    }
}

/// Exit with a usage message (status 1) when the positional is missing.
fn require_file(file: Option<String>, subcommand: &str) -> String {
    match file {
        Some(file) => file,
        None => {
            eprintln!("Usage: tirilla {subcommand} <file|->");
            eprintln!("Environment variables: PRINTER_CONFIG_DIR=<string>");
            process::exit(1);
        }
    }
}
