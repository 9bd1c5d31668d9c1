//! Command-line article extractor.
//!
//! Usage: `rs-goose <url> [html-file]`
//!
//! Fetches `url` (or reads the page from `html-file`) and prints the
//! extracted article as JSON. Logging goes to stderr and is controlled with
//! `RUST_LOG` (default `warn`).

use std::process::ExitCode;

use rs_goose::encoding::decode_html;
use rs_goose::Extractor;

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") || args.is_empty() || args.len() > 2 {
        eprintln!("usage: rs-goose <url> [html-file]");
        return if args.is_empty() || args.len() > 2 { ExitCode::FAILURE } else { ExitCode::SUCCESS };
    }

    let html = match args.get(1) {
        Some(path) => match std::fs::read(path) {
            Ok(bytes) => Some(decode_html(&bytes, None)),
            Err(err) => {
                eprintln!("failed to read {path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let article = match Extractor::default().extract(&args[0], html.as_deref()) {
        Ok(article) => article,
        Err(err) => {
            eprintln!("extraction failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&article) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialize article: {err}");
            ExitCode::FAILURE
        }
    }
}
