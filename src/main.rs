//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `opengraph` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading HTML from a file or stdin
//! - Printing the extracted record as JSON
//!
//! All extraction is implemented in the library crate. The binary never
//! fetches anything over the network.

use std::fs::File;
use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use opengraph::config::{Opt, STDIN_PATH};
use opengraph::initialization::init_logger_with;
use opengraph::OpenGraph;

fn run(opt: &Opt) -> Result<String> {
    let input: Box<dyn Read> = if opt.file.as_os_str() == STDIN_PATH {
        log::info!("Reading HTML from stdin");
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(&opt.file)
            .with_context(|| format!("Failed to open {}", opt.file.display()))?;
        Box::new(file)
    };

    let mut og = OpenGraph::new(&opt.url);
    og.parse(input)
        .with_context(|| format!("Failed to extract metadata for {}", opt.url))?;

    if opt.absolute {
        og.to_absolute_urls();
    }
    if opt.fulfill {
        og.fulfill()?;
    }

    let json = if opt.pretty {
        serde_json::to_string_pretty(&og)
    } else {
        serde_json::to_string(&og)
    };
    json.context("Failed to serialize metadata")
}

fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&opt) {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("opengraph error: {:#}", e);
            process::exit(1);
        }
    }
}
