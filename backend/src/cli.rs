//! Command-line arguments and request loading for `allowance-reach`.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use shared::ExtraAllowanceRequest;
use thiserror::Error;
use tracing::{info, Level};

/// Allowances used when nothing is given on the command line
pub const DEMO_ALLOWANCES: [i64; 5] = [10, 20, 10, 20, 50];
pub const DEMO_EXTRA: i64 = 20;

/// Check which children reach the highest allowance after everyone gets the same extra amount
#[derive(Parser, Debug)]
#[command(name = "allowance-reach")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Current allowance of each child, in order
    #[arg(value_name = "ALLOWANCES", allow_negative_numbers = true)]
    pub allowances: Vec<i64>,

    /// Extra amount given to every child [default: 0]
    #[arg(short, long, allow_negative_numbers = true, conflicts_with = "input")]
    pub extra: Option<i64>,

    /// Read a JSON request ({"allowances": [...], "extra": n}) from a file, or `-` for stdin
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Print the full report as JSON instead of true/false tokens
    #[arg(long)]
    pub json: bool,

    /// Verbosity: -v (info), -vv (debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Positional allowances cannot be combined with --input")]
    ConflictingSources,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid request JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Args {
    /// Log level implied by -v/-q when RUST_LOG is not set
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }

    /// Build the request from --input, positional values, or the demo data.
    ///
    /// The demo only runs when neither allowances nor --extra were given.
    pub fn load_request(&self) -> Result<ExtraAllowanceRequest, InputError> {
        match &self.input {
            Some(_) if !self.allowances.is_empty() => Err(InputError::ConflictingSources),
            Some(path) => read_request(path),
            None if self.allowances.is_empty() && self.extra.is_none() => {
                info!("No allowances given, running the built-in example");
                Ok(ExtraAllowanceRequest {
                    allowances: DEMO_ALLOWANCES.to_vec(),
                    extra: DEMO_EXTRA,
                })
            }
            None => Ok(ExtraAllowanceRequest {
                allowances: self.allowances.clone(),
                extra: self.extra.unwrap_or(0),
            }),
        }
    }
}

fn read_request(path: &Path) -> Result<ExtraAllowanceRequest, InputError> {
    let source_name = path.display().to_string();
    if path == Path::new("-") {
        parse_request(std::io::stdin().lock(), &source_name)
    } else {
        let file = std::fs::File::open(path).map_err(|source| InputError::Read {
            path: source_name.clone(),
            source,
        })?;
        parse_request(file, &source_name)
    }
}

/// Read a whole JSON request from `reader`; `source_name` labels errors and logs
fn parse_request(
    mut reader: impl Read,
    source_name: &str,
) -> Result<ExtraAllowanceRequest, InputError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw).map_err(|source| InputError::Read {
        path: source_name.to_string(),
        source,
    })?;

    info!("Loaded request from {}", source_name);
    serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: source_name.to_string(),
        source,
    })
}
