use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::{debug, error};

use ebb::document::Document;
use ebb::env::DocumentEnv;
use ebb::exit::{self, ExitRequest};
use ebb::export::{self, ExportError};
use ebb::task::Task;

/// Generate a one-page PDF through the effect runtime
#[derive(Parser)]
#[command(name = "ebb")]
#[command(about = "Describe the document save as an inert task, then drive it", long_about = None)]
struct Cli {
    /// Destination path for the generated document
    #[arg(short, long, default_value = "hello.pdf")]
    output: PathBuf,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Top-level error type handed to the entry adapter.
#[derive(Debug, Error)]
enum AppError {
    /// Orderly termination with an explicit exit code.
    #[error("exit requested with code {0}")]
    Exit(i32),

    /// A document export failure that was not converted into an exit
    /// request. Reaching the entry adapter with this variant is a bug.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ExitRequest for AppError {
    fn exit_code(&self) -> Option<i32> {
        match self {
            AppError::Exit(code) => Some(*code),
            AppError::Export(_) => None,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    debug!(output = %cli.output.display(), "ebb started");

    let document = match Document::hello_world() {
        Ok(document) => document,
        Err(err) => {
            error!("failed to build document: {err:#}");
            eprintln!("Error: {err:#}");
            std::process::exit(1);
        }
    };

    let mut host = DocumentEnv::new(document);
    let signal = exit::run_task(build_task(cli.output), &mut host);
    exit::dispatch(signal)
}

/// Compose the top-level task. Expected export failures are reported here
/// and downgraded to an orderly exit request; the fatal path stays reserved
/// for unhandled errors.
fn build_task(output: PathBuf) -> Task<(), AppError> {
    export::export_document(output)
        .map_err(AppError::Export)
        .or_else(|err| {
            error!("{err}");
            eprintln!("Error: {err}");
            Task::err(AppError::Exit(1))
        })
}
