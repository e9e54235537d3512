//! mdiff - compare two multi-document Kubernetes manifest files.
//!
//! Every manifest of the second (newer) file is matched to the first file
//! by kind, name and namespace and shown with its changes; manifests that
//! only exist in the first file are listed afterwards.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use manifest_diff::render::{render_report, Labels, Styler};
use manifest_diff::{compare_streams, Error};

/// Compare two multi-document manifest files resource by resource
#[derive(Debug, Parser)]
#[command(name = "mdiff")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The old manifest file
    left: PathBuf,

    /// The new manifest file
    right: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let styler = Styler::new(io::stdout().is_terminal());

    match run(&cli, &styler) {
        Ok(()) => ExitCode::SUCCESS,
        Err(errors) => {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            let styler = Styler::new(io::stderr().is_terminal());
            eprintln!("{}", styler.error(&message));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, styler: &Styler) -> Result<(), Vec<Error>> {
    let missing = check_files(&[cli.left.as_path(), cli.right.as_path()]);
    if !missing.is_empty() {
        return Err(missing);
    }

    let left = read_file(&cli.left).map_err(|e| vec![e])?;
    let right = read_file(&cli.right).map_err(|e| vec![e])?;

    let report = compare_streams(&left, &right);
    let summary = report.summary();
    info!(
        changed = summary.changed,
        identical = summary.identical,
        only_in_left = summary.only_in_left,
        only_in_right = summary.only_in_right,
        skipped_left = summary.skipped_left,
        skipped_right = summary.skipped_right,
        "comparison finished"
    );

    let labels = Labels::new(
        cli.left.display().to_string(),
        cli.right.display().to_string(),
    );
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_report(&report, &labels, styler, &mut out)
        .and_then(|()| out.flush())
        .map_err(|source| vec![Error::Output(source)])
}

/// Reports every path that does not exist, not just the first.
fn check_files(paths: &[&Path]) -> Vec<Error> {
    paths
        .iter()
        .filter(|path| !path.exists())
        .map(|path| Error::MissingFile {
            path: path.to_path_buf(),
        })
        .collect()
}

fn read_file(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
