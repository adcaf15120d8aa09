//! Extract command - run one document through the provider and line parser.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use tracing::{debug, error};

use rxstock_core::models::config::RxConfig;
use rxstock_core::provider::{CloudProvider, DocumentProvider, LocalProvider};
use rxstock_core::{ExtractionReport, PharmaDataExtractor};

const USAGE: &str = "Usage: rxstock <pdf_file_path> [api_key]";

/// Arguments for extraction.
#[derive(Args)]
pub struct ExtractArgs {
    /// PDF file to process
    file: Option<PathBuf>,

    /// Extraction service API key (omit for free cloud processing)
    api_key: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extract embedded PDF text locally instead of calling the cloud service
    #[arg(long)]
    local: bool,

    /// Extra positional arguments are ignored
    #[arg(hide = true)]
    extra: Vec<String>,
}

pub fn run(args: ExtractArgs) -> ExitCode {
    let Some(file) = args.file.as_deref() else {
        return fatal(USAGE.to_string());
    };

    let extractor = match build_extractor(&args) {
        Ok(extractor) => extractor,
        Err(e) => {
            error!("Failed to initialize extractor: {:#}", e);
            return fatal(format!("Extraction failed: {:#}", e));
        }
    };

    if !args.extra.is_empty() {
        debug!("Ignoring {} extra argument(s)", args.extra.len());
    }

    let report = extractor.extract_pharmaceutical_data(file);
    debug!("Extraction finished, success={}", report.is_success());

    match print_report(&report, true) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fatal(format!("Extraction failed: {:#}", e)),
    }
}

fn build_extractor(args: &ExtractArgs) -> anyhow::Result<PharmaDataExtractor> {
    let config = load_config(args.config.as_deref())?;

    let provider: Box<dyn DocumentProvider> = if args.local {
        Box::new(LocalProvider::new())
    } else {
        Box::new(
            CloudProvider::new(&config.provider, args.api_key.as_deref())
                .context("failed to initialize cloud provider")?,
        )
    };

    Ok(PharmaDataExtractor::new(provider, config))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RxConfig> {
    match path {
        Some(path) => RxConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(RxConfig::default()),
    }
}

/// Failure message for arguments clap rejected.
pub fn argument_error(error: &clap::Error) -> String {
    let detail = error.to_string();
    let detail = detail.lines().next().unwrap_or_default();
    format!(
        "Invalid arguments: {}. {}",
        detail.trim_start_matches("error: ").trim(),
        USAGE
    )
}

/// Print a failure report and exit with status 1.
pub fn fatal(message: String) -> ExitCode {
    let report = ExtractionReport::failure(message);
    if let Err(e) = print_report(&report, false) {
        eprintln!("{}", e);
    }
    ExitCode::FAILURE
}

fn print_report(report: &ExtractionReport, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    println!("{}", json);
    Ok(())
}
