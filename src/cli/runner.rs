use std::process::ExitCode;

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use testvid::RunSettings;
use testvid::api::{RunReport, run_with_settings};

use super::args::CliArgs;
use super::errors::AppError;

/// Install the stderr subscriber. `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn execute(settings: RunSettings) -> Result<RunReport, AppError> {
    Ok(run_with_settings(settings)?)
}

/// Exit code 1 when validation or frame generation fails; 0 otherwise, even
/// if the encoder itself reported failure.
pub fn run(args: CliArgs) -> Result<ExitCode, AppError> {
    init_logging(args.verbose)?;
    debug!("{:?}", args);

    let params = args.to_params();
    let settings = match RunSettings::resolve(&params) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match execute(settings) {
        Ok(report) if report.encoded() => {
            info!("Test video written: {:?}", report.output);
            Ok(ExitCode::SUCCESS)
        }
        Ok(report) => {
            warn!(
                "Encoder exited with {}; {} frame images were generated",
                report.encode.status, report.frames.count
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
