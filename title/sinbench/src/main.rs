use std::process::ExitCode;

use registry::Registry;
use report::{ReportConfig, run_report};

mod logger;
mod registry;
mod report;

fn main() -> ExitCode {
    logger::init(log::LevelFilter::Info);

    let registry = Registry::standard();
    let config = ReportConfig::default();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_report(&registry, &config, &mut out) {
        Ok(outcome) if outcome.failures.is_empty() => ExitCode::SUCCESS,
        Ok(outcome) => {
            log::error!(
                "{} of {} accuracy runs failed",
                outcome.failures.len(),
                outcome.failures.len() + outcome.artifacts.len()
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("cannot write report: {err}");
            ExitCode::FAILURE
        }
    }
}
