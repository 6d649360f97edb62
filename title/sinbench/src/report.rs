use std::io::{self, Write};
use std::path::PathBuf;

use sinbench_core::{
    ACCURACY_STEP, AccuracyError, Artifact, Domain, Timing, artifact_name, time_calculations,
    write_accuracy,
};

use crate::registry::Registry;

/// Where and how finely a report samples.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Directory accuracy artifacts are written into.
    pub output_dir: PathBuf,
    pub step: f32,
    /// Inputs every candidate is timed over.
    pub domain: Domain,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            step: ACCURACY_STEP,
            domain: Domain::ALL,
        }
    }
}

#[derive(Debug, Default)]
pub struct ReportOutcome {
    pub artifacts: Vec<Artifact>,
    /// Accuracy runs that could not write their artifact. Their timings still ran.
    pub failures: Vec<AccuracyError>,
    pub timings: Vec<(&'static str, Timing)>,
}

/// Runs the accuracy comparison for every candidate, then times every candidate including the
/// baseline and the sine/cosine pairs, writing progress to `out`.
///
/// A candidate whose artifact cannot be written is recorded in [`ReportOutcome::failures`] and the
/// report moves on to the next one. Only a failure to write to `out` ends the report early.
pub fn run_report<W: Write>(
    registry: &Registry,
    config: &ReportConfig,
    out: &mut W,
) -> io::Result<ReportOutcome> {
    let mut outcome = ReportOutcome::default();
    let baseline = &registry.baseline.calculator;

    writeln!(out, "starting accuracy tests")?;
    for strategy in registry.candidates() {
        match write_accuracy(
            &config.output_dir,
            strategy.name,
            &strategy.calculator,
            baseline,
            config.step,
        ) {
            Ok(artifact) => {
                writeln!(out, "{} written", artifact_name(strategy.name))?;
                outcome.artifacts.push(artifact);
            }
            Err(err) => {
                log::error!("{}: {err}: {}", strategy.name, io_cause(&err));
                outcome.failures.push(err);
            }
        }
    }
    writeln!(out, "accuracy tests done")?;
    writeln!(out)?;

    writeln!(out, "starting performance tests")?;
    for strategy in &registry.sin {
        let timing = time_calculations(&strategy.calculator, config.domain);
        print_timing(out, strategy.name, &timing)?;
        outcome.timings.push((strategy.name, timing));
    }
    for strategy in &registry.sin_cos {
        let timing = time_calculations(&strategy.calculator, config.domain);
        print_timing(out, strategy.name, &timing)?;
        outcome.timings.push((strategy.name, timing));
    }
    writeln!(out, "performance tests done")?;
    writeln!(out)?;

    Ok(outcome)
}

fn print_timing<W: Write>(out: &mut W, name: &str, timing: &Timing) -> io::Result<()> {
    log::debug!("{name}: {:.3}ns per call", timing.nanos_per_call());
    writeln!(out, "{name}: {}ns", timing.elapsed.as_nanos())
}

fn io_cause(err: &AccuracyError) -> &io::Error {
    match err {
        AccuracyError::Create { source, .. } | AccuracyError::Write { source, .. } => source,
    }
}
