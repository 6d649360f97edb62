use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use sinbench_maths::ulp_error;
use thiserror::Error;

use crate::Calculator;

/// Distance between consecutive accuracy samples.
pub const ACCURACY_STEP: f32 = 0.00001;

/// Sampling continues while the input is less than or equal to this value.
pub const ACCURACY_LIMIT: f32 = 2.0 * std::f32::consts::PI;

/// Suffix appended to a strategy name to form its artifact file name.
pub const ARTIFACT_SUFFIX: &str = "_accuracy";

/// Size in bytes of one record in an accuracy artifact.
pub const RECORD_SIZE: usize = std::mem::size_of::<f32>();

/// Returns the artifact file name for the strategy `name`, e.g. `chebyshev_2_accuracy`.
pub fn artifact_name(name: &str) -> String {
    format!("{name}{ARTIFACT_SUFFIX}")
}

#[derive(Debug, Error)]
pub enum AccuracyError {
    #[error("cannot create accuracy artifact {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write accuracy artifact {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The inputs sampled by the accuracy run for a given step.
///
/// Starts at `0.0` and adds `step` in single precision after each sample, stopping once the
/// accumulated value is no longer `<=` [`ACCURACY_LIMIT`]. Rounding in the accumulation means the
/// inputs drift away from exact multiples of `step`, and with it the final count. The drift is
/// deterministic, so every strategy sampled with the same step sees the same inputs.
#[derive(Clone, Debug)]
pub struct AccuracyInputs {
    value: f32,
    step: f32,
    done: bool,
}

impl AccuracyInputs {
    /// # Panics
    ///
    /// Panics if `step` is not a positive finite number.
    pub fn new(step: f32) -> Self {
        assert!(
            step > 0.0 && step.is_finite(),
            "accuracy step must be positive and finite, got {step}"
        );
        Self {
            value: 0.0,
            step,
            done: false,
        }
    }
}

impl Iterator for AccuracyInputs {
    type Item = f32;

    #[inline(always)]
    fn next(&mut self) -> Option<f32> {
        if self.done {
            return None;
        }

        let value = self.value;
        self.value += self.step;
        assert!(
            self.value > value,
            "accuracy step {} stalls at {value}",
            self.step
        );
        self.done = self.value > ACCURACY_LIMIT;

        Some(value)
    }
}

impl FusedIterator for AccuracyInputs {}

/// Number of records an accuracy artifact holds when sampled with `step`.
pub fn sample_count(step: f32) -> u64 {
    AccuracyInputs::new(step).count() as u64
}

/// Statistics gathered while writing one accuracy artifact.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct AccuracySummary {
    pub records: u64,
    /// Largest absolute difference to the baseline.
    pub max_error: f32,
    /// Input at which `max_error` was first reached.
    pub max_error_input: f32,
    pub mean_error: f64,
    /// Largest distance to the baseline in units in the last place of the baseline's result.
    pub max_ulp: u32,
}

/// Writes `|candidate(x) - baseline(x)|` for every input of [`AccuracyInputs`] to `writer`, as
/// native endian `f32` values with no framing.
pub fn write_records<W, C, B>(
    writer: &mut W,
    candidate: &C,
    baseline: &B,
    step: f32,
) -> io::Result<AccuracySummary>
where
    W: Write,
    C: Calculator<Output = f32>,
    B: Calculator<Output = f32>,
{
    let mut summary = AccuracySummary::default();
    let mut error_sum = 0.0_f64;

    for theta in AccuracyInputs::new(step) {
        let ours = candidate.calculate(theta);
        let reference = baseline.calculate(theta);
        let error = (ours - reference).abs();

        writer.write_all(&error.to_ne_bytes())?;

        if summary.records == 0 || error > summary.max_error {
            summary.max_error = error;
            summary.max_error_input = theta;
        }
        summary.max_ulp = summary.max_ulp.max(ulp_error(ours, reference));
        summary.records += 1;
        error_sum += error as f64;
    }

    if summary.records != 0 {
        summary.mean_error = error_sum / summary.records as f64;
    }

    Ok(summary)
}

/// An accuracy artifact that has been written and synced to disk.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub path: PathBuf,
    pub summary: AccuracySummary,
}

/// Compares `candidate` against `baseline` and writes the differences to `dir/<name>_accuracy`.
///
/// The file is created or truncated, and is flushed and synced before this returns. Failure leaves
/// other artifacts in `dir` untouched.
pub fn write_accuracy<C, B>(
    dir: &Path,
    name: &str,
    candidate: &C,
    baseline: &B,
    step: f32,
) -> Result<Artifact, AccuracyError>
where
    C: Calculator<Output = f32>,
    B: Calculator<Output = f32>,
{
    let path = dir.join(artifact_name(name));
    log::debug!("sampling {name} every {step} into {}", path.display());

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(source) => return Err(AccuracyError::Create { path, source }),
    };

    let mut writer = BufWriter::new(file);
    let result = write_records(&mut writer, candidate, baseline, step).and_then(|summary| {
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(summary)
    });

    match result {
        Ok(summary) => {
            log::info!(
                "{name}: {} records, max error {:e} at {}, mean error {:e}, max {} ulp",
                summary.records,
                summary.max_error,
                summary.max_error_input,
                summary.mean_error,
                summary.max_ulp
            );
            Ok(Artifact { path, summary })
        }
        Err(source) => Err(AccuracyError::Write { path, source }),
    }
}

/// Reads an accuracy artifact back into memory.
pub fn read_records(path: &Path) -> io::Result<Vec<f32>> {
    let bytes = std::fs::read(path)?;
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} is not a whole number of records ({} bytes)",
                path.display(),
                bytes.len()
            ),
        ));
    }

    Ok(bytes
        .chunks_exact(RECORD_SIZE)
        .map(|chunk| f32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
