//! Exhaustive timing and sampled accuracy measurement of sine candidates.
//!
//! [`time_calculations`] times a [`Calculator`] once for every value of a [`Domain`], normally
//! every `f32` bit pattern. [`write_accuracy`] compares a candidate against a baseline over
//! `[0, 2pi]` and stores the absolute differences as a raw `f32` artifact.

mod accuracy;
mod calculator;
mod domain;
mod timing;

pub use accuracy::{
    ACCURACY_LIMIT, ACCURACY_STEP, ARTIFACT_SUFFIX, AccuracyError, AccuracyInputs,
    AccuracySummary, Artifact, RECORD_SIZE, artifact_name, read_records, sample_count,
    write_accuracy, write_records,
};
pub use calculator::{Calculator, Strategy};
pub use domain::{Domain, Floats};
pub use timing::{Timing, time_calculations};
