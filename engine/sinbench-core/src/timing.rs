use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::{Calculator, Domain};

/// Result of one timing run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Timing {
    /// Sum of the time spent inside each call.
    pub elapsed: Duration,
    /// Number of calls timed.
    pub calls: u64,
}

impl Timing {
    /// Average time per call in nanoseconds, zero when nothing was timed.
    pub fn nanos_per_call(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.elapsed.as_nanos() as f64 / self.calls as f64
        }
    }
}

/// Time how long `calculator` takes to evaluate every value of `domain`.
///
/// Each call is bracketed by its own pair of [`Instant`] reads and only the bracketed intervals
/// are summed. Input and result both go through [`black_box`] so the optimizer can neither fold the
/// call nor prove its result unused. For `(sin, cos)` calculators the whole pair is observed.
///
/// There is no failure path. A calculator that traps takes the process down with it.
pub fn time_calculations<C: Calculator>(calculator: &C, domain: Domain) -> Timing {
    let mut elapsed = Duration::ZERO;
    let mut calls = 0_u64;

    for theta in domain {
        let start = Instant::now();
        let result = calculator.calculate(black_box(theta));
        black_box(result);
        let end = Instant::now();

        elapsed += end - start;
        calls += 1;
    }

    Timing { elapsed, calls }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use sinbench_maths::{SinCosFn, SinFn, standard_sin, standard_sin_cos};

    use super::{Timing, time_calculations};
    use crate::Domain;

    #[test]
    fn visits_every_input_once() {
        let seen = Cell::new(0_u64);
        let last = Cell::new(None);
        let domain = Domain::new(0x3f00_0000, 0x3f00_0fff);

        let timing = time_calculations(
            &|theta: f32| {
                if let Some(previous) = last.get() {
                    assert!(theta.to_bits() > previous);
                }
                last.set(Some(theta.to_bits()));
                seen.set(seen.get() + 1);
                theta
            },
            domain,
        );

        assert_eq!(timing.calls, domain.len());
        assert_eq!(seen.get(), domain.len());
    }

    #[test]
    fn one_more_input_is_one_more_call() {
        let sin: SinFn = standard_sin;
        let short = time_calculations(&sin, Domain::new(0, 999));
        let long = time_calculations(&sin, Domain::new(0, 1000));
        assert_eq!(short.calls, 1000);
        assert_eq!(long.calls, short.calls + 1);
    }

    #[test]
    fn accepts_nan_and_infinite_inputs() {
        // +inf followed by the first few NaN payloads.
        let sin: SinFn = standard_sin;
        let timing = time_calculations(&sin, Domain::new(0x7f80_0000, 0x7f80_00ff));
        assert_eq!(timing.calls, 256);
    }

    #[test]
    fn times_pairs() {
        let sin_cos: SinCosFn = standard_sin_cos;
        let timing = time_calculations(&sin_cos, Domain::new(0, 255));
        assert_eq!(timing.calls, 256);
    }

    #[test]
    fn repeated_runs_are_comparable() {
        let sin: SinFn = standard_sin;
        let domain = Domain::new(0x3f80_0000, 0x3f80_0000 + (1 << 20));

        // Best of a few runs, other tests share the machine.
        let best = || {
            (0..3)
                .map(|_| time_calculations(&sin, domain).elapsed)
                .min()
                .unwrap_or_default()
                .as_nanos() as f64
        };

        let first = best();
        let second = best();
        let ratio = first / second;
        assert!((0.5..=2.0).contains(&ratio), "ratio {ratio}");
    }

    #[test]
    fn nanos_per_call() {
        assert_eq!(Timing::default().nanos_per_call(), 0.0);
        let timing = Timing {
            elapsed: Duration::from_nanos(1000),
            calls: 10,
        };
        assert_eq!(timing.nanos_per_call(), 100.0);
    }
}
