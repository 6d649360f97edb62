//! Sine candidates for the benchmark harness.
//!
//! Every candidate is a plain function with one of two shapes, [`SinFn`] for sine alone and
//! [`SinCosFn`] for the combined sine and cosine. The harness treats them as interchangeable.

mod chebyshev;
mod maclaurin;
mod minimax;
mod next_after_f32;
mod ulp;
#[cfg(target_arch = "x86_64")]
mod x87;

pub use chebyshev::{chebyshev_0, chebyshev_1, chebyshev_2, chebyshev_3};
pub use maclaurin::{maclaurin_1, maclaurin_2, maclaurin_3, maclaurin_4};
pub use minimax::{minimax_sin, minimax_sin_cos, sin_cos_pi_f32};
pub use next_after_f32::next_after_f32;
pub use ulp::ulp_error;
#[cfg(target_arch = "x86_64")]
pub use x87::{x87_sin, x87_sin_cos};

/// A sine candidate.
pub type SinFn = fn(f32) -> f32;

/// A combined sine and cosine candidate, returning `(sin, cos)`.
pub type SinCosFn = fn(f32) -> (f32, f32);

/// The reference sine every other candidate is measured against.
#[inline(always)]
pub fn standard_sin(theta: f32) -> f32 {
    theta.sin()
}

/// The reference sine and cosine pair.
#[inline(always)]
pub fn standard_sin_cos(theta: f32) -> (f32, f32) {
    (theta.sin(), theta.cos())
}
