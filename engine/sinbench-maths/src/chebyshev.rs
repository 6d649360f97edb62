//! Chebyshev polynomial terms used as sine candidates.
//!
//! These are the polynomials `T0..T3` as the benchmark has always defined them, including the
//! `3x^3` leading coefficient of `chebyshev_3`. They are poor approximations of sine and exist to
//! show what the accuracy artifacts look like for a badly wrong candidate.

/// Base case of the expansion. Always `1.0`.
#[inline(always)]
pub fn chebyshev_0(_theta: f32) -> f32 {
    1.0
}

#[inline(always)]
pub fn chebyshev_1(theta: f32) -> f32 {
    theta
}

#[inline(always)]
pub fn chebyshev_2(theta: f32) -> f32 {
    (2.0 * theta.powf(2.0)) - 1.0
}

#[inline(always)]
pub fn chebyshev_3(theta: f32) -> f32 {
    (3.0 * theta.powf(3.0)) - (3.0 * theta)
}
