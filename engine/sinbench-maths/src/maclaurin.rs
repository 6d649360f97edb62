//! Truncated Maclaurin series for sine, `x - x^3/3! + x^5/5! - x^7/7!`.
//!
//! The number in each name is the count of series terms kept. Powers go through `powf` so every
//! truncation pays the same per-term cost.

#[inline(always)]
pub fn maclaurin_1(theta: f32) -> f32 {
    theta
}

#[inline(always)]
pub fn maclaurin_2(theta: f32) -> f32 {
    theta - (theta.powf(3.0) / 6.0)
}

#[inline(always)]
pub fn maclaurin_3(theta: f32) -> f32 {
    theta - (theta.powf(3.0) / 6.0) + (theta.powf(5.0) / 120.0)
}

#[inline(always)]
pub fn maclaurin_4(theta: f32) -> f32 {
    theta - (theta.powf(3.0) / 6.0) + (theta.powf(5.0) / 120.0) - (theta.powf(7.0) / 5040.0)
}
