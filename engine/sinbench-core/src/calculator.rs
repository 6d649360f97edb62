/// A candidate evaluated once per input by the harness.
///
/// Implemented for every `Fn(f32) -> O`, so plain functions such as
/// [`sinbench_maths::SinFn`] and [`sinbench_maths::SinCosFn`] are calculators as they are. How the
/// value is computed, portable arithmetic, a platform intrinsic or inline assembly, is invisible to
/// the harness.
pub trait Calculator {
    /// `f32` for sine, `(f32, f32)` for a combined sine and cosine.
    type Output: Copy;

    fn calculate(&self, theta: f32) -> Self::Output;
}

impl<F, O> Calculator for F
where
    F: Fn(f32) -> O,
    O: Copy,
{
    type Output = O;

    #[inline(always)]
    fn calculate(&self, theta: f32) -> O {
        self(theta)
    }
}

/// A calculator registered under a name.
///
/// The name identifies the candidate in console output and names its accuracy artifact.
#[derive(Clone, Copy, Debug)]
pub struct Strategy<C> {
    pub name: &'static str,
    pub calculator: C,
}

impl<C: Calculator> Strategy<C> {
    pub const fn new(name: &'static str, calculator: C) -> Self {
        Self { name, calculator }
    }
}
