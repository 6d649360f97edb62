//! Sine through the x87 `fsin` and `fsincos` instructions.
//!
//! Only compiled for `x86_64`. Callers on other targets must leave these strategies out.

use core::arch::asm;

/// Sine of `theta` computed by `fsin`.
///
/// `fsin` leaves its operand untouched when `|theta| >= 2^63`, so the input comes back unchanged
/// for those values.
#[inline(always)]
pub fn x87_sin(theta: f32) -> f32 {
    let mut value = theta;

    // SAFETY: The value is pushed and popped so the x87 stack is balanced on exit, and the whole
    // stack is declared clobbered. The pointer is valid for reads and writes of an f32.
    unsafe {
        asm!(
            "fld dword ptr [{value}]",
            "fsin",
            "fstp dword ptr [{value}]",
            value = in(reg) &raw mut value,
            out("st(0)") _, out("st(1)") _, out("st(2)") _, out("st(3)") _,
            out("st(4)") _, out("st(5)") _, out("st(6)") _, out("st(7)") _,
            options(nostack),
        );
    }

    value
}

/// Sine and cosine of `theta` computed by a single `fsincos`.
///
/// Returns `(sin(theta), cos(theta))`.
#[inline(always)]
pub fn x87_sin_cos(theta: f32) -> (f32, f32) {
    let mut sin = 0.0_f32;
    let mut cos = 0.0_f32;

    // SAFETY: `fsincos` replaces st(0) with the sine and pushes the cosine, both are popped below
    // so the stack is balanced on exit. All pointers are valid for an f32.
    unsafe {
        asm!(
            "fld dword ptr [{theta}]",
            "fsincos",
            "fstp dword ptr [{cos}]",
            "fstp dword ptr [{sin}]",
            theta = in(reg) &raw const theta,
            cos = in(reg) &raw mut cos,
            sin = in(reg) &raw mut sin,
            out("st(0)") _, out("st(1)") _, out("st(2)") _, out("st(3)") _,
            out("st(4)") _, out("st(5)") _, out("st(6)") _, out("st(7)") _,
            options(nostack),
        );
    }

    (sin, cos)
}
