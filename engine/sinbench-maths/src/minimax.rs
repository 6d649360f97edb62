// Based on https://marc-b-reynolds.github.io/math/2020/03/11/SinCosPi.html
//
// Minimax polynomials for sin(pi x) and cos(pi x) on [-1/4,1/4], evaluated in
// half-turns and applied to radians by scaling the input with 1/pi.

use std::f32::consts::{FRAC_1_PI, PI};

const SIN_PI_7_K: [f32; 3] = [
    f32::from_bits(0xc0a55ddd), // -0x1.4abbbap2
    f32::from_bits(0x40232f6e), // 0x1.465edcp1
    f32::from_bits(0xbf16cf2d), // -0x1.2d9e5ap-1
];

const COS_PI_8_K: [f32; 4] = [
    f32::from_bits(0xc09de9e6), // -0x1.3bd3ccp2
    f32::from_bits(0x4081e0db), // 0x1.03c1b6p2
    f32::from_bits(0xbfaadb42), // -0x1.55b684p0
    f32::from_bits(0x3e6b0f14), // 0x1.d61e28p-3
];

// Low part of pi, folded into the sine polynomial's constant term.
const PI_LO: f32 = -8.742278e-8;

/// Simultaneously computes the sine and cosine of `a` expressed in multiples of
/// *pi* radians, or half-turns.
///
/// Returns `(sin(a * pi), cos(a * pi))`
pub fn sin_cos_pi_f32(a: f32) -> (f32, f32) {
    // cos_pi(a) = 1.0 for |a| > 2^24, but cos_pi(Inf) = NaN
    let a = if a.abs() < 16777216.0 { a } else { a * 0.0 };

    // Range reduction to quarter turns.
    let r = (a + a).round_ties_even();
    let quadrant = r as i32 as u32;
    let r = r.mul_add(-0.5, a);
    let r2 = r * r;

    // Reconstruct signs early.
    let sign_x = (quadrant >> 1) << 31;
    let sign_y = sign_x ^ (quadrant << 31);
    let r_sign = f32::from_bits(r.to_bits() ^ sign_y);
    let r2_sign = f32::from_bits(r2.to_bits() ^ sign_x);
    let one_sign = f32::from_bits(1.0_f32.to_bits() ^ sign_x);

    let c = COS_PI_8_K[3];
    let c = c.mul_add(r2, COS_PI_8_K[2]);
    let c = c.mul_add(r2, COS_PI_8_K[1]);
    let c = c.mul_add(r2, COS_PI_8_K[0]);
    let c = c.mul_add(r2_sign, one_sign);

    let s = SIN_PI_7_K[2];
    let s = s.mul_add(r2, SIN_PI_7_K[1]);
    let s = s.mul_add(r2, SIN_PI_7_K[0]);
    let s = r_sign.mul_add(PI, r_sign * r2.mul_add(s, PI_LO));

    let (s, c) = if quadrant & 1 != 0 { (c, s) } else { (s, c) };

    // sin_pi(+n) is +0 and sin_pi(-n) is -0 for integers n
    let s = if a == a.floor() { a * 0.0 } else { s };

    (s, c)
}

/// Sine of `theta` radians using the half-turn minimax kernel.
#[inline(always)]
pub fn minimax_sin(theta: f32) -> f32 {
    sin_cos_pi_f32(theta * FRAC_1_PI).0
}

/// Sine and cosine of `theta` radians using the half-turn minimax kernel.
#[inline(always)]
pub fn minimax_sin_cos(theta: f32) -> (f32, f32) {
    sin_cos_pi_f32(theta * FRAC_1_PI)
}
