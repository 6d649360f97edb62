/// Calculate the next representable floating-point value following x in the direction of y.
///
/// If y is less than x, this returns the largest representable number less than x.
///
/// * If `x` equals `y`, then `y` is returned.
/// * If `x` or `y` is a `NaN`, a `NaN` is returned.
/// * If `x` is the largest finite value and the step would overflow, `inf` with the sign of `x`
///   is returned.
pub fn next_after_f32(x: f32, y: f32) -> f32 {
    if x.is_nan() || y.is_nan() {
        return x + y;
    }

    let ux = x.to_bits();
    let uy = y.to_bits();

    if ux == uy {
        return y;
    }

    let ax = ux & 0x7fff_ffff;
    let ay = uy & 0x7fff_ffff;

    let ux = if ax == 0 {
        if ay == 0 {
            return y;
        }
        // Smallest subnormal with the sign of y.
        (uy & 0x8000_0000) | 1
    } else if ax > ay || ((ux ^ uy) & 0x8000_0000) != 0 {
        ux - 1
    } else {
        ux + 1
    };

    f32::from_bits(ux)
}
