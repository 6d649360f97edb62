use crate::next_after_f32;

/// Distance between `ours` and `reference` in units in the last place of `reference`.
///
/// Equal values, including `0.0` against `-0.0` and `NaN` against `NaN`, are 0 ulp apart. A
/// `NaN` or infinity on only one side, or infinities of opposite sign, saturate to `u32::MAX`, as
/// do finite distances too large to count in a `u32`.
pub fn ulp_error(ours: f32, reference: f32) -> u32 {
    if ours == reference || (ours.is_nan() && reference.is_nan()) {
        return 0;
    }

    if ours.is_nan() || reference.is_nan() || ours.is_infinite() || reference.is_infinite() {
        return u32::MAX;
    }

    let err = (ours as f64) - (reference as f64);
    let ulp = (next_after_f32(reference, ours) as f64) - (reference as f64);
    let err = (err / ulp).abs();
    if err >= u32::MAX as f64 {
        u32::MAX
    } else {
        err as u32
    }
}

#[cfg(test)]
mod tests {
    use super::ulp_error;

    #[test]
    fn basics() {
        assert_eq!(ulp_error(1.0, 1.0), 0);
        assert_eq!(ulp_error(0.0, -0.0), 0);
        assert_eq!(ulp_error(f32::NAN, f32::NAN), 0);
        assert_eq!(ulp_error(1.0_f32.next_up(), 1.0), 1);
        assert_eq!(ulp_error(1.0_f32.next_down(), 1.0), 1);
        assert_eq!(ulp_error(f32::NAN, 1.0), u32::MAX);
        assert_eq!(ulp_error(1.0, f32::INFINITY), u32::MAX);
        assert_eq!(ulp_error(f32::INFINITY, f32::NEG_INFINITY), u32::MAX);
    }

    #[test]
    fn opposite_signs() {
        // Measured in ulps of the reference, 2^-24 just below 1.0 and 2^104 just below MAX.
        assert_eq!(ulp_error(-1.0, 1.0), 1 << 25);
        assert_eq!(ulp_error(f32::MAX, -f32::MAX), (1 << 25) - 2);
    }

    #[test]
    fn saturates_far_from_tiny_reference() {
        assert_eq!(ulp_error(1.0, f32::from_bits(1)), u32::MAX);
        assert_eq!(ulp_error(-1.0, f32::from_bits(1)), u32::MAX);
    }

    #[test]
    fn counts_whole_steps() {
        let mut x = 1.0_f32;
        for _ in 0..10 {
            x = x.next_up();
        }
        assert_eq!(ulp_error(x, 1.0), 10);
    }
}
