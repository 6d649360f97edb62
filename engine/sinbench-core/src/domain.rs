use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// An inclusive range of `f32` bit patterns, visited in ascending unsigned order.
///
/// Every pattern in the range is produced exactly once, reinterpreted with [`f32::from_bits`].
/// NaN payloads, both infinities, subnormals and both zeros are visited like any other value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Domain {
    first: u32,
    last: u32,
}

impl Domain {
    /// Every single precision bit pattern, `0x0000_0000..=0xffff_ffff`.
    pub const ALL: Domain = Domain {
        first: 0,
        last: u32::MAX,
    };

    /// Creates a domain covering `first..=last`.
    ///
    /// # Panics
    ///
    /// Panics if `first` is greater than `last`.
    pub const fn new(first: u32, last: u32) -> Self {
        assert!(first <= last, "domain must not be empty");
        Self { first, last }
    }

    #[inline(always)]
    pub const fn first(self) -> u32 {
        self.first
    }

    #[inline(always)]
    pub const fn last(self) -> u32 {
        self.last
    }

    /// Number of bit patterns in the domain. `2^32` for [`Domain::ALL`].
    #[inline(always)]
    pub const fn len(self) -> u64 {
        self.last as u64 - self.first as u64 + 1
    }

    /// Returns a fresh iterator over the bit patterns of the domain.
    #[inline(always)]
    pub fn bits(self) -> RangeInclusive<u32> {
        self.first..=self.last
    }

    /// Returns a fresh iterator over the domain reinterpreted as floats.
    #[inline(always)]
    pub fn iter(self) -> Floats {
        Floats { bits: self.bits() }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::ALL
    }
}

impl IntoIterator for Domain {
    type Item = f32;
    type IntoIter = Floats;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Domain`], yielding each bit pattern as an `f32`.
#[derive(Clone, Debug)]
pub struct Floats {
    bits: RangeInclusive<u32>,
}

impl Iterator for Floats {
    type Item = f32;

    #[inline(always)]
    fn next(&mut self) -> Option<f32> {
        self.bits.next().map(f32::from_bits)
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bits.size_hint()
    }
}

impl DoubleEndedIterator for Floats {
    #[inline(always)]
    fn next_back(&mut self) -> Option<f32> {
        self.bits.next_back().map(f32::from_bits)
    }
}

impl FusedIterator for Floats {}

#[cfg(test)]
mod tests {
    use super::Domain;

    #[test]
    fn full_domain_len() {
        assert_eq!(Domain::ALL.len(), 1 << 32);
        assert_eq!(Domain::default(), Domain::ALL);
        assert_eq!(Domain::new(7, 7).len(), 1);
    }

    #[test]
    fn reinterprets_bits() {
        let mut iter = Domain::ALL.iter();
        assert_eq!(iter.next().map(f32::to_bits), Some(0x0000_0000));
        assert_eq!(f32::from_bits(0x0000_0000), 0.0);

        assert_eq!(Domain::new(0x3f80_0000, 0x3f80_0000).iter().next(), Some(1.0));

        let last = Domain::ALL.iter().next_back();
        assert!(last.is_some_and(f32::is_nan));
        assert_eq!(last.map(f32::to_bits), Some(0xffff_ffff));
    }

    #[test]
    fn ascending_and_exact() {
        // Spans +inf, the positive NaNs and the wrap into negative zero.
        let domain = Domain::new(0x7f7f_ff00, 0x8000_00ff);
        let mut expected = domain.first();
        let mut count = 0_u64;
        for x in domain {
            assert_eq!(x.to_bits(), expected);
            expected = expected.wrapping_add(1);
            count += 1;
        }
        assert_eq!(count, domain.len());
        assert_eq!(expected, domain.last() + 1);
    }

    #[test]
    fn visits_special_values() {
        let domain = Domain::new(0x7f7f_ffff, 0x7f80_0001);
        let values = domain.iter().collect::<Vec<_>>();
        assert_eq!(values[0], f32::MAX);
        assert_eq!(values[1], f32::INFINITY);
        assert!(values[2].is_nan());

        let zeros = Domain::new(0x8000_0000, 0x8000_0001).iter().collect::<Vec<_>>();
        assert_eq!(zeros[0].to_bits(), (-0.0_f32).to_bits());
        assert!(zeros[1] < 0.0 && zeros[1].is_subnormal());
    }

    #[test]
    fn restartable() {
        let domain = Domain::new(100, 200);
        let first = domain.iter().map(f32::to_bits).collect::<Vec<_>>();
        let second = domain.iter().map(f32::to_bits).collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first.len() as u64, domain.len());
    }

    #[test]
    #[ignore]
    fn exhaustive_walk() {
        let mut count = 0_u64;
        let mut previous = None;
        for bits in Domain::ALL.iter().map(f32::to_bits) {
            if let Some(previous) = previous {
                assert!(bits > previous);
            }
            previous = Some(bits);
            count += 1;
        }
        assert_eq!(count, 1 << 32);
    }
}
