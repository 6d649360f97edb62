use sinbench_core::Strategy;
use sinbench_maths::{
    SinCosFn, SinFn, chebyshev_0, chebyshev_1, chebyshev_2, chebyshev_3, maclaurin_1,
    maclaurin_2, maclaurin_3, maclaurin_4, minimax_sin, minimax_sin_cos, standard_sin,
    standard_sin_cos,
};

pub const BASELINE_NAME: &str = "standard";

/// The ordered set of candidates a report runs over.
///
/// `sin` holds the baseline as its first entry so it is timed like every other candidate and acts
/// as the zero difference control. `sin_cos` candidates are only timed.
pub struct Registry {
    pub baseline: Strategy<SinFn>,
    pub sin: Vec<Strategy<SinFn>>,
    pub sin_cos: Vec<Strategy<SinCosFn>>,
}

impl Registry {
    /// Every candidate available on the current target.
    ///
    /// The x87 candidates exist only on `x86_64` and are left out elsewhere.
    pub fn standard() -> Self {
        let baseline = Strategy::new(BASELINE_NAME, standard_sin as SinFn);

        let mut sin = vec![baseline];
        #[cfg(target_arch = "x86_64")]
        sin.push(Strategy::new("x87", sinbench_maths::x87_sin as SinFn));
        sin.extend([
            Strategy::new("maclaurin_1", maclaurin_1 as SinFn),
            Strategy::new("maclaurin_2", maclaurin_2 as SinFn),
            Strategy::new("maclaurin_3", maclaurin_3 as SinFn),
            Strategy::new("maclaurin_4", maclaurin_4 as SinFn),
            Strategy::new("chebyshev_0", chebyshev_0 as SinFn),
            Strategy::new("chebyshev_1", chebyshev_1 as SinFn),
            Strategy::new("chebyshev_2", chebyshev_2 as SinFn),
            Strategy::new("chebyshev_3", chebyshev_3 as SinFn),
            Strategy::new("minimax_7", minimax_sin as SinFn),
        ]);

        let mut sin_cos = vec![Strategy::new(
            "standard_sin_cos",
            standard_sin_cos as SinCosFn,
        )];
        #[cfg(target_arch = "x86_64")]
        sin_cos.push(Strategy::new(
            "x87_sin_cos",
            sinbench_maths::x87_sin_cos as SinCosFn,
        ));
        sin_cos.push(Strategy::new("minimax_sin_cos", minimax_sin_cos as SinCosFn));

        Self {
            baseline,
            sin,
            sin_cos,
        }
    }

    /// Single output candidates compared against the baseline, i.e. everything but the baseline.
    pub fn candidates(&self) -> impl Iterator<Item = &Strategy<SinFn>> {
        self.sin
            .iter()
            .filter(|strategy| strategy.name != self.baseline.name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{BASELINE_NAME, Registry};

    #[test]
    fn baseline_leads() {
        let registry = Registry::standard();
        assert_eq!(registry.sin[0].name, BASELINE_NAME);
        assert_eq!(registry.baseline.name, BASELINE_NAME);
        assert_eq!(registry.candidates().count(), registry.sin.len() - 1);
        assert!(registry.candidates().all(|s| s.name != BASELINE_NAME));
    }

    #[test]
    fn names_are_unique() {
        let registry = Registry::standard();
        let names = registry
            .sin
            .iter()
            .map(|s| s.name)
            .chain(registry.sin_cos.iter().map(|s| s.name))
            .collect::<Vec<_>>();
        let unique = names.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn x87_only_on_x86_64() {
        let registry = Registry::standard();
        let has_x87 = registry.sin.iter().any(|s| s.name == "x87");
        let has_x87_pair = registry.sin_cos.iter().any(|s| s.name == "x87_sin_cos");
        assert_eq!(has_x87, cfg!(target_arch = "x86_64"));
        assert_eq!(has_x87_pair, cfg!(target_arch = "x86_64"));
    }

    #[test]
    fn baseline_matches_std() {
        let registry = Registry::standard();
        assert_eq!((registry.baseline.calculator)(1.0), 1.0_f32.sin());
    }
}
