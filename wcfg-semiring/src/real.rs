use crate::Semiring;

/// The nonnegative-real probability semiring: ordinary `+`/`*`,
/// `star(x) = 1 / (1 - x)`.
///
/// `star` is only finite for `x < 1`; callers that run Lehmann's closure
/// (§4.F) or the agenda (§4.E) on a `Real`-weighted grammar with a cyclic
/// unary/nullary mass ≥ 1 will see `f64::INFINITY` propagate, matching the
/// reference's own unchecked `1/(1-x)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Real(pub f64);

impl Semiring for Real {
    fn zero() -> Self {
        Real(0.0)
    }

    fn one() -> Self {
        Real(1.0)
    }

    fn add(&self, other: &Self) -> Self {
        Real(self.0 + other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        Real(self.0 * other.0)
    }

    fn star(&self) -> Self {
        Real(1.0 / (1.0 - self.0))
    }

    fn metric(&self, other: &Self) -> f64 {
        (self.0 - other.0).abs()
    }
}

impl From<f64> for Real {
    fn from(x: f64) -> Self {
        Real(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_matches_geometric_series() {
        // 1 + 1/2 + 1/4 + ... = 2
        assert!((Real(0.5).star().0 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn metric_is_abs_difference() {
        assert_eq!(Real(3.0).metric(&Real(1.0)), 2.0);
    }
}
