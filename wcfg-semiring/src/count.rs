use crate::Semiring;

/// The nonnegative-integer counting semiring: `⊕ = +`, `⊗ = ×`, saturating
/// on overflow. Counts the number of distinct derivations rather than
/// their probability mass.
///
/// `star` is a genuinely partial operation here: the closure `1 + x + x² +
/// …` only has a finite integer value when `x == 0` (no cyclic mass to
/// sum), in which case it is `1`. Any other input means the underlying
/// grammar has infinitely many derivations through that cycle, which
/// cannot be represented as a finite count — `star` saturates to
/// `u64::MAX` in that case rather than panicking, since the agenda (§4.E)
/// must still be able to call it unconditionally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Count(pub u64);

impl Semiring for Count {
    fn zero() -> Self {
        Count(0)
    }

    fn one() -> Self {
        Count(1)
    }

    fn add(&self, other: &Self) -> Self {
        Count(self.0.saturating_add(other.0))
    }

    fn mul(&self, other: &Self) -> Self {
        Count(self.0.saturating_mul(other.0))
    }

    fn star(&self) -> Self {
        if self.0 == 0 { Count(1) } else { Count(u64::MAX) }
    }

    fn metric(&self, other: &Self) -> f64 {
        (self.0 as i128 - other.0 as i128).unsigned_abs() as f64
    }
}

impl From<u64> for Count {
    fn from(n: u64) -> Self {
        Count(n)
    }
}
