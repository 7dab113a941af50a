//! The [`Semiring`] abstraction and the default-zero [`Chart`] built on it,
//! plus the reference semirings `wcfg` ships: [`Boolean`], [`Real`],
//! [`Tropical`], and [`Count`].

mod boolean;
mod chart;
mod count;
mod real;
mod tropical;

pub use boolean::Boolean;
pub use chart::Chart;
pub use count::Count;
pub use real::Real;
pub use tropical::Tropical;

/// A commutative-addition semiring with a closure operator and a metric.
///
/// `add` must be commutative; `mul` need not be (the agenda, §4.E,
/// multiplies rule-body contributions in left-to-right order specifically
/// to support non-commutative semirings). `star(x)` is the Kleene/Lehmann
/// closure `one ⊕ x ⊕ x⊗x ⊕ …` when it exists for `x`; implementations may
/// make it a partial operation (see [`Count`]).
pub trait Semiring: Clone + PartialEq + std::fmt::Debug {
    /// The `⊕`-identity and `⊗`-annihilator.
    fn zero() -> Self;
    /// The `⊗`-identity.
    fn one() -> Self;
    /// `⊕`.
    fn add(&self, other: &Self) -> Self;
    /// `⊗`.
    fn mul(&self, other: &Self) -> Self;
    /// The reflexive-transitive closure `one ⊕ self ⊕ self⊗self ⊕ …`.
    fn star(&self) -> Self;
    /// A semimetric used to detect fixpoint convergence: symmetric, and
    /// zero iff the two values are equal.
    fn metric(&self, other: &Self) -> f64;

    /// Builds an empty chart over this semiring.
    fn chart<K: Eq + std::hash::Hash + Clone>() -> Chart<K, Self>
    where
        Self: Sized,
    {
        Chart::new()
    }
}
