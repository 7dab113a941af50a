//! Weighted fixpoint solvers: Lehmann's reflexive-transitive closure over
//! an arbitrary node set, and the semi-naive agenda evaluator for
//! nonterminal tree-sums over a grammar.

mod agenda;
mod lehmann;

pub use agenda::{treesum, AgendaResult, DEFAULT_MAX_ITERS, DEFAULT_TOL};
pub use lehmann::lehmann;
