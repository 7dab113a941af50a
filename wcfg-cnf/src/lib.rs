//! Assembly of the Chomsky normal form pipeline — `separate_terminals`,
//! then `binarize`, then `nullaryremove`, then `unaryremove`, then `trim`
//! — the CNF invariant check, and a minimal CKY weight evaluator over CNF
//! grammars.

mod cky;
mod cnf;

pub use cky::weight_of;
pub use cnf::{cnf, in_cnf};
