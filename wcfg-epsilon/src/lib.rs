//! Unary-chain removal and nullary-rule removal (including the optimized
//! `Slash`-nullary variant used by speculation/GLCT output).

mod nullary;
mod nullary_slash;
mod unary;

pub use nullary::{null_weight, null_weight_start, nullaryremove, push_null_weights};
pub use nullary_slash::elim_nullary_slash;
pub use unary::unaryremove;
