//! Structural grammar transforms that don't change the weighted language:
//! trimming, start/terminal separation, binarization, rule unfolding, and
//! left-recursion analysis.

mod binarize;
mod left_recursion;
mod separate_start;
mod separate_terminals;
mod trim;
mod unfold;
mod useful;

pub use binarize::binarize;
pub use left_recursion::{find_lr_rules, is_left_recursive, sufficient_xs, LeftCornerGraph};
pub use separate_start::separate_start;
pub use separate_terminals::separate_terminals;
pub use trim::{cotrim, trim};
pub use unfold::unfold;
pub use useful::Usefulness;
