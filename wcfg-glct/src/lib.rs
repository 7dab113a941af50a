//! Symbol invention (`Slash`/`Frozen`) and the two constructions built on
//! it: speculation, and the full generalized left-corner transformation.

mod glct;
mod slash_names;
mod speculation;

pub use glct::Glct;
pub use speculation::Speculation;
