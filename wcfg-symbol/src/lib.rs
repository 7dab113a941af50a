//! Symbol algebra for weighted context-free grammars.
//!
//! A [`Symbol`] is either a terminal, a plain nonterminal, or one of the two
//! symbol shapes invented by the left-corner transformations: `Slash(Y, Z)`
//! ("a Y missing a Z at its left edge") and `Frozen(X)` ("an X whose
//! topmost production lies outside the transformed rule set").

mod allocator;
mod symbol;

pub use allocator::SymbolAllocator;
pub use symbol::Symbol;
