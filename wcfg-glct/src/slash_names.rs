use std::collections::HashSet;

use wcfg_symbol::Symbol;

/// `Slash(x, y)` with the default collision id (0) unless that exact
/// symbol already exists among the parent grammar's nonterminals, in
/// which case `id` is used instead. Shared by [`crate::Speculation`] and
/// [`crate::Glct`], which both invent fresh `Slash`/`Frozen` symbols
/// relative to the same parent grammar.
pub(crate) fn slash(x: &Symbol, y: &Symbol, id: u32, existing: &HashSet<Symbol>) -> Symbol {
    let default = Symbol::slash(x.clone(), y.clone(), 0);
    if existing.contains(&default) {
        Symbol::slash(x.clone(), y.clone(), id)
    } else {
        default
    }
}

/// `Frozen(x)` with the default collision id (0) unless that exact symbol
/// already exists among the parent grammar's nonterminals. Terminals are
/// their own frozen form and are returned unchanged.
pub(crate) fn frozen(x: &Symbol, id: u32, existing: &HashSet<Symbol>) -> Symbol {
    if x.is_terminal() {
        return x.clone();
    }
    let default = Symbol::frozen(x.clone(), 0);
    if existing.contains(&default) {
        Symbol::frozen(x.clone(), id)
    } else {
        default
    }
}
