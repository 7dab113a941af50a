use wcfg_grammar::Grammar;
use wcfg_semiring::Semiring;
use wcfg_symbol::SymbolAllocator;

/// Ensures the start symbol does not appear on the right-hand side of any
/// rule, introducing a fresh start symbol `S' -> S` if it does. Returns
/// the grammar unchanged when the start symbol is already never used on a
/// right-hand side.
pub fn separate_start<R: Semiring>(grammar: &Grammar<R>, alloc: &SymbolAllocator) -> Grammar<R> {
    let start_on_rhs = grammar
        .rules()
        .iter()
        .any(|r| r.body.iter().any(|s| s == grammar.start()));
    if !start_on_rhs {
        return grammar.clone();
    }

    let new_start = alloc.fresh_nonterminal("S");
    let mut new = grammar.spawn_with_start(new_start.clone());
    new.add(R::one(), new_start, vec![grammar.start().clone()]);
    for rule in grammar.rules() {
        new.add(rule.weight.clone(), rule.head.clone(), rule.body.clone());
    }
    new
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wcfg_semiring::Boolean;
    use wcfg_symbol::Symbol;

    #[test]
    fn introduces_fresh_start_when_start_is_on_a_rhs() {
        let s = Symbol::nonterminal("S");
        let a = Symbol::terminal("a");
        let mut terminals = HashSet::new();
        terminals.insert(a.clone());
        let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
        g.add(Boolean(true), s.clone(), vec![s.clone(), a]);

        let alloc = SymbolAllocator::new();
        let new = separate_start(&g, &alloc);
        assert_ne!(new.start(), &s);
        assert!(!new.rules().iter().any(|r| r.body.contains(new.start())));
    }

    #[test]
    fn leaves_grammar_unchanged_when_start_never_on_rhs() {
        let s = Symbol::nonterminal("S");
        let a = Symbol::terminal("a");
        let mut terminals = HashSet::new();
        terminals.insert(a.clone());
        let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
        g.add(Boolean(true), s.clone(), vec![a]);

        let alloc = SymbolAllocator::new();
        let new = separate_start(&g, &alloc);
        assert_eq!(new.start(), &s);
        assert_eq!(new.num_rules(), 1);
    }
}
