use std::collections::HashMap;

use wcfg_grammar::Grammar;
use wcfg_semiring::Semiring;
use wcfg_symbol::{Symbol, SymbolAllocator};

/// Ensures every terminal is produced by a dedicated preterminal rule
/// `X -> a`, rewriting any rule with a longer body that mentions a
/// terminal to route through one. Rules that are already a single
/// terminal production (`X -> a`) are left untouched.
pub fn separate_terminals<R: Semiring>(grammar: &Grammar<R>, alloc: &SymbolAllocator) -> Grammar<R> {
    let mut new = grammar.spawn();
    let mut preterminals: HashMap<Symbol, Symbol> = HashMap::new();

    for rule in grammar.rules() {
        if rule.body.len() == 1 && grammar.is_terminal(&rule.body[0]) {
            new.add(rule.weight.clone(), rule.head.clone(), rule.body.clone());
            continue;
        }

        let body = rule
            .body
            .iter()
            .map(|y| {
                if grammar.is_terminal(y) {
                    preterminals
                        .entry(y.clone())
                        .or_insert_with(|| {
                            let p = alloc.fresh_nonterminal("T");
                            new.add(R::one(), p.clone(), vec![y.clone()]);
                            p
                        })
                        .clone()
                } else {
                    y.clone()
                }
            })
            .collect();
        new.add(rule.weight.clone(), rule.head.clone(), body);
    }

    new
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wcfg_semiring::Boolean;

    #[test]
    fn mixed_body_terminal_gets_a_preterminal() {
        let s = Symbol::nonterminal("S");
        let a = Symbol::terminal("a");
        let b = Symbol::nonterminal("B");
        let mut terminals = HashSet::new();
        terminals.insert(a.clone());
        let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
        g.add(Boolean(true), s.clone(), vec![a.clone(), b]);

        let alloc = SymbolAllocator::new();
        let new = separate_terminals(&g, &alloc);
        for rule in new.rules() {
            if rule.body.len() > 1 {
                assert!(rule.body.iter().all(|s| !new.is_terminal(s)));
            }
        }
    }

    #[test]
    fn single_terminal_body_is_untouched() {
        let s = Symbol::nonterminal("S");
        let a = Symbol::terminal("a");
        let mut terminals = HashSet::new();
        terminals.insert(a.clone());
        let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
        g.add(Boolean(true), s.clone(), vec![a.clone()]);

        let alloc = SymbolAllocator::new();
        let new = separate_terminals(&g, &alloc);
        assert_eq!(new.num_rules(), 1);
        assert_eq!(new.rules()[0].body, vec![a]);
    }
}
