use wcfg_classify::{binarize, separate_terminals, trim};
use wcfg_epsilon::{nullaryremove, unaryremove};
use wcfg_grammar::{Error, Grammar};
use wcfg_semiring::Semiring;
use wcfg_symbol::SymbolAllocator;

/// Rewrites `grammar` into an equivalent Chomsky normal form grammar:
/// every rule is either nullary with head `S`, unary with a terminal
/// body, or binary with two non-start nonterminal bodies.
///
/// The pipeline, in application order, is `separate_terminals`,
/// `binarize`, `nullaryremove`, `unaryremove`, `trim` — ported from the
/// original's own `.separate_terminals().binarize().nullaryremove()
/// .unaryremove().trim()` chain. Returns `Error::Precondition` if the
/// result somehow fails the CNF check below (a defensive assertion: a
/// correct pipeline can never actually trigger it).
pub fn cnf<R: Semiring>(grammar: &Grammar<R>, alloc: &SymbolAllocator) -> Result<Grammar<R>, Error> {
    let g = separate_terminals(grammar, alloc);
    let g = binarize(&g, alloc);
    let g = nullaryremove(&g, alloc, false, false)?;
    let g = unaryremove(&g);
    let g = trim(&g);

    if !in_cnf(&g) {
        return Err(Error::Precondition {
            operation: "cnf",
            reason: "pipeline output failed the CNF invariant check".to_string(),
        });
    }
    Ok(g)
}

/// True iff every rule of `grammar` is (i) nullary with head `S`, (ii)
/// unary with a terminal body, or (iii) binary with two non-start
/// nonterminal bodies.
pub fn in_cnf<R: Semiring>(grammar: &Grammar<R>) -> bool {
    grammar.rules().iter().all(|r| match r.body.len() {
        0 => &r.head == grammar.start(),
        1 => grammar.is_terminal(&r.body[0]),
        2 => r.body.iter().all(|y| grammar.is_nonterminal(y) && y != grammar.start()),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight_of;
    use std::collections::HashSet;
    use wcfg_semiring::Boolean;
    use wcfg_symbol::Symbol;

    fn bracket_grammar() -> Grammar<Boolean> {
        // 1:S -> a S b, 1:S -> (epsilon)
        let s = Symbol::nonterminal("S");
        let a = Symbol::terminal("a");
        let b = Symbol::terminal("b");
        let mut terminals = HashSet::new();
        terminals.insert(a.clone());
        terminals.insert(b.clone());
        let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
        g.add(Boolean(true), s.clone(), vec![a, s.clone(), b]);
        g.add(Boolean(true), s, vec![]);
        g
    }

    #[test]
    fn cnf_output_satisfies_the_invariant() {
        let g = bracket_grammar();
        let alloc = SymbolAllocator::new();
        let transformed = cnf(&g, &alloc).unwrap();
        assert!(in_cnf(&transformed));
    }

    #[test]
    fn cnf_preserves_the_balanced_bracket_language() {
        let g = bracket_grammar();
        let alloc = SymbolAllocator::new();
        let transformed = cnf(&g, &alloc).unwrap();

        let a = Symbol::terminal("a");
        let b = Symbol::terminal("b");
        let aabb = [a.clone(), a.clone(), b.clone(), b.clone()];
        let empty: [Symbol; 0] = [];
        let ab = [a.clone(), b.clone()];
        let aab = [a, a, b];

        assert_eq!(weight_of(&transformed, &aabb), Boolean(true));
        assert_eq!(weight_of(&transformed, &empty), Boolean(true));
        assert_eq!(weight_of(&transformed, &ab), Boolean(true));
        assert_eq!(weight_of(&transformed, &aab), Boolean(false));
    }
}
