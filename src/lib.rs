//! Weighted context-free grammar transformations: the generalized
//! left-corner transformation and its kin.
//!
//! This crate is a thin aggregate over the `wcfg-*` crates: symbol
//! algebra and fresh-name allocation ([`wcfg_symbol`]), semirings and
//! charts ([`wcfg_semiring`]), the grammar/rule/derivation data model
//! ([`wcfg_grammar`]), weighted fixpoint solvers ([`wcfg_closure`]),
//! structural transforms and left-recursion analysis
//! ([`wcfg_classify`]), unary/nullary elimination ([`wcfg_epsilon`]),
//! speculation and the full GLCT ([`wcfg_glct`]), and Chomsky normal form
//! assembly with a CKY weight evaluator ([`wcfg_cnf`]). [`WcfgExt`]
//! gathers all of it onto [`Grammar`] itself.

mod error;
mod ext;
pub mod format;

pub use error::Error;
pub use ext::WcfgExt;

pub use wcfg_classify::{LeftCornerGraph, Usefulness};
pub use wcfg_closure::{lehmann, AgendaResult, DEFAULT_MAX_ITERS, DEFAULT_TOL};
pub use wcfg_glct::{Glct, Speculation};
pub use wcfg_grammar::{Derivation, Grammar, Rule};
pub use wcfg_semiring::{Boolean, Chart, Count, Real, Semiring, Tropical};
pub use wcfg_symbol::{Symbol, SymbolAllocator};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Scenario 1 of the end-to-end walkthrough: a cyclic unary chain
    // folds its weight onto the rule at the foot of the chain.
    #[test]
    fn unary_chain_weight_collapses_to_the_foot() {
        let s = Symbol::nonterminal("S");
        let x = Symbol::nonterminal("X");
        let y = Symbol::nonterminal("Y");
        let a = Symbol::terminal("a");
        let mut terminals = HashSet::new();
        terminals.insert(a.clone());

        let mut g: Grammar<Real> = Grammar::new(s.clone(), terminals);
        g.add(Real(2.0), s.clone(), vec![x.clone()]);
        g.add(Real(3.0), x, vec![y.clone()]);
        g.add(Real(5.0), y, vec![a]);

        let removed = g.unaryremove();
        let weight: Real = removed
            .rules()
            .iter()
            .find(|r| r.head == *removed.start() && !r.body.is_empty())
            .map(|r| r.weight)
            .unwrap();
        assert_eq!(weight, Real(30.0));
    }

    // Scenario 6: CNF assembly round-trips the balanced-bracket language.
    #[test]
    fn cnf_round_trips_a_bracket_grammar() {
        let s = Symbol::nonterminal("S");
        let a = Symbol::terminal("a");
        let b = Symbol::terminal("b");
        let mut terminals = HashSet::new();
        terminals.insert(a.clone());
        terminals.insert(b.clone());

        let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
        g.add(Boolean(true), s.clone(), vec![a.clone(), s.clone(), b.clone()]);
        g.add(Boolean(true), s, vec![]);

        let alloc = SymbolAllocator::new();
        let transformed = g.cnf(&alloc).unwrap();
        assert!(transformed.num_rules() > 0);

        let aabb = [a.clone(), a, b.clone(), b];
        assert_eq!(transformed.weight_of(&aabb), Boolean(true));
    }

    #[test]
    fn loading_from_text_and_computing_a_treesum() {
        let text = "\
            0.5: S -> a S\n\
            0.5: S ->\n\
        ";
        let g: Grammar<Real> = format::parse(text, Symbol::nonterminal("S"), format::default_is_terminal, |t| {
            t.parse::<f64>().ok().map(Real)
        })
        .unwrap();
        // geometric series: sum_{n>=0} 0.5^n * 0.5 = 1
        let total = g.treesum();
        assert!((total.0 - 1.0).abs() < 1e-6);
    }
}
