use std::collections::HashSet;

use wcfg_classify::{binarize, separate_start};
use wcfg_closure::{treesum, DEFAULT_MAX_ITERS, DEFAULT_TOL};
use wcfg_grammar::{Error, Grammar};
use wcfg_semiring::{Chart, Semiring};
use wcfg_symbol::{Symbol, SymbolAllocator};

/// The per-nonterminal weight of deriving the empty string, computed over
/// the subgrammar of rules whose body contains no terminal.
pub fn null_weight<R: Semiring>(grammar: &Grammar<R>) -> Chart<Symbol, R> {
    let mut epsilon_only: Grammar<R> = Grammar::new(grammar.start().clone(), HashSet::new());
    for rule in grammar.rules() {
        if !rule.body.iter().any(|y| grammar.is_terminal(y)) {
            epsilon_only.add(rule.weight.clone(), rule.head.clone(), rule.body.clone());
        }
    }
    treesum(&epsilon_only, DEFAULT_MAX_ITERS, DEFAULT_TOL).chart
}

/// The weight of deriving the empty string from the start symbol.
pub fn null_weight_start<R: Semiring>(grammar: &Grammar<R>) -> R {
    null_weight(grammar).get(grammar.start())
}

fn default_rename(x: &Symbol) -> Symbol {
    Symbol::nonterminal(format!("${x}"))
}

/// Pushes the null weights of every nonterminal (except the start symbol)
/// into the rules that mention it, producing a grammar with no nullary
/// rules other than (at most) one at the start symbol.
///
/// Assumes the start symbol never appears on a right-hand side (callers
/// should run [`wcfg_classify::separate_start`] first).
///
/// When `recovery` is set, nonterminals whose null weight was folded away
/// keep a renamed nullary-free variant alongside a recovery rule back to
/// the original name, so that other parts of the grammar referencing the
/// pre-transformation name still resolve.
pub fn push_null_weights<R: Semiring>(
    grammar: &Grammar<R>,
    null_weight: &Chart<Symbol, R>,
    recovery: bool,
) -> Grammar<R> {
    debug_assert!(
        !grammar.rules().iter().any(|r| r.body.contains(grammar.start())),
        "push_null_weights requires separate_start to have been applied first"
    );

    let rename = |x: &Symbol| -> Symbol {
        if null_weight.get(x) == R::zero() || x == grammar.start() {
            x.clone()
        } else {
            default_rename(x)
        }
    };

    let mut new = grammar.spawn();
    new.add(null_weight.get(grammar.start()), grammar.start().clone(), vec![]);

    if recovery {
        for x in grammar.nonterminals() {
            let renamed = rename(x);
            if &renamed == x {
                continue;
            }
            new.add(null_weight.get(x), x.clone(), vec![]);
            new.add(R::one(), x.clone(), vec![renamed]);
        }
    }

    for rule in grammar.rules() {
        if rule.body.is_empty() {
            continue;
        }
        for mask in 0..(1u32 << rule.body.len()) {
            let mut weight = rule.weight.clone();
            let mut new_body = Vec::new();
            for (i, y) in rule.body.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    weight = weight.mul(&null_weight.get(y));
                } else {
                    new_body.push(rename(y));
                }
            }
            if !new_body.is_empty() {
                new.add(weight, rename(&rule.head), new_body);
            }
        }
    }

    new
}

/// Returns an equivalent grammar with no nullary rules except (at most)
/// one at the start symbol. Binarizes first by default, since a wide rule
/// makes the power set over its body positions expensive; set
/// `do_binarize` to `false` only when the grammar is already binarized —
/// passing `false` on a grammar that still has a rule body longer than two
/// symbols is a precondition violation and returns `Error::Precondition`
/// rather than silently paying the exponential cost.
pub fn nullaryremove<R: Semiring>(
    grammar: &Grammar<R>,
    alloc: &SymbolAllocator,
    do_binarize: bool,
    recovery: bool,
) -> Result<Grammar<R>, Error> {
    let binarized = if do_binarize {
        binarize(grammar, alloc)
    } else {
        if grammar.rules().iter().any(|r| r.body.len() > 2) {
            return Err(Error::Precondition {
                operation: "nullaryremove",
                reason: "grammar has a rule body longer than two symbols; \
                         pass do_binarize: true or binarize first"
                    .to_string(),
            });
        }
        grammar.clone()
    };
    let started = separate_start(&binarized, alloc);
    let nw = null_weight(&started);
    Ok(push_null_weights(&started, &nw, recovery))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcfg_semiring::Real;

    #[test]
    fn epsilon_production_is_eliminated_except_at_start() {
        // S -> A a, A -> epsilon (weight 0.5) | b
        let s = Symbol::nonterminal("S");
        let a = Symbol::nonterminal("A");
        let term_a = Symbol::terminal("a");
        let term_b = Symbol::terminal("b");
        let mut terminals = HashSet::new();
        terminals.insert(term_a.clone());
        terminals.insert(term_b.clone());
        let mut g: Grammar<Real> = Grammar::new(s.clone(), terminals);
        g.add(Real(1.0), s.clone(), vec![a.clone(), term_a.clone()]);
        g.add(Real(0.5), a.clone(), vec![]);
        g.add(Real(1.0), a, vec![term_b]);

        let alloc = SymbolAllocator::new();
        let new = nullaryremove(&g, &alloc, true, false).unwrap();
        // No nullary rule should survive except possibly one at the (new) start.
        for rule in new.rules() {
            if rule.body.is_empty() {
                assert_eq!(rule.head, *new.start());
            }
        }
        // S should now directly derive "a" with weight 0.5 (A's null weight).
        let direct_weight: f64 = new
            .rules()
            .iter()
            .filter(|r| r.body == vec![term_a.clone()])
            .map(|r| r.weight.0)
            .sum();
        assert!((direct_weight - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rejects_wide_bodies_when_binarize_is_opted_out() {
        let s = Symbol::nonterminal("S");
        let a = Symbol::nonterminal("A");
        let b = Symbol::nonterminal("B");
        let c = Symbol::nonterminal("C");
        let mut g: Grammar<Real> = Grammar::new(s.clone(), HashSet::new());
        g.add(Real(1.0), s, vec![a, b, c]);

        let alloc = SymbolAllocator::new();
        assert!(matches!(
            nullaryremove(&g, &alloc, false, false),
            Err(Error::Precondition { operation: "nullaryremove", .. })
        ));
    }
}
