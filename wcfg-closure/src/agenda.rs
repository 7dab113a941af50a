use std::cmp::Ordering;
use std::collections::HashMap;

use wcfg_grammar::Grammar;
use wcfg_semiring::{Chart, Semiring};
use wcfg_symbol::Symbol;

/// A generous default iteration bound for [`treesum`], large enough for
/// any grammar this library would reasonably be asked to transform.
pub const DEFAULT_MAX_ITERS: usize = 100_000;

/// The default convergence tolerance for [`treesum`], compared against
/// [`Semiring::metric`].
pub const DEFAULT_TOL: f64 = 1e-9;

/// The outcome of running [`treesum`]: the nonterminal tree-sum chart, and
/// whether the fixpoint actually converged within `max_iters`.
///
/// Divergence is a soft failure: `chart` is always the last iterate, never
/// an error. Callers that need to know whether to trust the result should
/// check `converged`.
pub struct AgendaResult<R> {
    pub chart: Chart<Symbol, R>,
    pub converged: bool,
}

/// Semi-naive agenda evaluation of the per-nonterminal tree-sum: for every
/// symbol `X`, the total weight of all derivations rooted at `X`.
///
/// Multiplication follows body order, since the semiring need not
/// commute. When a body contains the symbol being updated more than once,
/// occurrences left of the triggering position use the freshly-updated
/// value, the triggering position uses the delta being folded in, and
/// occurrences to its right use the stale value — the standard semi-naive
/// delta-product that avoids double-counting a single update.
pub fn treesum<R: Semiring>(grammar: &Grammar<R>, max_iters: usize, tol: f64) -> AgendaResult<R> {
    let mut old: Chart<Symbol, R> = Chart::new();

    let mut routing: HashMap<Symbol, Vec<(usize, usize)>> = HashMap::new();
    for (rule_idx, rule) in grammar.rules().iter().enumerate() {
        for (k, sym) in rule.body.iter().enumerate() {
            routing.entry(sym.clone()).or_default().push((rule_idx, k));
        }
    }

    let mut change: Chart<Symbol, R> = Chart::new();
    for a in grammar.terminals() {
        change.add_assign(a.clone(), R::one());
    }
    for rule in grammar.rules() {
        if rule.body.is_empty() {
            change.add_assign(rule.head.clone(), rule.weight.clone());
        }
    }

    for _ in 0..max_iters {
        let Some((u, v)) = change.pop() else {
            break;
        };

        let new = old.get(&u).add(&v);
        if old.get(&u).metric(&new) <= tol {
            continue;
        }

        if let Some(entries) = routing.get(&u) {
            for &(rule_idx, k) in entries {
                let rule = &grammar.rules()[rule_idx];
                let mut w = rule.weight.clone();
                for (j, sym) in rule.body.iter().enumerate() {
                    let factor = if *sym == u {
                        match j.cmp(&k) {
                            Ordering::Less => new.clone(),
                            Ordering::Equal => v.clone(),
                            Ordering::Greater => old.get(&u),
                        }
                    } else {
                        old.get(sym)
                    };
                    w = w.mul(&factor);
                }
                change.add_assign(rule.head.clone(), w);
            }
        }

        old.set(u, new);
    }

    let converged = change.is_empty();
    if !converged {
        log::warn!("agenda did not converge within {max_iters} iterations");
    }

    AgendaResult { chart: old, converged }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wcfg_semiring::Real;

    #[test]
    fn unary_chain_treesum() {
        // 2:S->A, 3:A->B, 5:B->a ; treesum(S) = 2*3*5 = 30.
        let s = Symbol::nonterminal("S");
        let a = Symbol::nonterminal("A");
        let b = Symbol::nonterminal("B");
        let term_a = Symbol::terminal("a");
        let mut terminals = HashSet::new();
        terminals.insert(term_a.clone());
        let mut g: Grammar<Real> = Grammar::new(s.clone(), terminals);
        g.add(Real(2.0), s.clone(), vec![a.clone()]);
        g.add(Real(3.0), a, vec![b.clone()]);
        g.add(Real(5.0), b, vec![term_a]);

        let result = treesum(&g, 10_000, 1e-12);
        assert!(result.converged);
        assert!((result.chart.get(&s).0 - 30.0).abs() < 1e-9);
    }
}
