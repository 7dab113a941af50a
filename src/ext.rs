//! [`WcfgExt`], the consumer-facing aggregate trait: every transformation
//! from across the `wcfg-*` crates, as a method on `Grammar<R>`.

use std::collections::HashSet;

use wcfg_classify::{
    binarize, cotrim, find_lr_rules, separate_start, separate_terminals, sufficient_xs, trim, unfold,
};
use wcfg_closure::{treesum as treesum_impl, DEFAULT_MAX_ITERS, DEFAULT_TOL};
use wcfg_cnf::{cnf as cnf_impl, weight_of as weight_of_cnf};
use wcfg_epsilon::{elim_nullary_slash, nullaryremove, unaryremove};
use wcfg_glct::{Glct, Speculation};
use wcfg_grammar::{Error, Grammar, Rule};
use wcfg_semiring::Semiring;
use wcfg_symbol::{Symbol, SymbolAllocator};

/// Every structural transform and every consumer operation from across
/// the `wcfg-*` crates, gathered onto `Grammar<R>` itself.
///
/// Transforms that invent fresh symbols (`binarize`, `separate_start`,
/// `separate_terminals`, `nullaryremove`, `cnf`, `speculate`,
/// `lc_generalized`, `eliminate_left_recursion`) take an explicit
/// `&SymbolAllocator` so that two calls against the same grammar produce
/// the same fresh names.
pub trait WcfgExt<R: Semiring> {
    fn trim(&self) -> Grammar<R>;
    fn cotrim(&self) -> Grammar<R>;
    fn separate_start(&self, alloc: &SymbolAllocator) -> Grammar<R>;
    fn separate_terminals(&self, alloc: &SymbolAllocator) -> Grammar<R>;
    fn binarize(&self, alloc: &SymbolAllocator) -> Grammar<R>;
    fn unfold(&self, rule_idx: usize, k: usize) -> Grammar<R>;
    fn unaryremove(&self) -> Grammar<R>;
    fn nullaryremove(&self, alloc: &SymbolAllocator, do_binarize: bool, recovery: bool) -> Result<Grammar<R>, Error>;
    fn elim_nullary_slash(&self, alloc: &SymbolAllocator, do_binarize: bool) -> Result<Grammar<R>, Error>;

    fn speculate(&self, xs: HashSet<Symbol>, ps: Vec<Rule<R>>, filter: bool, alloc: &SymbolAllocator) -> Speculation<R>;
    fn lc_generalized(&self, xs: HashSet<Symbol>, ps: Vec<Rule<R>>, filter: bool, alloc: &SymbolAllocator) -> Glct<R>;

    fn is_left_recursive(&self) -> bool;
    fn find_lr_rules(&self) -> Vec<&Rule<R>>;
    fn eliminate_left_recursion(&self, alloc: &SymbolAllocator) -> Grammar<R>;

    fn cnf(&self, alloc: &SymbolAllocator) -> Result<Grammar<R>, Error>;
    fn treesum(&self) -> R;
    fn weight_of(&self, input: &[Symbol]) -> R;
}

impl<R: Semiring> WcfgExt<R> for Grammar<R> {
    fn trim(&self) -> Grammar<R> {
        trim(self)
    }

    fn cotrim(&self) -> Grammar<R> {
        cotrim(self)
    }

    fn separate_start(&self, alloc: &SymbolAllocator) -> Grammar<R> {
        separate_start(self, alloc)
    }

    fn separate_terminals(&self, alloc: &SymbolAllocator) -> Grammar<R> {
        separate_terminals(self, alloc)
    }

    fn binarize(&self, alloc: &SymbolAllocator) -> Grammar<R> {
        binarize(self, alloc)
    }

    fn unfold(&self, rule_idx: usize, k: usize) -> Grammar<R> {
        unfold(self, rule_idx, k)
    }

    fn unaryremove(&self) -> Grammar<R> {
        unaryremove(self)
    }

    fn nullaryremove(&self, alloc: &SymbolAllocator, do_binarize: bool, recovery: bool) -> Result<Grammar<R>, Error> {
        nullaryremove(self, alloc, do_binarize, recovery)
    }

    fn elim_nullary_slash(&self, alloc: &SymbolAllocator, do_binarize: bool) -> Result<Grammar<R>, Error> {
        elim_nullary_slash(self, alloc, do_binarize)
    }

    fn speculate(&self, xs: HashSet<Symbol>, ps: Vec<Rule<R>>, filter: bool, alloc: &SymbolAllocator) -> Speculation<R> {
        Speculation::new(self, xs, ps, filter, alloc.fresh_id())
    }

    fn lc_generalized(&self, xs: HashSet<Symbol>, ps: Vec<Rule<R>>, filter: bool, alloc: &SymbolAllocator) -> Glct<R> {
        Glct::new(self, xs, ps, filter, alloc.fresh_id())
    }

    fn is_left_recursive(&self) -> bool {
        wcfg_classify::is_left_recursive(self)
    }

    fn find_lr_rules(&self) -> Vec<&Rule<R>> {
        find_lr_rules(self)
    }

    fn eliminate_left_recursion(&self, alloc: &SymbolAllocator) -> Grammar<R> {
        let ps: Vec<Rule<R>> = find_lr_rules(self).into_iter().cloned().collect();
        let ps_refs: Vec<&Rule<R>> = ps.iter().collect();
        let xs = sufficient_xs(self, &ps_refs);
        Glct::new(self, xs, ps, true, alloc.fresh_id()).grammar().clone()
    }

    fn cnf(&self, alloc: &SymbolAllocator) -> Result<Grammar<R>, Error> {
        cnf_impl(self, alloc)
    }

    fn treesum(&self) -> R {
        let result = treesum_impl(self, DEFAULT_MAX_ITERS, DEFAULT_TOL);
        if !result.converged {
            log::warn!("treesum did not converge within {DEFAULT_MAX_ITERS} iterations");
        }
        result.chart.get(self.start())
    }

    fn weight_of(&self, input: &[Symbol]) -> R {
        let alloc = SymbolAllocator::new();
        let cnf_grammar = cnf_impl(self, &alloc).expect("cnf assembly cannot fail on a well-formed grammar");
        weight_of_cnf(&cnf_grammar, input)
    }
}
