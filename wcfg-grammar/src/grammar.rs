use std::collections::HashSet;

use wcfg_semiring::{Chart, Semiring};
use wcfg_symbol::Symbol;

use crate::derivation::Derivation;
use crate::rule::Rule;

/// A weighted context-free grammar `(R, S, V, N, rules)`.
///
/// Grammars are value types: after construction they are treated as
/// immutable, and every transformation in `wcfg` consumes a grammar and
/// produces a new one via [`Grammar::spawn`]. Derived indices such as
/// [`Grammar::rhs`] are computed on demand rather than cached, which is
/// the simplest implementation that needs no invalidation machinery under
/// that immutability discipline.
#[derive(Clone, Debug)]
pub struct Grammar<R> {
    start: Symbol,
    terminals: HashSet<Symbol>,
    nonterminals: HashSet<Symbol>,
    rules: Vec<Rule<R>>,
}

impl<R> Grammar<R> {
    /// Creates an empty grammar with the given start symbol and terminal
    /// alphabet.
    pub fn new(start: Symbol, terminals: HashSet<Symbol>) -> Self {
        let mut nonterminals = HashSet::new();
        nonterminals.insert(start.clone());
        Grammar {
            start,
            terminals,
            nonterminals,
            rules: Vec::new(),
        }
    }

    /// The start symbol `S`.
    pub fn start(&self) -> &Symbol {
        &self.start
    }

    /// The terminal alphabet `V`.
    pub fn terminals(&self) -> &HashSet<Symbol> {
        &self.terminals
    }

    /// The nonterminal set `N` (always contains `S`).
    pub fn nonterminals(&self) -> &HashSet<Symbol> {
        &self.nonterminals
    }

    /// All rules, in insertion order.
    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }

    /// True when `x` is in the terminal alphabet.
    pub fn is_terminal(&self, x: &Symbol) -> bool {
        self.terminals.contains(x)
    }

    /// True when `x` is not in the terminal alphabet.
    pub fn is_nonterminal(&self, x: &Symbol) -> bool {
        !self.is_terminal(x)
    }

    /// Creates an empty grammar inheriting this grammar's start symbol and
    /// terminal alphabet.
    pub fn spawn(&self) -> Self {
        Grammar::new(self.start.clone(), self.terminals.clone())
    }

    /// Creates an empty grammar inheriting the terminal alphabet but using
    /// a new start symbol.
    pub fn spawn_with_start(&self, start: Symbol) -> Self {
        Grammar::new(start, self.terminals.clone())
    }

    /// The size of the grammar: `Σ (1 + |body|)` over all rules.
    pub fn size(&self) -> usize {
        self.rules.iter().map(|r| 1 + r.body.len()).sum()
    }

    /// The number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Rules headed by `x`, in insertion order. Computed on demand.
    pub fn rhs(&self, x: &Symbol) -> Vec<&Rule<R>> {
        self.rules.iter().filter(|r| &r.head == x).collect()
    }

    /// Keeps only the rules for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&Rule<R>) -> bool) {
        self.rules.retain(|r| keep(r));
    }
}

impl<R: Semiring> Grammar<R> {
    /// Adds `weight: head -> body`, skipping rules with zero weight: no
    /// rule with weight zero is ever stored. Adds `head` to `N`. Returns
    /// the inserted rule's index, or `None` if the weight was zero.
    pub fn add(&mut self, weight: R, head: Symbol, body: Vec<Symbol>) -> Option<usize> {
        if weight == R::zero() {
            return None;
        }
        self.nonterminals.insert(head.clone());
        self.rules.push(Rule::new(weight, head, body));
        Some(self.rules.len() - 1)
    }

    /// Renames nonterminals via `f`; terminal body symbols are left alone.
    /// The start symbol is renamed too.
    pub fn rename(&self, f: impl Fn(&Symbol) -> Symbol) -> Self {
        let mut new = self.spawn_with_start(f(&self.start));
        for rule in &self.rules {
            let body = rule
                .body
                .iter()
                .map(|y| if self.is_terminal(y) { y.clone() } else { f(y) })
                .collect();
            new.add(rule.weight.clone(), f(&rule.head), body);
        }
        new
    }

    /// Enumerates derivations of `x` with height at most `height`
    /// (eager — see DESIGN.md Open Question OQ-2 for why this is a `Vec`
    /// rather than a lazy iterator).
    pub fn derivations(&self, x: &Symbol, height: usize) -> Vec<Derivation<R>> {
        if self.is_terminal(x) {
            return vec![Derivation::Leaf(x.clone())];
        }
        if height == 0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        for rule in self.rhs(x) {
            for children in self.derivations_list(&rule.body, height - 1) {
                out.push(Derivation::Node {
                    head: x.clone(),
                    weight: rule.weight.clone(),
                    children,
                });
            }
        }
        out
    }

    fn derivations_list(&self, body: &[Symbol], height: usize) -> Vec<Vec<Derivation<R>>> {
        if body.is_empty() {
            return vec![Vec::new()];
        }
        let mut out = Vec::new();
        for head_d in self.derivations(&body[0], height) {
            for mut rest in self.derivations_list(&body[1..], height) {
                let mut combined = Vec::with_capacity(1 + rest.len());
                combined.push(head_d.clone());
                combined.append(&mut rest);
                out.push(combined);
            }
        }
        out
    }

    /// Enumerates derivations of `S` whose yield is exactly `s`.
    pub fn derivations_of(&self, s: &[Symbol]) -> Vec<Derivation<R>> {
        self.derivations_of_symbol(&self.start.clone(), s)
    }

    fn derivations_of_symbol(&self, x: &Symbol, s: &[Symbol]) -> Vec<Derivation<R>> {
        if self.is_terminal(x) {
            return if s.len() == 1 && &s[0] == x {
                vec![Derivation::Leaf(x.clone())]
            } else {
                Vec::new()
            };
        }
        let mut out = Vec::new();
        for rule in self.rhs(x) {
            for children in self.derivations_of_list(&rule.body, s) {
                out.push(Derivation::Node {
                    head: x.clone(),
                    weight: rule.weight.clone(),
                    children,
                });
            }
        }
        out
    }

    fn derivations_of_list(&self, body: &[Symbol], s: &[Symbol]) -> Vec<Vec<Derivation<R>>> {
        if body.is_empty() {
            return if s.is_empty() { vec![Vec::new()] } else { Vec::new() };
        }
        let mut out = Vec::new();
        for split in 0..=s.len() {
            for head_d in self.derivations_of_symbol(&body[0], &s[..split]) {
                for mut rest in self.derivations_of_list(&body[1..], &s[split..]) {
                    let mut combined = Vec::with_capacity(1 + rest.len());
                    combined.push(head_d.clone());
                    combined.append(&mut rest);
                    out.push(combined);
                }
            }
        }
        out
    }

    /// The yield -> weight mapping over all derivations of `S` with height
    /// at most `depth`.
    pub fn language(&self, depth: usize) -> Chart<Vec<Symbol>, R> {
        let mut lang = Chart::new();
        for d in self.derivations(&self.start.clone(), depth) {
            lang.add_assign(d.yield_symbols(), d.weight());
        }
        lang
    }
}
