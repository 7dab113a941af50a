use std::collections::{HashMap, HashSet};

use wcfg_grammar::{Grammar, Rule};
use wcfg_semiring::Semiring;
use wcfg_symbol::Symbol;

/// Productivity and reachability of every symbol in a grammar.
///
/// A rule is useful when every body symbol is productive (can derive some
/// terminal string) and its head is reachable from the grammar's roots.
/// Built via two reverse-BFS-style agenda closures: productivity works
/// bottom-up from terminals and nullary heads, reachability works
/// top-down from the roots.
pub struct Usefulness {
    productive: HashSet<Symbol>,
    reachable: HashSet<Symbol>,
}

impl Usefulness {
    /// Analyzes usefulness with the grammar's own start symbol as the
    /// only root.
    pub fn new<R: Semiring>(grammar: &Grammar<R>) -> Self {
        Self::with_roots(grammar, std::slice::from_ref(grammar.start()))
    }

    /// Analyzes usefulness with an arbitrary root set.
    pub fn with_roots<R: Semiring>(grammar: &Grammar<R>, roots: &[Symbol]) -> Self {
        let productive = productive_symbols(grammar);
        let reachable = reachable_symbols(grammar, roots);
        Usefulness { productive, reachable }
    }

    /// True when `x` can derive some terminal string.
    pub fn is_productive(&self, x: &Symbol) -> bool {
        self.productive.contains(x)
    }

    /// True when `x` is reachable from a root.
    pub fn is_reachable(&self, x: &Symbol) -> bool {
        self.reachable.contains(x)
    }

    /// True when every body symbol of `rule` is productive and `rule`'s
    /// head is reachable.
    pub fn is_useful<R>(&self, rule: &Rule<R>) -> bool {
        self.reachable.contains(&rule.head) && rule.body.iter().all(|s| self.productive.contains(s))
    }

    /// True when every rule in the grammar is useful.
    pub fn all_useful<R: Semiring>(&self, grammar: &Grammar<R>) -> bool {
        grammar.rules().iter().all(|r| self.is_useful(r))
    }
}

fn productive_symbols<R: Semiring>(grammar: &Grammar<R>) -> HashSet<Symbol> {
    let mut outgoing: HashMap<&Symbol, Vec<usize>> = HashMap::new();
    for (idx, rule) in grammar.rules().iter().enumerate() {
        for sym in &rule.body {
            outgoing.entry(sym).or_default().push(idx);
        }
    }

    let mut productive: HashSet<Symbol> = grammar.terminals().clone();
    let mut agenda: Vec<Symbol> = productive.iter().cloned().collect();
    for rule in grammar.rules() {
        if rule.body.is_empty() && productive.insert(rule.head.clone()) {
            agenda.push(rule.head.clone());
        }
    }

    while let Some(x) = agenda.pop() {
        if let Some(rule_idxs) = outgoing.get(&x) {
            for &idx in rule_idxs {
                let rule = &grammar.rules()[idx];
                if !productive.contains(&rule.head)
                    && rule.body.iter().all(|s| productive.contains(s))
                {
                    productive.insert(rule.head.clone());
                    agenda.push(rule.head.clone());
                }
            }
        }
    }

    productive
}

fn reachable_symbols<R: Semiring>(grammar: &Grammar<R>, roots: &[Symbol]) -> HashSet<Symbol> {
    let mut rhs: HashMap<&Symbol, Vec<&Rule<R>>> = HashMap::new();
    for rule in grammar.rules() {
        rhs.entry(&rule.head).or_default().push(rule);
    }

    let mut reachable: HashSet<Symbol> = roots.iter().cloned().collect();
    let mut agenda: Vec<Symbol> = roots.to_vec();
    while let Some(x) = agenda.pop() {
        if let Some(rules) = rhs.get(&x) {
            for rule in rules {
                for sym in &rule.body {
                    if reachable.insert(sym.clone()) {
                        agenda.push(sym.clone());
                    }
                }
            }
        }
    }

    reachable
}
