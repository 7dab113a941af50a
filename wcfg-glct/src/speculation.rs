use std::collections::HashSet;

use wcfg_grammar::{Derivation, Grammar, Rule};
use wcfg_semiring::Semiring;
use wcfg_symbol::Symbol;

use crate::slash_names::{frozen, slash};

/// The speculation transformation (Opedal et al., 2023): invents `Slash`
/// and `Frozen` nonterminals that let a recognizer commit to a left
/// corner before the rest of its production is known.
///
/// `xs` is the set of left-corner recognition symbols; `ps` is the subset
/// of `parent`'s rules speculation is applied to (every other rule is
/// merely "frozen" unchanged). When `filter` is set, only `xs` itself
/// (rather than every nonterminal and terminal) is used as the slash
/// recursion's universe — the useful-symbol optimization from the paper.
pub struct Speculation<R> {
    grammar: Grammar<R>,
    xs: HashSet<Symbol>,
    ps: Vec<Rule<R>>,
    id: u32,
    existing: HashSet<Symbol>,
}

impl<R: Semiring> Speculation<R> {
    /// Builds the speculation grammar.
    pub fn new(parent: &Grammar<R>, xs: HashSet<Symbol>, ps: Vec<Rule<R>>, filter: bool, id: u32) -> Self {
        debug_assert!(ps.iter().all(|p| !p.body.is_empty()));

        let existing = parent.nonterminals().clone();
        let one = R::one();
        let mut grammar = parent.spawn();

        let universe: Vec<Symbol> = if filter {
            xs.iter().cloned().collect()
        } else {
            parent
                .nonterminals()
                .iter()
                .chain(parent.terminals().iter())
                .cloned()
                .collect()
        };

        for x in &universe {
            grammar.add(one.clone(), slash(x, x, id, &existing), vec![]);
        }

        for p in parent.rules() {
            let in_ps = ps.iter().any(|q| q == p);
            if !in_ps {
                grammar.add(p.weight.clone(), frozen(&p.head, id, &existing), p.body.clone());
            } else {
                for x in &universe {
                    let mut body = vec![slash(&p.body[0], x, id, &existing)];
                    body.extend_from_slice(&p.body[1..]);
                    grammar.add(p.weight.clone(), slash(&p.head, x, id, &existing), body);
                }
                if !xs.contains(&p.body[0]) {
                    let mut body = vec![frozen(&p.body[0], id, &existing)];
                    body.extend_from_slice(&p.body[1..]);
                    grammar.add(p.weight.clone(), frozen(&p.head, id, &existing), body);
                }
            }
        }

        for y in parent.nonterminals().difference(&xs) {
            grammar.add(one.clone(), y.clone(), vec![frozen(y, id, &existing)]);
        }
        for y in parent.nonterminals() {
            for x in &xs {
                grammar.add(
                    one.clone(),
                    y.clone(),
                    vec![frozen(x, id, &existing), slash(y, x, id, &existing)],
                );
            }
        }

        Speculation { grammar, xs, ps, id, existing }
    }

    /// The speculation grammar itself.
    pub fn grammar(&self) -> &Grammar<R> {
        &self.grammar
    }

    fn slash(&self, x: &Symbol, y: &Symbol) -> Symbol {
        slash(x, y, self.id, &self.existing)
    }

    fn frozen(&self, x: &Symbol) -> Symbol {
        frozen(x, self.id, &self.existing)
    }

    /// Maps a derivation in the parent grammar to its image under
    /// speculation: the derivation of the same yield in the speculation
    /// grammar.
    pub fn mapping(&self, d: &Derivation<R>) -> Derivation<R> {
        match d {
            Derivation::Leaf(x) => Derivation::Leaf(x.clone()),
            Derivation::Node { head, weight, children } => {
                let produced_by_ps = {
                    let rule_repr = Rule::new(weight.clone(), head.clone(), children.iter().map(|c| c.symbol().clone()).collect());
                    self.ps.iter().any(|p| p == &rule_repr)
                };

                if !produced_by_ps {
                    let rest: Vec<Derivation<R>> = children.iter().map(|c| self.mapping(c)).collect();
                    let frozen_node = Derivation::tree_weighted(self.frozen(head), weight.clone(), rest);
                    if self.xs.contains(head) {
                        Derivation::tree(
                            head.clone(),
                            vec![frozen_node, Derivation::tree(self.slash(head, head), vec![])],
                        )
                    } else {
                        Derivation::tree(head.clone(), vec![frozen_node])
                    }
                } else {
                    let dd = self.mapping(&children[0]);
                    let rest: Vec<Derivation<R>> = children[1..].iter().map(|c| self.mapping(c)).collect();

                    let dd = match dd {
                        Derivation::Leaf(o) => {
                            if self.xs.contains(&o) {
                                Derivation::tree(
                                    o.clone(),
                                    vec![Derivation::Leaf(o.clone()), Derivation::tree(self.slash(&o, &o), vec![])],
                                )
                            } else {
                                Derivation::tree(o.clone(), vec![Derivation::Leaf(o)])
                            }
                        }
                        node => node,
                    };

                    match &dd {
                        Derivation::Node { children: dd_children, .. } if dd_children.len() == 1 => {
                            let o = dd_children[0].clone();
                            let mut inner_children = vec![o];
                            inner_children.extend(rest);
                            let inner = Derivation::tree_weighted(self.frozen(head), weight.clone(), inner_children);
                            if self.xs.contains(head) {
                                Derivation::tree(
                                    head.clone(),
                                    vec![inner, Derivation::tree(self.slash(head, head), vec![])],
                                )
                            } else {
                                Derivation::tree(head.clone(), vec![inner])
                            }
                        }
                        Derivation::Node { children: dd_children, .. } => {
                            let o = dd_children[0].clone();
                            let s = dd_children[1].clone();
                            let name = o
                                .symbol()
                                .as_frozen()
                                .cloned()
                                .unwrap_or_else(|| o.symbol().clone());
                            let mut slash_children = vec![s];
                            slash_children.extend(rest);
                            let slash_node = Derivation::tree_weighted(self.slash(head, &name), weight.clone(), slash_children);
                            Derivation::tree(head.clone(), vec![o, slash_node])
                        }
                        Derivation::Leaf(_) => unreachable!("dd was just normalized into a Node above"),
                    }
                }
            }
        }
    }
}
