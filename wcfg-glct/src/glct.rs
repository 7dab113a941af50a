use std::collections::{HashMap, HashSet};

use wcfg_grammar::{Derivation, Grammar, Rule};
use wcfg_semiring::Semiring;
use wcfg_symbol::Symbol;

use crate::slash_names::{frozen, slash};
use crate::speculation::Speculation;

/// The generalized left-corner transformation (Opedal et al., 2023):
/// speculation followed by a transpose of the invented `Slash` spine
/// (`Φ_G = Ψ ∘ Φ_S`).
///
/// When `filter` is set, the useful-symbol analysis restricts which
/// `Slash`/`Frozen` rules are actually generated to those reachable from
/// `xs` along left-corner chains built from `ps`, rather than the full
/// cross product of every nonterminal — the optimization described in the
/// paper's filtered construction.
pub struct Glct<R> {
    grammar: Grammar<R>,
    speculation: Speculation<R>,
    id: u32,
    existing: HashSet<Symbol>,
}

impl<R: Semiring> Glct<R> {
    /// Builds the GLCT grammar.
    pub fn new(parent: &Grammar<R>, xs: HashSet<Symbol>, ps: Vec<Rule<R>>, filter: bool, id: u32) -> Self {
        debug_assert!(ps.iter().all(|p| !p.body.is_empty()));

        let existing = parent.nonterminals().clone();
        let one = R::one();
        let universe_all: HashSet<Symbol> = parent
            .nonterminals()
            .iter()
            .chain(parent.terminals().iter())
            .cloned()
            .collect();

        let (retained, num_given_den, useful_num, useful_mid): (
            HashSet<Symbol>,
            Box<dyn Fn(&Symbol) -> HashSet<Symbol>>,
            HashSet<Symbol>,
            HashSet<Symbol>,
        ) = if filter {
            let mut retained = HashSet::new();
            retained.insert(parent.start().clone());
            for p in parent.rules() {
                let is_ps = ps.iter().any(|q| q == p);
                let skip = if is_ps { 1 } else { 0 };
                for x in p.body.iter().skip(skip) {
                    if parent.is_nonterminal(x) {
                        retained.insert(x.clone());
                    }
                }
            }

            let den2num = den_to_num(&universe_all, &ps);

            let useful_num: HashSet<Symbol> = xs
                .iter()
                .flat_map(|den| den2num.get(den).into_iter().flatten())
                .filter(|num| retained.contains(*num))
                .cloned()
                .collect();

            let useful_mid: HashSet<Symbol> = xs
                .iter()
                .flat_map(|den| den2num.get(den).into_iter().flatten())
                .filter(|mid| {
                    den2num
                        .get(*mid)
                        .map(|nums| nums.iter().any(|num| retained.contains(num)))
                        .unwrap_or(false)
                })
                .cloned()
                .collect();

            let retained_for_closure = retained.clone();
            let den2num_for_closure = den2num;
            let num_given_den: Box<dyn Fn(&Symbol) -> HashSet<Symbol>> = Box::new(move |den: &Symbol| {
                den2num_for_closure
                    .get(den)
                    .map(|nums| nums.intersection(&retained_for_closure).cloned().collect())
                    .unwrap_or_default()
            });

            (retained, num_given_den, useful_num, useful_mid)
        } else {
            let retained = parent.nonterminals().clone();
            let retained_for_closure = retained.clone();
            let num_given_den: Box<dyn Fn(&Symbol) -> HashSet<Symbol>> =
                Box::new(move |_den: &Symbol| retained_for_closure.clone());
            (retained, num_given_den, universe_all.clone(), universe_all.clone())
        };

        let mut grammar = parent.spawn();

        for x in &useful_num {
            grammar.add(one.clone(), slash(x, x, id, &existing), vec![]);
        }

        for p in parent.rules() {
            let in_ps = ps.iter().any(|q| q == p);
            if !in_ps {
                grammar.add(p.weight.clone(), frozen(&p.head, id, &existing), p.body.clone());
            } else {
                let den = &p.body[0];
                if useful_mid.contains(den) {
                    for y in num_given_den(den) {
                        let mut body = p.body[1..].to_vec();
                        body.push(slash(&y, &p.head, id, &existing));
                        grammar.add(p.weight.clone(), slash(&y, den, id, &existing), body);
                    }
                }
                if !xs.contains(den) {
                    let mut body = vec![frozen(den, id, &existing)];
                    body.extend_from_slice(&p.body[1..]);
                    grammar.add(p.weight.clone(), frozen(&p.head, id, &existing), body);
                }
            }
        }

        for y in retained.difference(&xs) {
            grammar.add(one.clone(), y.clone(), vec![frozen(y, id, &existing)]);
        }
        for x in &xs {
            for y in num_given_den(x) {
                grammar.add(one.clone(), y.clone(), vec![frozen(x, id, &existing), slash(&y, x, id, &existing)]);
            }
        }

        let speculation = Speculation::new(parent, xs, ps, filter, id);

        Glct { grammar, speculation, id, existing }
    }

    /// The GLCT grammar itself.
    pub fn grammar(&self) -> &Grammar<R> {
        &self.grammar
    }

    fn slash(&self, x: &Symbol, y: &Symbol) -> Symbol {
        slash(x, y, self.id, &self.existing)
    }

    /// Maps a derivation in the parent grammar to its image under the
    /// generalized left-corner transformation: the speculation mapping
    /// followed by a transpose of the `Slash` spine.
    pub fn mapping(&self, d: &Derivation<R>) -> Derivation<R> {
        self.transpose(&self.speculation.mapping(d))
    }

    fn transpose(&self, d: &Derivation<R>) -> Derivation<R> {
        match d {
            Derivation::Leaf(x) => Derivation::Leaf(x.clone()),
            Derivation::Node { head, weight, children } => {
                if let Some((num, _den)) = head.as_slash() {
                    let mut spine: Vec<Symbol> = Vec::new();
                    let mut rests: Vec<Vec<Derivation<R>>> = Vec::new();
                    let mut weights: Vec<R> = Vec::new();
                    let mut curr = d;
                    loop {
                        let (curr_weight, curr_children) = match curr {
                            Derivation::Node { weight, children, .. } => (weight, children),
                            Derivation::Leaf(_) => unreachable!(),
                        };
                        if curr_children.is_empty() {
                            break;
                        }
                        spine.push(curr_children[0].symbol().clone());
                        rests.push(curr_children[1..].iter().map(|c| self.transpose(c)).collect());
                        weights.push(curr_weight.clone());
                        curr = &curr_children[0];
                    }

                    let num = num.clone();
                    let mut new = Derivation::tree(self.slash(&num, &num), vec![]);
                    for ((rest, s), w) in rests.into_iter().zip(spine.into_iter()).zip(weights.into_iter()) {
                        let (s_num, _s_den) = s.as_slash().expect("spine symbol must be Slash");
                        let head_sym = self.slash(&num, s_num);
                        let mut node_children = rest;
                        node_children.push(new);
                        new = Derivation::tree_weighted(head_sym, w, node_children);
                    }
                    new
                } else {
                    let mapped: Vec<Derivation<R>> = children.iter().map(|c| self.transpose(c)).collect();
                    Derivation::tree_weighted(head.clone(), weight.clone(), mapped)
                }
            }
        }
    }
}

/// For every symbol `den` in `universe`, the reflexive-transitive closure
/// of "is a left corner consumed by a rule in `ps` headed by `num`",
/// i.e. the set of symbols reachable from `den` by repeatedly stepping
/// `body[0] -> head` over `ps`.
fn den_to_num<R: Semiring>(universe: &HashSet<Symbol>, ps: &[Rule<R>]) -> HashMap<Symbol, HashSet<Symbol>> {
    let mut adjacency: HashMap<Symbol, Vec<Symbol>> = HashMap::new();
    for p in ps {
        adjacency.entry(p.body[0].clone()).or_default().push(p.head.clone());
    }

    let mut result = HashMap::new();
    for den in universe {
        let mut seen = HashSet::new();
        seen.insert(den.clone());
        let mut stack = vec![den.clone()];
        while let Some(x) = stack.pop() {
            if let Some(nexts) = adjacency.get(&x) {
                for n in nexts {
                    if seen.insert(n.clone()) {
                        stack.push(n.clone());
                    }
                }
            }
        }
        result.insert(den.clone(), seen);
    }
    result
}
