use std::collections::HashMap;

use wcfg_grammar::{Grammar, Rule};
use wcfg_semiring::{Chart, Semiring};
use wcfg_symbol::Symbol;

/// The total weight of `input` under `grammar`'s weighted language,
/// computed by the CKY algorithm.
///
/// Assumes `grammar` is already in Chomsky normal form (callers that
/// aren't sure should run [`crate::cnf`] first) — this is a thin, already
/// CNF-shaped consumer of the grammar, not a parse-forest builder: it
/// returns one semiring value, not a chart of partial parses.
pub fn weight_of<R: Semiring>(grammar: &Grammar<R>, input: &[Symbol]) -> R {
    let nullary = grammar
        .rules()
        .iter()
        .find(|r| r.body.is_empty() && &r.head == grammar.start())
        .map(|r| r.weight.clone())
        .unwrap_or_else(R::zero);

    let mut by_terminal: HashMap<&Symbol, Vec<&Rule<R>>> = HashMap::new();
    let mut binary: Vec<&Rule<R>> = Vec::new();
    for rule in grammar.rules() {
        match rule.body.len() {
            1 => by_terminal.entry(&rule.body[0]).or_default().push(rule),
            2 => binary.push(rule),
            _ => {}
        }
    }

    let n = input.len();
    let mut chart: Chart<(usize, Symbol, usize), R> = Chart::new();

    for i in 0..=n {
        chart.add_assign((i, grammar.start().clone(), i), nullary.clone());
    }

    for i in 0..n {
        if let Some(rules) = by_terminal.get(&input[i]) {
            for r in rules {
                chart.add_assign((i, r.head.clone(), i + 1), r.weight.clone());
            }
        }
    }

    for span in 1..=n {
        for i in 0..=(n - span) {
            let k = i + span;
            for j in (i + 1)..k {
                for r in &binary {
                    let (y, z) = (&r.body[0], &r.body[1]);
                    let w = r
                        .weight
                        .mul(&chart.get(&(i, y.clone(), j)))
                        .mul(&chart.get(&(j, z.clone(), k)));
                    chart.add_assign((i, r.head.clone(), k), w);
                }
            }
        }
    }

    chart.get(&(0, grammar.start().clone(), n))
}
