use wcfg_closure::lehmann;
use wcfg_grammar::Grammar;
use wcfg_semiring::{Chart, Semiring};
use wcfg_symbol::Symbol;

/// Returns an equivalent grammar with no unary nonterminal chains
/// (`X -> Y` rules where `Y` is a nonterminal), by folding the weight of
/// every unary chain into the rules at its foot via Lehmann's closure.
pub fn unaryremove<R: Semiring>(grammar: &Grammar<R>) -> Grammar<R> {
    let mut chain_weights: Chart<(Symbol, Symbol), R> = Chart::new();
    for rule in grammar.rules() {
        if rule.body.len() == 1 && grammar.is_nonterminal(&rule.body[0]) {
            chain_weights.add_assign(
                (rule.body[0].clone(), rule.head.clone()),
                rule.weight.clone(),
            );
        }
    }

    let nodes: Vec<Symbol> = grammar.nonterminals().iter().cloned().collect();
    let closure = lehmann(&nodes, &chain_weights);

    let mut new = grammar.spawn();
    for rule in grammar.rules() {
        if rule.body.len() == 1 && grammar.is_nonterminal(&rule.body[0]) {
            continue;
        }
        for y in grammar.nonterminals() {
            let weight = closure.get(&(rule.head.clone(), y.clone())).mul(&rule.weight);
            new.add(weight, y.clone(), rule.body.clone());
        }
    }
    new
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wcfg_semiring::Real;

    #[test]
    fn unary_chain_weight_ends_up_at_the_foot() {
        // S -> A (2), A -> B (3), B -> a (5): S should end up deriving "a" with weight 30.
        let s = Symbol::nonterminal("S");
        let a = Symbol::nonterminal("A");
        let b = Symbol::nonterminal("B");
        let term = Symbol::terminal("a");
        let mut terminals = HashSet::new();
        terminals.insert(term.clone());
        let mut g: Grammar<Real> = Grammar::new(s.clone(), terminals);
        g.add(Real(2.0), s.clone(), vec![a.clone()]);
        g.add(Real(3.0), a, vec![b.clone()]);
        g.add(Real(5.0), b, vec![term.clone()]);

        let new = unaryremove(&g);
        assert!(!new.rules().iter().any(|r| r.body.len() == 1 && new.is_nonterminal(&r.body[0])));

        let direct: f64 = new
            .rules()
            .iter()
            .filter(|r| r.head == s && r.body == vec![term.clone()])
            .map(|r| r.weight.0)
            .sum();
        assert!((direct - 30.0).abs() < 1e-9);
    }
}
