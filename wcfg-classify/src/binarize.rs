use wcfg_grammar::Grammar;
use wcfg_semiring::Semiring;
use wcfg_symbol::{Symbol, SymbolAllocator};

/// Rewrites every rule with a body longer than two symbols into a chain of
/// binary rules, folding the leftmost pair of each over-long body into a
/// fresh nonterminal until nothing longer than two symbols remains.
pub fn binarize<R: Semiring>(grammar: &Grammar<R>, alloc: &SymbolAllocator) -> Grammar<R> {
    let mut new = grammar.spawn();
    let mut stack: Vec<(R, Symbol, Vec<Symbol>)> = grammar
        .rules()
        .iter()
        .map(|r| (r.weight.clone(), r.head.clone(), r.body.clone()))
        .collect();

    while let Some((weight, head, body)) = stack.pop() {
        if body.len() <= 2 {
            new.add(weight, head, body);
        } else {
            let fold_head = alloc.fresh_nonterminal("B");
            stack.push((R::one(), fold_head.clone(), body[0..2].to_vec()));
            let mut rest = vec![fold_head];
            rest.extend_from_slice(&body[2..]);
            stack.push((weight, head, rest));
        }
    }
    new
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use wcfg_semiring::Boolean;

    #[test]
    fn long_bodies_are_folded_to_binary() {
        let s = Symbol::nonterminal("S");
        let a = Symbol::nonterminal("A");
        let b = Symbol::nonterminal("B");
        let c = Symbol::nonterminal("C");
        let d = Symbol::nonterminal("D");
        let mut g: Grammar<Boolean> = Grammar::new(s.clone(), HashSet::new());
        g.add(Boolean(true), s, vec![a, b, c, d]);

        let alloc = SymbolAllocator::new();
        let new = binarize(&g, &alloc);
        for rule in new.rules() {
            assert!(rule.body.len() <= 2, "rule body too long: {:?}", rule.body);
        }
        // 4-symbol body folds into 3 binary rules: two folds plus the head rule.
        assert_eq!(new.num_rules(), 3);
    }

    #[test]
    fn already_binary_rules_are_untouched() {
        let s = Symbol::nonterminal("S");
        let a = Symbol::nonterminal("A");
        let b = Symbol::nonterminal("B");
        let mut g: Grammar<Boolean> = Grammar::new(s.clone(), HashSet::new());
        g.add(Boolean(true), s, vec![a, b]);

        let alloc = SymbolAllocator::new();
        let new = binarize(&g, &alloc);
        assert_eq!(new.num_rules(), 1);
    }
}
