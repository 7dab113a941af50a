use wcfg_grammar::Grammar;
use wcfg_semiring::Semiring;

/// Expands rule `rule_idx` at its `k`-th body position (which must be a
/// nonterminal) by substituting in every rule headed by that symbol,
/// multiplying weights accordingly. Every other rule is carried over
/// unchanged.
pub fn unfold<R: Semiring>(grammar: &Grammar<R>, rule_idx: usize, k: usize) -> Grammar<R> {
    let rule = &grammar.rules()[rule_idx];
    assert!(
        grammar.is_nonterminal(&rule.body[k]),
        "unfold position must hold a nonterminal"
    );

    let mut new = grammar.spawn();
    for (idx, r) in grammar.rules().iter().enumerate() {
        if idx != rule_idx {
            new.add(r.weight.clone(), r.head.clone(), r.body.clone());
        }
    }

    let expand = &rule.body[k];
    for r in grammar.rhs(expand) {
        let mut body = rule.body[..k].to_vec();
        body.extend_from_slice(&r.body);
        body.extend_from_slice(&rule.body[k + 1..]);
        new.add(rule.weight.mul(&r.weight), rule.head.clone(), body);
    }
    new
}
