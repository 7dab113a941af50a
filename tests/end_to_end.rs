use test_case::test_case;
use wcfg::{Boolean, Chart, Grammar, Real, Symbol, SymbolAllocator, WcfgExt};

fn ambiguous_arithmetic() -> Grammar<Boolean> {
    // Scenario 1: `1: S -> S S`, `1: S -> a`.
    let s = Symbol::nonterminal("S");
    let a = Symbol::terminal("a");
    let terminals: std::collections::HashSet<_> = [a.clone()].into_iter().collect();

    let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
    g.add(Boolean(true), s.clone(), vec![s.clone(), s.clone()]);
    g.add(Boolean(true), s, vec![a]);
    g
}

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(4)]
fn ambiguous_arithmetic_accepts_every_run_of_a(len: usize) {
    let g = ambiguous_arithmetic();
    let input: Vec<Symbol> = std::iter::repeat(Symbol::terminal("a")).take(len).collect();
    assert_eq!(g.weight_of(&input), Boolean(true));
}

#[test]
fn ambiguous_arithmetic_elim_left_recursion_keeps_accepting() {
    let alloc = SymbolAllocator::new();
    let g = ambiguous_arithmetic();
    let transformed = g.eliminate_left_recursion(&alloc);
    assert!(!transformed.is_left_recursive());

    let a = Symbol::terminal("a");
    assert_eq!(g.weight_of(&[a.clone(), a.clone(), a]), Boolean(true));
}

#[test]
fn epsilon_production_collapses_to_a_single_nullary_rule() {
    let s = Symbol::nonterminal("S");
    let a_nt = Symbol::nonterminal("A");
    let b_nt = Symbol::nonterminal("B");
    let a = Symbol::terminal("a");
    let b = Symbol::terminal("b");
    let terminals: std::collections::HashSet<_> = [a.clone(), b.clone()].into_iter().collect();

    let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
    g.add(Boolean(true), s.clone(), vec![a_nt.clone(), b_nt.clone()]);
    g.add(Boolean(true), a_nt.clone(), vec![a.clone()]);
    g.add(Boolean(true), a_nt, vec![]);
    g.add(Boolean(true), b_nt, vec![b.clone()]);

    let alloc = SymbolAllocator::new();
    let removed = g.nullaryremove(&alloc, true, false).unwrap();

    let nullary_rules: Vec<_> = removed.rules().iter().filter(|r| r.body.is_empty()).collect();
    assert_eq!(nullary_rules.len(), 1);
    assert_eq!(nullary_rules[0].head, *removed.start());

    assert_eq!(g.weight_of(&[a.clone(), b.clone()]), Boolean(true));
    assert_eq!(g.weight_of(&[b]), Boolean(true));
    assert_eq!(g.weight_of(&[a]), Boolean(false));
}

#[test]
fn lehmann_closure_of_one_half_is_two() {
    let one = Symbol::nonterminal("1");
    let mut w: Chart<(Symbol, Symbol), Real> = Chart::new();
    w.add_assign((one.clone(), one.clone()), Real(0.5));

    let nodes = vec![one.clone()];
    let v = wcfg::lehmann(&nodes, &w);
    assert_eq!(v.get(&(one.clone(), one)), Real(2.0));
}

#[test]
fn glct_round_trip_maps_every_derivation_uniquely() {
    let s = Symbol::nonterminal("S");
    let a = Symbol::terminal("a");
    let b = Symbol::terminal("b");
    let terminals: std::collections::HashSet<_> = [a.clone(), b.clone()].into_iter().collect();

    let mut g: Grammar<Boolean> = Grammar::new(s.clone(), terminals);
    g.add(Boolean(true), s.clone(), vec![s.clone(), a.clone()]);
    g.add(Boolean(true), s.clone(), vec![b.clone()]);

    let xs: std::collections::HashSet<_> = [b.clone()].into_iter().collect();
    let ps = vec![wcfg::Rule::new(Boolean(true), s.clone(), vec![s.clone(), a.clone()])];

    let alloc = SymbolAllocator::new();
    let glct = g.lc_generalized(xs, ps, true, &alloc);
    assert!(!glct.grammar().is_left_recursive());

    let target = [b.clone(), a.clone(), a.clone()];
    let derivations = g.derivations_of(&target);
    assert_eq!(derivations.len(), 1);

    let mapped = glct.mapping(&derivations[0]);
    assert_eq!(mapped.yield_symbols(), target);
    assert_eq!(mapped.weight(), Boolean(true));
}

#[test]
fn glct_round_trip_preserves_real_weights() {
    // Same shape as the Boolean round trip above, but weighted: the
    // mapped derivation must carry the same weight as the parent
    // derivation it came from, not just the same yield.
    let s = Symbol::nonterminal("S");
    let a = Symbol::terminal("a");
    let b = Symbol::terminal("b");
    let terminals: std::collections::HashSet<_> = [a.clone(), b.clone()].into_iter().collect();

    let mut g: Grammar<Real> = Grammar::new(s.clone(), terminals);
    g.add(Real(2.0), s.clone(), vec![s.clone(), a.clone()]);
    g.add(Real(3.0), s.clone(), vec![b.clone()]);

    let xs: std::collections::HashSet<_> = [b.clone()].into_iter().collect();
    let ps = vec![wcfg::Rule::new(Real(2.0), s.clone(), vec![s.clone(), a.clone()])];

    let alloc = SymbolAllocator::new();
    let glct = g.lc_generalized(xs, ps, true, &alloc);

    let target = [b.clone(), a.clone(), a.clone()];
    let derivations = g.derivations_of(&target);
    assert_eq!(derivations.len(), 1);

    let mapped = glct.mapping(&derivations[0]);
    assert_eq!(mapped.yield_symbols(), target);
    assert_eq!(mapped.weight(), derivations[0].weight());
    assert_eq!(mapped.weight(), Real(3.0 * 2.0 * 2.0));
}
