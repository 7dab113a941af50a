use wcfg_classify::binarize;
use wcfg_closure::lehmann;
use wcfg_grammar::{Error, Grammar};
use wcfg_semiring::{Chart, Semiring};
use wcfg_symbol::{Symbol, SymbolAllocator};

use crate::nullary::push_null_weights;

/// An optimized nullary-removal pass for grammars produced by speculation
/// or the generalized left-corner transformation, where every nullary
/// rule is known to be headed by a `Slash` symbol. Exploits that
/// structure to compute null weights via a single Lehmann closure over
/// unary `Slash -> Slash` chains instead of the general power-set
/// expansion in [`crate::nullary::nullaryremove`].
///
/// Returns `Error::Precondition` if a nullary rule with a non-`Slash` head
/// is found, since that would mean the grammar wasn't actually produced by
/// speculation/GLCT and the general-purpose `nullaryremove` should be
/// used instead.
pub fn elim_nullary_slash<R: Semiring>(
    grammar: &Grammar<R>,
    alloc: &SymbolAllocator,
    do_binarize: bool,
) -> Result<Grammar<R>, Error> {
    let g = if do_binarize {
        binarize(grammar, alloc)
    } else {
        grammar.clone()
    };

    let mut chain_weights: Chart<(Symbol, Symbol), R> = Chart::new();
    let mut nullary_slash_weights: Chart<Symbol, R> = Chart::new();

    for rule in g.rules() {
        if rule.body.is_empty() && rule.head.as_slash().is_none() {
            return Err(Error::Precondition {
                operation: "elim_nullary_slash",
                reason: format!(
                    "nullary rule headed by non-Slash symbol `{}`; use nullaryremove instead",
                    rule.head
                ),
            });
        }
        if rule.body.len() == 1 && rule.head.as_slash().is_some() {
            debug_assert!(rule.body[0].as_slash().is_some());
            chain_weights.add_assign((rule.head.clone(), rule.body[0].clone()), rule.weight.clone());
        }
        if rule.body.is_empty() {
            nullary_slash_weights.add_assign(rule.head.clone(), rule.weight.clone());
        }
    }

    let nodes: Vec<Symbol> = g.nonterminals().iter().cloned().collect();
    let closure = lehmann(&nodes, &chain_weights);

    let mut null_weight: Chart<Symbol, R> = Chart::new();
    for x in g.nonterminals() {
        for y in g.nonterminals() {
            let term = closure.get(&(x.clone(), y.clone())).mul(&nullary_slash_weights.get(y));
            null_weight.add_assign(x.clone(), term);
        }
    }

    Ok(push_null_weights(&g, &null_weight, false))
}
