use std::hash::Hash;

use wcfg_semiring::{Chart, Semiring};

/// Lehmann's (1977) algorithm: the weighted reflexive-transitive closure
/// of `w` over the node set `nodes`.
///
/// `result[i, k] = Σ_{paths i⇝k} weight(path)`, including the length-zero
/// path (`result[i, i] ⊕= one`). Each pivot `j` folds in paths that route
/// through `j`; the whole chart is rebuilt from the previous iteration's
/// chart on every pivot (rather than updated in place) because the
/// semiring need not be idempotent or commutative, so reading a value this
/// pivot is about to overwrite would be incorrect in general.
pub fn lehmann<K, R>(nodes: &[K], w: &Chart<(K, K), R>) -> Chart<(K, K), R>
where
    K: Eq + Hash + Clone,
    R: Semiring,
{
    let mut current = w.clone();

    for j in nodes {
        let s = current.get(&(j.clone(), j.clone())).star();
        let mut next = Chart::new();
        for i in nodes {
            for k in nodes {
                let direct = current.get(&(i.clone(), k.clone()));
                let via_j = current
                    .get(&(i.clone(), j.clone()))
                    .mul(&s)
                    .mul(&current.get(&(j.clone(), k.clone())));
                next.set((i.clone(), k.clone()), direct.add(&via_j));
            }
        }
        current = next;
    }

    for i in nodes {
        current.add_assign((i.clone(), i.clone()), R::one());
    }

    current
}
