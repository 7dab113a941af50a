use wcfg_semiring::Semiring;
use wcfg_symbol::Symbol;

/// A derivation tree: either a terminal leaf, or an internal node carrying
/// the weight of the rule that produced it and its children.
///
/// `PartialEq` ignores `weight` and compares only `(head, children)`, so
/// that derivations produced by different (but structurally identical)
/// rule applications still collate when used as chart keys or compared in
/// tests.
#[derive(Clone, Debug)]
pub enum Derivation<R> {
    /// A terminal leaf.
    Leaf(Symbol),
    /// An internal node: `head -> children`, with the weight of the rule
    /// that produced it.
    Node {
        head: Symbol,
        weight: R,
        children: Vec<Derivation<R>>,
    },
}

impl<R> Derivation<R> {
    /// The symbol at this node (terminal for a leaf, the rule's head
    /// otherwise).
    pub fn symbol(&self) -> &Symbol {
        match self {
            Derivation::Leaf(x) => x,
            Derivation::Node { head, .. } => head,
        }
    }
}

impl<R: Semiring> Derivation<R> {
    /// Builds a structural node with weight `one`. Call sites in the
    /// speculation/GLCT derivation mappings use this only for subtrees
    /// that correspond to a genuine weight-`one` rule in the transformed
    /// grammar (a base case or recovery rule) — anything standing in for a
    /// parent-grammar rule of non-unit weight must go through
    /// [`Derivation::tree_weighted`] instead so `.weight()` stays exact.
    pub fn tree(head: Symbol, children: Vec<Derivation<R>>) -> Self {
        Derivation::Node {
            head,
            weight: R::one(),
            children,
        }
    }

    /// Builds a structural node carrying an explicit weight, for the case
    /// where the synthesized node stands in for a transformed-grammar rule
    /// whose weight is inherited from a parent-grammar rule rather than
    /// being the multiplicative identity.
    pub fn tree_weighted(head: Symbol, weight: R, children: Vec<Derivation<R>>) -> Self {
        Derivation::Node { head, weight, children }
    }

    /// The total weight: the product (in rule-body order) of this node's
    /// rule weight and each child's weight. Leaves contribute the
    /// multiplicative identity (they are not themselves weighted).
    pub fn weight(&self) -> R {
        match self {
            Derivation::Leaf(_) => R::one(),
            Derivation::Node { weight, children, .. } => children
                .iter()
                .fold(weight.clone(), |acc, child| acc.mul(&child.weight())),
        }
    }

    /// The concatenation of leaves, left to right.
    pub fn yield_symbols(&self) -> Vec<Symbol> {
        match self {
            Derivation::Leaf(x) => vec![x.clone()],
            Derivation::Node { children, .. } => {
                children.iter().flat_map(Derivation::yield_symbols).collect()
            }
        }
    }
}

impl<R> PartialEq for Derivation<R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Derivation::Leaf(a), Derivation::Leaf(b)) => a == b,
            (
                Derivation::Node { head: h1, children: c1, .. },
                Derivation::Node { head: h2, children: c2, .. },
            ) => h1 == h2 && c1 == c2,
            _ => false,
        }
    }
}
