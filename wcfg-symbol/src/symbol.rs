use std::fmt;
use std::rc::Rc;

/// A grammar symbol.
///
/// `Terminal` and `Nonterminal` wrap interned names; `Slash` and `Frozen`
/// are the two symbol shapes invented by the left-corner transformations.
/// The `id` carried by `Slash`/`Frozen` is a name-collision escape hatch: it
/// defaults to zero and is bumped only when the default name already
/// exists in the parent grammar (see [`SymbolAllocator`](crate::SymbolAllocator)).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A terminal symbol (a literal of the generated language).
    Terminal(Rc<str>),
    /// A plain nonterminal symbol.
    Nonterminal(Rc<str>),
    /// `Slash(Y, Z, id)`: a `Y` missing a `Z` at its left edge.
    Slash(Box<Symbol>, Box<Symbol>, u32),
    /// `Frozen(X, id)`: an `X` whose topmost production is outside the
    /// transformed rule set.
    Frozen(Box<Symbol>, u32),
}

impl Symbol {
    /// Builds a terminal symbol from its name.
    pub fn terminal(name: impl AsRef<str>) -> Self {
        Symbol::Terminal(Rc::from(name.as_ref()))
    }

    /// Builds a plain nonterminal symbol from its name.
    pub fn nonterminal(name: impl AsRef<str>) -> Self {
        Symbol::Nonterminal(Rc::from(name.as_ref()))
    }

    /// Builds `Slash(y, z)` with the given collision id.
    pub fn slash(y: Symbol, z: Symbol, id: u32) -> Self {
        Symbol::Slash(Box::new(y), Box::new(z), id)
    }

    /// Builds `Frozen(x)` with the given collision id. A terminal is its
    /// own frozen form, so this returns `x` unchanged when `x` is a
    /// terminal.
    pub fn frozen(x: Symbol, id: u32) -> Self {
        if x.is_terminal() {
            x
        } else {
            Symbol::Frozen(Box::new(x), id)
        }
    }

    /// True for `Terminal`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// True for `Nonterminal`, `Slash`, and `Frozen`.
    pub fn is_nonterminal(&self) -> bool {
        !self.is_terminal()
    }

    /// If this is a `Slash(y, z, _)`, returns `(y, z)`.
    pub fn as_slash(&self) -> Option<(&Symbol, &Symbol)> {
        match self {
            Symbol::Slash(y, z, _) => Some((y, z)),
            _ => None,
        }
    }

    /// If this is a `Frozen(x, _)`, returns `x`. A terminal is its own
    /// frozen form, so terminals return themselves.
    pub fn as_frozen(&self) -> Option<&Symbol> {
        match self {
            Symbol::Frozen(x, _) => Some(x),
            Symbol::Terminal(_) => Some(self),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(name) | Symbol::Nonterminal(name) => write!(f, "{name}"),
            Symbol::Slash(y, z, id) => {
                if *id == 0 {
                    write!(f, "{y}/{z}")
                } else {
                    write!(f, "{y}/{z}@{id}")
                }
            }
            Symbol::Frozen(x, id) => {
                if *id == 0 {
                    write!(f, "~{x}")
                } else {
                    write!(f, "~{x}@{id}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen_of_terminal_is_itself() {
        let a = Symbol::terminal("a");
        assert_eq!(Symbol::frozen(a.clone(), 0), a);
    }

    #[test]
    fn slash_display_omits_zero_id() {
        let x = Symbol::nonterminal("X");
        let y = Symbol::nonterminal("Y");
        assert_eq!(Symbol::slash(x.clone(), y.clone(), 0).to_string(), "X/Y");
        assert_eq!(Symbol::slash(x, y, 3).to_string(), "X/Y@3");
    }

    #[test]
    fn equality_is_structural() {
        let a1 = Symbol::nonterminal("A");
        let a2 = Symbol::nonterminal("A");
        assert_eq!(a1, a2);
        assert_ne!(Symbol::terminal("a"), Symbol::nonterminal("a"));
    }
}
