use std::fmt;

/// Errors produced by `wcfg`'s fallible transformations and its text-format
/// loader.
///
/// Lives here (rather than in the top-level `wcfg` crate) because the
/// fallible transformations that return it — `nullaryremove`,
/// `elim_nullary_slash`, `cnf` — are spread across several crates below
/// `wcfg` in the dependency order, and `wcfg-grammar` is the lowest crate
/// all of them already depend on. The top-level crate re-exports it as
/// `wcfg::Error`, mirroring the teacher's own `cfg-load::LoadError` in
/// shape (a plain enum, manual `Display`, no `thiserror`).
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A malformed line in the grammar text format.
    BadInput {
        /// 1-indexed line number.
        line: usize,
        /// The offending line, verbatim.
        text: String,
    },
    /// An invariant check failed at a transformation's boundary.
    Precondition {
        /// The name of the transformation that rejected its input.
        operation: &'static str,
        reason: String,
    },
    /// An attempt to construct a rule whose head is not a nonterminal.
    InvalidRule { reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadInput { line, text } => {
                write!(f, "bad input at line {line}: {text}")
            }
            Error::Precondition { operation, reason } => {
                write!(f, "precondition failed in `{operation}`: {reason}")
            }
            Error::InvalidRule { reason } => write!(f, "invalid rule: {reason}"),
        }
    }
}

impl std::error::Error for Error {}
