//! A one-rule-per-line grammar text format: `<weight>: <head> -> <body...>`
//! (`->`/`→` synonyms), `#` comments, blank lines ignored. Whitespace
//! separates body symbols.

use std::collections::HashSet;

use wcfg_grammar::{Error, Grammar};
use wcfg_semiring::Semiring;
use wcfg_symbol::Symbol;

/// The default terminal/nonterminal classifier: a token is a terminal iff
/// its first character is lowercase.
pub fn default_is_terminal(token: &str) -> bool {
    token.chars().next().map(|c| c.is_lowercase()).unwrap_or(false)
}

/// Parses `input` into a grammar rooted at `start`.
///
/// `is_terminal` classifies each body token (pass [`default_is_terminal`]
/// for the usual lowercase-is-a-terminal convention). `parse_weight` turns
/// a weight token into an `R`, returning `None` for a malformed one — the
/// line it came from is then reported as `Error::BadInput`.
pub fn parse<R: Semiring>(
    input: &str,
    start: Symbol,
    is_terminal: impl Fn(&str) -> bool,
    parse_weight: impl Fn(&str) -> Option<R>,
) -> Result<Grammar<R>, Error> {
    let lines: Vec<&str> = input.lines().collect();

    let mut terminals = HashSet::new();
    for line in &lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((_, body)) = split_arrow(trimmed) {
            for tok in body.split_whitespace() {
                if is_terminal(tok) {
                    terminals.insert(Symbol::terminal(tok));
                }
            }
        }
    }

    let mut grammar: Grammar<R> = Grammar::new(start, terminals);

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let bad_input = || Error::BadInput {
            line: idx + 1,
            text: (*line).to_string(),
        };

        let (lhs, body) = split_arrow(trimmed).ok_or_else(bad_input)?;
        let (weight_str, head_str) = lhs.split_once(':').ok_or_else(bad_input)?;
        let weight = parse_weight(weight_str.trim()).ok_or_else(bad_input)?;

        let head_str = head_str.trim();
        if head_str.is_empty() || is_terminal(head_str) {
            return Err(bad_input());
        }
        let head = Symbol::nonterminal(head_str);

        let body_symbols: Vec<Symbol> = body
            .split_whitespace()
            .map(|tok| {
                if is_terminal(tok) {
                    Symbol::terminal(tok)
                } else {
                    Symbol::nonterminal(tok)
                }
            })
            .collect();

        grammar.add(weight, head, body_symbols);
    }

    Ok(grammar)
}

fn split_arrow(line: &str) -> Option<(&str, &str)> {
    if let Some(idx) = line.find("->") {
        Some((line[..idx].trim(), line[idx + 2..].trim()))
    } else if let Some(idx) = line.find('→') {
        Some((line[..idx].trim(), line[idx + '→'.len_utf8()..].trim()))
    } else {
        None
    }
}
