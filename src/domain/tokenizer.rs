//! Call-chain tokenizer.
//!
//! Strips tokens off the front of a raw match until nothing parseable is
//! left. Two grammars are in play: right after the bare identifier token a
//! `)` may also end a token (`(Library.prop)`), everywhere else only `.`,
//! `(` and `;` do.

use regex::Regex;

use super::error::Result;
use super::token::{Token, TokenSequence};

/// Which terminator set applies to the next token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    Chain,
    AfterIdentifier,
}

pub struct Tokenizer {
    identifier: Token,
    chain: Regex,
    after_identifier: Regex,
}

impl Tokenizer {
    pub fn new(identifier: &str) -> Result<Self> {
        Ok(Self {
            identifier: Token::identifier(identifier),
            chain: Regex::new(r"^[0-9A-Za-z]+[.(;]")?,
            after_identifier: Regex::new(r"^[0-9A-Za-z]+[.();]")?,
        })
    }

    pub fn identifier(&self) -> &Token {
        &self.identifier
    }

    fn grammar_after(&self, previous: Option<&Token>) -> Grammar {
        match previous {
            Some(token) if *token == self.identifier => Grammar::AfterIdentifier,
            _ => Grammar::Chain,
        }
    }

    fn regex(&self, grammar: Grammar) -> &Regex {
        match grammar {
            Grammar::Chain => &self.chain,
            Grammar::AfterIdentifier => &self.after_identifier,
        }
    }

    /// Tokenize one raw match. Stops silently at the first unparseable
    /// position and returns what was collected so far.
    pub fn tokenize(&self, raw: &str) -> TokenSequence {
        let mut tokens = TokenSequence::default();
        let mut rest = raw;

        loop {
            let grammar = self.grammar_after(tokens.last());
            let Some(m) = self.regex(grammar).find(rest) else {
                break;
            };
            let mut token = Token::new(m.as_str());
            rest = &rest[m.end()..];

            // `name()` followed by `.` or `;` is an empty call: the `)` is
            // absorbed and the chain continues (or ends) after it.
            if token.terminator() == Some('(') {
                if let Some(after_close) = rest.strip_prefix(')') {
                    rest = after_close;
                    if let Some(after_dot) = rest.strip_prefix('.') {
                        rest = after_dot;
                    } else if let Some(after_semi) = rest.strip_prefix(';') {
                        rest = after_semi;
                        token = token.with_terminator(';');
                    }
                }
            }

            tokens.push(token);
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &str) -> Vec<String> {
        let tokenizer = Tokenizer::new("Library").unwrap();
        tokenizer
            .tokenize(raw)
            .tokens()
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_empty_calls_chain() {
        assert_eq!(
            tokens("Library.method1().method2();"),
            vec!["Library.", "method1(", "method2;"]
        );
    }

    #[test]
    fn test_property_access() {
        assert_eq!(tokens("Library.a.b;"), vec!["Library.", "a.", "b;"]);
    }

    #[test]
    fn test_close_paren_allowed_after_identifier_only() {
        assert_eq!(tokens("Library.prop);"), vec!["Library.", "prop)"]);
        // `)` does not end a token deeper in the chain.
        assert_eq!(tokens("Library.a.b);"), vec!["Library.", "a."]);
    }

    #[test]
    fn test_stops_at_arguments() {
        assert_eq!(tokens("Library.a(1).b();"), vec!["Library.", "a("]);
    }

    #[test]
    fn test_nested_identifier() {
        // Only the empty call's own `)` is absorbed; the outer `)` ends the chain.
        assert_eq!(
            tokens("Library.a(Library.b());"),
            vec!["Library.", "a(", "Library.", "b("]
        );
    }

    #[test]
    fn test_nested_chain_continues_after_empty_call() {
        assert_eq!(
            tokens("Library.a(Library.b().c());"),
            vec!["Library.", "a(", "Library.", "b(", "c("]
        );
    }

    #[test]
    fn test_trailing_text_after_statement() {
        assert_eq!(
            tokens("Library.x(); foo();"),
            vec!["Library.", "x;"]
        );
    }

    #[test]
    fn test_unparseable_yields_empty() {
        assert!(tokens(";;").is_empty());
        assert!(tokens("").is_empty());
    }
}
