// Token types shared by the tokenizer, the nesting splitter and the tree.

use std::fmt;

/// Characters that may end a token.
pub const TERMINATORS: [char; 4] = ['.', '(', ')', ';'];

/// One call segment: an alphanumeric name followed by its terminator,
/// e.g. `Library.`, `method1(` or `method2;`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    /// The token of the target identifier itself (`Library` -> `Library.`).
    pub fn identifier(identifier: &str) -> Self {
        Token(format!("{}.", identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bare method name with trailing punctuation stripped.
    pub fn name(&self) -> &str {
        self.0.trim_end_matches(TERMINATORS)
    }

    pub fn terminator(&self) -> Option<char> {
        self.0.chars().last().filter(|c| TERMINATORS.contains(c))
    }

    /// Replace the terminator, keeping the name.
    pub(crate) fn with_terminator(&self, terminator: char) -> Self {
        Token(format!("{}{}", self.name(), terminator))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered, linear call chain. The first token is the identifier token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn starts_with(&self, token: &Token) -> bool {
        self.tokens.first() == Some(token)
    }

    /// Index of the first `token` at or after `from`.
    pub fn position_from(&self, token: &Token, from: usize) -> Option<usize> {
        self.tokens
            .iter()
            .skip(from)
            .position(|t| t == token)
            .map(|i| i + from)
    }

    /// Split at `at`, keeping `[0, at)` in `self` and returning `[at, len)`.
    pub fn split_off(&mut self, at: usize) -> TokenSequence {
        TokenSequence::new(self.tokens.split_off(at))
    }

    /// Method names after the leading identifier token.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().skip(1).map(Token::name)
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TokenSequence::new(iter.into_iter().map(|s| Token::new(s)).collect())
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.tokens.iter().map(Token::as_str).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
