// Nested-chain splitting.
// A raw match may re-enter the identifier (`Library.a(Library.b());`); every
// re-entry starts an independent chain.

use tracing::debug;

use super::token::{Token, TokenSequence};

/// Result of splitting one token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chains {
    Single(TokenSequence),
    Multiple(Vec<TokenSequence>),
}

impl Chains {
    pub fn len(&self) -> usize {
        match self {
            Chains::Single(_) => 1,
            Chains::Multiple(chains) => chains.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<TokenSequence> {
        match self {
            Chains::Single(chain) => vec![chain],
            Chains::Multiple(chains) => chains,
        }
    }
}

impl IntoIterator for Chains {
    type Item = TokenSequence;
    type IntoIter = std::vec::IntoIter<TokenSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Split `tokens` at every occurrence of `identifier` after index 0.
///
/// Each resulting chain runs from one occurrence up to (not including) the
/// next one, the last chain runs to the end of the sequence. No token is
/// dropped, and every chain begins with `identifier` when the input did.
pub fn split_nested(tokens: TokenSequence, identifier: &Token) -> Chains {
    split_from(tokens, identifier, Vec::new())
}

fn split_from(
    mut chain: TokenSequence,
    identifier: &Token,
    mut heads: Vec<TokenSequence>,
) -> Chains {
    // Searching from 1 keeps `start >= 1`, so the tail is always shorter.
    let Some(start) = chain.position_from(identifier, 1) else {
        if heads.is_empty() {
            return Chains::Single(chain);
        }
        heads.push(chain);
        return Chains::Multiple(heads);
    };

    debug!(start, chain = %chain, "nested chain found");

    let tail = chain.split_off(start);
    heads.push(chain);
    split_from(tail, identifier, heads)
}
