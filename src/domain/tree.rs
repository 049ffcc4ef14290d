// Call tree: a trie keyed by method name.

use serde::Serialize;
use std::collections::BTreeMap;

use super::token::TokenSequence;

/// A node in the call tree. A leaf is a node with no children.
/// Children are kept sorted so the written document is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CallTree {
    children: BTreeMap<String, CallTree>,
}

impl CallTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from every chain, dropping each chain's identifier token.
    pub fn aggregate<'a, I>(chains: I) -> Self
    where
        I: IntoIterator<Item = &'a TokenSequence>,
    {
        let mut tree = CallTree::new();
        for chain in chains {
            tree.insert(chain.method_names());
        }
        tree
    }

    /// Insert one path of method names, creating missing nodes.
    pub fn insert<'a, I>(&mut self, names: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cursor = self;
        for name in names {
            cursor = cursor.children.entry(name.to_string()).or_default();
        }
    }

    pub fn child(&self, name: &str) -> Option<&CallTree> {
        self.children.get(name)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes below this one, the node itself excluded.
    pub fn count_nodes(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.count_nodes())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(tokens: &[&str]) -> TokenSequence {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_shared_prefix_counted_once() {
        let chains = vec![
            seq(&["Library.", "a.", "b;"]),
            seq(&["Library.", "a.", "c;"]),
        ];
        let tree = CallTree::aggregate(&chains);
        assert_eq!(tree.count_nodes(), 3);
        let a = tree.child("a").unwrap();
        assert!(a.child("b").unwrap().is_leaf());
        assert!(a.child("c").unwrap().is_leaf());
    }

    #[test]
    fn test_duplicate_chains_are_idempotent() {
        let once = vec![seq(&["Library.", "x(", "y;"]), seq(&["Library.", "z;"])];
        let twice: Vec<TokenSequence> = once.iter().chain(once.iter()).cloned().collect();
        assert_eq!(CallTree::aggregate(&once), CallTree::aggregate(&twice));
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let chains = vec![
            seq(&["Library.", "x(", "y;"]),
            seq(&["Library.", "x(", "z;"]),
            seq(&["Library.", "w;"]),
        ];
        let reversed: Vec<TokenSequence> = chains.iter().rev().cloned().collect();
        assert_eq!(CallTree::aggregate(&chains), CallTree::aggregate(&reversed));
    }

    #[test]
    fn test_identifier_only_chain_adds_nothing() {
        let tree = CallTree::aggregate(&[seq(&["Library."])]);
        assert!(tree.is_leaf());
        assert_eq!(tree.count_nodes(), 0);
    }

    #[test]
    fn test_serializes_as_nested_objects() {
        let tree = CallTree::aggregate(&[seq(&["Library.", "method1(", "method2;"])]);
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json, serde_json::json!({ "method1": { "method2": {} } }));
    }
}
