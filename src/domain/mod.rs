// Domain layer: the parsing and aggregation pipeline.

pub mod error;
pub mod matcher;
pub mod nesting;
pub mod token;
pub mod tokenizer;
pub mod tree;

pub use error::{MineError, Result};
pub use nesting::{split_nested, Chains};
pub use token::{Token, TokenSequence};
pub use tree::CallTree;
