//! Document model: the tree values that get pruned.

pub mod node;
pub mod parser;
pub mod tree;

pub use node::{Scalar, TreeValue};
pub use tree::{Document, DocumentFormat};
