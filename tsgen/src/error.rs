/// Errors raised while loading or generating a tree.
use thiserror::Error;

use crate::ast::{Node, NodeKind};

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The active registry has no procedure for this kind of node.
    #[error("no generator procedure for node type {}", .kind.as_str())]
    UnsupportedNodeType { kind: NodeKind, node: Box<Node> },

    /// A procedure was handed a node of a kind it cannot format.
    #[error("malformed {} node: {reason}", .kind.as_str())]
    MalformedNode { kind: NodeKind, reason: String },

    #[error("invalid ESTree JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;

impl GenerateError {
    pub fn unsupported(node: &Node) -> Self {
        GenerateError::UnsupportedNodeType {
            kind: node.kind(),
            node: Box::new(node.clone()),
        }
    }

    pub fn unexpected(node: &Node, expected: &str) -> Self {
        GenerateError::MalformedNode {
            kind: node.kind(),
            reason: format!("expected {expected}"),
        }
    }

    /// Kind of the offending node, if the error concerns one.
    pub fn kind(&self) -> Option<NodeKind> {
        match self {
            GenerateError::UnsupportedNodeType { kind, .. } | GenerateError::MalformedNode { kind, .. } => {
                Some(*kind)
            }
            GenerateError::Json(_) => None,
        }
    }
}

/// Destructure a node into the payload of one of the listed variants, or
/// fail with [`GenerateError::MalformedNode`].
macro_rules! expect_node {
    ($node:expr, $first:ident $(| $rest:ident)*) => {
        match $node {
            $crate::ast::Node::$first(payload) $(| $crate::ast::Node::$rest(payload))* => payload,
            other => {
                return Err($crate::error::GenerateError::unexpected(
                    other,
                    concat!(stringify!($first) $(, " or ", stringify!($rest))*),
                ))
            }
        }
    };
}

pub(crate) use expect_node;
