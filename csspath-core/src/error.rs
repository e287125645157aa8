//! Errors raised while assembling a tree
//!
//! Classification itself never fails; only building or loading a tree can.

use thiserror::Error;
use crate::node::NodeId;

/// Errors that can occur while building or loading a syntax tree
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Node {0} is referenced but was never created")]
    UnknownNode(NodeId),
    #[error("Node {0} is a child of more than one parent")]
    MultipleParents(NodeId),
    #[error("Root node {0} is itself a child of another node")]
    RootHasParent(NodeId),
    #[error("Node {0} is not reachable from the root")]
    Unreachable(NodeId),
    #[error("Failed to decode parser output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
}
