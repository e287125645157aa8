//! csspath: node classification for CSS, SCSS and Less syntax trees
//!
//! This library sits between a CSS-family parser and a pretty printer.
//! It answers structural questions about a position in the tree:
//! - Ancestor queries over an arena-backed tree
//! - Dialect selection from hints or raw source
//! - Identifier case normalization
//! - Grammar predicates that recover SCSS / Less meaning from generic nodes
//!
//! Nothing here mutates the tree or decides output text.

pub mod node;
pub mod builder;
pub mod json;
pub mod cursor;
pub mod config;
pub mod html_tags;
pub mod dialect;
pub mod case;
pub mod predicates;
pub mod classify;
pub mod error;

pub use node::{Node, NodeId, NodeKind, NodeRef, Selector, Tree};
pub use builder::TreeBuilder;
pub use json::{from_json_str, from_json_file};
pub use cursor::{Cursor, Ancestors};
pub use dialect::{Dialect, is_scss, resolve_dialect};
pub use case::{normalize_case, is_wide_keyword, is_keyframe_position_keyword};
pub use classify::{ValueClass, classify_value};
pub use error::TreeError;
