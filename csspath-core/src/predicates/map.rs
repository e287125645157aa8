//! SCSS map detection
//!
//! `(key: value)` parses the same whether it is a map literal or a
//! parenthesized list such as a media feature. Context decides:
//! ```text
//! $map: (key: value, other: value)        variable assigned a map
//! $map: (key: (value other-value))        list nested as a map value
//! map-merge($a, (key: value))             map passed to a function
//! @media (min-width: 10px)                not a map
//! ```

use crate::cursor::Cursor;
use crate::node::{NodeKind, NodeRef};
use super::value::is_key_value_container;

/// The group under the cursor belongs to a map literal
pub fn is_map_entry(cursor: &Cursor<'_>) -> bool {
    let node = cursor.node();

    // Empty literal, `$key: ()`
    if !node.node().is_group() || node.child_count() == 0 {
        return false;
    }

    let grandparent = cursor.parent_node(1);
    let grandparent_is_map = grandparent.is_some_and(is_key_value_container);
    if !is_key_value_container(node) && !grandparent_is_map {
        return false;
    }

    let declares_variable = cursor
        .find_ancestor(&[NodeKind::Declaration])
        .and_then(|decl| decl.prop())
        .is_some_and(|prop| prop.starts_with('$'));

    declares_variable || grandparent_is_map || grandparent.is_some_and(is_function_call)
}

fn is_function_call(node: NodeRef<'_>) -> bool {
    node.is(NodeKind::ValueFunction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NodeId, TreeBuilder};

    /// `(a: 1, b: 2)` as a paren group of two key/value comma groups
    fn map_literal(b: &mut TreeBuilder) -> NodeId {
        let a = b.word("a");
        let colon = b.colon();
        let one = b.word_with_before("1", " ");
        let first = b.comma_group(vec![a, colon, one]);
        let key = b.word_with_before("b", " ");
        let colon = b.colon();
        let two = b.word_with_before("2", " ");
        let second = b.comma_group(vec![key, colon, two]);
        b.paren_group(vec![first, second])
    }

    #[test]
    fn test_variable_assigned_a_map() {
        let mut b = TreeBuilder::new();
        let map = map_literal(&mut b);
        let value = b.value(map);
        let decl = b.declaration("$map", value);
        let root = b.root(vec![decl]);
        let tree = b.finish(root).unwrap();
        assert!(is_map_entry(&Cursor::at(&tree, map).unwrap()));
    }

    #[test]
    fn test_media_feature_is_not_a_map() {
        let mut b = TreeBuilder::new();
        let key = b.word("a");
        let colon = b.colon();
        let one = b.word_with_before("1", " ");
        let pair = b.comma_group(vec![key, colon, one]);
        let feature = b.paren_group(vec![pair]);
        let value = b.value(feature);
        let media = b.at_rule("media", "(a: 1)", vec![value]);
        let root = b.root(vec![media]);
        let tree = b.finish(root).unwrap();
        assert!(!is_map_entry(&Cursor::at(&tree, feature).unwrap()));
    }

    #[test]
    fn test_empty_literal() {
        let mut b = TreeBuilder::new();
        let empty = b.paren_group(vec![]);
        let value = b.value(empty);
        let decl = b.declaration("$key", value);
        let root = b.root(vec![decl]);
        let tree = b.finish(root).unwrap();
        assert!(!is_map_entry(&Cursor::at(&tree, empty).unwrap()));
    }

    #[test]
    fn test_list_nested_in_map_value() {
        // (key: (value other-value)) under a plain property
        let mut b = TreeBuilder::new();
        let first = b.word("value");
        let second = b.word_with_before("other-value", " ");
        let list = b.paren_group(vec![first, second]);
        let key = b.word("key");
        let colon = b.colon();
        let pair = b.comma_group(vec![key, colon, list]);
        let outer = b.paren_group(vec![pair]);
        let value = b.value(outer);
        let decl = b.declaration("grid-template", value);
        let root = b.root(vec![decl]);
        let tree = b.finish(root).unwrap();
        assert!(is_map_entry(&Cursor::at(&tree, list).unwrap()));
        assert!(!is_map_entry(&Cursor::at(&tree, outer).unwrap()));
    }

    #[test]
    fn test_map_passed_to_function() {
        // map-merge((a: 1, b: 2)) where the literal is the function's only group
        let mut b = TreeBuilder::new();
        let map = map_literal(&mut b);
        let wrapper = b.comma_group(vec![map]);
        let func = b.function("map-merge", vec![wrapper]);
        let value = b.value(func);
        let decl = b.declaration("width", value);
        let root = b.root(vec![decl]);
        let tree = b.finish(root).unwrap();
        assert!(is_map_entry(&Cursor::at(&tree, map).unwrap()));
    }

    #[test]
    fn test_non_group_cursor() {
        let mut b = TreeBuilder::new();
        let word = b.word("a");
        let value = b.value(word);
        let decl = b.declaration("$a", value);
        let root = b.root(vec![decl]);
        let tree = b.finish(root).unwrap();
        assert!(!is_map_entry(&Cursor::at(&tree, word).unwrap()));
        assert!(!is_map_entry(&Cursor::new(&tree)));
    }
}
