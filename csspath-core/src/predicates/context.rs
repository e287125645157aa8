//! Predicates that depend on the cursor's enclosing nodes

use crate::cursor::Cursor;
use crate::node::{NodeKind, NodeRef};

/// Nearest enclosing function is named `name` (ignoring case)
pub fn inside_function_named(cursor: &Cursor<'_>, name: &str) -> bool {
    cursor
        .find_ancestor(&[NodeKind::ValueFunction])
        .and_then(|func| func.name())
        .is_some_and(|func_name| func_name.eq_ignore_ascii_case(name))
}

/// Nearest enclosing rule is an ICSS `:import` / `:export` block
pub fn inside_special_selector_block(cursor: &Cursor<'_>) -> bool {
    cursor
        .find_ancestor(&[NodeKind::Rule])
        .and_then(|rule| rule.raw_selector())
        .is_some_and(|selector| selector.starts_with(":import") || selector.starts_with(":export"))
}

/// Nearest enclosing at-rule is named `name` (ignoring case)
pub fn inside_at_rule_named(cursor: &Cursor<'_>, name: &str) -> bool {
    cursor
        .find_ancestor(&[NodeKind::AtRule])
        .and_then(|at_rule| at_rule.name())
        .is_some_and(|at_name| at_name.eq_ignore_ascii_case(name))
}

/// `url(...)` followed by one more group as the parameters of `@import`,
/// e.g. `@import url(foo.css) screen`
pub fn is_first_arg_url_inside_import(cursor: &Cursor<'_>) -> bool {
    let in_import = cursor
        .find_ancestor(&[NodeKind::AtRule])
        .and_then(|at_rule| at_rule.name())
        .is_some_and(|name| name == "import");
    let node = cursor.node();
    in_import
        && node.node().is_group()
        && node.child_count() == 2
        && node.child(0).and_then(|first| first.text()) == Some("url")
}

/// `node` is the last child of the cursor's immediate parent
pub fn is_last_sibling(cursor: &Cursor<'_>, node: NodeRef<'_>) -> bool {
    cursor
        .parent_node(0)
        .and_then(|parent| parent.node().children().last().copied())
        .is_some_and(|last| last == node.id())
}
