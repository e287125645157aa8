//! Statement-level predicates (rules, at-rules, declarations)

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::RULES;
use crate::node::{Node, NodeRef};

static VARIABLE_DECLARATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@.+:.*$").unwrap());
static BLOCK_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*.*?\*/").unwrap());
static LINE_COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.*?\n").unwrap());
static EMPTY_PARENS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(\s*\)$").unwrap());

/// `@if`, `@else`, `@for`, `@each` or `@while`
pub fn is_control_directive(node: NodeRef<'_>) -> bool {
    match node.node() {
        Node::AtRule { name, .. } => RULES.is_control_directive(name),
        _ => false,
    }
}

/// A Less variable declaration (`@var: value`) that a permissive grammar
/// read as a rule because its name ends with a colon
pub fn is_misparsed_variable_declaration(node: NodeRef<'_>) -> bool {
    node.selector()
        .and_then(|selector| selector.text())
        .is_some_and(|text| VARIABLE_DECLARATION_RE.is_match(text))
}

/// SCSS nested properties, `font: { family: x; size: y; }`
pub fn is_nested_property_block(node: NodeRef<'_>) -> bool {
    let Some(selector) = node.selector().and_then(|s| s.as_text()) else {
        return false;
    };
    let without_block = BLOCK_COMMENT_RE.replace(selector, "");
    let stripped = LINE_COMMENT_RE.replace(&without_block, "");
    stripped.trim().ends_with(':')
}

/// Less detached ruleset call with no arguments, `@detached();`
pub fn is_detached_ruleset_invocation(node: NodeRef<'_>) -> bool {
    node.raw_params().is_some_and(|params| EMPTY_PARENS_RE.is_match(params))
}

/// Less `&:extend(...)` written as a declaration
pub fn has_extend_call(node: NodeRef<'_>) -> bool {
    let Some(root) = node.value().filter(|v| matches!(v.node(), Node::ValueRoot { .. })) else {
        return false;
    };
    let Some(value) = root.group().filter(|v| matches!(v.node(), Node::ValueValue { .. })) else {
        return false;
    };
    value
        .group()
        .is_some_and(|inner| matches!(inner.node(), Node::ValueFunction { name, .. } if name == "extend"))
}

/// CSS Modules `composes: ...` declaration with a parsed value
pub fn has_composes_property(node: NodeRef<'_>) -> bool {
    let has_value = node
        .value()
        .filter(|v| matches!(v.node(), Node::ValueRoot { .. }))
        .and_then(|root| root.group())
        .is_some_and(|group| matches!(group.node(), Node::ValueValue { .. }));
    has_value && node.prop().is_some_and(|prop| prop.eq_ignore_ascii_case("composes"))
}

/// Value wrapped in parentheses the author wrote explicitly
pub fn has_explicit_parens(node: NodeRef<'_>) -> bool {
    let inner = node.value().and_then(|v| v.group()).and_then(|v| v.group());
    matches!(
        inner.map(|n| n.node()),
        Some(Node::ValueParenGroup { open: Some(_), close: Some(_), .. })
    )
}
