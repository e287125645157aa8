//! Aggregate classification of value nodes
//!
//! Collects every value-level class a node satisfies so a printer can
//! inspect them together. No precedence is applied.

use serde::Serialize;
use strum_macros::Display;

use crate::node::NodeRef;
use crate::predicates::value::*;

/// Semantic classes of a value-grammar node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ValueClass {
    ForKeyword,
    LogicalKeyword,
    EachKeyword,
    ArithmeticOperator,
    EqualityOperator,
    RelationalOperator,
    ParenGroup,
    UrlFunction,
    KeyValuePair,
    KeyValueContainer,
}

const CLASSIFIERS: &[(ValueClass, fn(NodeRef<'_>) -> bool)] = &[
    (ValueClass::ForKeyword, is_control_for_keyword),
    (ValueClass::LogicalKeyword, is_control_logical_keyword),
    (ValueClass::EachKeyword, is_control_each_keyword),
    (ValueClass::ArithmeticOperator, is_arithmetic_operator),
    (ValueClass::EqualityOperator, is_equality_operator),
    (ValueClass::RelationalOperator, is_relational_operator),
    (ValueClass::ParenGroup, is_paren_group),
    (ValueClass::UrlFunction, is_url_function),
    (ValueClass::KeyValuePair, is_key_value_pair),
    (ValueClass::KeyValueContainer, is_key_value_container),
];

/// Every class `node` belongs to, in declaration order
pub fn classify_value(node: NodeRef<'_>) -> Vec<ValueClass> {
    CLASSIFIERS
        .iter()
        .filter(|(_, test)| test(node))
        .map(|(class, _)| *class)
        .collect()
}
