//! Grammar predicates
//!
//! Structural tests that recover dialect meaning from generic nodes.
//! Every predicate is total: missing structure yields `false`.
//! When several predicates hold for the same node, the caller decides
//! which one wins.

pub mod value;
pub mod statement;
pub mod context;
pub mod map;

pub use value::{
    is_paren_group, is_control_for_keyword, is_control_logical_keyword, is_control_each_keyword,
    is_arithmetic_operator, is_equality_operator, is_relational_operator, is_url_function,
    is_known_markup_tag, is_key_value_pair, is_key_value_container,
    is_interpolated_variable_shorthand,
};
pub use statement::{
    is_control_directive, is_misparsed_variable_declaration, is_nested_property_block,
    is_detached_ruleset_invocation, has_extend_call, has_composes_property, has_explicit_parens,
};
pub use context::{
    inside_function_named, inside_special_selector_block, inside_at_rule_named,
    is_first_arg_url_inside_import, is_last_sibling,
};
pub use map::is_map_entry;
