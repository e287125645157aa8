//! Loading parser output
//!
//! The upstream parser emits a postcss-style JSON tree where each object
//! carries a `"type"` discriminator:
//! ```json
//! {"type": "css-decl", "prop": "$map",
//!  "value": {"type": "value-root", "group": {"type": "value-value", "group": ...}}}
//! ```
//! Kinds this layer does not classify (numbers, strings, comments...)
//! load as [`Node::Other`] without their children.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::builder::TreeBuilder;
use crate::error::TreeError;
use crate::node::{Node, NodeId, Selector, Tree};

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum RawNode {
    #[serde(rename = "css-root")]
    Root {
        #[serde(default)]
        nodes: Vec<RawNode>,
    },
    #[serde(rename = "css-decl")]
    Declaration {
        prop: Option<String>,
        value: Option<RawValue>,
        #[serde(default)]
        raws: Raws,
    },
    #[serde(rename = "css-atrule")]
    AtRule {
        #[serde(default)]
        name: String,
        #[serde(default)]
        params: RawParams,
        #[serde(default)]
        raws: Raws,
        #[serde(default)]
        nodes: Vec<RawNode>,
    },
    #[serde(rename = "css-rule")]
    Rule {
        selector: Option<RawSelector>,
        #[serde(default)]
        raws: Raws,
        #[serde(default)]
        nodes: Vec<RawNode>,
    },
    #[serde(rename = "value-root")]
    ValueRoot { group: Option<Box<RawNode>> },
    #[serde(rename = "value-value")]
    ValueValue { group: Option<Box<RawNode>> },
    #[serde(rename = "value-comma_group")]
    CommaGroup {
        #[serde(default)]
        groups: Vec<RawNode>,
    },
    #[serde(rename = "value-paren_group")]
    ParenGroup {
        open: Option<RawText>,
        close: Option<RawText>,
        #[serde(default)]
        groups: Vec<RawNode>,
    },
    #[serde(rename = "value-func")]
    Function {
        value: String,
        #[serde(default)]
        group: Option<Box<RawNode>>,
        #[serde(default)]
        groups: Vec<RawNode>,
    },
    #[serde(rename = "value-word")]
    Word {
        value: String,
        #[serde(default)]
        raws: Raws,
    },
    #[serde(rename = "value-operator")]
    Operator { value: String },
    #[serde(rename = "value-colon")]
    Colon {},
    #[serde(untagged)]
    Other(OtherNode),
}

#[derive(Debug, Deserialize)]
struct OtherNode {
    #[serde(rename = "type")]
    kind: String,
}

/// Declaration value: parsed tree, or raw text when the parser left it alone
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Parsed(Box<RawNode>),
    Text(#[allow(dead_code)] String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSelector {
    Text(String),
    Structured { value: Option<String> },
}

/// Text that postcss stores either bare or as `{value, raw}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Object {
        raw: Option<String>,
        value: Option<String>,
    },
}

impl RawText {
    fn raw(self) -> Option<String> {
        match self {
            RawText::Text(text) => Some(text),
            RawText::Object { raw, value } => raw.or(value),
        }
    }
}

/// At-rule params: text, or a parsed value tree
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
enum RawParams {
    #[default]
    Missing,
    Text(String),
    Parsed(Box<RawNode>),
}

#[derive(Debug, Default, Deserialize)]
struct Raws {
    before: Option<String>,
    selector: Option<RawText>,
    params: Option<RawText>,
    value: Option<RawText>,
}

/// Load a tree from the parser's JSON output
pub fn from_json_str(json: &str) -> Result<Tree, TreeError> {
    let raw: RawNode = serde_json::from_str(json)?;
    let mut builder = TreeBuilder::new();
    let root = lower(&mut builder, raw);
    tracing::debug!(bytes = json.len(), "loaded parser output");
    builder.finish(root)
}

/// Load a tree from a JSON file
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Tree, TreeError> {
    let json = fs::read_to_string(path.as_ref())?;
    from_json_str(&json)
}

fn lower_all(builder: &mut TreeBuilder, nodes: Vec<RawNode>) -> Vec<NodeId> {
    nodes.into_iter().map(|node| lower(builder, node)).collect()
}

fn lower_opt(builder: &mut TreeBuilder, node: Option<Box<RawNode>>) -> Option<NodeId> {
    node.map(|node| lower(builder, *node))
}

fn lower(builder: &mut TreeBuilder, raw: RawNode) -> NodeId {
    let node = match raw {
        RawNode::Root { nodes } => Node::Root { nodes: lower_all(builder, nodes) },
        RawNode::Declaration { prop, value, raws } => {
            let value = match value {
                Some(RawValue::Parsed(node)) => Some(lower(builder, *node)),
                _ => None,
            };
            Node::Declaration { prop, value, raw: raws.value.and_then(RawText::raw) }
        }
        RawNode::AtRule { name, params, raws, nodes } => {
            let mut children = Vec::new();
            let params = match params {
                RawParams::Missing => String::new(),
                RawParams::Text(text) => text,
                RawParams::Parsed(tree) => {
                    children.push(lower(builder, *tree));
                    String::new()
                }
            };
            children.extend(lower_all(builder, nodes));
            Node::AtRule {
                name,
                params,
                raw_params: raws.params.and_then(RawText::raw),
                nodes: children,
            }
        }
        RawNode::Rule { selector, raws, nodes } => {
            let raw_selector = raws.selector.and_then(RawText::raw);
            let selector = selector.map(|selector| match selector {
                RawSelector::Text(text) => Selector::Text(text),
                RawSelector::Structured { value } => Selector::Structured { value },
            });
            // postcss only records a raw selector when it differs from the parsed one
            let raw_selector = raw_selector
                .or_else(|| selector.as_ref().and_then(Selector::as_text).map(str::to_string));
            Node::Rule { selector, raw_selector, nodes: lower_all(builder, nodes) }
        }
        RawNode::ValueRoot { group } => Node::ValueRoot { group: lower_opt(builder, group) },
        RawNode::ValueValue { group } => Node::ValueValue { group: lower_opt(builder, group) },
        RawNode::CommaGroup { groups } => Node::ValueCommaGroup { groups: lower_all(builder, groups) },
        RawNode::ParenGroup { open, close, groups } => Node::ValueParenGroup {
            open: open.and_then(RawText::raw),
            close: close.and_then(RawText::raw),
            groups: lower_all(builder, groups),
        },
        RawNode::Function { value, group, groups } => {
            let mut children = lower_all(builder, groups);
            if let Some(group) = group {
                children.insert(0, lower(builder, *group));
            }
            Node::ValueFunction { name: value, groups: children }
        }
        RawNode::Word { value, raws } => Node::ValueWord {
            value,
            before: raws.before.unwrap_or_default(),
        },
        RawNode::Operator { value } => Node::ValueOperator { value },
        RawNode::Colon {} => Node::ValueColon,
        RawNode::Other(other) => Node::Other { kind: other.kind },
    };
    builder.push(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeKind;

    #[test]
    fn test_load_declaration() {
        let json = r#"{
            "type": "css-root",
            "nodes": [{
                "type": "css-decl",
                "prop": "$map",
                "value": {"type": "value-root", "group": {"type": "value-value", "group": {
                    "type": "value-paren_group",
                    "open": {"type": "value-paren", "value": "("},
                    "close": {"type": "value-paren", "value": ")"},
                    "groups": [{"type": "value-comma_group", "groups": [
                        {"type": "value-word", "value": "a", "raws": {"before": ""}},
                        {"type": "value-colon", "value": ":"},
                        {"type": "value-number", "value": "1", "unit": ""}
                    ]}]
                }}}
            }]
        }"#;
        let tree = from_json_str(json).unwrap();
        let decl = tree.root().child(0).unwrap();
        assert_eq!(decl.prop(), Some("$map"));
        let parens = decl.value().and_then(|v| v.group()).and_then(|v| v.group()).unwrap();
        assert_eq!(
            parens.node(),
            &Node::ValueParenGroup {
                open: Some("(".into()),
                close: Some(")".into()),
                groups: parens.node().children().to_vec(),
            }
        );
        let pair = parens.child(0).unwrap();
        assert_eq!(pair.child(2).map(|n| n.kind()), Some(NodeKind::Other));
    }

    #[test]
    fn test_raw_text_variants() {
        let json = r#"{"type": "css-root", "nodes": [
            {"type": "css-rule", "selector": ":export", "nodes": []},
            {"type": "css-rule", "selector": {"type": "selector-unknown", "value": "@detached:"},
             "raws": {"selector": {"value": "@detached:", "raw": "@detached: /* x */"}}},
            {"type": "css-atrule", "name": "detached", "params": "()",
             "raws": {"params": {"value": "()", "raw": "( )"}}}
        ]}"#;
        let tree = from_json_str(json).unwrap();
        let root = tree.root();
        assert_eq!(root.child(0).unwrap().raw_selector(), Some(":export"));
        let structured = root.child(1).unwrap();
        assert_eq!(structured.raw_selector(), Some("@detached: /* x */"));
        assert_eq!(structured.selector().and_then(|s| s.text()), Some("@detached:"));
        assert_eq!(root.child(2).unwrap().raw_params(), Some("( )"));
    }

    #[test]
    fn test_unparsed_declaration_value() {
        let json = r#"{"type": "css-root", "nodes": [
            {"type": "css-decl", "prop": "color", "value": "red"},
            {"type": "css-comment", "text": "note"}
        ]}"#;
        let tree = from_json_str(json).unwrap();
        assert!(tree.root().child(0).unwrap().value().is_none());
        assert_eq!(
            tree.root().child(1).unwrap().node(),
            &Node::Other { kind: "css-comment".into() }
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(from_json_str("{"), Err(TreeError::Json(_))));
        assert!(matches!(from_json_str(r#"{"nodes": []}"#), Err(TreeError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(TreeError::FileRead(_))));
    }
}
