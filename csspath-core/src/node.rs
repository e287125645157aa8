//! Arena-backed syntax tree for CSS, SCSS and Less
//!
//! The upstream parser produces one generic tree for all three dialects.
//! Statements (`Root`, `Rule`, `AtRule`, `Declaration`) and value-grammar
//! nodes (`Value*`) live side by side in a single arena and are addressed
//! by [`NodeId`]. Parent links are computed once when the tree is finished,
//! so every ancestor chain is unbroken by construction.
//!
//! Navigation goes through [`NodeRef`], a cheap `Copy` handle whose steps
//! all return `Option`:
//! ```text
//! decl.value()?.group()?.group()    // value-root -> value-value -> inner group
//! ```

use std::fmt;

/// Index of a node inside a [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Selector of a rule, either raw text or an already-parsed selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Text(String),
    /// Parsed selector; `value` is its flattened text when the parser kept one
    Structured { value: Option<String> },
}

impl Selector {
    /// Text of the selector when it is still a plain string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Selector::Text(text) => Some(text),
            Selector::Structured { .. } => None,
        }
    }

    /// Plain text, or the flattened value of a structured selector
    pub fn text(&self) -> Option<&str> {
        match self {
            Selector::Text(text) => Some(text),
            Selector::Structured { value } => value.as_deref(),
        }
    }
}

/// A node of the generic CSS-family tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root {
        nodes: Vec<NodeId>,
    },
    Declaration {
        prop: Option<String>,
        /// Parsed value, a `ValueRoot`
        value: Option<NodeId>,
        raw: Option<String>,
    },
    AtRule {
        name: String,
        params: String,
        /// Parameters as written, when they differ from `params`
        raw_params: Option<String>,
        nodes: Vec<NodeId>,
    },
    Rule {
        selector: Option<Selector>,
        raw_selector: Option<String>,
        nodes: Vec<NodeId>,
    },
    ValueRoot {
        group: Option<NodeId>,
    },
    ValueValue {
        group: Option<NodeId>,
    },
    ValueCommaGroup {
        groups: Vec<NodeId>,
    },
    ValueParenGroup {
        open: Option<String>,
        close: Option<String>,
        groups: Vec<NodeId>,
    },
    ValueFunction {
        name: String,
        groups: Vec<NodeId>,
    },
    ValueWord {
        value: String,
        /// Whitespace between the previous token and this word
        before: String,
    },
    ValueOperator {
        value: String,
    },
    ValueColon,
    /// Any node kind this layer does not classify (numbers, strings, comments...)
    Other {
        kind: String,
    },
}

/// Fieldless mirror of [`Node`], used for kind sets in ancestor queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Declaration,
    AtRule,
    Rule,
    ValueRoot,
    ValueValue,
    ValueCommaGroup,
    ValueParenGroup,
    ValueFunction,
    ValueWord,
    ValueOperator,
    ValueColon,
    Other,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root { .. } => NodeKind::Root,
            Node::Declaration { .. } => NodeKind::Declaration,
            Node::AtRule { .. } => NodeKind::AtRule,
            Node::Rule { .. } => NodeKind::Rule,
            Node::ValueRoot { .. } => NodeKind::ValueRoot,
            Node::ValueValue { .. } => NodeKind::ValueValue,
            Node::ValueCommaGroup { .. } => NodeKind::ValueCommaGroup,
            Node::ValueParenGroup { .. } => NodeKind::ValueParenGroup,
            Node::ValueFunction { .. } => NodeKind::ValueFunction,
            Node::ValueWord { .. } => NodeKind::ValueWord,
            Node::ValueOperator { .. } => NodeKind::ValueOperator,
            Node::ValueColon => NodeKind::ValueColon,
            Node::Other { .. } => NodeKind::Other,
        }
    }

    /// Ordered children of this node, in source order
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Root { nodes }
            | Node::AtRule { nodes, .. }
            | Node::Rule { nodes, .. } => nodes,
            Node::ValueCommaGroup { groups }
            | Node::ValueParenGroup { groups, .. }
            | Node::ValueFunction { groups, .. } => groups,
            Node::Declaration { value: Some(id), .. }
            | Node::ValueRoot { group: Some(id) }
            | Node::ValueValue { group: Some(id) } => std::slice::from_ref(id),
            _ => &[],
        }
    }

    /// True for the three value kinds that hold a `groups` list
    pub fn is_group(&self) -> bool {
        matches!(
            self,
            Node::ValueCommaGroup { .. } | Node::ValueParenGroup { .. } | Node::ValueFunction { .. }
        )
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub(crate) node: Node,
    pub(crate) parent: Option<NodeId>,
}

/// Immutable syntax tree produced by [`crate::TreeBuilder`] or the JSON loader
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) slots: Vec<Slot>,
    pub(crate) root: NodeId,
}

impl Tree {
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef { tree: self, id: self.root }
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.slots.len()).then_some(NodeRef { tree: self, id })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Depth-first, pre-order walk starting at the root
    pub fn walk(&self) -> impl Iterator<Item = NodeRef<'_>> {
        let mut stack = vec![self.root()];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children().rev());
            Some(next)
        })
    }
}

/// Borrowed handle to one node of a [`Tree`]
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    pub fn node(&self) -> &'a Node {
        &self.tree.slots[self.id.0].node
    }

    pub fn kind(&self) -> NodeKind {
        self.node().kind()
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind() == kind
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        let parent = self.tree.slots[self.id.0].parent?;
        Some(self.with_id(parent))
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + ExactSizeIterator + 'a {
        let tree = self.tree;
        self.node()
            .children()
            .iter()
            .map(move |&id| NodeRef { tree, id })
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'a>> {
        self.node().children().get(index).map(|&id| self.with_id(id))
    }

    pub fn child_count(&self) -> usize {
        self.node().children().len()
    }

    /// Parsed value of a declaration
    pub fn value(&self) -> Option<NodeRef<'a>> {
        match self.node() {
            Node::Declaration { value: Some(id), .. } => Some(self.with_id(*id)),
            _ => None,
        }
    }

    /// Single wrapped group of a `ValueRoot` or `ValueValue`
    pub fn group(&self) -> Option<NodeRef<'a>> {
        match self.node() {
            Node::ValueRoot { group: Some(id) } | Node::ValueValue { group: Some(id) } => {
                Some(self.with_id(*id))
            }
            _ => None,
        }
    }

    /// Property name of a declaration
    pub fn prop(&self) -> Option<&'a str> {
        match self.node() {
            Node::Declaration { prop, .. } => prop.as_deref(),
            _ => None,
        }
    }

    /// Name of an at-rule or a value function
    pub fn name(&self) -> Option<&'a str> {
        match self.node() {
            Node::AtRule { name, .. } | Node::ValueFunction { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Literal text of a token: word or operator value, or function name
    pub fn text(&self) -> Option<&'a str> {
        match self.node() {
            Node::ValueWord { value, .. } | Node::ValueOperator { value } => Some(value),
            Node::ValueFunction { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn selector(&self) -> Option<&'a Selector> {
        match self.node() {
            Node::Rule { selector, .. } => selector.as_ref(),
            _ => None,
        }
    }

    pub fn raw_selector(&self) -> Option<&'a str> {
        match self.node() {
            Node::Rule { raw_selector, .. } => raw_selector.as_deref(),
            _ => None,
        }
    }

    /// At-rule parameters as written in the source
    pub fn raw_params(&self) -> Option<&'a str> {
        match self.node() {
            Node::AtRule { raw_params: Some(raw), .. } => Some(raw),
            Node::AtRule { params, .. } => Some(params),
            _ => None,
        }
    }

    fn with_id(&self, id: NodeId) -> NodeRef<'a> {
        NodeRef { tree: self.tree, id }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.id, self.node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeBuilder;

    #[test]
    fn test_navigation_steps() {
        let mut b = TreeBuilder::new();
        let word = b.word("bold");
        let value = b.value(word);
        let decl = b.declaration("font-weight", value);
        let root = b.root(vec![decl]);
        let tree = b.finish(root).unwrap();

        let decl = tree.get(decl).unwrap();
        let inner = decl.value().and_then(|v| v.group()).and_then(|v| v.group());
        assert_eq!(inner.and_then(|n| n.text()), Some("bold"));
        assert_eq!(decl.prop(), Some("font-weight"));
        assert_eq!(decl.parent(), Some(tree.root()));
        assert!(tree.root().parent().is_none());
    }

    #[test]
    fn test_missing_steps_are_none() {
        let mut b = TreeBuilder::new();
        let mut b = TreeBuilder::new();
        let root = b.root(vec![]);
        let tree = b.finish(root).unwrap();
        assert!(tree.root().value().is_none());
        assert!(tree.root().group().is_none());
        assert!(tree.root().child(0).is_none());
        assert!(tree.get(NodeId(42)).is_none());
    }

    #[test]
    fn test_walk_is_preorder() {
        let mut b = TreeBuilder::new();
        let a = b.word("a");
        let colon = b.colon();
        let one = b.word("1");
        let group = b.comma_group(vec![a, colon, one]);
        let root = b.root(vec![group]);
        let tree = b.finish(root).unwrap();

        let kinds: Vec<NodeKind> = tree.walk().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeKind::Root,
                NodeKind::ValueCommaGroup,
                NodeKind::ValueWord,
                NodeKind::ValueColon,
                NodeKind::ValueWord,
            ]
        );
    }

    #[test]
    fn test_selector_text() {
        assert_eq!(Selector::Text("a".into()).as_text(), Some("a"));
        let structured = Selector::Structured { value: Some("@x: 1".into()) };
        assert_eq!(structured.as_text(), None);
        assert_eq!(structured.text(), Some("@x: 1"));
    }
}
