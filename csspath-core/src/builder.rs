//! Bottom-up construction of a [`Tree`]
//!
//! Children are created before their parents; `finish` then links every
//! node to its parent and checks that the result is a proper tree.
//!
//! ```text
//! let a = b.word("a");            // leaves first
//! let group = b.comma_group(vec![a, ...]);
//! let tree = b.finish(root)?;     // parent links computed here
//! ```

use crate::error::TreeError;
use crate::node::{Node, NodeId, Selector, Slot, Tree};

#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary node and return its id
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    // -------------------------------------------------------------------------
    // Value grammar
    // -------------------------------------------------------------------------

    pub fn word(&mut self, value: &str) -> NodeId {
        self.word_with_before(value, "")
    }

    /// Word preceded by the given whitespace
    pub fn word_with_before(&mut self, value: &str, before: &str) -> NodeId {
        self.push(Node::ValueWord {
            value: value.to_string(),
            before: before.to_string(),
        })
    }

    pub fn operator(&mut self, value: &str) -> NodeId {
        self.push(Node::ValueOperator { value: value.to_string() })
    }

    pub fn colon(&mut self) -> NodeId {
        self.push(Node::ValueColon)
    }

    pub fn other(&mut self, kind: &str) -> NodeId {
        self.push(Node::Other { kind: kind.to_string() })
    }

    pub fn comma_group(&mut self, groups: Vec<NodeId>) -> NodeId {
        self.push(Node::ValueCommaGroup { groups })
    }

    /// Parenthesized group with both `(` and `)` present
    pub fn paren_group(&mut self, groups: Vec<NodeId>) -> NodeId {
        self.paren_group_with(Some("("), Some(")"), groups)
    }

    pub fn paren_group_with(
        &mut self,
        open: Option<&str>,
        close: Option<&str>,
        groups: Vec<NodeId>,
    ) -> NodeId {
        self.push(Node::ValueParenGroup {
            open: open.map(str::to_string),
            close: close.map(str::to_string),
            groups,
        })
    }

    pub fn function(&mut self, name: &str, groups: Vec<NodeId>) -> NodeId {
        self.push(Node::ValueFunction {
            name: name.to_string(),
            groups,
        })
    }

    pub fn value_root(&mut self, group: Option<NodeId>) -> NodeId {
        self.push(Node::ValueRoot { group })
    }

    pub fn value_value(&mut self, group: Option<NodeId>) -> NodeId {
        self.push(Node::ValueValue { group })
    }

    /// Wrap `group` as `ValueRoot -> ValueValue -> group`, the shape of a parsed value
    pub fn value(&mut self, group: NodeId) -> NodeId {
        let inner = self.value_value(Some(group));
        self.value_root(Some(inner))
    }

    // -------------------------------------------------------------------------
    // Statements
    // -------------------------------------------------------------------------

    pub fn declaration(&mut self, prop: &str, value: NodeId) -> NodeId {
        self.push(Node::Declaration {
            prop: Some(prop.to_string()),
            value: Some(value),
            raw: None,
        })
    }

    /// Rule whose selector is kept as raw text
    pub fn rule(&mut self, selector: &str, nodes: Vec<NodeId>) -> NodeId {
        self.push(Node::Rule {
            selector: Some(Selector::Text(selector.to_string())),
            raw_selector: Some(selector.to_string()),
            nodes,
        })
    }

    pub fn at_rule(&mut self, name: &str, params: &str, nodes: Vec<NodeId>) -> NodeId {
        self.push(Node::AtRule {
            name: name.to_string(),
            params: params.to_string(),
            raw_params: None,
            nodes,
        })
    }

    pub fn root(&mut self, nodes: Vec<NodeId>) -> NodeId {
        self.push(Node::Root { nodes })
    }

    /// Link parents and validate the arena
    pub fn finish(self, root: NodeId) -> Result<Tree, TreeError> {
        let len = self.nodes.len();
        if root.0 >= len {
            return Err(TreeError::UnknownNode(root));
        }

        let mut parents: Vec<Option<NodeId>> = vec![None; len];
        for (index, node) in self.nodes.iter().enumerate() {
            for &child in node.children() {
                if child.0 >= len {
                    return Err(TreeError::UnknownNode(child));
                }
                if parents[child.0].is_some() {
                    return Err(TreeError::MultipleParents(child));
                }
                parents[child.0] = Some(NodeId(index));
            }
        }

        if parents[root.0].is_some() {
            return Err(TreeError::RootHasParent(root));
        }

        // With one parent per node, reachability from the root rules out cycles
        let mut reached = vec![false; len];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            reached[id.0] = true;
            stack.extend(self.nodes[id.0].children().iter().copied());
        }
        if let Some(index) = reached.iter().position(|r| !r) {
            return Err(TreeError::Unreachable(NodeId(index)));
        }

        tracing::debug!(nodes = len, root = %root, "finished syntax tree");

        let slots = self
            .nodes
            .into_iter()
            .zip(parents)
            .map(|(node, parent)| Slot { node, parent })
            .collect();
        Ok(Tree { slots, root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_links_parents() {
        let mut b = TreeBuilder::new();
        let word = b.word("red");
        let value = b.value(word);
        let decl = b.declaration("color", value);
        let rule = b.rule("a", vec![decl]);
        let root = b.root(vec![rule]);
        let tree = b.finish(root).unwrap();

        let word = tree.get(word).unwrap();
        let chain: Vec<NodeId> = std::iter::successors(word.parent(), |n| n.parent())
            .map(|n| n.id())
            .collect();
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.last(), Some(&root));
    }

    #[test]
    fn test_unknown_child_is_rejected() {
        let mut b = TreeBuilder::new();
        let root = b.root(vec![NodeId(7)]);
        assert!(matches!(b.finish(root), Err(TreeError::UnknownNode(NodeId(7)))));
    }

    #[test]
    fn test_shared_child_is_rejected() {
        let mut b = TreeBuilder::new();
        let word = b.word("a");
        let left = b.comma_group(vec![word]);
        let right = b.comma_group(vec![word]);
        let root = b.root(vec![left, right]);
        assert!(matches!(b.finish(root), Err(TreeError::MultipleParents(id)) if id == word));
    }

    #[test]
    fn test_root_with_parent_is_rejected() {
        let mut b = TreeBuilder::new();
        let word = b.word("a");
        let _group = b.comma_group(vec![word]);
        assert!(matches!(b.finish(word), Err(TreeError::RootHasParent(_))));
    }

    #[test]
    fn test_detached_node_is_rejected() {
        let mut b = TreeBuilder::new();
        let stray = b.word("stray");
        let root = b.root(vec![]);
        assert!(matches!(b.finish(root), Err(TreeError::Unreachable(id)) if id == stray));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let mut b = TreeBuilder::new();
        // #0 and #1 point at each other, neither reachable from the root
        let first = b.comma_group(vec![NodeId(1)]);
        let _second = b.comma_group(vec![first]);
        let root = b.root(vec![]);
        assert!(matches!(b.finish(root), Err(TreeError::Unreachable(_))));
    }
}
