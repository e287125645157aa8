//! Traversal cursor and ancestor queries
//!
//! A [`Cursor`] is the printer's position in the tree. Its ancestor stack
//! starts at the immediate parent (depth 0) and ends at the root; the
//! current node itself is never part of it.

use crate::node::{NodeId, NodeKind, NodeRef, Tree};

#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    tree: &'a Tree,
    current: NodeId,
}

impl<'a> Cursor<'a> {
    /// Cursor positioned on the root of `tree`
    pub fn new(tree: &'a Tree) -> Self {
        Self { tree, current: tree.root().id() }
    }

    /// Cursor positioned on an arbitrary node
    pub fn at(tree: &'a Tree, id: NodeId) -> Option<Self> {
        tree.get(id).map(|node| Self { tree, current: node.id() })
    }

    /// Step into a direct child of the current node
    pub fn descend(&self, child: NodeId) -> Option<Self> {
        let child = self.tree.get(child)?;
        (child.parent()?.id() == self.current).then_some(Self {
            tree: self.tree,
            current: child.id(),
        })
    }

    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    pub fn node(&self) -> NodeRef<'a> {
        // `current` is validated on construction
        self.tree.get(self.current).unwrap_or_else(|| self.tree.root())
    }

    /// Enclosing nodes, from the immediate parent out to the root
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors { next: self.node().parent() }
    }

    /// Ancestor at `depth`; depth 0 is the immediate parent
    pub fn parent_node(&self, depth: usize) -> Option<NodeRef<'a>> {
        self.ancestors().nth(depth)
    }

    /// Nearest enclosing node whose kind is in `kinds`
    pub fn find_ancestor(&self, kinds: &[NodeKind]) -> Option<NodeRef<'a>> {
        self.ancestors().find(|node| kinds.contains(&node.kind()))
    }

    /// Depth of the nearest enclosing node whose kind is in `kinds`
    pub fn find_ancestor_depth(&self, kinds: &[NodeKind]) -> Option<usize> {
        self.ancestors().position(|node| kinds.contains(&node.kind()))
    }

    /// Lower-cased property of the nearest enclosing declaration
    pub fn enclosing_declaration_property(&self) -> Option<String> {
        self.find_ancestor(&[NodeKind::Declaration])?
            .prop()
            .filter(|prop| !prop.is_empty())
            .map(str::to_lowercase)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor").field("current", &self.current).finish()
    }
}

/// Iterator over the ancestor stack of a [`Cursor`]
pub struct Ancestors<'a> {
    next: Option<NodeRef<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
