//! Owning-container lookup for nested panes.
//!
//! A pane nested anywhere below a container can find that container by
//! walking its ancestors. Hosts with their own view tree implement
//! [`Ancestry`] for their node type; hosts without one can use the
//! [`PaneHierarchy`] arena.
//!
//! The walk starts at the node's parent: a node that is itself a container
//! does not own itself.

use std::fmt;

use rustc_hash::FxHashMap;

/// Parent links plus a way to recognize container nodes.
pub trait Ancestry: Sized {
    type Container;

    /// The node's parent, or `None` at the root.
    fn parent(&self) -> Option<Self>;

    /// The container this node is, if it is one.
    fn as_container(&self) -> Option<Self::Container>;

    /// The nearest container strictly above this node.
    fn owning_container(&self) -> Option<Self::Container> {
        let mut current = self.parent();
        while let Some(node) = current {
            if let Some(container) = node.as_container() {
                return Some(container);
            }
            current = node.parent();
        }
        None
    }
}

/// Identifier of a node in a [`PaneHierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

/// Errors from building a [`PaneHierarchy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyError {
    /// The referenced node does not exist.
    UnknownNode(NodeId),
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "unknown hierarchy node {}", id.0),
        }
    }
}

impl std::error::Error for HierarchyError {}

#[derive(Debug)]
struct NodeRecord<C> {
    parent: Option<NodeId>,
    container: Option<C>,
}

/// Arena of pane nodes. Parents always exist before their children, so the
/// parent chain is acyclic.
#[derive(Debug)]
pub struct PaneHierarchy<C> {
    next_id: u64,
    nodes: FxHashMap<NodeId, NodeRecord<C>>,
}

impl<C> Default for PaneHierarchy<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PaneHierarchy<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            nodes: FxHashMap::default(),
        }
    }

    fn insert(&mut self, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            NodeRecord {
                parent,
                container: None,
            },
        );
        id
    }

    /// Add a parentless node.
    pub fn insert_root(&mut self) -> NodeId {
        self.insert(None)
    }

    /// Add a node below `parent`.
    pub fn insert_child(&mut self, parent: NodeId) -> Result<NodeId, HierarchyError> {
        if !self.nodes.contains_key(&parent) {
            return Err(HierarchyError::UnknownNode(parent));
        }
        Ok(self.insert(Some(parent)))
    }

    /// Mark `node` as a container.
    pub fn set_container(&mut self, node: NodeId, container: C) -> Result<(), HierarchyError> {
        let record = self
            .nodes
            .get_mut(&node)
            .ok_or(HierarchyError::UnknownNode(node))?;
        record.container = Some(container);
        Ok(())
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|record| record.parent)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Borrow a node as an [`Ancestry`] cursor.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<HierarchyNode<'_, C>> {
        self.nodes
            .contains_key(&id)
            .then_some(HierarchyNode { tree: self, id })
    }

    /// The nearest container strictly above `node`.
    #[must_use]
    pub fn owning_container(&self, node: NodeId) -> Option<&C> {
        self.node(node)?.owning_container()
    }
}

/// A node of a [`PaneHierarchy`], walkable through [`Ancestry`].
#[derive(Debug)]
pub struct HierarchyNode<'a, C> {
    tree: &'a PaneHierarchy<C>,
    id: NodeId,
}

impl<C> Clone for HierarchyNode<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for HierarchyNode<'_, C> {}

impl<C> HierarchyNode<'_, C> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl<'a, C> Ancestry for HierarchyNode<'a, C> {
    type Container = &'a C;

    fn parent(&self) -> Option<Self> {
        let parent = self.tree.parent(self.id)?;
        self.tree.node(parent)
    }

    fn as_container(&self) -> Option<&'a C> {
        self.tree
            .nodes
            .get(&self.id)
            .and_then(|record| record.container.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_nearest_container_above() {
        let mut tree = PaneHierarchy::new();
        let root = tree.insert_root();
        tree.set_container(root, "outer").unwrap();
        let inner = tree.insert_child(root).unwrap();
        tree.set_container(inner, "inner").unwrap();
        let pane = tree.insert_child(inner).unwrap();
        let nested = tree.insert_child(pane).unwrap();

        assert_eq!(tree.owning_container(nested), Some(&"inner"));
        assert_eq!(tree.owning_container(pane), Some(&"inner"));
        assert_eq!(tree.owning_container(inner), Some(&"outer"));
    }

    #[test]
    fn a_container_does_not_own_itself() {
        let mut tree = PaneHierarchy::new();
        let root = tree.insert_root();
        tree.set_container(root, 7).unwrap();
        assert_eq!(tree.owning_container(root), None);
    }

    #[test]
    fn orphan_tree_has_no_owner() {
        let mut tree: PaneHierarchy<u8> = PaneHierarchy::new();
        let root = tree.insert_root();
        let child = tree.insert_child(root).unwrap();
        assert_eq!(tree.owning_container(child), None);
    }

    #[test]
    fn unknown_nodes_are_rejected() {
        let mut tree: PaneHierarchy<u8> = PaneHierarchy::new();
        let ghost = NodeId(99);
        assert_eq!(tree.insert_child(ghost), Err(HierarchyError::UnknownNode(ghost)));
        assert!(tree.set_container(ghost, 1).is_err());
        assert!(tree.owning_container(ghost).is_none());
        assert!(tree.is_empty());
    }

    #[test]
    fn cursor_walks_parents() {
        let mut tree: PaneHierarchy<()> = PaneHierarchy::new();
        let root = tree.insert_root();
        let child = tree.insert_child(root).unwrap();
        let cursor = tree.node(child).unwrap();
        assert_eq!(cursor.parent().map(|n| n.id()), Some(root));
        assert_eq!(tree.len(), 2);
    }
}
