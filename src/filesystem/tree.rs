use std::collections::TryReserveError;

use snafu::{Snafu, ensure};
use tracing::debug;

use crate::ext::BoundedStrExt;
use crate::filesystem::{Limits, Node, NodeId, NodeKind};

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Path naming the root node on its own.
pub const ROOT_MARKER: &str = "/";

/// A single rooted tree of nodes plus the working node used for relative
/// paths.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]. The root
/// always sits at the first slot and is never removed.
#[derive(Debug, Clone)]
pub struct Namespace {
    nodes: Vec<Node>,
    current: NodeId,
    limits: Limits,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl Namespace {
    pub fn new(limits: Limits) -> Self {
        let root = Node::new(ROOT_MARKER.to_string(), NodeKind::Directory, None);
        Self {
            nodes: vec![root],
            current: NodeId::from(0),
            limits,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::from(0)
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn set_current(&mut self, id: NodeId) -> Result<(), NamespaceError> {
        ensure!(self.get(id).is_some(), UnknownNodeSnafu { id });
        ensure!(self.node(id).is_directory(), NotADirectorySnafu { id });
        debug!("Working node changed from {} to {}", self.current, id);
        self.current = id;
        Ok(())
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Panics if `id` was handed out by a different namespace.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> {
        self.node(id)
            .children()
            .iter()
            .map(|&child| (child, self.node(child)))
    }

    /// First directory child of `parent` named exactly `name`.
    pub fn find_directory(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|(_, node)| node.is_directory() && node.name() == name)
            .map(|(id, _)| id)
    }

    /// First child of `parent` named exactly `name`, whatever its kind.
    pub fn find_entry(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.children(parent)
            .find(|(_, node)| node.name() == name)
            .map(|(id, _)| id)
    }

    /// Appends a new node as the last child of `parent`.
    ///
    /// The name is cut to the configured name limit. Storage for both the
    /// arena slot and the child link is reserved up front, so a failed
    /// reservation leaves the tree untouched. No uniqueness check happens
    /// here.
    pub fn insert(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: NodeKind,
    ) -> Result<NodeId, TryReserveError> {
        self.nodes.try_reserve(1)?;
        self.nodes[parent.index()].children_mut().try_reserve(1)?;

        let id = NodeId::from(self.nodes.len());
        let name = name.to_bounded(self.limits.name);
        debug!("Inserting {} '{}' as {} under {}", kind, name, id, parent);

        self.nodes.push(Node::new(name, kind, Some(parent)));
        self.nodes[parent.index()].children_mut().push(id);
        Ok(id)
    }

    /// Absolute path of `id`, `/` for the root.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut cursor = id;
        while let Some(parent) = self.node(cursor).parent() {
            segments.push(self.node(cursor).name());
            cursor = parent;
        }

        if segments.is_empty() {
            return ROOT_MARKER.to_string();
        }

        segments
            .iter()
            .rev()
            .fold(String::new(), |mut path, segment| {
                path.push(SEPARATOR);
                path.push_str(segment);
                path
            })
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum NamespaceError {
    #[snafu(display("node {id} does not belong to this namespace"))]
    UnknownNode { id: NodeId },
    #[snafu(display("node {id} is not a directory"))]
    NotADirectory { id: NodeId },
}
