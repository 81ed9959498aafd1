//! In-memory namespace tree.
//!
//! Nodes are kept in an arena owned by a [`Namespace`]; each node owns an
//! ordered list of child ids and points back at its parent by id. Paths are
//! resolved by [`PathResolver`] and new directories are added through
//! [`DirectoryCreator`].

mod creator;
mod limits;
mod node;
mod resolver;
mod tree;

pub use creator::{CreateDirectoryError, DirectoryCreator};
pub use limits::{DEFAULT_NAME_LIMIT, DEFAULT_PATH_LIMIT, Limits};
pub use node::{Node, NodeId, NodeKind};
pub use resolver::{PathResolver, ResolveError, Resolved, SplitPath};
pub use tree::{Namespace, NamespaceError, ROOT_MARKER, SEPARATOR};
