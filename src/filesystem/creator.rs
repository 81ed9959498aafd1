use std::collections::TryReserveError;

use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, info};

use crate::filesystem::{
    Namespace, NodeId, NodeKind, PathResolver, ROOT_MARKER, ResolveError, Resolved,
};

pub struct DirectoryCreator;

impl DirectoryCreator {
    /// Creates a directory at `path` and returns its id.
    ///
    /// All checks run before the tree is touched: a rejected call leaves the
    /// namespace exactly as it was. On success the new node is the last child
    /// of its parent.
    pub fn create(namespace: &mut Namespace, path: &str) -> Result<NodeId, CreateDirectoryError> {
        ensure!(!path.is_empty() && path != ROOT_MARKER, InvalidPathSnafu);

        let Resolved { parent, split } =
            PathResolver::resolve(namespace, path).context(ResolutionSnafu)?;
        let name = split.final_component;
        ensure!(!name.is_empty(), InvalidPathSnafu);

        if let Some(existing) = namespace.find_entry(parent, &name) {
            debug!(
                "'{}' collides with existing {} {}",
                name,
                namespace.node(existing).kind(),
                existing
            );
            return DuplicateNameSnafu { name }.fail();
        }

        let id = namespace
            .insert(parent, &name, NodeKind::Directory)
            .context(AllocationSnafu { name: &name })?;
        info!("Created directory {} at '{}'", id, path);
        Ok(id)
    }
}

#[derive(Debug, Snafu)]
pub enum CreateDirectoryError {
    #[snafu(display("no path provided"))]
    InvalidPath,
    #[snafu(display("{source}"))]
    ResolutionError { source: ResolveError },
    #[snafu(display("directory {name} already exists"))]
    DuplicateName { name: String },
    #[snafu(display("out of memory while creating {name}"))]
    AllocationError {
        name: String,
        source: TryReserveError,
    },
}
