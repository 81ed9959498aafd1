use snafu::{OptionExt, Snafu};
use tracing::debug;

use crate::ext::BoundedStrExt;
use crate::filesystem::{Limits, Namespace, NodeId, ROOT_MARKER, SEPARATOR};

/// A path cut into the part that has to be walked and the last segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitPath {
    pub final_component: String,
    pub directory_prefix: String,
}

impl SplitPath {
    fn root() -> Self {
        Self {
            final_component: String::new(),
            directory_prefix: ROOT_MARKER.to_string(),
        }
    }

    /// Whether the prefix resolves to the start node without any descent.
    pub fn needs_traversal(&self) -> bool {
        !self.directory_prefix.is_empty() && self.directory_prefix != ROOT_MARKER
    }
}

/// Outcome of a successful resolution: the node the final component belongs
/// under, together with the split that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub parent: NodeId,
    pub split: SplitPath,
}

pub struct PathResolver;

impl PathResolver {
    /// Splits `path` into its directory prefix and final component.
    ///
    /// Works on a copy cut to `limits.path` bytes. Trailing separators are
    /// dropped, except for a lone `/`. The final component is cut to
    /// `limits.name` bytes.
    pub fn split(path: &str, limits: Limits) -> SplitPath {
        if path.is_empty() || path == ROOT_MARKER {
            return SplitPath::root();
        }

        let mut copy = path.bounded(limits.path);
        while copy.len() > 1 && copy.ends_with(SEPARATOR) {
            copy = &copy[..copy.len() - SEPARATOR.len_utf8()];
        }

        match copy.rfind(SEPARATOR) {
            None => SplitPath {
                final_component: copy.to_bounded(limits.name),
                directory_prefix: String::new(),
            },
            Some(0) => SplitPath {
                final_component: copy[1..].to_bounded(limits.name),
                directory_prefix: ROOT_MARKER.to_string(),
            },
            Some(index) => SplitPath {
                final_component: copy[index + 1..].to_bounded(limits.name),
                directory_prefix: copy[..index].to_string(),
            },
        }
    }

    /// Resolves `path` to the node its final component should live under.
    ///
    /// Absolute paths start at the root, everything else at the current
    /// node. Every segment of the prefix must name a directory; the walk
    /// stops at the first one that does not. The final component itself is
    /// never looked up.
    pub fn resolve(namespace: &Namespace, path: &str) -> Result<Resolved, ResolveError> {
        let split = Self::split(path, namespace.limits());
        if path.is_empty() || path == ROOT_MARKER {
            return Ok(Resolved {
                parent: namespace.root(),
                split,
            });
        }

        let start = if path.starts_with(SEPARATOR) {
            namespace.root()
        } else {
            namespace.current()
        };

        if !split.needs_traversal() {
            debug!("Resolved '{}' to start node {}", path, start);
            return Ok(Resolved {
                parent: start,
                split,
            });
        }

        let parent = split
            .directory_prefix
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .try_fold(start, |node, segment| {
                debug!("Descending from {} into '{}'", node, segment);
                namespace
                    .find_directory(node, segment)
                    .context(MissingSegmentSnafu { segment })
            })?;

        debug!("Resolved '{}' to {}", path, parent);
        Ok(Resolved { parent, split })
    }

    /// Resolves `path` to an existing directory, final component included.
    ///
    /// A path without a final component (`""`, `/`, `//`) names the node its
    /// prefix resolves to.
    pub fn resolve_directory(namespace: &Namespace, path: &str) -> Result<NodeId, ResolveError> {
        let Resolved { parent, split } = Self::resolve(namespace, path)?;
        if split.final_component.is_empty() {
            return Ok(parent);
        }

        namespace
            .find_directory(parent, &split.final_component)
            .context(MissingSegmentSnafu {
                segment: split.final_component.as_str(),
            })
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum ResolveError {
    #[snafu(display("directory {segment} does not exist"))]
    MissingSegment { segment: String },
}
