use tracing::{debug, warn};

use crate::filesystem::{
    CreateDirectoryError, DirectoryCreator, Namespace, NodeId, PathResolver, ResolveError,
};
use crate::shell::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Info,
}

/// One line of output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub status: Status,
    pub message: String,
}

impl Report {
    fn success(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
        }
    }

    fn info(message: impl Into<String>) -> Self {
        Self {
            status: Status::Info,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    Reports(Vec<Report>),
    Quit,
}

/// Runs command lines against a namespace it owns.
///
/// A failing command only produces error reports; the session keeps going.
#[derive(Debug, Default)]
pub struct Dispatcher {
    namespace: Namespace,
}

impl Dispatcher {
    pub fn new(namespace: Namespace) -> Self {
        Self { namespace }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn execute(&mut self, line: &str) -> Execution {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Execution::Reports(Vec::new()),
            Err(e) => {
                warn!("Rejected input line '{}': {}", line.trim(), e);
                return Execution::Reports(vec![Report::error(format!("ERROR: {e}"))]);
            }
        };
        debug!("Executing {:?}", command);

        let reports = match command {
            Command::Mkdir { path } => vec![self.mkdir(path)],
            Command::Cd { path } => self.cd(path).into_iter().collect(),
            Command::Pwd => vec![Report::info(self.namespace.path_of(self.namespace.current()))],
            Command::Ls { path } => self.ls(path),
            Command::Quit => return Execution::Quit,
        };
        Execution::Reports(reports)
    }

    fn mkdir(&mut self, path: &str) -> Report {
        match DirectoryCreator::create(&mut self.namespace, path) {
            Ok(_) => Report::success(format!("MKDIR SUCCESS: node {path} successfully created")),
            Err(CreateDirectoryError::ResolutionError { source }) => source.into(),
            Err(e) => Report::error(format!("MKDIR ERROR: {e}")),
        }
    }

    fn cd(&mut self, path: Option<&str>) -> Option<Report> {
        let target = match path {
            None => self.namespace.root(),
            Some(path) => match PathResolver::resolve_directory(&self.namespace, path) {
                Ok(id) => id,
                Err(e) => return Some(e.into()),
            },
        };

        match self.namespace.set_current(target) {
            Ok(()) => None,
            Err(e) => Some(Report::error(format!("ERROR: {e}"))),
        }
    }

    fn ls(&self, path: Option<&str>) -> Vec<Report> {
        let target = match path {
            None => self.namespace.current(),
            Some(path) => match PathResolver::resolve_directory(&self.namespace, path) {
                Ok(id) => id,
                Err(e) => return vec![e.into()],
            },
        };

        self.list(target)
    }

    fn list(&self, directory: NodeId) -> Vec<Report> {
        self.namespace
            .children(directory)
            .map(|(_, node)| {
                if node.is_directory() {
                    Report::info(format!("{}/", node.name()))
                } else {
                    Report::info(node.name())
                }
            })
            .collect()
    }
}

impl From<ResolveError> for Report {
    fn from(error: ResolveError) -> Self {
        Report::error(format!("ERROR: {error}"))
    }
}
