use snafu::Snafu;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `mkdir [path]`; a missing path is passed on as empty.
    Mkdir { path: &'a str },
    Cd { path: Option<&'a str> },
    Pwd,
    Ls { path: Option<&'a str> },
    Quit,
}

impl<'a> Command<'a> {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    ///
    /// Only the first argument is used; anything after it is ignored.
    pub fn parse(line: &'a str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();
        if words.next().is_some() {
            warn!("Ignoring extra arguments to '{}': {}", name, line);
        }

        let command = match name {
            "mkdir" => Command::Mkdir {
                path: argument.unwrap_or_default(),
            },
            "cd" => Command::Cd { path: argument },
            "pwd" => Command::Pwd,
            "ls" => Command::Ls { path: argument },
            "quit" | "exit" => Command::Quit,
            _ => {
                return UnknownCommandSnafu { command: name }.fail();
            }
        };
        Ok(Some(command))
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum CommandError {
    #[snafu(display("unknown command {command}"))]
    UnknownCommand { command: String },
}
