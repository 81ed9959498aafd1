use std::io::{self, IsTerminal};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::debug;

use crate::application::{RuntimeConfig, RuntimeConfigError, Session, SessionError};
use crate::cli::Cli;
use crate::filesystem::Namespace;
use crate::shell::Dispatcher;

pub struct Application;

impl Application {
    pub fn run(cli: Cli) -> Result<(), ApplicationError> {
        let runtime_config = RuntimeConfig::try_from(cli).context(ConfigSnafu)?;
        debug!("Loaded config: {:?}", runtime_config);
        colored::control::set_override(runtime_config.color);

        let dispatcher = Dispatcher::new(Namespace::new(runtime_config.limits));
        let mut session = Session::new(dispatcher, runtime_config.color);
        let mut stdout = io::stdout().lock();

        if runtime_config.commands.is_empty() {
            let stdin = io::stdin();
            let prompt = stdin
                .is_terminal()
                .then_some(runtime_config.prompt.as_str());
            debug!("Reading commands from stdin");
            session
                .run_interactive(stdin.lock(), &mut stdout, prompt)
                .context(SessionSnafu)?;
        } else {
            debug!(
                "Running {} commands from arguments",
                runtime_config.commands.len()
            );
            session
                .run_lines(
                    runtime_config.commands.iter().map(String::as_str),
                    &mut stdout,
                )
                .context(SessionSnafu)?;
        }

        debug!(
            "Session finished with {} nodes",
            session.dispatcher().namespace().node_count()
        );
        Ok(())
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    ConfigError { source: RuntimeConfigError },
    #[snafu(display("Critical failure encountered during the session"))]
    SessionError { source: SessionError },
}
