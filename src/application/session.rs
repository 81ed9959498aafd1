use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use colored::Colorize;
use snafu::prelude::*;
use tracing::debug;

use crate::shell::{Dispatcher, Execution, Report, Status};

/// Feeds command lines to a [`Dispatcher`] and writes its reports.
pub struct Session {
    dispatcher: Dispatcher,
    color: bool,
}

impl Session {
    pub fn new(dispatcher: Dispatcher, color: bool) -> Self {
        Self { dispatcher, color }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Runs each line in order until one of them quits.
    pub fn run_lines<'l, W: Write>(
        &mut self,
        lines: impl IntoIterator<Item = &'l str>,
        output: &mut W,
    ) -> Result<(), SessionError> {
        for line in lines {
            if self.step(line, output)?.is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Reads lines from `input` until EOF or a quit command. The prompt, if
    /// any, is written before every line.
    pub fn run_interactive<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
        prompt: Option<&str>,
    ) -> Result<(), SessionError> {
        let mut line = String::new();
        loop {
            if let Some(prompt) = prompt {
                write!(output, "{prompt}").context(WriteSnafu)?;
                output.flush().context(WriteSnafu)?;
            }

            line.clear();
            if input.read_line(&mut line).context(ReadSnafu)? == 0 {
                debug!("Reached end of input");
                return Ok(());
            }
            if self.step(&line, output)?.is_break() {
                return Ok(());
            }
        }
    }

    fn step<W: Write>(&mut self, line: &str, output: &mut W) -> Result<ControlFlow<()>, SessionError> {
        match self.dispatcher.execute(line) {
            Execution::Quit => Ok(ControlFlow::Break(())),
            Execution::Reports(reports) => {
                for report in &reports {
                    writeln!(output, "{}", self.render(report)).context(WriteSnafu)?;
                }
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn render(&self, report: &Report) -> String {
        if !self.color {
            return report.message.clone();
        }
        match report.status {
            Status::Success => report.message.green().to_string(),
            Status::Error => report.message.red().to_string(),
            Status::Info => report.message.clone(),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum SessionError {
    #[snafu(display("Failed to read a command"))]
    ReadError { source: std::io::Error },
    #[snafu(display("Failed to write command output"))]
    WriteError { source: std::io::Error },
}
