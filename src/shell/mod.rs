//! Line-oriented command layer on top of the namespace.

mod command;
mod dispatcher;

pub use command::{Command, CommandError};
pub use dispatcher::{Dispatcher, Execution, Report, Status};
