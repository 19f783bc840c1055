//! Command-line interface and orchestration for crocad
//!
//! This module turns a command line into a call to one of the shape generators.
//!
//! # Execution Flow
//!
//! 1. The binary loads translations for the current locale ([`crate::i18n`])
//! 2. [`run`] parses the global options that precede the command name, leaving the rest of the
//!    command line untouched
//! 3. The verbosity count selects the log level, and logging is configured before anything else
//!    happens
//! 4. The command name is resolved through the alias table to a [`ShapeCommand`]
//! 5. The shape's entry point receives the remaining arguments, the [`GlobalOptions`], and a
//!    [`RuntimeContext`] carrying the translator
//!
//! Errors are not handled here. They are returned to the binary, which uses [`report_error`] to
//! print them and pick an exit status.

mod context;
mod error;
mod host;
mod logging;
mod options;
mod registry;
mod run;

#[cfg(test)]
pub use host::TestHost;

pub use context::RuntimeContext;
pub use error::DispatchError;
pub use host::Host;
pub use logging::{configure_logging, log_level_for};
pub use options::{GlobalOptions, missing_command_error, parse_global_options};
pub use registry::{COMMAND_ALIASES, ShapeCommand, find_command, resolve_alias};
pub use run::{report_error, run};
