//! Command dispatch logic for crocad

use super::logging::{configure_logging, log_level_for};
use super::options::{missing_command_error, parse_global_options};
use super::registry::{COMMAND_ALIASES, ShapeCommand, find_command};
use super::{DispatchError, Host, RuntimeContext};
use crate::i18n::Translator;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::Write;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "dispatch";

/// Dispatch command-line arguments to the appropriate shape command
///
/// Parses the global options, configures logging from the verbosity count, resolves the command
/// name (applying aliases), and runs the command's entry point with the remaining arguments.
/// `--help` and `--version` print to the host's output and succeed.
///
/// # Arguments
///
/// * `host` - Where output is written
/// * `translator` - Translations for every user-visible message
/// * `args` - The command-line arguments, starting with the program name (as `std::env::args()`)
///
/// # Errors
///
/// Returns [`DispatchError::Usage`] for malformed global options or a missing command,
/// [`DispatchError::UnknownCommand`] when no shape is registered under the command name, and
/// [`DispatchError::Command`] carrying the shape command's own failure.
pub fn run<H, I, T>(host: &mut H, translator: &Translator, args: I) -> Result<(), DispatchError>
where
    H: Host,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let (options, mut remaining) = match parse_global_options(translator, args.into_iter().skip(1)) {
        Ok(parsed) => parsed,
        Err(DispatchError::Usage(e)) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(host.output(), "{}", e.render());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    if remaining.is_empty() {
        return Err(missing_command_error(translator));
    }

    let command = remaining.remove(0);
    let command_args = remaining;

    let log_level = log_level_for(options.verbose);
    configure_logging(log_level);

    if translator.origin().is_loaded() {
        log::debug!(target: LOG_TARGET, "Using {}", translator.origin());
    } else {
        log::debug!(target: LOG_TARGET, "Using default messages: {}", translator.origin());
    }

    let shape = find_command(&command)?;
    log::debug!(target: LOG_TARGET, "Running '{shape}' with arguments {command_args:?} and {options:?}");

    let ctx = RuntimeContext::new(translator, log_level);
    log::info!(target: LOG_TARGET, "Running '{shape}' with logging at {}", ctx.log_level());
    shape.run(host, &ctx, &command_args, &options)?;
    Ok(())
}

/// Report a failed run on the host's error stream, returning the process exit status
pub fn report_error<H: Host>(host: &mut H, translator: &Translator, error: &DispatchError) -> u8 {
    let mut err = host.error();

    match error {
        DispatchError::Usage(e) => {
            let _ = write!(err, "{}", e.render());
        }
        DispatchError::UnknownCommand { command } => {
            let commands: Vec<&'static str> = ShapeCommand::iter().map(ShapeCommand::name).collect();
            let aliases: Vec<&'static str> = COMMAND_ALIASES.iter().map(|(alias, _)| *alias).collect();

            let _ = writeln!(err, "{}", translator.format("error: Unknown command: {command}", &[("command", command)]));
            let _ = writeln!(
                err,
                "{}",
                translator.format(
                    "Supported commands are {commands} (or their aliases {aliases}).",
                    &[("commands", &commands.join(", ")), ("aliases", &aliases.join(", "))],
                )
            );
        }
        DispatchError::Command(e) => {
            let _ = writeln!(err, "{}", translator.format("error: {message}", &[("message", e)]));
        }
    }

    error.exit_code()
}
