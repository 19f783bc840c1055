//! The shape generators behind each command.
//!
//! Every shape exposes `main(host, ctx, args, options)`. It parses its own arguments (the command
//! line after the command name), works out the stitch count of each round, and writes the pattern.
//! Global options arrive already parsed: `accurate` selects the [`Shaping`](crate::pattern::Shaping)
//! and `inhuman` the output style.

pub mod ball;
pub mod cone;
pub mod donut;

use crate::Result;
use crate::commands::Host;
use crate::i18n::Translator;
use clap::error::ErrorKind;
use clap::{Command, CommandFactory, FromArgMatches};
use ohno::{IntoAppError, app_err};
use std::io::Write;

/// Parse a shape's own arguments, with help text passed through `translator`.
///
/// Returns `None` when help or version information was requested and has been written.
pub(crate) fn parse_args<A, H>(host: &mut H, translator: &Translator, name: &str, args: &[String]) -> Result<Option<A>>
where
    A: CommandFactory + FromArgMatches,
    H: Host,
{
    let argv = core::iter::once(name).chain(args.iter().map(String::as_str));

    let parsed = localized_command(A::command(), translator)
        .try_get_matches_from(argv)
        .and_then(|matches| A::from_arg_matches(&matches));

    match parsed {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(host.output(), "{}", e.render()).into_app_err("unable to write help")?;
            Ok(None)
        }
        Err(e) => {
            let rendered = e.render().to_string();
            let message = rendered.strip_prefix("error: ").unwrap_or(&rendered).trim_end();
            Err(app_err!("{message}"))
        }
    }
}

fn localized_command(mut cmd: Command, translator: &Translator) -> Command {
    if let Some(about) = cmd.get_about().map(ToString::to_string) {
        cmd = cmd.about(translator.tr(&about).to_string());
    }

    let helps: Vec<(clap::Id, String)> = cmd
        .get_arguments()
        .filter_map(|arg| arg.get_help().map(|help| (arg.get_id().clone(), help.to_string())))
        .collect();

    for (id, help) in helps {
        let translated = translator.tr(&help).to_string();
        cmd = cmd.mut_arg(id, |arg| arg.help(translated));
    }

    cmd
}

/// Largest accepted dimension, in stitches.
///
/// Keeps row and stitch counts well inside `u32` for every shape.
pub const MAX_LENGTH: f64 = 1_000.0;

/// Value parser for a length that must be finite, greater than zero, and at most [`MAX_LENGTH`]
pub(crate) fn positive_length(value: &str) -> core::result::Result<f64, String> {
    let length = parse_length(value)?;
    if length > 0.0 {
        Ok(length)
    } else {
        Err(format!("'{value}' must be greater than zero"))
    }
}

/// Value parser for a length that must be finite, not negative, and at most [`MAX_LENGTH`]
pub(crate) fn non_negative_length(value: &str) -> core::result::Result<f64, String> {
    let length = parse_length(value)?;
    if length >= 0.0 {
        Ok(length)
    } else {
        Err(format!("'{value}' must not be negative"))
    }
}

fn parse_length(value: &str) -> core::result::Result<f64, String> {
    let length: f64 = value.parse().map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if !length.is_finite() {
        return Err(format!("'{value}' is not a finite number"));
    }
    if length > MAX_LENGTH {
        return Err(format!("'{value}' is larger than the maximum of {MAX_LENGTH} stitches"));
    }
    Ok(length)
}
