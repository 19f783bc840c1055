//! The closed set of shape commands and their aliases.

use super::{DispatchError, GlobalOptions, Host, RuntimeContext};
use crate::Result;
use crate::shapes::{ball, cone, donut};
use core::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Alternate public names, each mapping to a canonical command name.
///
/// Substitution is applied once; an alias never resolves through another alias.
pub const COMMAND_ALIASES: &[(&str, &str)] = &[("torus", "donut"), ("sphere", "ball")];

/// A shape the tool can generate a pattern for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ShapeCommand {
    Ball,
    Cone,
    Donut,
}

impl ShapeCommand {
    /// The canonical command name
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Run this command's entry point with its own, still unparsed, arguments
    pub fn run<H: Host>(self, host: &mut H, ctx: &RuntimeContext<'_>, args: &[String], options: &GlobalOptions) -> Result<()> {
        match self {
            Self::Ball => ball::main(host, ctx, args, options),
            Self::Cone => cone::main(host, ctx, args, options),
            Self::Donut => donut::main(host, ctx, args, options),
        }
    }
}

/// Substitute `command` through the alias table, at most once
#[must_use]
pub fn resolve_alias(command: &str) -> &str {
    COMMAND_ALIASES
        .iter()
        .find_map(|&(alias, target)| (alias == command).then_some(target))
        .unwrap_or(command)
}

/// Find the shape command registered under `command` or one of its aliases
pub fn find_command(command: &str) -> Result<ShapeCommand, DispatchError> {
    let canonical = resolve_alias(command);
    ShapeCommand::from_str(canonical).ok().ok_or_else(|| DispatchError::UnknownCommand {
        command: command.to_string(),
    })
}
