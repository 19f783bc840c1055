use super::DispatchError;
use super::registry::{COMMAND_ALIASES, ShapeCommand};
use crate::i18n::Translator;
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::ffi::OsString;
use strum::IntoEnumIterator;

const BIN_NAME: &str = "crocad";

/// Options accepted before the command name, shared by every shape command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// How many times `--verbose` was given
    pub verbose: u8,

    /// Prefer geometrically exact stitch counts over even shaping
    pub accurate: bool,

    /// Print only row counts, one per line, instead of instructions
    pub inhuman: bool,
}

#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version, disable_help_subcommand = true, args_override_self = true)]
struct Cli {
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(short, long)]
    accurate: bool,

    #[arg(short, long)]
    inhuman: bool,

    #[command(subcommand)]
    command: Option<Invocation>,
}

#[derive(Subcommand, Debug)]
enum Invocation {
    /// Everything from the command name onwards, left unparsed
    #[command(external_subcommand)]
    Command(Vec<String>),
}

/// Build the top-level command with all user-visible text passed through `translator`
fn command(translator: &Translator) -> clap::Command {
    let heading = translator.tr("Global Options").to_string();

    let commands: Vec<&'static str> = ShapeCommand::iter().map(ShapeCommand::name).collect();
    let aliases: Vec<String> = COMMAND_ALIASES
        .iter()
        .map(|(alias, target)| format!("{alias} → {target}"))
        .collect();

    let usage = translator.format(
        "{bin} [-v|--verbose]... [-a|--accurate] [-i|--inhuman] COMMAND [COMMAND-OPTIONS]\n       {bin} --help\n       {bin} COMMAND --help",
        &[("bin", &BIN_NAME)],
    );

    let after_help = translator.format(
        "Global options must be provided before the name of the command. They can be used for any command.\n\nSupported commands: {commands} (aliases: {aliases}).\nFor details of the options for a specific command, run '{bin} COMMAND --help'.",
        &[("commands", &commands.join(", ")), ("aliases", &aliases.join(", ")), ("bin", &BIN_NAME)],
    );

    Cli::command()
        .about(translator.tr("Generate a crochet pattern for a geometric primitive, specified as COMMAND.").to_string())
        .override_usage(usage)
        .after_help(after_help)
        .mut_arg("verbose", |arg| {
            arg.help(translator.tr("Print out extra information; repeat for debugging output").to_string())
                .help_heading(heading.clone())
        })
        .mut_arg("accurate", |arg| {
            arg.help(
                translator
                    .tr("Generate an exact pattern, which may not produce such an even end-product")
                    .to_string(),
            )
            .help_heading(heading.clone())
        })
        .mut_arg("inhuman", |arg| {
            arg.help(
                translator
                    .tr("Instead of printing instructions, just print the row counts, one per line")
                    .to_string(),
            )
            .help_heading(heading.clone())
        })
}

/// Parse the global options that precede the command name.
///
/// `argv` excludes the program name. Parsing stops at the first token that is not a global option;
/// that token and everything after it are returned untouched.
pub fn parse_global_options<I, T>(translator: &Translator, argv: I) -> Result<(GlobalOptions, Vec<String>), DispatchError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = core::iter::once(OsString::from(BIN_NAME)).chain(argv.into_iter().map(Into::into));
    let matches = command(translator).try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;

    let options = GlobalOptions {
        verbose: cli.verbose,
        accurate: cli.accurate,
        inhuman: cli.inhuman,
    };

    let remaining = match cli.command {
        Some(Invocation::Command(args)) => args,
        None => Vec::new(),
    };

    Ok((options, remaining))
}

/// The usage error reported when no command follows the global options
#[must_use]
pub fn missing_command_error(translator: &Translator) -> DispatchError {
    let mut cmd = command(translator);
    DispatchError::Usage(cmd.error(ErrorKind::MissingSubcommand, translator.tr("No command was provided.")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<(GlobalOptions, Vec<String>), DispatchError> {
        parse_global_options(&Translator::identity(), argv)
    }

    #[test]
    fn test_verbose_counts_and_remaining_args() {
        let (options, remaining) = parse(&["-v", "-v", "ball", "--radius", "5"]).unwrap();

        assert_eq!(options.verbose, 2);
        assert!(!options.accurate);
        assert!(!options.inhuman);
        assert_eq!(remaining, ["ball", "--radius", "5"]);

        let (command, command_args) = remaining.split_first().unwrap();
        assert_eq!(command, "ball");
        assert_eq!(command_args, ["--radius", "5"]);
    }

    #[test]
    fn test_long_and_bundled_flags() {
        let (options, remaining) = parse(&["--verbose", "-va", "--inhuman", "cone"]).unwrap();

        assert_eq!(options.verbose, 2);
        assert!(options.accurate);
        assert!(options.inhuman);
        assert_eq!(remaining, ["cone"]);
    }

    #[test]
    fn test_boolean_flags_are_idempotent() {
        let (options, _) = parse(&["-a", "--accurate", "-i", "-i", "donut"]).unwrap();

        assert!(options.accurate);
        assert!(options.inhuman);
        assert_eq!(options.verbose, 0);
    }

    #[test]
    fn test_parsing_stops_at_command() {
        let (options, remaining) = parse(&["ball", "-v", "--accurate", "-x"]).unwrap();

        assert_eq!(options, GlobalOptions::default());
        assert_eq!(remaining, ["ball", "-v", "--accurate", "-x"]);
    }

    #[test]
    fn test_unknown_global_flag_is_usage_error() {
        let result = parse(&["--bogus", "ball"]);
        match result {
            Err(DispatchError::Usage(e)) => assert_eq!(e.kind(), ErrorKind::UnknownArgument),
            other => panic!("expected a usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_no_command_leaves_nothing_remaining() {
        let (options, remaining) = parse(&["-v", "-a"]).unwrap();
        assert_eq!(options.verbose, 1);
        assert!(remaining.is_empty());

        let (_, remaining) = parse(&[]).unwrap();
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_help_is_reported_as_display() {
        match parse(&["--help"]) {
            Err(DispatchError::Usage(e)) => {
                assert_eq!(e.kind(), ErrorKind::DisplayHelp);
                let text = e.render().to_string();
                assert!(text.contains("Global Options"), "help was: {text}");
                assert!(text.contains("--inhuman"), "help was: {text}");
            }
            other => panic!("expected help output, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_command_error() {
        match missing_command_error(&Translator::identity()) {
            DispatchError::Usage(e) => {
                assert_eq!(e.kind(), ErrorKind::MissingSubcommand);
                assert!(e.render().to_string().contains("No command was provided."));
            }
            other => panic!("expected a usage error, got {other:?}"),
        }
    }
}
