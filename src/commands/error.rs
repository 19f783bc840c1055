use core::fmt::{Display, Formatter};

/// Failure of a single `crocad` invocation, as seen by the process boundary
#[derive(Debug)]
pub enum DispatchError {
    /// Malformed or missing command line: no command, an unrecognized global flag, or a bad value
    Usage(clap::Error),

    /// The command name, after alias substitution, has no registered handler
    UnknownCommand { command: String },

    /// The shape handler itself failed; carried as-is
    Command(ohno::AppError),
}

impl DispatchError {
    /// Exit status a process should terminate with for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(e) => u8::try_from(e.exit_code()).unwrap_or(2),
            Self::UnknownCommand { .. } => 2,
            Self::Command(_) => 1,
        }
    }
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Usage(e) => write!(f, "{e}"),
            Self::UnknownCommand { command } => write!(f, "Unknown command: {command}"),
            Self::Command(e) => write!(f, "{e}"),
        }
    }
}

impl core::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Usage(e) => Some(e),
            Self::UnknownCommand { .. } | Self::Command(_) => None,
        }
    }
}

impl From<clap::Error> for DispatchError {
    fn from(e: clap::Error) -> Self {
        Self::Usage(e)
    }
}

impl From<ohno::AppError> for DispatchError {
    fn from(e: ohno::AppError) -> Self {
        Self::Command(e)
    }
}
