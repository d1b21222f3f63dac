//! Error types for parsing and dispatch.

use thiserror::Error;

/// Exit code for [`Error::UnknownCommand`].
pub const UNKNOWN_COMMAND: i32 = 100;

/// Exit code for [`Error::MissingOptionMarker`].
pub const MISSING_OPTION_MARKER: i32 = 101;

/// Exit code for [`Error::MissingOptionValue`].
pub const MISSING_OPTION_VALUE: i32 = 102;

/// Exit code for [`Error::MissingFlagName`].
pub const MISSING_FLAG_NAME: i32 = 103;

/// Exit code for [`Error::CommandNotFound`].
pub const COMMAND_NOT_FOUND: i32 = 104;

/// Errors that can occur while parsing arguments or dispatching commands.
///
/// Parse errors (`UnknownCommand`, `MissingOptionMarker`, `MissingOptionValue`,
/// `MissingFlagName`) abort a run before any handler executes.
/// `CommandNotFound` is only produced by dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The active command is not registered.
    #[error("No command found: {0}")]
    UnknownCommand(String),

    /// A token was exactly `--`.
    #[error("No given option.")]
    MissingOptionMarker,

    /// An option token had no `=` or an empty value.
    #[error("No value given for option: {0}")]
    MissingOptionValue(String),

    /// A token was exactly `-`.
    #[error("No given flag.")]
    MissingFlagName,

    /// Dispatch was requested for a name with no handler.
    #[error("{0}. Command not found")]
    CommandNotFound(String),
}

impl Error {
    /// Returns the numeric code for this error.
    ///
    /// Codes are stable and suitable for use as a process exit status.
    pub fn code(&self) -> i32 {
        match self {
            Error::UnknownCommand(_) => UNKNOWN_COMMAND,
            Error::MissingOptionMarker => MISSING_OPTION_MARKER,
            Error::MissingOptionValue(_) => MISSING_OPTION_VALUE,
            Error::MissingFlagName => MISSING_FLAG_NAME,
            Error::CommandNotFound(_) => COMMAND_NOT_FOUND,
        }
    }

    /// Returns true if this error was raised while parsing arguments.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, Error::CommandNotFound(_))
    }
}

/// Result type for argot operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(Error::UnknownCommand("x".into()).code(), 100);
        assert_eq!(Error::MissingOptionMarker.code(), 101);
        assert_eq!(Error::MissingOptionValue("x".into()).code(), 102);
        assert_eq!(Error::MissingFlagName.code(), 103);
        assert_eq!(Error::CommandNotFound("x".into()).code(), 104);
    }

    #[test]
    fn test_display_includes_payload() {
        assert_eq!(
            Error::UnknownCommand("deploy".into()).to_string(),
            "No command found: deploy"
        );
        assert_eq!(
            Error::MissingOptionValue("name".into()).to_string(),
            "No value given for option: name"
        );
        assert_eq!(
            Error::CommandNotFound("deploy".into()).to_string(),
            "deploy. Command not found"
        );
    }

    #[test]
    fn test_display_without_payload() {
        assert_eq!(Error::MissingOptionMarker.to_string(), "No given option.");
        assert_eq!(Error::MissingFlagName.to_string(), "No given flag.");
    }

    #[test]
    fn test_is_parse_error() {
        assert!(Error::MissingFlagName.is_parse_error());
        assert!(Error::UnknownCommand("x".into()).is_parse_error());
        assert!(!Error::CommandNotFound("x".into()).is_parse_error());
    }
}
