//! Argument parsing.
//!
//! Turns a raw argument list (argv without the program name) into
//! [`ParsedArgs`]. The grammar is deliberately small:
//!
//! ```text
//! invocation   := [command] token*
//! command      := STRING              ; iff the first token doesn't start with "-"
//! token        := option | flag | positional
//! option       := "--" KEY "=" VALUE  ; VALUE non-empty, split on the first "="
//! flag         := "-" KEY             ; KEY non-empty
//! positional   := STRING
//! ```
//!
//! Tokens starting with `--` are always options, so a long flag such as
//! `--verbose` without a value is an error rather than a flag. Combined short
//! flags are not expanded: `-abc` is the single flag `abc`.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::{CommandRegistry, DEFAULT_COMMAND};

/// The structured result of parsing an argument list.
///
/// Every token is classified exactly once, as an option, a flag or a
/// positional. Flags and options are stored separately, so `-k` and `--k=v`
/// may both be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedArgs {
    command: String,
    flags: BTreeSet<String>,
    options: BTreeMap<String, String>,
    arguments: Vec<String>,
}

impl ParsedArgs {
    /// The active command name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns true if the flag `name` was given.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Returns true if the option `name` was given.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Returns the value of the option `name`, if given.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Returns the value of the option `name`, or `default` if it was not given.
    pub fn option_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.option(name).unwrap_or(default)
    }

    /// All flags that were given.
    pub fn flags(&self) -> &BTreeSet<String> {
        &self.flags
    }

    /// All options that were given.
    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Positional arguments, in order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl Default for ParsedArgs {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            flags: BTreeSet::new(),
            options: BTreeMap::new(),
            arguments: Vec::new(),
        }
    }
}

/// A single classified token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Option { key: &'a str, value: &'a str },
    Flag(&'a str),
    Positional(&'a str),
}

/// Classifies one token.
///
/// The `--` check must come before the `-` check since `--` is a prefix of `-`.
fn classify(arg: &str) -> Result<Token<'_>> {
    if let Some(option) = arg.strip_prefix("--") {
        if option.is_empty() {
            return Err(Error::MissingOptionMarker);
        }
        let (key, value) = option
            .split_once('=')
            .ok_or_else(|| Error::MissingOptionValue(option.to_string()))?;
        if value.is_empty() {
            return Err(Error::MissingOptionValue(key.to_string()));
        }
        Ok(Token::Option { key, value })
    } else if let Some(flag) = arg.strip_prefix('-') {
        if flag.is_empty() {
            return Err(Error::MissingFlagName);
        }
        Ok(Token::Flag(arg.trim_start_matches('-')))
    } else {
        Ok(Token::Positional(arg))
    }
}

/// Parses `args` against the commands in `registry`.
///
/// The first argument is taken as the command name unless it starts with
/// `-`, in which case the command is [`DEFAULT_COMMAND`]. The command must be
/// registered.
///
/// # Errors
///
/// - [`Error::UnknownCommand`] if the active command is not registered
/// - [`Error::MissingOptionMarker`] for a bare `--`
/// - [`Error::MissingOptionValue`] for `--key` or `--key=`
/// - [`Error::MissingFlagName`] for a bare `-`
///
/// # Example
///
/// ```rust
/// use argot::{parse, App, CommandRegistry};
///
/// let mut registry = CommandRegistry::new();
/// registry.register("hello", |_app: &App| {});
///
/// let parsed = parse(["hello", "--name=Ada", "-q", "extra"], &registry)?;
/// assert_eq!(parsed.command(), "hello");
/// assert_eq!(parsed.option("name"), Some("Ada"));
/// assert!(parsed.has_flag("q"));
/// assert_eq!(parsed.arguments(), ["extra"]);
/// # Ok::<(), argot::Error>(())
/// ```
pub fn parse<I, S>(args: I, registry: &CommandRegistry) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into).peekable();

    let command = args
        .next_if(|first| !first.starts_with('-'))
        .unwrap_or_else(|| DEFAULT_COMMAND.to_string());

    if !registry.contains(&command) {
        return Err(Error::UnknownCommand(command));
    }
    debug!(command = %command, "resolved active command");

    let mut parsed = ParsedArgs {
        command,
        ..ParsedArgs::default()
    };

    for arg in args {
        match classify(&arg)? {
            Token::Option { key, value } => {
                debug!(key, value, "option");
                parsed.options.insert(key.to_string(), value.to_string());
            }
            Token::Flag(key) => {
                debug!(key, "flag");
                parsed.flags.insert(key.to_string());
            }
            Token::Positional(value) => {
                debug!(value, "positional");
                parsed.arguments.push(value.to_string());
            }
        }
    }

    Ok(parsed)
}
