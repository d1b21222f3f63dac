//! The application: registry, parse state and the dispatch pipeline.
//!
//! ```text
//! run
//!   → parse (errors abort, no fallback)
//!   → dispatch active command
//!       → CommandNotFound? dispatch "default"
//!           → still failing? report the first error
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;

use tracing::{debug, error, warn};

use crate::builder::AppBuilder;
use crate::error::{Error, Result};
use crate::handler::Handler;
use crate::parser::{parse, ParsedArgs};
use crate::registry::{CommandRegistry, DEFAULT_COMMAND};

/// A command-line application.
///
/// Holds identity metadata, the command registry and the result of the most
/// recent successful parse. Handlers receive a shared reference to the `App`
/// and read arguments through its accessors.
///
/// # Example
///
/// ```rust
/// use argot::App;
///
/// let mut app = App::builder()
///     .name("greet")
///     .version("1.0.0")
///     .command("hello", |app: &App| {
///         println!("Hello, {}!", app.option_or("name", "User"));
///     })
///     .command("default", |_app: &App| println!("usage: greet hello"))
///     .build();
///
/// app.run_from(["hello", "--name=Ada"])?;
/// # Ok::<(), argot::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct App {
    pub(crate) name: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) author: Option<String>,
    pub(crate) console_logging: bool,
    pub(crate) commands: CommandRegistry,
    pub(crate) parsed: ParsedArgs,
}

impl App {
    /// Creates a new builder for constructing an App.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// Creates an App with no metadata and no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Application name, if configured.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Application version, if configured.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Application author, if configured.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Returns true if errors from [`run`](Self::run) are also logged.
    pub fn console_logging(&self) -> bool {
        self.console_logging
    }

    /// Registers a closure under `name`, replacing any existing handler.
    pub fn command<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&App) + 'static,
    {
        self.commands.register(name, handler);
        self
    }

    /// Registers a [`Handler`] under `name`, replacing any existing handler.
    pub fn command_handler<H>(&mut self, name: impl Into<String>, handler: H) -> &mut Self
    where
        H: Handler + 'static,
    {
        self.commands.register(name, handler);
        self
    }

    /// The command registry.
    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Returns true if a handler is registered under `name`.
    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains(name)
    }

    /// The result of the most recent successful parse.
    ///
    /// Before any parse this is empty with the active command `"default"`.
    pub fn parsed(&self) -> &ParsedArgs {
        &self.parsed
    }

    /// The active command name.
    pub fn active_command(&self) -> &str {
        self.parsed.command()
    }

    /// Returns true if the flag `name` was given.
    pub fn has_flag(&self, name: &str) -> bool {
        self.parsed.has_flag(name)
    }

    /// Returns true if the option `name` was given.
    pub fn has_option(&self, name: &str) -> bool {
        self.parsed.has_option(name)
    }

    /// Returns the value of the option `name`, if given.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.parsed.option(name)
    }

    /// Returns the value of the option `name`, or `default` if it was not given.
    pub fn option_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.parsed.option_or(name, default)
    }

    /// All flags that were given.
    pub fn flags(&self) -> &BTreeSet<String> {
        self.parsed.flags()
    }

    /// All options that were given.
    pub fn options(&self) -> &BTreeMap<String, String> {
        self.parsed.options()
    }

    /// Positional arguments, in order.
    pub fn arguments(&self) -> &[String] {
        self.parsed.arguments()
    }

    /// Parses `args` and stores the result.
    ///
    /// On error the previously stored result is left untouched.
    pub fn parse_from<I, S>(&mut self, args: I) -> Result<&ParsedArgs>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parsed = parse(args, &self.commands)?;
        Ok(&self.parsed)
    }

    /// Runs the handler registered under `name`.
    ///
    /// The handler runs to completion before this returns. Handlers may call
    /// `invoke` themselves; recursion is not checked.
    ///
    /// # Errors
    ///
    /// [`Error::CommandNotFound`] if no handler is registered under `name`.
    pub fn invoke(&self, name: &str) -> Result<()> {
        let handler = self
            .commands
            .get(name)
            .ok_or_else(|| Error::CommandNotFound(name.to_string()))?;

        debug!(command = name, "invoking handler");
        handler.handle(self);
        Ok(())
    }

    /// Invokes `name`, falling back to the default command if it is missing.
    ///
    /// If the fallback fails too, the error from the first attempt is
    /// returned. Dispatching `"default"` itself never retries.
    pub fn dispatch(&self, name: &str) -> Result<()> {
        match self.invoke(name) {
            Err(primary @ Error::CommandNotFound(_)) if name != DEFAULT_COMMAND => {
                warn!(command = name, "command not found, falling back to default");
                self.invoke(DEFAULT_COMMAND).map_err(|_| primary)
            }
            result => result,
        }
    }

    /// Parses the process arguments and dispatches the active command.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn run(&mut self) -> Result<()> {
        self.run_from(lossy_args(std::env::args_os().skip(1)))
    }

    /// Parses `args` and dispatches the active command.
    ///
    /// `args` must not include the program name.
    pub fn run_from<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parsed = self.parse_from(args).map(|_| ());
        let result = parsed.and_then(|()| self.dispatch(self.active_command()));

        if let Err(err) = &result {
            if self.console_logging {
                error!(code = err.code(), "{err}");
            }
        }

        result
    }
}

/// Converts OS arguments to strings, replacing invalid UTF-8 with U+FFFD.
fn lossy_args<I>(args: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter().map(|arg| arg.to_string_lossy().into_owned())
}
