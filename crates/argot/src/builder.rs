//! Builder for [`App`].

use crate::app::App;
use crate::handler::Handler;

/// Builder for constructing an [`App`] instance.
///
/// # Example
///
/// ```rust
/// use argot::App;
///
/// let app = App::builder()
///     .name("todo")
///     .version("0.3.0")
///     .author("Jane Doe")
///     .console_logging(true)
///     .command("default", |_app: &App| println!("usage: todo <command>"))
///     .build();
///
/// assert_eq!(app.name(), Some("todo"));
/// assert!(app.has_command("default"));
/// ```
#[derive(Debug, Default)]
pub struct AppBuilder {
    app: App,
}

impl AppBuilder {
    /// Creates a new builder with no metadata and no commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.app.name = Some(name.into());
        self
    }

    /// Sets the application version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.app.version = Some(version.into());
        self
    }

    /// Sets the application author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.app.author = Some(author.into());
        self
    }

    /// Enables logging of errors returned by [`App::run`].
    ///
    /// Errors are emitted as `tracing` events at error level; installing a
    /// subscriber is left to the binary.
    pub fn console_logging(mut self, enabled: bool) -> Self {
        self.app.console_logging = enabled;
        self
    }

    /// Registers a closure under `name`.
    pub fn command<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&App) + 'static,
    {
        self.app.command(name, handler);
        self
    }

    /// Registers a [`Handler`] under `name`.
    pub fn command_handler<H>(mut self, name: impl Into<String>, handler: H) -> Self
    where
        H: Handler + 'static,
    {
        self.app.command_handler(name, handler);
        self
    }

    /// Builds the App.
    pub fn build(self) -> App {
        self.app
    }
}
