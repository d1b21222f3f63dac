//! Minimal command-line argument parsing and command dispatch.
//!
//! `argot` splits a process argument list into a command name, boolean
//! flags, `key=value` options and positional arguments, then runs the
//! handler registered for that command.
//!
//! # Features
//!
//! - **Small grammar**: `[command] (--key=value | -flag | positional)*`
//! - **Command registry**: map names to closures or [`Handler`] structs
//! - **Composition**: handlers can [`invoke`](App::invoke) other commands
//! - **Fallback**: dispatch falls back to the `"default"` command
//! - **Typed errors**: one [`Error`] variant per failure, with stable codes
//!
//! # Usage
//!
//! ```rust,no_run
//! use argot::App;
//!
//! let mut app = App::builder()
//!     .name("greet")
//!     .command("hello", |app: &App| {
//!         if app.has_flag("q") {
//!             println!("Shhh!");
//!         }
//!         println!("Hello, {}!", app.option_or("name", "User"));
//!     })
//!     .command("default", |_app: &App| println!("usage: greet hello --name=NAME"))
//!     .command("help", |app: &App| {
//!         let _ = app.invoke("default");
//!     })
//!     .build();
//!
//! if let Err(err) = app.run() {
//!     eprintln!("{err}");
//!     std::process::exit(err.code());
//! }
//! ```
//!
//! # Command Resolution
//!
//! The first argument names the command unless it starts with `-`; then the
//! command is `"default"`. An unregistered command is a parse error
//! ([`Error::UnknownCommand`]) and nothing is dispatched.
//!
//! # Logging
//!
//! Parsing and dispatch emit `tracing` events. The crate never installs a
//! subscriber.

mod app;
mod builder;
mod error;
mod handler;
mod parser;
mod registry;

pub use app::App;
pub use builder::AppBuilder;
pub use error::{
    Error, Result, COMMAND_NOT_FOUND, MISSING_FLAG_NAME, MISSING_OPTION_MARKER,
    MISSING_OPTION_VALUE, UNKNOWN_COMMAND,
};
pub use handler::Handler;
pub use parser::{parse, ParsedArgs};
pub use registry::{CommandRegistry, DEFAULT_COMMAND};
