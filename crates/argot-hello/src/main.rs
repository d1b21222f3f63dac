//! A simple greeting CLI.
//!
//! ```text
//! hello hello                 # Hello, User!
//! hello hello --name=Ada -q   # Shhh! / Hello, Ada!
//! hello help                  # same as running with no command
//! hello args a -b --c=d       # parsed arguments as JSON
//! ```
//!
//! Set `RUST_LOG=argot=debug` to trace parsing and dispatch.

use std::process;

use anyhow::{Context, Result};
use argot::App;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Name of the installed binary, used in usage text.
const BIN_NAME: &str = "hello";

fn main() {
    setup_logging();

    // Errors are reported once, below, rather than through console logging.
    let mut app = build_app();

    if let Err(err) = app.run() {
        eprintln!("{err}");
        process::exit(err.code());
    }
}

fn build_app() -> App {
    App::builder()
        .name(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .author("argot contributors")
        .command("hello", hello)
        .command("default", |app: &App| print!("{}", usage(app)))
        // Composition: `help` is an alias for the default command.
        .command("help", |app: &App| {
            if let Err(err) = app.invoke("default") {
                tracing::warn!("help: {err}");
            }
        })
        .command("args", |app: &App| match render_args(app) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("Error: {err:#}"),
        })
        .build()
}

fn hello(app: &App) {
    if app.has_flag("q") {
        println!("Shhh!");
    }
    println!("Hello, {}!", app.option_or("name", "User"));
}

fn usage(app: &App) -> String {
    let name = app.name().unwrap_or(BIN_NAME);
    let version = app.version().unwrap_or("unknown");
    format!("{name} {version}: a simple greeting!\n\t{name} hello --name=\"Your Name\"\n")
}

fn render_args(app: &App) -> Result<String> {
    serde_json::to_string_pretty(app.parsed()).context("failed to serialize parsed arguments")
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .init();
}
