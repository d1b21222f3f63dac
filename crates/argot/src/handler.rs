//! Command handler types.
//!
//! A handler is the unit of behavior registered under a command name. It is
//! invoked with a shared reference to the [`App`], which gives it read access
//! to the parsed flags, options and positional arguments, and lets it call
//! other registered commands through [`App::invoke`].
//!
//! Handlers return nothing. Anything a handler needs to report (output,
//! failures of nested calls) is its own business.
//!
//! # Closures and Structs
//!
//! Any `Fn(&App)` closure is a handler:
//!
//! ```rust
//! use argot::App;
//!
//! let mut app = App::new();
//! app.command("default", |app: &App| {
//!     println!("{} arguments", app.arguments().len());
//! });
//! ```
//!
//! Struct handlers implement the trait directly:
//!
//! ```rust
//! use argot::{App, Handler};
//!
//! struct Greeter {
//!     greeting: &'static str,
//! }
//!
//! impl Handler for Greeter {
//!     fn handle(&self, app: &App) {
//!         println!("{}, {}!", self.greeting, app.option_or("name", "User"));
//!     }
//! }
//!
//! let mut app = App::new();
//! app.command_handler("greet", Greeter { greeting: "Hello" });
//! ```
//!
//! # Mutable State
//!
//! Handlers take `&self` because a handler may be re-entered: a command can
//! invoke another command that ends up invoking it again. Handlers that need
//! to mutate state use interior mutability (`Cell`, `RefCell`).

use crate::app::App;

/// Trait for command handlers.
pub trait Handler {
    /// Runs the command with the application as context.
    fn handle(&self, app: &App);
}

impl<F> Handler for F
where
    F: Fn(&App),
{
    fn handle(&self, app: &App) {
        self(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_closure_is_handler() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let handler = move |_app: &App| counter.set(counter.get() + 1);

        let app = App::new();
        handler.handle(&app);
        handler.handle(&app);

        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_struct_handler_reads_app() {
        struct Recorder {
            seen: Cell<Option<usize>>,
        }

        impl Handler for Recorder {
            fn handle(&self, app: &App) {
                self.seen.set(Some(app.arguments().len()));
            }
        }

        let recorder = Recorder {
            seen: Cell::new(None),
        };
        recorder.handle(&App::new());

        assert_eq!(recorder.seen.get(), Some(0));
    }

    #[test]
    fn test_boxed_handler_dispatches_dynamically() {
        let hit = Rc::new(Cell::new(false));
        let flag = hit.clone();
        let handler: Box<dyn Handler> = Box::new(move |_app: &App| flag.set(true));

        handler.handle(&App::new());

        assert!(hit.get());
    }
}
