//! Property-based tests for the argument grammar using proptest.

use argot::{parse, App, CommandRegistry, Error};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register("default", |_app: &App| {});
    registry.register("run", |_app: &App| {});
    registry
}

// Keys never contain "=" and never start with "-".
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9=._ ]{1,12}"
}

// Positionals never start with "-".
fn positional_strategy() -> impl Strategy<Value = String> {
    "([a-zA-Z0-9=._ ][a-zA-Z0-9=._ -]{0,8})?"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A leading dash token never becomes the command.
    #[test]
    fn leading_dash_selects_default(key in key_strategy(), rest in prop::collection::vec(positional_strategy(), 0..5)) {
        let mut args = vec![format!("-{}", key)];
        args.extend(rest.clone());

        let parsed = parse(args, &registry()).unwrap();

        prop_assert_eq!(parsed.command(), "default");
        prop_assert!(parsed.has_flag(&key));
        prop_assert_eq!(parsed.arguments(), rest.as_slice());
    }

    /// Every well-formed option is stored under its key.
    #[test]
    fn option_is_stored(key in key_strategy(), value in value_strategy()) {
        let parsed = parse(["run".to_string(), format!("--{}={}", key, value)], &registry()).unwrap();

        prop_assert_eq!(parsed.option(&key), Some(value.as_str()));
        prop_assert!(!parsed.has_flag(&key));
    }

    /// The last occurrence of a repeated option wins.
    #[test]
    fn repeated_option_last_wins(key in key_strategy(), first in value_strategy(), second in value_strategy()) {
        let args = vec![format!("--{}={}", key, first), format!("--{}={}", key, second)];

        let parsed = parse(args, &registry()).unwrap();

        prop_assert_eq!(parsed.option(&key), Some(second.as_str()));
        prop_assert_eq!(parsed.options().len(), 1);
    }

    /// Options split on the first "=" only.
    #[test]
    fn option_value_keeps_equals(key in key_strategy(), a in "[a-z]{1,5}", b in "[a-z]{1,5}") {
        let parsed = parse([format!("--{}={}={}", key, a, b)], &registry()).unwrap();

        let expected = format!("{}={}", a, b);
        prop_assert_eq!(parsed.option(&key), Some(expected.as_str()));
    }

    /// Repeating a flag leaves exactly one entry.
    #[test]
    fn repeated_flag_is_idempotent(key in key_strategy(), times in 1usize..5) {
        let args: Vec<String> = std::iter::repeat(format!("-{}", key)).take(times).collect();

        let parsed = parse(args, &registry()).unwrap();

        prop_assert_eq!(parsed.flags().len(), 1);
        prop_assert!(parsed.has_flag(&key));
    }

    /// Positionals keep order and multiplicity.
    #[test]
    fn positionals_preserved(values in prop::collection::vec(positional_strategy(), 0..10)) {
        let mut args = vec!["run".to_string()];
        args.extend(values.clone());

        let parsed = parse(args, &registry()).unwrap();

        prop_assert_eq!(parsed.command(), "run");
        prop_assert_eq!(parsed.arguments(), values.as_slice());
    }

    /// Option without "=" reports the whole remainder as the key.
    #[test]
    fn option_without_equals_fails(key in key_strategy()) {
        let result = parse([format!("--{}", key)], &registry());
        prop_assert_eq!(result, Err(Error::MissingOptionValue(key)));
    }

    /// Unregistered commands fail before any token is inspected.
    #[test]
    fn unknown_command_fails(name in "[a-z]{3,8}") {
        prop_assume!(name != "default" && name != "run");

        let result = parse([name.clone(), "-".to_string()], &registry());
        prop_assert_eq!(result, Err(Error::UnknownCommand(name)));
    }
}
