//! Parsing Numbers
//!
//! This example parses user input into numbers and chains checks over the
//! result without raising errors for expected failures.
//!
//! Key concepts:
//! - Building an `Either` from an optional parse result
//! - Short-circuiting on the first failure with `flat_map`
//! - Falling back lazily with `or_else`
//! - Rejecting an absent callback with a precondition violation
//!
//! Run with: cargo run --example parse_numbers

use fallible::{either_try, Either, PreconditionViolation};

#[derive(Debug, Clone, PartialEq)]
enum InputError {
    NotANumber(String),
    OutOfRange(i64),
}

fn parse(input: &str) -> Either<InputError, i64> {
    Either::from_optional(
        input.trim().parse().ok(),
        InputError::NotANumber(input.to_string()),
    )
}

fn in_range(n: i64) -> Either<InputError, i64> {
    if (0..=100).contains(&n) {
        Either::success(n)
    } else {
        Either::failure(InputError::OutOfRange(n))
    }
}

fn percentage_sum(a: &str, b: &str) -> Either<InputError, i64> {
    let a = either_try!(parse(a).flat_map(in_range));
    let b = either_try!(parse(b).flat_map(in_range));
    Either::success(a + b)
}

fn main() {
    println!("=== Parsing Numbers Example ===\n");

    for input in ["42", " 7 ", "abc", "250"] {
        let checked = parse(input).flat_map(in_range);
        println!("{input:>5} -> {checked:?}");
        checked.if_present(|n| println!("      accepted {n}"));
    }

    println!("\nSum of 40 and 2: {:?}", percentage_sum("40", "2"));
    println!("Sum of 40 and x: {:?}", percentage_sum("40", "x"));

    let fallback = parse("oops").or_else(|| parse("0"));
    println!("\nWith fallback: {}", fallback.get_or_default(-1));

    let messages = parse("999")
        .flat_map(in_range)
        .map_failure(|e| match e {
            InputError::NotANumber(raw) => format!("not a number: {raw}"),
            InputError::OutOfRange(n) => format!("{n} is out of range"),
        });
    println!("Described failure: {messages:?}");

    let missing: Option<fn(i64) -> i64> = None;
    let outcome: Result<_, PreconditionViolation> = parse("1").try_map(missing);
    println!("\nAbsent mapper: {outcome:?}");

    println!("\n=== Example Complete ===");
}
