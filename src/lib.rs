//! Fallible: a minimal success-or-failure type
//!
//! `Either<E, A>` holds exactly one of a failure descriptor `E` or a success
//! value `A`. Expected failures travel as ordinary data through a chain of
//! combinators instead of being raised and caught.
//!
//! # Core Concepts
//!
//! - **Construction**: `success`, `failure` and `from_optional`
//! - **Queries**: `is_success`, `is_failure` and `to_optional`
//! - **Composition**: `map`, `map_failure`, `flat_map`, `or`, `or_else`,
//!   `get_or_default` and `if_present`
//! - **Preconditions**: `try_*` variants that reject absent callbacks with a
//!   [`PreconditionViolation`] instead of a domain failure
//!
//! Accumulating several failures, async computation and serialization are
//! out of scope. [`Either`] converts into `stillwater::Validation` for the
//! accumulation case.
//!
//! # Example
//!
//! ```rust
//! use fallible::Either;
//!
//! fn parse(input: &str) -> Either<&'static str, i32> {
//!     Either::from_optional(input.parse().ok(), "invalid number")
//! }
//!
//! let checked = |x: i32| {
//!     if x > 0 {
//!         Either::success(x * 2)
//!     } else {
//!         Either::failure("negative")
//!     }
//! };
//!
//! assert_eq!(parse("5").flat_map(checked), Either::Success(10));
//! assert_eq!(parse("-5").flat_map(checked), Either::Failure("negative"));
//! assert_eq!(parse("abc").flat_map(checked), Either::Failure("invalid number"));
//! ```

pub mod checked;
pub mod core;
pub mod interop;
mod macros;

// Re-export commonly used types
pub use crate::checked::PreconditionViolation;
pub use crate::core::Either;
