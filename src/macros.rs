//! Macros for working with `Either` in function bodies.

/// Unwrap a `Success` or return the `Failure` from the enclosing function.
///
/// Works like `?` for functions returning [`Either`](crate::Either). The
/// failure descriptor is converted with `From`, so a narrower failure type
/// can be lifted into the caller's.
///
/// # Example
///
/// ```
/// use fallible::{either_try, Either};
///
/// fn parse(input: &str) -> Either<&'static str, i32> {
///     Either::from_optional(input.parse().ok(), "invalid number")
/// }
///
/// fn sum(a: &str, b: &str) -> Either<&'static str, i32> {
///     let a = either_try!(parse(a));
///     let b = either_try!(parse(b));
///     Either::success(a + b)
/// }
///
/// assert_eq!(sum("40", "2"), Either::Success(42));
/// assert_eq!(sum("40", "x"), Either::Failure("invalid number"));
/// ```
#[macro_export]
macro_rules! either_try {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Either::Success(value) => value,
            $crate::Either::Failure(failure) => {
                return $crate::Either::Failure(::core::convert::From::from(failure));
            }
        }
    };
}
