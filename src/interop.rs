//! Conversions between `Either` and neighbouring types.
//!
//! - `Result<A, E>`: `Ok` maps to `Success`, `Err` to `Failure`.
//! - `stillwater::Validation<A, E>`: a single failure handed over to the
//!   validation type, which is where failure accumulation lives.

use crate::core::Either;
use stillwater::Validation;

impl<E, A> Either<E, A> {
    /// Convert into a standard `Result`.
    ///
    /// Handy at the boundary with code that uses `?`.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// fn lookup(id: u32) -> Result<&'static str, String> {
    ///     let found: Either<String, &str> = if id == 1 {
    ///         Either::success("ada")
    ///     } else {
    ///         Either::failure(format!("no user {id}"))
    ///     };
    ///     let name = found.into_result()?;
    ///     Ok(name)
    /// }
    ///
    /// assert_eq!(lookup(1), Ok("ada"));
    /// assert_eq!(lookup(2), Err("no user 2".to_string()));
    /// ```
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Either::Success(value) => Ok(value),
            Either::Failure(failure) => Err(failure),
        }
    }
}

impl<E, A> From<Result<A, E>> for Either<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Either::Success(value),
            Err(failure) => Either::Failure(failure),
        }
    }
}

impl<E, A> From<Either<E, A>> for Result<A, E> {
    fn from(either: Either<E, A>) -> Self {
        either.into_result()
    }
}

impl<E, A> From<Either<E, A>> for Validation<A, E> {
    fn from(either: Either<E, A>) -> Self {
        match either {
            Either::Success(value) => Validation::Success(value),
            Either::Failure(failure) => Validation::Failure(failure),
        }
    }
}

impl<E, A> From<Validation<A, E>> for Either<E, A> {
    fn from(validation: Validation<A, E>) -> Self {
        match validation {
            Validation::Success(value) => Either::Success(value),
            Validation::Failure(failure) => Either::Failure(failure),
        }
    }
}
