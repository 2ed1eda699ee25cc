//! The `Either` type: construction, queries and borrowed views.
//!
//! An `Either` is always exactly one of two variants. There is no empty
//! state and no way to observe both payloads at once.

/// Outcome of a computation: either a failure descriptor or a success value.
///
/// By convention the failure type comes first (`E`) and the success type
/// second (`A`). Instances are never mutated by the combinators; every
/// transformation consumes the receiver and produces a new value.
///
/// When a combinator changes the type parameter of the inactive side (for
/// example `map` on a `Failure`), the held value is moved into a freshly
/// constructed variant. The inactive parameter is never read or built.
///
/// # Example
///
/// ```rust
/// use fallible::Either;
///
/// let parsed: Either<String, i32> = Either::success(21);
/// let doubled = parsed.map(|n| n * 2);
///
/// assert!(doubled.is_success());
/// assert_eq!(doubled.get_or_default(0), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[must_use = "this `Either` may be a `Failure` variant, which should be handled"]
pub enum Either<E, A> {
    /// Failure case, holding the failure descriptor.
    Failure(E),
    /// Success case, holding the computed value.
    Success(A),
}

impl<E, A> Either<E, A> {
    /// Construct a `Success` holding `value`.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// let ok: Either<&str, u8> = Either::success(7);
    /// assert_eq!(ok, Either::Success(7));
    /// ```
    pub fn success(value: A) -> Self {
        Either::Success(value)
    }

    /// Construct a `Failure` holding `failure`.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// let err: Either<&str, u8> = Either::failure("boom");
    /// assert_eq!(err, Either::Failure("boom"));
    /// ```
    pub fn failure(failure: E) -> Self {
        Either::Failure(failure)
    }

    /// Construct an `Either` from an optional value.
    ///
    /// Returns `Success` with the contained value when `optional` is `Some`,
    /// otherwise `Failure(if_absent)`.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// fn parse(input: &str) -> Either<&'static str, i32> {
    ///     Either::from_optional(input.parse().ok(), "invalid number")
    /// }
    ///
    /// assert_eq!(parse("42"), Either::Success(42));
    /// assert_eq!(parse("abc"), Either::Failure("invalid number"));
    /// ```
    pub fn from_optional(optional: Option<A>, if_absent: E) -> Self {
        match optional {
            Some(value) => Either::Success(value),
            None => Either::Failure(if_absent),
        }
    }

    /// Returns `true` if this is a `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Either::Failure(_))
    }

    /// Returns `true` if this is a `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Either::Success(_))
    }

    /// Convert into an `Option`, discarding any failure descriptor.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::success(3).to_optional(), Some(3));
    /// assert_eq!(Either::<&str, i32>::failure("nope").to_optional(), None);
    /// ```
    pub fn to_optional(self) -> Option<A> {
        match self {
            Either::Success(value) => Some(value),
            Either::Failure(_) => None,
        }
    }

    /// Borrowing counterpart of [`to_optional`](Self::to_optional).
    pub fn as_optional(&self) -> Option<&A> {
        self.success_value()
    }

    /// Borrow the success value, if present.
    pub fn success_value(&self) -> Option<&A> {
        match self {
            Either::Success(value) => Some(value),
            Either::Failure(_) => None,
        }
    }

    /// Borrow the failure descriptor, if present.
    pub fn failure_value(&self) -> Option<&E> {
        match self {
            Either::Failure(failure) => Some(failure),
            Either::Success(_) => None,
        }
    }

    /// Convert `&Either<E, A>` into `Either<&E, &A>`.
    ///
    /// Lets a chain of combinators run against borrowed data, leaving the
    /// original instance intact.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// let name: Either<u16, String> = Either::success("ada".to_string());
    /// let len = name.as_ref().map(|s| s.len());
    ///
    /// assert_eq!(len, Either::Success(3));
    /// assert_eq!(name, Either::Success("ada".to_string()));
    /// ```
    pub fn as_ref(&self) -> Either<&E, &A> {
        match self {
            Either::Failure(failure) => Either::Failure(failure),
            Either::Success(value) => Either::Success(value),
        }
    }
}
