//! Transformations over `Either`.
//!
//! Every combinator consumes its receiver and invokes the caller-supplied
//! function at most once, and only on the variant it applies to.

use super::either::Either;

impl<E, A> Either<E, A> {
    /// Apply `f` to the success value, leaving a failure untouched.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// let ok: Either<&str, i32> = Either::success(2);
    /// assert_eq!(ok.map(|n| n + 1), Either::Success(3));
    ///
    /// let err: Either<&str, i32> = Either::failure("nope");
    /// assert_eq!(err.map(|n| n + 1), Either::Failure("nope"));
    /// ```
    pub fn map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Either::Success(value) => Either::Success(f(value)),
            Either::Failure(failure) => Either::Failure(failure),
        }
    }

    /// Apply `f` to the failure descriptor, leaving a success untouched.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// let err: Either<&str, i32> = Either::failure("nope");
    /// assert_eq!(err.map_failure(str::len), Either::Failure(4));
    /// ```
    pub fn map_failure<F2, F>(self, f: F) -> Either<F2, A>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Either::Failure(failure) => Either::Failure(f(failure)),
            Either::Success(value) => Either::Success(value),
        }
    }

    /// Short alias of [`map_failure`](Self::map_failure).
    #[inline]
    pub fn map_f<F2, F>(self, f: F) -> Either<F2, A>
    where
        F: FnOnce(E) -> F2,
    {
        self.map_failure(f)
    }

    /// Apply `f` to the success value and return its result without
    /// wrapping it again.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Either::success(n / 2)
    ///     } else {
    ///         Either::failure("odd")
    ///     }
    /// };
    ///
    /// assert_eq!(Either::success(8).flat_map(halve), Either::Success(4));
    /// assert_eq!(Either::success(7).flat_map(halve), Either::Failure("odd"));
    /// ```
    pub fn flat_map<B, F>(self, f: F) -> Either<E, B>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        match self {
            Either::Success(value) => f(value),
            Either::Failure(failure) => Either::Failure(failure),
        }
    }

    /// Return `self` if it is a success, otherwise `other`.
    ///
    /// `other` is evaluated by the caller. Use [`or_else`](Self::or_else)
    /// to defer building the fallback.
    pub fn or(self, other: Either<E, A>) -> Either<E, A> {
        match self {
            Either::Success(_) => self,
            Either::Failure(_) => other,
        }
    }

    /// Return `self` if it is a success, otherwise the result of `supplier`.
    ///
    /// `supplier` is only called on the failure path.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// let primary: Either<&str, u32> = Either::failure("cache miss");
    /// let value = primary.or_else(|| Either::success(10));
    ///
    /// assert_eq!(value, Either::Success(10));
    /// ```
    pub fn or_else<F>(self, supplier: F) -> Either<E, A>
    where
        F: FnOnce() -> Either<E, A>,
    {
        match self {
            Either::Success(_) => self,
            Either::Failure(_) => supplier(),
        }
    }

    /// Unwrap the success value, or return `default`.
    ///
    /// The default is taken eagerly.
    pub fn get_or_default(self, default: A) -> A {
        match self {
            Either::Success(value) => value,
            Either::Failure(_) => default,
        }
    }

    /// Call `consumer` with the success value, if present.
    ///
    /// ```rust
    /// use fallible::Either;
    ///
    /// let mut seen = Vec::new();
    /// Either::<(), i32>::success(1).if_present(|v| seen.push(*v));
    /// Either::<(), i32>::failure(()).if_present(|v| seen.push(*v));
    ///
    /// assert_eq!(seen, vec![1]);
    /// ```
    pub fn if_present<F>(&self, consumer: F)
    where
        F: FnOnce(&A),
    {
        if let Either::Success(value) = self {
            consumer(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn checked_double(x: i32) -> Either<&'static str, i32> {
        if x > 0 {
            Either::success(x * 2)
        } else {
            Either::failure("negative")
        }
    }

    #[test]
    fn map_transforms_success() {
        let either: Either<&str, i32> = Either::success(5);
        assert_eq!(either.map(|x| x.to_string()), Either::Success("5".to_string()));
    }

    #[test]
    fn map_skips_failure() {
        let calls = Cell::new(0);
        let either: Either<&str, i32> = Either::failure("bad");

        let mapped = either.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(mapped, Either::Failure("bad"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn map_invokes_function_once() {
        let calls = Cell::new(0);
        let either: Either<&str, i32> = Either::success(1);

        let _ = either.map(|x| {
            calls.set(calls.get() + 1);
            x
        });

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn map_failure_transforms_failure() {
        let either: Either<&str, i32> = Either::failure("bad");
        assert_eq!(
            either.map_failure(|e| format!("wrapped: {e}")),
            Either::Failure("wrapped: bad".to_string())
        );
    }

    #[test]
    fn map_failure_skips_success() {
        let calls = Cell::new(0);
        let either: Either<&str, i32> = Either::success(3);

        let mapped = either.map_failure(|e| {
            calls.set(calls.get() + 1);
            e.len()
        });

        assert_eq!(mapped, Either::Success(3));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn map_f_is_alias_of_map_failure() {
        let a: Either<&str, i32> = Either::failure("abc");
        let b: Either<&str, i32> = Either::failure("abc");
        assert_eq!(a.map_f(str::len), b.map_failure(str::len));
    }

    #[test]
    fn flat_map_flattens_success() {
        assert_eq!(Either::success(5).flat_map(checked_double), Either::Success(10));
    }

    #[test]
    fn flat_map_can_turn_success_into_failure() {
        assert_eq!(
            Either::success(-5).flat_map(checked_double),
            Either::Failure("negative")
        );
    }

    #[test]
    fn flat_map_skips_failure() {
        let calls = Cell::new(0);
        let either: Either<&str, i32> = Either::failure("early");

        let result = either.flat_map(|x| {
            calls.set(calls.get() + 1);
            checked_double(x)
        });

        assert_eq!(result, Either::Failure("early"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn or_keeps_success() {
        let either: Either<&str, i32> = Either::success(1);
        assert_eq!(either.or(Either::success(2)), Either::Success(1));
    }

    #[test]
    fn or_falls_back_on_failure() {
        let either: Either<&str, i32> = Either::failure("bad");
        assert_eq!(either.or(Either::failure("worse")), Either::Failure("worse"));
    }

    #[test]
    fn or_else_never_invokes_supplier_on_success() {
        let calls = Cell::new(0);
        let either: Either<&str, i32> = Either::success(1);

        let result = either.or_else(|| {
            calls.set(calls.get() + 1);
            Either::success(2)
        });

        assert_eq!(result, Either::Success(1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn or_else_invokes_supplier_once_on_failure() {
        let calls = Cell::new(0);
        let either: Either<&str, i32> = Either::failure("bad");

        let result = either.or_else(|| {
            calls.set(calls.get() + 1);
            Either::success(2)
        });

        assert_eq!(result, Either::Success(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn get_or_default_returns_value_or_default() {
        assert_eq!(Either::<&str, i32>::success(1).get_or_default(9), 1);
        assert_eq!(Either::<&str, i32>::failure("bad").get_or_default(9), 9);
    }

    #[test]
    fn if_present_consumes_success_once() {
        let calls = Cell::new(0);
        let either: Either<&str, i32> = Either::success(4);

        either.if_present(|v| calls.set(calls.get() + *v));

        assert_eq!(calls.get(), 4);
        assert!(either.is_success());
    }

    #[test]
    fn if_present_ignores_failure() {
        let calls = Cell::new(0);
        let either: Either<&str, i32> = Either::failure("bad");

        either.if_present(|_| calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn failure_propagates_through_chain() {
        let either: Either<&str, i32> = Either::failure("root cause");

        let result = either
            .map(|x| x + 1)
            .flat_map(checked_double)
            .map(|x| x * 10);

        assert_eq!(result, Either::Failure("root cause"));
    }
}
