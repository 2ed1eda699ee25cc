//! Precondition-checked entry points.
//!
//! The combinators on [`Either`] take their functions by value, so an absent
//! function cannot be passed to them. Callers that hold callbacks in optional
//! slots (handler tables, partially configured pipelines) use the `try_*`
//! variants here instead. Each one validates its arguments before looking at
//! the receiver, and reports an absent argument as a [`PreconditionViolation`]
//! without invoking anything.
//!
//! # Example
//!
//! ```rust
//! use fallible::{Either, PreconditionViolation};
//!
//! let handler: Option<fn(i32) -> i32> = None;
//! let result = Either::<&str, i32>::success(1).try_map(handler);
//!
//! assert_eq!(
//!     result,
//!     Err(PreconditionViolation::MissingFunction { operation: "map" })
//! );
//! ```

use crate::core::Either;

pub mod error;

pub use error::PreconditionViolation;

fn require_fn<F>(f: Option<F>, operation: &'static str) -> Result<F, PreconditionViolation> {
    f.ok_or(PreconditionViolation::MissingFunction { operation })
}

impl<E, A> Either<E, A> {
    /// Checked [`from_optional`](Self::from_optional).
    ///
    /// Both the container and the fallback descriptor must be present. The
    /// value inside the container may still be absent.
    pub fn try_from_optional(
        optional: Option<Option<A>>,
        if_absent: Option<E>,
    ) -> Result<Self, PreconditionViolation> {
        let optional = optional.ok_or(PreconditionViolation::MissingArgument {
            operation: "from_optional",
            argument: "optional",
        })?;
        let if_absent = if_absent.ok_or(PreconditionViolation::MissingArgument {
            operation: "from_optional",
            argument: "if_absent",
        })?;
        Ok(Self::from_optional(optional, if_absent))
    }

    /// Checked [`map`](Self::map).
    pub fn try_map<B, F>(self, f: Option<F>) -> Result<Either<E, B>, PreconditionViolation>
    where
        F: FnOnce(A) -> B,
    {
        let f = require_fn(f, "map")?;
        Ok(self.map(f))
    }

    /// Checked [`map_failure`](Self::map_failure).
    pub fn try_map_failure<F2, F>(
        self,
        f: Option<F>,
    ) -> Result<Either<F2, A>, PreconditionViolation>
    where
        F: FnOnce(E) -> F2,
    {
        let f = require_fn(f, "map_failure")?;
        Ok(self.map_failure(f))
    }

    /// Checked [`flat_map`](Self::flat_map).
    pub fn try_flat_map<B, F>(self, f: Option<F>) -> Result<Either<E, B>, PreconditionViolation>
    where
        F: FnOnce(A) -> Either<E, B>,
    {
        let f = require_fn(f, "flat_map")?;
        Ok(self.flat_map(f))
    }

    /// Checked [`or_else`](Self::or_else).
    ///
    /// The supplier slot is validated even on the success path.
    pub fn try_or_else<F>(self, supplier: Option<F>) -> Result<Either<E, A>, PreconditionViolation>
    where
        F: FnOnce() -> Either<E, A>,
    {
        let supplier = require_fn(supplier, "or_else")?;
        Ok(self.or_else(supplier))
    }

    /// Checked [`if_present`](Self::if_present).
    pub fn try_if_present<F>(&self, consumer: Option<F>) -> Result<(), PreconditionViolation>
    where
        F: FnOnce(&A),
    {
        let consumer = require_fn(consumer, "if_present")?;
        self.if_present(consumer);
        Ok(())
    }
}
