//! The result type and its combinators.
//!
//! - `either`: the two-variant type, constructors and queries
//! - `combinators`: map, flat_map, fallbacks and consumers
//!
//! Nothing in this module performs side effects of its own. Any effect
//! comes from the closures callers pass in.

mod combinators;
mod either;

pub use either::Either;
