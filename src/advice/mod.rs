//! Ready-made advice for cross-cutting concerns.
//!
//! Each advice type is a [`Layer`](crate::Layer) that wraps an operation to
//! add one orthogonal behavior without touching the operation itself.
//!
//! # Architecture
//!
//! Advice is applied at composition time, not in implementations:
//!
//! ```
//! use callwrap::advice::{Trace, Uppercase};
//! use callwrap::{infallible, Operation, OperationExt};
//!
//! // Core implementation - plain behavior
//! let greet = infallible("greet", |()| "Hello!".to_string());
//!
//! // Apply advice layers
//! let greet = greet.wrap_with(Uppercase).wrap_with(Trace::new());
//!
//! // Use as normal - advice is transparent to the caller
//! assert_eq!(greet.call(()).unwrap(), "HELLO!");
//! ```
//!
//! # Available Advice
//!
//! - [`Uppercase`] - Uppercases a string result
//! - [`Tag`] - Encloses a string result in an HTML-style tag ([`emphasis`], [`strong`])
//! - [`Trace`] - Emits tracing records before and after each call
//! - [`Recover`] - Replaces selected failures with a fallback value

mod recover;
mod tag;
mod trace;
mod uppercase;

pub use recover::{Recover, Recovered};
pub use tag::{emphasis, strong, Tag, Tagged};
pub use trace::{Trace, Traced};
pub use uppercase::{Uppercase, Uppercased};
