//! Failure recovery advice.
//!
//! The only advice that catches failures. Everything else lets them pass.

use std::fmt;

use tracing::debug;

use crate::error::{CallError, Result};
use crate::layer::Layer;
use crate::metadata::Metadata;
use crate::operation::{Describe, Operation};

/// Layer that replaces failures with a fallback value.
///
/// The handler sees every failure of the wrapped operation. Returning
/// `Some(value)` turns the failure into a successful result; returning
/// `None` lets the original failure through unchanged.
///
/// ```
/// use callwrap::advice::Recover;
/// use callwrap::{operation, Operation, OperationExt};
///
/// let fetch = operation("fetch", |()| Err::<String, _>("timed out"))
///     .wrap_with(Recover::new(|_: &callwrap::CallError| Some("cached".to_string())));
///
/// assert_eq!(fetch.call(()).unwrap(), "cached");
/// ```
#[derive(Clone)]
pub struct Recover<F> {
    handler: F,
}

impl<F> Recover<F> {
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F> fmt::Debug for Recover<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recover").finish_non_exhaustive()
    }
}

impl<Op, F: Clone> Layer<Op> for Recover<F> {
    type Operation = Recovered<Op, F>;

    fn layer(&self, inner: Op) -> Self::Operation {
        Recovered {
            inner,
            handler: self.handler.clone(),
        }
    }
}

/// Operation produced by [`Recover`].
#[derive(Clone)]
pub struct Recovered<Op, F> {
    inner: Op,
    handler: F,
}

impl<Op: Describe, F> Describe for Recovered<Op, F> {
    fn metadata(&self) -> &Metadata {
        self.inner.metadata()
    }
}

impl<I, Op, F> Operation<I> for Recovered<Op, F>
where
    Op: Operation<I>,
    F: Fn(&CallError) -> Option<Op::Output>,
{
    type Output = Op::Output;

    fn call(&self, input: I) -> Result<Self::Output> {
        match self.inner.call(input) {
            Ok(output) => Ok(output),
            Err(err) => match (self.handler)(&err) {
                Some(fallback) => {
                    debug!(origin = err.origin(), error = %err, "Recovered from failure");
                    Ok(fallback)
                }
                None => Err(err),
            },
        }
    }
}

impl<Op: fmt::Debug, F> fmt::Debug for Recovered<Op, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recovered")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}
