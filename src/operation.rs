//! Operations: named units of behavior.
//!
//! An [`Operation`] takes one input value and produces one output value or a
//! [`CallError`]. Fixed signatures use a tuple as the input (`()` for a
//! nullary operation, `(String, String)` for `say(name, line)`), while
//! operations that accept arbitrary call shapes take [`Args`](crate::Args).
//!
//! Identity lives on the [`Describe`] supertrait so that it can be queried
//! without naming the input type.

use std::sync::Arc;

use crate::error::{BoxError, CallError, Result};
use crate::layer::Layer;
use crate::metadata::Metadata;

/// Exposes the identity of an operation.
pub trait Describe {
    /// Metadata of this operation. Wrappers return the wrapped operation's.
    fn metadata(&self) -> &Metadata;
}

/// A callable unit of behavior accepting input `I`.
pub trait Operation<I>: Describe {
    /// Value produced by a successful call.
    type Output;

    /// Invoke the operation.
    fn call(&self, input: I) -> Result<Self::Output>;
}

/// Type-erased operation, shareable across threads.
pub type BoxOperation<I, O> = Box<dyn Operation<I, Output = O> + Send + Sync>;

impl<T: Describe + ?Sized> Describe for &T {
    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }
}

impl<I, T: Operation<I> + ?Sized> Operation<I> for &T {
    type Output = T::Output;

    fn call(&self, input: I) -> Result<Self::Output> {
        (**self).call(input)
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }
}

impl<I, T: Operation<I> + ?Sized> Operation<I> for Box<T> {
    type Output = T::Output;

    fn call(&self, input: I) -> Result<Self::Output> {
        (**self).call(input)
    }
}

impl<T: Describe + ?Sized> Describe for Arc<T> {
    fn metadata(&self) -> &Metadata {
        (**self).metadata()
    }
}

impl<I, T: Operation<I> + ?Sized> Operation<I> for Arc<T> {
    type Output = T::Output;

    fn call(&self, input: I) -> Result<Self::Output> {
        (**self).call(input)
    }
}

/// Operation backed by a closure returning `Result<O, E>`.
///
/// Errors from the closure are attributed to this operation's name.
#[derive(Clone)]
pub struct FnOperation<F> {
    metadata: Metadata,
    f: F,
}

impl<F> FnOperation<F> {
    pub fn new(metadata: impl Into<Metadata>, f: F) -> Self {
        Self {
            metadata: metadata.into(),
            f,
        }
    }
}

impl<F> std::fmt::Debug for FnOperation<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnOperation")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

impl<F> Describe for FnOperation<F> {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

impl<I, O, E, F> Operation<I> for FnOperation<F>
where
    F: Fn(I) -> std::result::Result<O, E>,
    E: Into<BoxError>,
{
    type Output = O;

    fn call(&self, input: I) -> Result<O> {
        (self.f)(input).map_err(|e| CallError::operation(self.metadata.name(), e))
    }
}

/// Build an operation from a fallible closure.
///
/// # Example
///
/// ```
/// use callwrap::{operation, Operation};
///
/// let parse = operation("parse", |(s,): (&str,)| s.parse::<i64>());
/// assert_eq!(parse.call(("42",)).unwrap(), 42);
/// assert_eq!(parse.call(("x",)).unwrap_err().origin(), "parse");
/// ```
pub fn operation<I, O, E, F>(metadata: impl Into<Metadata>, f: F) -> FnOperation<F>
where
    F: Fn(I) -> std::result::Result<O, E>,
    E: Into<BoxError>,
{
    FnOperation::new(metadata, f)
}

/// Build an operation from a closure that cannot fail.
///
/// ```
/// use callwrap::{infallible, Operation};
///
/// let greet = infallible("greet", |()| "Hello!".to_string());
/// assert_eq!(greet.call(()).unwrap(), "Hello!");
/// ```
pub fn infallible<I, O, F>(
    metadata: impl Into<Metadata>,
    f: F,
) -> FnOperation<impl Fn(I) -> std::result::Result<O, std::convert::Infallible>>
where
    F: Fn(I) -> O,
{
    FnOperation::new(
        metadata,
        move |input: I| -> std::result::Result<O, std::convert::Infallible> { Ok(f(input)) },
    )
}

/// Combinators available on every operation.
pub trait OperationExt: Sized {
    /// Apply `layer` to this operation, returning the wrapped operation.
    fn wrap_with<L: Layer<Self>>(self, layer: L) -> L::Operation {
        layer.layer(self)
    }

    /// Erase the concrete type of this operation.
    fn boxed<I>(self) -> BoxOperation<I, <Self as Operation<I>>::Output>
    where
        Self: Operation<I> + Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: Describe> OperationExt for T {}

/// Conversion of a fallible function's return value into a call result.
///
/// Used by `#[operation(fallible)]`; not meant to be implemented by hand.
#[doc(hidden)]
pub trait Fallible {
    type Ok;

    fn into_call_result(self, operation: &str) -> Result<Self::Ok>;
}

impl<T, E: Into<BoxError>> Fallible for std::result::Result<T, E> {
    type Ok = T;

    fn into_call_result(self, operation: &str) -> Result<T> {
        self.map_err(|e| CallError::operation(operation, e))
    }
}
