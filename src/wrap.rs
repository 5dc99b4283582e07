//! The callable wrapper: before-logic, the wrapped call, after-logic.
//!
//! [`wrap`] builds a one-off wrapper around a single operation; [`Hooks`] is
//! the same thing as a reusable [`Layer`].
//!
//! Call sequence of a [`Wrapped`] operation:
//!
//! 1. The before-hook inspects the input. If it fails, the call stops and
//!    the failure is attributed to the wrapper.
//! 2. The wrapped operation runs with the unchanged input. Its failure is
//!    returned as is; the after-hook does not run.
//! 3. The after-hook inspects the result and may return a replacement.

use std::fmt;

use crate::error::{BoxError, CallError, Result, Stage};
use crate::layer::Layer;
use crate::metadata::Metadata;
use crate::operation::{Describe, Operation};

/// Default wrapper name used in error attribution.
pub const DEFAULT_WRAPPER_NAME: &str = "wrap";

/// Hook run before the wrapped operation.
pub trait BeforeHook<I> {
    fn before(&self, input: &I) -> std::result::Result<(), BoxError>;
}

/// Hook run after the wrapped operation returned successfully.
///
/// `Ok(Some(value))` replaces the result, `Ok(None)` keeps it.
pub trait AfterHook<O> {
    fn after(&self, output: &O) -> std::result::Result<Option<O>, BoxError>;
}

/// Hook that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Noop;

impl<I> BeforeHook<I> for Noop {
    fn before(&self, _input: &I) -> std::result::Result<(), BoxError> {
        Ok(())
    }
}

impl<O> AfterHook<O> for Noop {
    fn after(&self, _output: &O) -> std::result::Result<Option<O>, BoxError> {
        Ok(None)
    }
}

impl<I, F> BeforeHook<I> for F
where
    F: Fn(&I) -> std::result::Result<(), BoxError>,
{
    fn before(&self, input: &I) -> std::result::Result<(), BoxError> {
        self(input)
    }
}

impl<O, F> AfterHook<O> for F
where
    F: Fn(&O) -> std::result::Result<Option<O>, BoxError>,
{
    fn after(&self, output: &O) -> std::result::Result<Option<O>, BoxError> {
        self(output)
    }
}

/// An operation wrapped with before and after hooks.
#[derive(Clone)]
pub struct Wrapped<Op, Pre = Noop, Post = Noop> {
    inner: Op,
    name: String,
    pre: Pre,
    post: Post,
}

/// Wrap `operation` with no hooks.
///
/// Without hooks the result behaves exactly like `operation`; add logic with
/// [`Wrapped::before`] and [`Wrapped::after`].
///
/// ```
/// use callwrap::{infallible, wrap, Describe, Operation};
///
/// let greet = infallible("greet", |()| "Hello!".to_string());
/// let loud = wrap(greet).after(|s: &String| Ok(Some(s.to_uppercase())));
///
/// assert_eq!(loud.call(()).unwrap(), "HELLO!");
/// assert_eq!(loud.metadata().name(), "greet");
/// ```
pub fn wrap<Op>(operation: Op) -> Wrapped<Op> {
    Wrapped {
        inner: operation,
        name: DEFAULT_WRAPPER_NAME.to_string(),
        pre: Noop,
        post: Noop,
    }
}

impl<Op, Pre, Post> Wrapped<Op, Pre, Post> {
    /// Name this wrapper for error attribution.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the before-hook.
    pub fn before<P>(self, pre: P) -> Wrapped<Op, P, Post> {
        Wrapped {
            inner: self.inner,
            name: self.name,
            pre,
            post: self.post,
        }
    }

    /// Replace the after-hook.
    pub fn after<P>(self, post: P) -> Wrapped<Op, Pre, P> {
        Wrapped {
            inner: self.inner,
            name: self.name,
            pre: self.pre,
            post,
        }
    }

    /// Name of this wrapper.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<Op: Describe, Pre, Post> Describe for Wrapped<Op, Pre, Post> {
    fn metadata(&self) -> &Metadata {
        self.inner.metadata()
    }
}

impl<I, Op, Pre, Post> Operation<I> for Wrapped<Op, Pre, Post>
where
    Op: Operation<I>,
    Pre: BeforeHook<I>,
    Post: AfterHook<Op::Output>,
{
    type Output = Op::Output;

    fn call(&self, input: I) -> Result<Self::Output> {
        self.pre
            .before(&input)
            .map_err(|source| CallError::hook(&self.name, Stage::Before, source))?;

        let output = self.inner.call(input)?;

        let replacement = self
            .post
            .after(&output)
            .map_err(|source| CallError::hook(&self.name, Stage::After, source))?;

        Ok(replacement.unwrap_or(output))
    }
}

impl<Op: fmt::Debug, Pre, Post> fmt::Debug for Wrapped<Op, Pre, Post> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("name", &self.name)
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Reusable before/after hooks, applicable to any number of operations.
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use callwrap::{infallible, Hooks, Operation, OperationExt};
///
/// let calls = Arc::new(Mutex::new(0));
/// let counted = {
///     let calls = calls.clone();
///     Hooks::new("count").before(move |_: &()| {
///         *calls.lock().unwrap() += 1;
///         Ok(())
///     })
/// };
///
/// let greet = infallible("greet", |()| "Hello!".to_string()).wrap_with(&counted);
/// greet.call(()).unwrap();
/// greet.call(()).unwrap();
/// assert_eq!(*calls.lock().unwrap(), 2);
/// ```
#[derive(Clone)]
pub struct Hooks<Pre = Noop, Post = Noop> {
    name: String,
    pre: Pre,
    post: Post,
}

impl Hooks {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pre: Noop,
            post: Noop,
        }
    }
}

impl<Pre, Post> Hooks<Pre, Post> {
    pub fn before<P>(self, pre: P) -> Hooks<P, Post> {
        Hooks {
            name: self.name,
            pre,
            post: self.post,
        }
    }

    pub fn after<P>(self, post: P) -> Hooks<Pre, P> {
        Hooks {
            name: self.name,
            pre: self.pre,
            post,
        }
    }
}

impl<Op, Pre: Clone, Post: Clone> Layer<Op> for Hooks<Pre, Post> {
    type Operation = Wrapped<Op, Pre, Post>;

    fn layer(&self, inner: Op) -> Self::Operation {
        Wrapped {
            inner,
            name: self.name.clone(),
            pre: self.pre.clone(),
            post: self.post.clone(),
        }
    }
}

impl<Pre, Post> fmt::Debug for Hooks<Pre, Post> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
