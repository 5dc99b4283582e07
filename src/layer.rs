//! Layers: reusable wrappers and their composition.
//!
//! A [`Layer`] turns one operation into another. Layers compose by nesting;
//! the resulting operation type is fully monomorphized.
//!
//! ```
//! use callwrap::advice::{emphasis, strong};
//! use callwrap::{infallible, Composition, Operation};
//!
//! // Listed outermost first, like stacked decorators.
//! let greet = Composition::new()
//!     .push(strong())
//!     .push(emphasis())
//!     .apply(infallible("greet", |()| "Hello!".to_string()));
//!
//! assert_eq!(greet.call(()).unwrap(), "<strong><em>Hello!</em></strong>");
//! ```

use std::fmt;

/// Transforms an operation into a wrapped operation.
pub trait Layer<Op> {
    /// The wrapped operation produced by this layer.
    type Operation;

    /// Wrap `inner`, producing a new operation with added behavior.
    fn layer(&self, inner: Op) -> Self::Operation;
}

impl<Op, L: Layer<Op> + ?Sized> Layer<Op> for &L {
    type Operation = L::Operation;

    fn layer(&self, inner: Op) -> Self::Operation {
        (**self).layer(inner)
    }
}

/// Layer that returns the operation unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<Op> Layer<Op> for Identity {
    type Operation = Op;

    fn layer(&self, inner: Op) -> Op {
        inner
    }
}

/// Two layers applied in sequence: `inner` first, then `outer`.
#[derive(Debug, Clone, Default)]
pub struct Stack<Inner, Outer> {
    inner: Inner,
    outer: Outer,
}

impl<Inner, Outer> Stack<Inner, Outer> {
    pub fn new(inner: Inner, outer: Outer) -> Self {
        Self { inner, outer }
    }
}

impl<Op, Inner, Outer> Layer<Op> for Stack<Inner, Outer>
where
    Inner: Layer<Op>,
    Outer: Layer<Inner::Operation>,
{
    type Operation = Outer::Operation;

    fn layer(&self, op: Op) -> Self::Operation {
        self.outer.layer(self.inner.layer(op))
    }
}

/// Builder for an ordered sequence of layers.
///
/// Layers are pushed outermost first: `push(a).push(b)` applied to `f`
/// yields `a(b(f))`, so `a` runs its before-logic first and its after-logic
/// last.
#[derive(Clone, Default)]
pub struct Composition<L> {
    layer: L,
}

impl Composition<Identity> {
    /// An empty composition; applying it returns the operation unchanged.
    pub fn new() -> Self {
        Self { layer: Identity }
    }
}

impl<L> Composition<L> {
    /// Add a layer inside all layers pushed so far.
    pub fn push<T>(self, layer: T) -> Composition<Stack<T, L>> {
        Composition {
            layer: Stack::new(layer, self.layer),
        }
    }

    /// Wrap `op` in every layer of this composition.
    pub fn apply<Op>(&self, op: Op) -> L::Operation
    where
        L: Layer<Op>,
    {
        self.layer.layer(op)
    }
}

impl<Op, L: Layer<Op>> Layer<Op> for Composition<L> {
    type Operation = L::Operation;

    fn layer(&self, inner: Op) -> Self::Operation {
        self.layer.layer(inner)
    }
}

impl<L: fmt::Debug> fmt::Debug for Composition<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Composition").field(&self.layer).finish()
    }
}

/// Layer defined by a function from operation to operation.
#[derive(Clone, Copy)]
pub struct LayerFn<F> {
    f: F,
}

/// Write a wrapper as a plain function taking the operation to wrap.
///
/// ```
/// use callwrap::{infallible, layer_fn, wrap, Operation, OperationExt};
///
/// let shout = layer_fn(|op| wrap(op).after(|s: &String| Ok(Some(format!("{s}!")))));
/// let greet = infallible("greet", |()| "Hello".to_string()).wrap_with(shout);
///
/// assert_eq!(greet.call(()).unwrap(), "Hello!");
/// ```
pub fn layer_fn<F>(f: F) -> LayerFn<F> {
    LayerFn { f }
}

impl<F, Op, Out> Layer<Op> for LayerFn<F>
where
    F: Fn(Op) -> Out,
{
    type Operation = Out;

    fn layer(&self, inner: Op) -> Out {
        (self.f)(inner)
    }
}

impl<F> fmt::Debug for LayerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerFn").finish_non_exhaustive()
    }
}
