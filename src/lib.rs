//! Callwrap - call wrapping for Rust
//!
//! Wrap an operation with logic that runs before and after it, without
//! changing how the operation is called or who it says it is.
//!
//! - [`Operation`] is a named unit of behavior; [`Describe`] exposes its
//!   [`Metadata`].
//! - [`wrap`] adds before/after hooks to a single operation; [`Hooks`] and
//!   the [`advice`] types are reusable [`Layer`]s.
//! - [`Composition`] and [`OperationExt::wrap_with`] stack layers.
//! - [`Args`] carries arbitrary positional and named arguments; [`Repr`]
//!   renders arguments and results the way a call site would show them.
//! - [`operation`](macro@operation) turns a plain `fn` into an operation.
//!
//! ```
//! use callwrap::advice::{emphasis, strong};
//! use callwrap::{infallible, Describe, Operation, OperationExt};
//!
//! let greet = infallible("greet", |()| "Hello!".to_string())
//!     .wrap_with(emphasis())
//!     .wrap_with(strong());
//!
//! assert_eq!(greet.call(()).unwrap(), "<strong><em>Hello!</em></strong>");
//! assert_eq!(greet.metadata().name(), "greet");
//! ```

pub mod advice;
pub mod args;
pub mod config;
pub mod error;
pub mod layer;
pub mod metadata;
pub mod operation;
pub mod repr;
pub mod utils;
pub mod wrap;

pub use args::{Args, ArgsError};
pub use error::{BoxError, CallError, Result, Stage};
pub use layer::{layer_fn, Composition, Identity, Layer, LayerFn, Stack};
pub use metadata::Metadata;
pub use operation::{
    infallible, operation, BoxOperation, Describe, FnOperation, Operation, OperationExt,
};
pub use repr::{repr, Rendered, Repr};
pub use wrap::{wrap, AfterHook, BeforeHook, Hooks, Noop, Wrapped};

pub use callwrap_macros::operation;
