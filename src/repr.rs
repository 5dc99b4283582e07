//! Call-site rendering of arguments and results.
//!
//! [`Repr`] renders a value the way it would be written at a call site:
//! strings quoted, tuples in parentheses with a trailing comma for a single
//! element, JSON values as JSON. [`Trace`](crate::advice::Trace) uses it for
//! its records, so `say("Jane")` logs `("Jane",)` and a JSON string result
//! logs `"Jane: hi"` rather than `String("Jane: hi")`.
//!
//! Implement it for your own types to trace operations that take or return
//! them:
//!
//! ```
//! use std::fmt;
//! use callwrap::{repr, Repr};
//!
//! struct Port(u16);
//!
//! impl Repr for Port {
//!     fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "Port({})", self.0)
//!     }
//! }
//!
//! assert_eq!(repr(&(Port(8080),)).to_string(), "(Port(8080),)");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

use crate::args::Args;

/// Value that can be rendered as it would appear at a call site.
pub trait Repr {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter displaying a [`Repr`] value.
pub struct Rendered<'a, T: ?Sized>(&'a T);

impl<T: Repr + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.repr(f)
    }
}

/// Render `value` through its [`Repr`] impl.
pub fn repr<T: Repr + ?Sized>(value: &T) -> Rendered<'_, T> {
    Rendered(value)
}

// Scalars and strings already render as literals through Debug.
macro_rules! impl_repr_via_debug {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Repr for $ty {
                fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Debug::fmt(self, f)
                }
            }
        )*
    };
}

impl_repr_via_debug!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, (),
);

impl Repr for Cow<'_, str> {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().repr(f)
    }
}

impl Repr for Value {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Repr for Args {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_repr_via_deref {
    ($($ptr:ident),*) => {
        $(
            impl<T: Repr + ?Sized> Repr for $ptr<T> {
                fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).repr(f)
                }
            }
        )*
    };
}

impl_repr_via_deref!(Box, Rc, Arc);

impl<T: Repr + ?Sized> Repr for &T {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).repr(f)
    }
}

impl<T: Repr> Repr for Option<T> {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => write!(f, "Some({})", repr(value)),
            None => f.write_str("None"),
        }
    }
}

impl<T: Repr> Repr for [T] {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            value.repr(f)?;
        }
        f.write_str("]")
    }
}

impl<T: Repr> Repr for Vec<T> {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().repr(f)
    }
}

impl<T: Repr, const N: usize> Repr for [T; N] {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().repr(f)
    }
}

impl<A: Repr> Repr for (A,) {
    fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},)", repr(&self.0))
    }
}

macro_rules! impl_repr_for_tuple {
    ($first:ident $(, $rest:ident)+) => {
        impl<$first: Repr $(, $rest: Repr)+> Repr for ($first, $($rest,)+) {
            #[allow(non_snake_case)]
            fn repr(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let ($first, $($rest,)+) = self;
                write!(f, "({}", repr($first))?;
                $(write!(f, ", {}", repr($rest))?;)+
                f.write_str(")")
            }
        }
    };
}

impl_repr_for_tuple!(A, B);
impl_repr_for_tuple!(A, B, C);
impl_repr_for_tuple!(A, B, C, D);
impl_repr_for_tuple!(A, B, C, D, E);
impl_repr_for_tuple!(A, B, C, D, E, F);
impl_repr_for_tuple!(A, B, C, D, E, F, G);
impl_repr_for_tuple!(A, B, C, D, E, F, G, H);
