//! Uppercase result advice.

use crate::error::Result;
use crate::layer::Layer;
use crate::metadata::Metadata;
use crate::operation::{Describe, Operation};

/// Layer that converts the wrapped operation's string result to uppercase.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl<Op> Layer<Op> for Uppercase {
    type Operation = Uppercased<Op>;

    fn layer(&self, inner: Op) -> Self::Operation {
        Uppercased { inner }
    }
}

/// Operation produced by [`Uppercase`].
#[derive(Debug, Clone)]
pub struct Uppercased<Op> {
    inner: Op,
}

impl<Op: Describe> Describe for Uppercased<Op> {
    fn metadata(&self) -> &Metadata {
        self.inner.metadata()
    }
}

impl<I, Op> Operation<I> for Uppercased<Op>
where
    Op: Operation<I>,
    Op::Output: AsRef<str>,
{
    type Output = String;

    fn call(&self, input: I) -> Result<String> {
        let original = self.inner.call(input)?;
        Ok(original.as_ref().to_uppercase())
    }
}
