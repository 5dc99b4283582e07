//! HTML-style tag advice.

use std::borrow::Cow;

use crate::error::Result;
use crate::layer::Layer;
use crate::metadata::Metadata;
use crate::operation::{Describe, Operation};

/// Layer that encloses a string result in `<tag>` and `</tag>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: Cow<'static, str>,
}

impl Tag {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// `<em>` tag layer.
pub fn emphasis() -> Tag {
    Tag::new("em")
}

/// `<strong>` tag layer.
pub fn strong() -> Tag {
    Tag::new("strong")
}

impl<Op> Layer<Op> for Tag {
    type Operation = Tagged<Op>;

    fn layer(&self, inner: Op) -> Self::Operation {
        Tagged {
            inner,
            tag: self.clone(),
        }
    }
}

/// Operation produced by [`Tag`].
#[derive(Debug, Clone)]
pub struct Tagged<Op> {
    inner: Op,
    tag: Tag,
}

impl<Op: Describe> Describe for Tagged<Op> {
    fn metadata(&self) -> &Metadata {
        self.inner.metadata()
    }
}

impl<I, Op> Operation<I> for Tagged<Op>
where
    Op: Operation<I>,
    Op::Output: AsRef<str>,
{
    type Output = String;

    fn call(&self, input: I) -> Result<String> {
        let content = self.inner.call(input)?;
        let tag = self.tag.name();
        Ok(format!("<{tag}>{}</{tag}>", content.as_ref()))
    }
}
