//! Cucumber step definitions for interface tests.

pub mod forwarding;
pub mod wrapping;
