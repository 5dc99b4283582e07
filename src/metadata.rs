//! Operation identity.
//!
//! Wrapping an operation must not hide who it is. Every operation carries a
//! [`Metadata`] value, and every wrapper reports the metadata of the
//! operation it wraps rather than its own.

use std::fmt;

/// Name, description and parameter list of an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Metadata {
    name: String,
    description: String,
    parameters: Vec<String>,
}

impl Metadata {
    /// Metadata with the given name and no description or parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            parameters: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_parameters<P, S>(mut self, parameters: P) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Declared operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description; empty when none was declared.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declared parameter names, in call order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}

impl From<&str> for Metadata {
    fn from(name: &str) -> Self {
        Metadata::new(name)
    }
}

impl From<String> for Metadata {
    fn from(name: String) -> Self {
        Metadata::new(name)
    }
}

/// Renders as a signature, e.g. `say(name, line)`.
impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parameters.join(", "))
    }
}
