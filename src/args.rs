//! Dynamic call arguments.
//!
//! [`Args`] carries an ordered list of positional values and a map of named
//! values, for operations that accept any call shape. Values are JSON values;
//! operations extract typed arguments with [`Args::get`] and
//! [`Args::get_named`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Errors raised while extracting a typed argument.
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    /// No positional argument at this index.
    #[error("missing positional argument {index}")]
    Missing { index: usize },

    /// No named argument with this key.
    #[error("missing named argument '{key}'")]
    MissingNamed { key: String },

    /// The argument is present but has the wrong shape.
    #[error("invalid argument {argument}: {source}")]
    Invalid {
        argument: String,
        source: serde_json::Error,
    },
}

/// Positional and named call arguments.
#[derive(Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: Map<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument, replacing any previous value for `key`.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn named(&self) -> &Map<String, Value> {
        &self.named
    }

    /// Total number of arguments, positional and named.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Deserialize the positional argument at `index`.
    pub fn get<T: DeserializeOwned>(&self, index: usize) -> Result<T, ArgsError> {
        let value = self
            .positional
            .get(index)
            .ok_or(ArgsError::Missing { index })?;
        serde_json::from_value(value.clone()).map_err(|source| ArgsError::Invalid {
            argument: index.to_string(),
            source,
        })
    }

    /// Deserialize the named argument `key`.
    pub fn get_named<T: DeserializeOwned>(&self, key: &str) -> Result<T, ArgsError> {
        self.get_named_opt(key)?
            .ok_or_else(|| ArgsError::MissingNamed {
                key: key.to_string(),
            })
    }

    /// Deserialize the named argument `key`, or `None` if it was not passed.
    pub fn get_named_opt<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ArgsError> {
        self.named
            .get(key)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|source| ArgsError::Invalid {
                    argument: format!("'{key}'"),
                    source,
                })
            })
            .transpose()
    }
}

impl<V: Into<Value>> FromIterator<V> for Args {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            named: Map::new(),
        }
    }
}

/// Renders as `("Jane", "Hello, World"), {"loud": true}`; a lone positional
/// argument keeps its trailing comma, `("Jane",), {}`.
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.positional.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        if self.positional.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str("), {")?;
        for (i, (key, value)) in self.named.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{key}\": {value}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_builder_and_accessors() {
        let args = Args::new().arg("Jane").arg(3).kwarg("loud", true);

        assert_eq!(args.len(), 3);
        assert!(!args.is_empty());
        assert_eq!(args.positional(), [json!("Jane"), json!(3)]);
        assert_eq!(args.named().get("loud"), Some(&json!(true)));
    }

    #[test]
    fn test_typed_extraction() {
        let args = Args::new().arg("Jane").arg(3).kwarg("loud", true);

        assert_eq!(args.get::<String>(0).unwrap(), "Jane");
        assert_eq!(args.get::<u32>(1).unwrap(), 3);
        assert!(args.get_named::<bool>("loud").unwrap());
        assert_eq!(args.get_named_opt::<bool>("quiet").unwrap(), None);
    }

    #[test]
    fn test_extraction_errors() {
        let args = Args::new().arg("Jane");

        assert!(matches!(
            args.get::<String>(1),
            Err(ArgsError::Missing { index: 1 })
        ));
        assert!(matches!(
            args.get_named::<String>("line"),
            Err(ArgsError::MissingNamed { .. })
        ));

        let err = args.get::<u32>(0).unwrap_err();
        assert!(err.to_string().starts_with("invalid argument 0:"));
    }

    #[test]
    fn test_display_matches_call_shape() {
        let args: Args = ["Jane", "Hello, World"].into_iter().collect();
        assert_eq!(args.to_string(), r#"("Jane", "Hello, World"), {}"#);
        assert_eq!(format!("{args:?}"), args.to_string());

        let named = Args::new().arg(1).kwarg("sep", "-");
        assert_eq!(named.to_string(), r#"(1,), {"sep": "-"}"#);

        let single = Args::new().arg("Jane");
        assert_eq!(single.to_string(), r#"("Jane",), {}"#);

        assert_eq!(Args::new().to_string(), "(), {}");
    }
}
