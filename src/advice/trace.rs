//! Call tracing advice.
//!
//! Emits a record before each call with the operation's name and arguments,
//! and one after it with the returned value or the failure. Records go
//! through `tracing`; installing a subscriber is up to the application.
//! Arguments and results are rendered with [`Repr`].

use std::fmt;

use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::config::{TraceConfig, TraceLevel};
use crate::error::Result;
use crate::layer::Layer;
use crate::metadata::Metadata;
use crate::operation::{Describe, Operation};
use crate::repr::{repr, Repr};

/// Layer that traces every call of the wrapped operation.
///
/// Output for `say("Jane", "Hello, World")`:
///
/// ```text
/// TRACE: calling say() with ("Jane", "Hello, World")
/// TRACE: say() returned "Jane: Hello, World"
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trace {
    config: TraceConfig,
}

impl Trace {
    /// Trace at the default level, logging arguments and results.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &TraceConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }
}

impl<Op> Layer<Op> for Trace {
    type Operation = Traced<Op>;

    fn layer(&self, inner: Op) -> Self::Operation {
        Traced {
            inner,
            config: self.config.clone(),
        }
    }
}

/// Operation produced by [`Trace`].
#[derive(Debug, Clone)]
pub struct Traced<Op> {
    inner: Op,
    config: TraceConfig,
}

impl<Op: Describe> Describe for Traced<Op> {
    fn metadata(&self) -> &Metadata {
        self.inner.metadata()
    }
}

impl<I, Op> Operation<I> for Traced<Op>
where
    I: Repr,
    Op: Operation<I>,
    Op::Output: Repr,
{
    type Output = Op::Output;

    fn call(&self, input: I) -> Result<Self::Output> {
        let name = self.inner.metadata().name();
        let level = self.config.level;
        let enabled = Level::from(level) <= LevelFilter::current();
        let _span = tracing::debug_span!("operation.call", operation = %name).entered();

        if enabled {
            if self.config.log_arguments {
                emit(level, format_args!("TRACE: calling {name}() with {}", repr(&input)));
            } else {
                emit(level, format_args!("TRACE: calling {name}()"));
            }
        }

        let result = self.inner.call(input);

        match &result {
            Ok(_) if !enabled => {}
            Ok(output) if self.config.log_result => {
                emit(level, format_args!("TRACE: {name}() returned {}", repr(output)));
            }
            Ok(_) => emit(level, format_args!("TRACE: {name}() returned")),
            Err(e) => tracing::warn!(operation = %name, error = %e, "TRACE: {name}() failed"),
        }

        result
    }
}

fn emit(level: TraceLevel, message: fmt::Arguments<'_>) {
    match level {
        TraceLevel::Trace => tracing::trace!("{}", message),
        TraceLevel::Debug => tracing::debug!("{}", message),
        TraceLevel::Info => tracing::info!("{}", message),
        TraceLevel::Warn => tracing::warn!("{}", message),
        TraceLevel::Error => tracing::error!("{}", message),
    }
}
