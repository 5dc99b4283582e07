//! callwrap-walkthrough: wrapping demonstration
//!
//! Walks through the building blocks one at a time and prints each result:
//!
//! ```text
//! greet()                      -> Hello!
//! uppercase(greet)()           -> HELLO!
//! strong(emphasis(greet))()    -> <strong><em>Hello!</em></strong>
//! trace(say)("Jane", "Hello, World")
//!                              -> Jane: Hello, World
//! ```
//!
//! The trace records appear on the log output.
//!
//! ## Configuration
//! - CALLWRAP_LOG: Log filter (default: info)
//! - CALLWRAP_CONFIG: Path to a YAML configuration file (optional)
//! - CALLWRAP__TRACE__LEVEL, CALLWRAP__TRACE__LOG_ARGUMENTS,
//!   CALLWRAP__TRACE__LOG_RESULT: trace advice overrides

use tracing::info;

use callwrap::advice::{emphasis, strong, Trace, Uppercase};
use callwrap::config::Config;
use callwrap::utils::bootstrap::init_tracing;
use callwrap::{operation, Composition, Describe, Operation, OperationExt};

/// Return a friendly greeting.
#[operation]
fn greet() -> String {
    "Hello!".to_string()
}

/// Attribute a line of dialogue to a speaker.
#[operation]
fn say(name: String, line: String) -> String {
    format!("{name}: {line}")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = Config::load(None)?;
    info!(trace_level = ?config.trace.level, "callwrap-walkthrough started");

    println!("greet()                   -> {}", greet());

    let uppercase = Greet.wrap_with(Uppercase);
    println!("uppercase(greet)()        -> {}", uppercase.call(())?);

    let stacked = Composition::new()
        .push(strong())
        .push(emphasis())
        .apply(Greet);
    println!("strong(emphasis(greet))() -> {}", stacked.call(())?);
    println!(
        "  still introspects as    {} - {}",
        stacked.metadata(),
        stacked.metadata().description()
    );

    let traced = Say.wrap_with(Trace::from_config(&config.trace));
    let line = traced.call(("Jane".to_string(), "Hello, World".to_string()))?;
    println!("trace(say)(\"Jane\", \"Hello, World\") -> {line}");

    Ok(())
}
