//! Argument forwarding step definitions.

use std::io;
use std::sync::{Arc, Mutex};

use callwrap::advice::Trace;
use callwrap::{
    operation, wrap, Args, ArgsError, BoxOperation, Describe, Metadata, Operation, OperationExt,
};
use cucumber::{given, then, when, World};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted trace output.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Test context for forwarding scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ForwardingWorld {
    traced: bool,
    proxied: bool,
    result: Option<String>,
    failure_origin: Option<String>,
    log: String,
}

impl ForwardingWorld {
    fn new() -> Self {
        Self {
            traced: false,
            proxied: false,
            result: None,
            failure_origin: None,
            log: String::new(),
        }
    }

    /// `say(name, line)`; `line` may also be passed by name.
    fn say() -> BoxOperation<Args, String> {
        operation(
            Metadata::new("say").with_parameters(["name", "line"]),
            |args: Args| -> Result<String, ArgsError> {
                let name: String = args.get(0)?;
                let line: String = match args.get_named_opt("line")? {
                    Some(line) => line,
                    None => args.get(1)?,
                };
                Ok(format!("{name}: {line}"))
            },
        )
        .boxed()
    }

    fn call(&mut self, args: Args) {
        let mut op = Self::say();
        if self.proxied {
            op = wrap(op).named("proxy").boxed();
        }
        if self.traced {
            op = op.wrap_with(Trace::new()).boxed();
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();
        let outcome = tracing::subscriber::with_default(subscriber, || op.call(args));
        self.log = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();

        match outcome {
            Ok(value) => self.result = Some(value),
            Err(e) => self.failure_origin = Some(e.origin().to_string()),
        }
    }
}

// --- Given steps ---

#[given(expr = "the operation {string} taking a name and a line")]
async fn given_say(_world: &mut ForwardingWorld, name: String) {
    assert_eq!(ForwardingWorld::say().metadata().name(), name);
}

#[given("it is traced")]
async fn given_traced(world: &mut ForwardingWorld) {
    world.traced = true;
}

#[given("it is wrapped without hooks")]
async fn given_proxied(world: &mut ForwardingWorld) {
    world.proxied = true;
}

// --- When steps ---

#[when(expr = "I call it with {string} and {string}")]
async fn when_call_positional(world: &mut ForwardingWorld, name: String, line: String) {
    world.call(Args::new().arg(name).arg(line));
}

#[when(expr = "I call it with {string} and the named line {string}")]
async fn when_call_named(world: &mut ForwardingWorld, name: String, line: String) {
    world.call(Args::new().arg(name).kwarg("line", line));
}

#[when(expr = "I call it with only {string}")]
async fn when_call_single(world: &mut ForwardingWorld, name: String) {
    world.call(Args::new().arg(name));
}

// --- Then steps ---

#[then(expr = "the result should be {string}")]
fn then_result_is(world: &mut ForwardingWorld, expected: String) {
    assert_eq!(world.result.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the call should fail with origin {string}")]
fn then_fails_with_origin(world: &mut ForwardingWorld, origin: String) {
    assert_eq!(world.failure_origin.as_deref(), Some(origin.as_str()));
}

#[then(expr = "the trace should show the call with {string}")]
fn then_trace_shows_call(world: &mut ForwardingWorld, args: String) {
    let expected = format!("TRACE: calling say() with {args}");
    assert!(world.log.contains(&expected), "log was: {}", world.log);
}

#[then(expr = "the trace should show the return of {string}")]
fn then_trace_shows_return(world: &mut ForwardingWorld, value: String) {
    let expected = format!("TRACE: say() returned {value}");
    assert!(world.log.contains(&expected), "log was: {}", world.log);
}
