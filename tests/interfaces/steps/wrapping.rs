//! Wrapping interface step definitions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use callwrap::advice::{emphasis, strong, Trace, Uppercase};
use callwrap::{operation, wrap, BoxError, BoxOperation, Describe, Operation, OperationExt};
use cucumber::{given, then, when, World};

/// How the base operation behaves.
#[derive(Debug, Clone)]
enum Behavior {
    Returns(String),
    Fails(String),
}

/// One wrapper, in application order (first is innermost).
#[derive(Debug, Clone)]
enum Wrapper {
    Advice(String),
    FailingBefore { name: String, message: String },
}

#[derive(Debug, Clone)]
struct Failure {
    origin: String,
    stage: Option<String>,
    message: String,
}

/// Test context for wrapping scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct WrappingWorld {
    name: String,
    behavior: Behavior,
    wrappers: Vec<Wrapper>,
    invocations: Arc<AtomicUsize>,
    result: Option<String>,
    failure: Option<Failure>,
}

impl WrappingWorld {
    fn new() -> Self {
        Self {
            name: String::new(),
            behavior: Behavior::Returns(String::new()),
            wrappers: Vec::new(),
            invocations: Arc::new(AtomicUsize::new(0)),
            result: None,
            failure: None,
        }
    }

    fn build(&self) -> BoxOperation<(), String> {
        let behavior = self.behavior.clone();
        let invocations = self.invocations.clone();
        let mut op: BoxOperation<(), String> = operation(self.name.as_str(), move |()| {
            invocations.fetch_add(1, Ordering::SeqCst);
            match &behavior {
                Behavior::Returns(value) => Ok(value.clone()),
                Behavior::Fails(message) => Err(BoxError::from(message.clone())),
            }
        })
        .boxed();

        for wrapper in &self.wrappers {
            op = match wrapper {
                Wrapper::Advice(name) => match name.as_str() {
                    "uppercase" => op.wrap_with(Uppercase).boxed(),
                    "emphasis" => op.wrap_with(emphasis()).boxed(),
                    "strong" => op.wrap_with(strong()).boxed(),
                    "trace" => op.wrap_with(Trace::new()).boxed(),
                    other => panic!("Unknown wrapper: {other}"),
                },
                Wrapper::FailingBefore { name, message } => {
                    let message = message.clone();
                    wrap(op)
                        .named(name.as_str())
                        .before(move |_: &()| -> Result<(), BoxError> {
                            Err(message.clone().into())
                        })
                        .boxed()
                }
            };
        }

        op
    }
}

// --- Given steps ---

#[given(expr = "an operation {string} returning {string}")]
async fn given_operation_returning(world: &mut WrappingWorld, name: String, value: String) {
    world.name = name;
    world.behavior = Behavior::Returns(value);
}

#[given(expr = "an operation {string} failing with {string}")]
async fn given_operation_failing(world: &mut WrappingWorld, name: String, message: String) {
    world.name = name;
    world.behavior = Behavior::Fails(message);
}

#[given(expr = "it is wrapped with {string}")]
async fn given_wrapped_with(world: &mut WrappingWorld, wrapper: String) {
    world.wrappers.push(Wrapper::Advice(wrapper));
}

#[given(expr = "it is wrapped with a {string} whose before hook fails with {string}")]
async fn given_wrapped_with_failing_before(
    world: &mut WrappingWorld,
    name: String,
    message: String,
) {
    world.wrappers.push(Wrapper::FailingBefore { name, message });
}

// --- When steps ---

#[when("I call the operation")]
async fn when_call(world: &mut WrappingWorld) {
    match world.build().call(()) {
        Ok(value) => world.result = Some(value),
        Err(e) => {
            world.failure = Some(Failure {
                origin: e.origin().to_string(),
                stage: e.stage().map(|s| s.to_string()),
                message: e.message(),
            })
        }
    }
}

// --- Then steps ---

#[then(expr = "the result should be {string}")]
fn then_result_is(world: &mut WrappingWorld, expected: String) {
    assert_eq!(
        world.result.as_deref(),
        Some(expected.as_str()),
        "Unexpected failure: {:?}",
        world.failure
    );
}

#[then(expr = "the operation should be named {string}")]
fn then_named(world: &mut WrappingWorld, expected: String) {
    assert_eq!(world.build().metadata().name(), expected);
}

#[then(expr = "the call should fail with origin {string}")]
fn then_fails_with_origin(world: &mut WrappingWorld, origin: String) {
    let failure = world.failure.as_ref().expect("Expected the call to fail");
    assert_eq!(failure.origin, origin);
}

#[then(expr = "the call should fail with origin {string} at stage {string}")]
fn then_fails_at_stage(world: &mut WrappingWorld, origin: String, stage: String) {
    let failure = world.failure.as_ref().expect("Expected the call to fail");
    assert_eq!(failure.origin, origin);
    assert_eq!(failure.stage.as_deref(), Some(stage.as_str()));
}

#[then(expr = "the failure message should be {string}")]
fn then_failure_message(world: &mut WrappingWorld, message: String) {
    let failure = world.failure.as_ref().expect("Expected the call to fail");
    assert_eq!(failure.message, message);
}

#[then("the operation should not have been invoked")]
fn then_not_invoked(world: &mut WrappingWorld) {
    assert_eq!(world.invocations.load(Ordering::SeqCst), 0);
}
