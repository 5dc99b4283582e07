//! Interface tests for the wrapping contract using Cucumber.
//!
//! ```bash
//! cargo test --test interfaces
//! ```

mod steps;

use cucumber::World;
use steps::forwarding::ForwardingWorld;
use steps::wrapping::WrappingWorld;

#[tokio::main]
async fn main() {
    println!("\n=== Running Wrapping Interface Tests ===\n");
    WrappingWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/interfaces/features/wrapping.feature")
        .await;

    println!("\n=== Running Forwarding Interface Tests ===\n");
    ForwardingWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/interfaces/features/forwarding.feature")
        .await;
}
