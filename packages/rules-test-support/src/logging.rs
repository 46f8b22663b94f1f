//! Tracing subscriber for test binaries.
//!
//! The rules library only emits events. Test binaries call [`init`] (usually
//! from a `#[ctor::ctor]` hook) so those events reach the captured test output.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Default when neither variable is set: rejected plays stay silent.
const QUIET: &str = "warn";

/// `TEST_LOG` wins over `RUST_LOG`; with neither set only warnings show.
fn env_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map_or_else(|| EnvFilter::new(QUIET), EnvFilter::new)
}

/// Install the subscriber once per process; later calls do nothing.
///
/// `TEST_LOG=tractor_rules=debug` prints the reason behind every rejected
/// play.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        // Another subscriber may already be installed by the harness.
        let _ = fmt()
            .with_env_filter(env_filter())
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init();
    });
}
