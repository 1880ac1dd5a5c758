//! Common test utilities and logging infrastructure.
//!
//! Import this module in integration tests and call `init_test_logging()`
//! at the start of tests that should show library logs on failure:
//!
//! ```rust,ignore
//! mod common;
//! use common::init_test_logging;
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG=debug` - Override the default filter
//! - `RUST_LOG=termgrid::measure=trace` - Show every column deduction
//! - `TEST_LOG_JSON=1` - Output JSON format for CI parsing
//!
//! Library records go through the `log` facade; `try_init` bridges them
//! into the tracing subscriber.

#![allow(dead_code)]

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "termgrid=debug,test=info";

/// Initialize test logging. Idempotent.
pub fn init_test_logging() {
    init_test_logging_with_filter(DEFAULT_FILTER);
}

/// Initialize test logging with a custom default filter.
///
/// `RUST_LOG` still wins when set. Only the first call in a test binary
/// takes effect.
pub fn init_test_logging_with_filter(filter: &str) {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

        if std::env::var("TEST_LOG_JSON").is_ok() {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_test_writer())
                .try_init()
                .ok();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_file(true)
                        .with_line_number(true)
                        .with_target(true)
                        .compact(),
                )
                .try_init()
                .ok();
        }
    });
}

/// Temporarily set an environment variable for the duration of a closure.
///
/// The original value is restored afterwards. Callers must be `#[serial]`.
pub fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    // SAFETY: serialized test, no other thread reads the environment.
    unsafe { std::env::set_var(key, value) };

    let result = f();

    // SAFETY: as above.
    match original {
        Some(v) => unsafe { std::env::set_var(key, v) },
        None => unsafe { std::env::remove_var(key) },
    }

    result
}

/// Temporarily remove an environment variable for the duration of a closure.
pub fn without_env_var<F, R>(key: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    // SAFETY: serialized test, no other thread reads the environment.
    unsafe { std::env::remove_var(key) };

    let result = f();

    if let Some(v) = original {
        // SAFETY: as above.
        unsafe { std::env::set_var(key, v) };
    }

    result
}
