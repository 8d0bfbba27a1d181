// Shared helpers for integration tests

#![allow(dead_code)]

use saucedemo_e2e::HarnessConfig;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Installs a tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`; defaults to info for the harness.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("saucedemo_e2e=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Config pointed at a local stand-in storefront.
///
/// Browser choice and headless mode still come from the environment.
/// The wait window is wider than the 1s default: browser startup on a
/// loaded CI machine can stretch the first navigation.
pub fn local_config(base_url: &str) -> HarnessConfig {
    HarnessConfig::from_env()
        .expect("SAUCEDEMO_* variables should be valid")
        .with_base_url(base_url)
        .expect("test server URL should parse")
        .with_wait_timeout(Duration::from_secs(5))
        .with_poll_interval(Duration::from_millis(50))
}
