//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system with `RUST_LOG`, falling back to `default_level`
///
/// Safe to call more than once; later calls are ignored.
pub fn init(default_level: &str) {
    let env = env_logger::Env::default().default_filter_or(default_level);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Initialize logging for tests, capturing output per test
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
