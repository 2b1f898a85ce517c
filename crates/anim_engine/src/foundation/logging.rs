//! Logging utilities

pub use log::{debug, info, warn, error, trace};

use log::LevelFilter;

/// Initialize the logging system at `info` unless `RUST_LOG` says otherwise
pub fn init() {
    init_with_default(LevelFilter::Info);
}

/// Initialize the logging system with a fallback filter level
///
/// `RUST_LOG` still wins when it is set. Calling this more than once is
/// harmless; later calls leave the first logger in place.
pub fn init_with_default(level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(level.as_str());
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
