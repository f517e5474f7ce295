//! Structured logging setup.
//!
//! The library only emits `tracing` events. Hosts without a subscriber of
//! their own can install a console one here.
//!
//! Filter priority: explicit filter > FA_ICONS_LOG > RUST_LOG > build default.

use tracing_subscriber::EnvFilter;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "FA_ICONS_LOG";

/// Install a console subscriber.
///
/// Returns `false` if a global subscriber was already set, in which case the
/// existing one stays in place.
pub fn init_logging(filter: Option<&str>) -> bool {
    let env_filter = build_env_filter(filter);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .is_ok()
}

/// Build the environment filter from the given filter or defaults.
fn build_env_filter(custom_filter: Option<&str>) -> EnvFilter {
    if let Some(filter) = custom_filter {
        return EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(default_log_filter()));
    }

    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter()))
}

/// Get the default log filter based on build type.
pub fn default_log_filter() -> &'static str {
    #[cfg(debug_assertions)]
    {
        "info,fa_icons=debug"
    }
    #[cfg(not(debug_assertions))]
    {
        "warn,fa_icons=info"
    }
}
