//! Logging initialisation on top of `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Install a formatting subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter);
}

/// Install a formatting subscriber with an explicit filter directive,
/// e.g. `"foldbox_ui=trace"`.
pub fn init_with_filter(directive: &str) {
    install(EnvFilter::new(directive));
}

/// Returns false if a global subscriber was already set.
fn install(filter: EnvFilter) -> bool {
    let directive = filter.to_string();
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        return false;
    }
    tracing::debug!(filter = %directive, "logging initialised");
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_rejected() {
        init_with_filter("foldbox_core=debug");
        assert!(!install(EnvFilter::new(DEFAULT_FILTER)));
    }
}
