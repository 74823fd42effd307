//! tracing subscriber setup
//!
//! Logs go to stderr, coloured only when stderr is a terminal. The filter
//! comes from `BAREMI_LOG` when set, otherwise from the settings file.

use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "BAREMI_LOG";

fn make_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// call leaves the first subscriber in place.
pub fn init(fallback_level: &str) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false);

    if tracing_subscriber::registry()
        .with(make_filter(fallback_level))
        .with(layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(env = LOG_ENV, "logging initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init("warn");
        init("not a [valid filter");
    }

    #[test]
    fn test_bad_directive_falls_back() {
        // an unparseable fallback still yields a usable filter
        let filter = make_filter("not a [valid filter");
        assert!(!filter.to_string().is_empty());
    }
}
