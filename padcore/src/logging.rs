//! Logging setup.
//!
//! Filter comes from `RUST_LOG` when set, otherwise from the default the
//! binary passes in.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// Returns `false` if a subscriber was already installed (tests, or a second
/// call), in which case the existing one is kept.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_first_subscriber() {
        init("padcore=debug");
        assert!(!init("padcore=trace"));
    }
}
