//! Global subscriber setup.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Output shape of the global subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Pretty lines on stderr (`roster history --log-format pretty`)
    Development,
    /// One JSON object per event on stderr
    Production,
    /// No output; tests install [`init_test_capture`](super::init_test_capture) instead
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is unset
    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "roster_core=debug,roster=debug",
            Profile::Production | Profile::Test => "roster_core=info,roster=info",
        }
    }

    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

static INIT: Once = Once::new();

/// Install the global subscriber for `profile`. Only the first call has any effect.
pub fn init(profile: Profile) {
    INIT.call_once(|| {
        let writer = std::io::stderr;
        match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_writer(writer)
                .with_env_filter(profile.filter())
                .init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_writer(writer)
                .with_env_filter(profile.filter())
                .init(),
            Profile::Test => tracing_subscriber::registry().init(),
        }
    });
}
