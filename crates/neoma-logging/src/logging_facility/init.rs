//! Logging initialization module
//!
//! Provides a single initialization point for the tracing backend.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter used when `RUST_LOG` is not set
    pub fn default_filter(self) -> &'static str {
        match self {
            Profile::Development => "neoma=trace,neoma_logging=debug",
            Profile::Production => "neoma=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
}

/// Initialize the tracing backend
///
/// This function should be called once at application startup. Later calls
/// are ignored, as is a subscriber installed by someone else first.
///
/// # Profiles
///
/// - **Development**: Human-readable output; every level from `neoma`
/// - **Production**: JSON structured output at info and above
/// - **Test**: No output; use `init_test_capture()` to assert on events
///
/// # Example
///
/// ```
/// use neoma_logging::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(env_filter(profile))
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter(profile))
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
        installed.ok();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Production);
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }

    #[test]
    fn test_default_filters_parse() {
        for profile in [Profile::Development, Profile::Production, Profile::Test] {
            assert!(EnvFilter::try_new(profile.default_filter()).is_ok());
        }
    }
}
