pub mod persistence;

use std::sync::Once;

use tracing::debug;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "expense_tracker=warn";

/// Initializes the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with menu output on stdout.
/// `RUST_LOG` overrides the default `expense_tracker=warn` level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // A subscriber may already be installed by an embedding application.
        if let Err(err) = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            debug!(%err, "keeping the existing tracing subscriber");
        }
    });
}
