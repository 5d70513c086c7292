pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "fintrack=warn";

/// Initializes the global tracing subscriber. Logs go to stderr so they never
/// interleave with command output; `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if std::env::var_os("RUST_LOG").is_none() {
            if let Ok(directive) = DEFAULT_DIRECTIVE.parse() {
                filter = filter.add_directive(directive);
            }
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
