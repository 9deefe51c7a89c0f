use std::io;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the process-wide subscriber, writing to stderr so stdout stays free
/// for the table.
///
/// `verbose` forces `debug`; otherwise `RUST_LOG` applies, defaulting to `info`.
/// `HEARTS_LOG_FORMAT=json` switches to JSON lines.
pub fn init_tracing(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .with_writer(io::stderr);

    let registry = tracing_subscriber::registry().with(env_filter);
    if json_requested() {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }
}

fn json_requested() -> bool {
    std::env::var("HEARTS_LOG_FORMAT").is_ok_and(|v| v.trim().eq_ignore_ascii_case("json"))
}
