//! Logging initialization
//!
//! Logs go to stderr so they never mix with the rendered comparison.

use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Filter directives for a `-v` count
pub fn default_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "redline=warn,redline_core=warn",
        1 => "redline=debug,redline_core=debug",
        _ => "redline=trace,redline_core=trace",
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the verbosity
pub fn init(verbose: u8, use_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // A second initialization keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(verbose > 0)
        .finish()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_directives(0), "redline=warn,redline_core=warn");
        assert!(default_directives(1).contains("redline_core=debug"));
        assert!(default_directives(5).contains("redline_core=trace"));
    }

    #[test]
    fn init_is_idempotent() {
        init(0, false);
        init(2, false);
    }
}
