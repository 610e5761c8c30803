//! Log subscriber setup.
//!
//! Library crates only emit `tracing` events; the binary decides where they
//! go. Events are written to stderr so stdout carries just the summary.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "RESONA_LOG";

/// Filter for a `-v` count.
///
/// Without `-v` the filter comes from `RESONA_LOG`, then `RUST_LOG`, then
/// defaults to `warn`. `-v` forces `info` and `-vv` forces `debug`.
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(filter_for(1).to_string(), "info");
        assert_eq!(filter_for(2).to_string(), "debug");
        assert_eq!(filter_for(5).to_string(), "debug");
    }
}
