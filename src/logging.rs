// 📝 Logging setup shared by the CLI and the server

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Modules capped at `warn` so HTTP plumbing does not drown business logs.
pub const NOISY_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "rustls", "tower_http"];

fn build_filter(log_level: &str) -> EnvFilter {
    // RUST_LOG wins when present
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let mut directives = String::from(log_level);
    for module in NOISY_MODULES {
        directives.push_str(&format!(",{}=warn", module));
    }

    EnvFilter::new(directives)
}

/// Install the global subscriber. Logs go to stderr, either human readable
/// or as JSON lines. Calling twice is a no-op.
pub fn init_logging(log_level: &str, json: bool) {
    let registry = tracing_subscriber::registry().with(build_filter(log_level));

    if json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr);
        let _ = registry.with(layer).try_init();
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        let _ = registry.with(layer).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_includes_noisy_modules() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter("debug").to_string();
        assert!(filter.contains("debug"));
        assert!(filter.contains("reqwest=warn"));
    }
}
