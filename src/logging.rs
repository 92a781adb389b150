//! Process-wide diagnostic logging.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const CRATE_TARGET: &str = "sha256base64";
const DEFAULT_LOG_FILTER: &str = "warn";
const DEBUG_LOG_FILTER: &str = "warn,sha256base64=debug";
/// Failure reports must reach stderr whatever `RUST_LOG` says about other targets.
const ERROR_FLOOR: &str = "sha256base64=error";

/// Logging configuration, fixed once at startup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LogConfig {
    pub(crate) debug: bool,
}

impl LogConfig {
    /// `--debug` wins over `RUST_LOG`; otherwise `RUST_LOG` or the default applies.
    pub(crate) fn filter(&self) -> EnvFilter {
        if self.debug {
            return EnvFilter::new(DEBUG_LOG_FILTER);
        }
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(spec) => filter_from_spec(&spec),
            Err(_) => EnvFilter::new(DEFAULT_LOG_FILTER),
        }
    }
}

/// Parse a user filter, keeping this crate's errors unless the filter names the crate.
fn filter_from_spec(spec: &str) -> EnvFilter {
    let filter = EnvFilter::try_new(spec).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if spec.contains(CRATE_TARGET) {
        return filter;
    }
    match ERROR_FLOOR.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the stderr subscriber. Call once, before any work starts.
pub(crate) fn init_logging(config: LogConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(config.filter())
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("install log subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_enables_crate_debug_level() {
        let filter = LogConfig { debug: true }.filter();
        assert!(filter.to_string().contains("sha256base64=debug"));
    }

    #[test]
    fn off_keeps_error_floor() {
        assert!(filter_from_spec("off").to_string().contains(ERROR_FLOOR));
        assert!(filter_from_spec("hyper=debug")
            .to_string()
            .contains(ERROR_FLOOR));
    }

    #[test]
    fn explicit_crate_directive_is_left_alone() {
        let filter = filter_from_spec("sha256base64=info").to_string();
        assert!(filter.contains("sha256base64=info"));
        assert!(!filter.contains(ERROR_FLOOR));
    }
}
