use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Nothing is installed; events are dropped.
    Off,
}

/// Filter precedence: explicit level, then `RUST_LOG`, then warnings only.
fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    let directives = match level {
        Some(level) => format!("timecard={level},timecard_core={level}"),
        None => std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
    };
    EnvFilter::try_new(&directives).with_context(|| format!("invalid log filter '{directives}'"))
}

pub fn enable_logging(level: Option<&str>, target: LogTarget) -> Result<()> {
    let filter = build_filter(level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Off => return Ok(()),
    };
    installed.map_err(|e| anyhow!("failed to install logger: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_builds_filter() {
        assert!(build_filter(Some("debug")).is_ok());
    }

    #[test]
    fn test_garbage_level_is_rejected() {
        assert!(build_filter(Some("not a level=[")).is_err());
    }
}
