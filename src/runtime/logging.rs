//! Logging setup - one global tracing subscriber per process
//!
//! Outputs come from [`LoggingSettings`]: an optional log file and an
//! optional stdout mirror, both written off-thread by `tracing_appender`.

use std::path::Path;
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use super::config::LoggingSettings;

/// Crate-wide directive added on top of `RUST_LOG`
const CRATE_DIRECTIVE: &str = "pokedex_client=debug";

/// Flush guards of the installed writers, held until exit
static WRITER_GUARDS: OnceLock<Vec<WorkerGuard>> = OnceLock::new();

fn build_filter() -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    match CRATE_DIRECTIVE.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Non-blocking appender for `path`; the file is created right away.
fn file_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let file_name = path.file_name()?;
    Some(tracing_appender::non_blocking(
        tracing_appender::rolling::never(dir, file_name),
    ))
}

/// Install the global subscriber described by `settings`.
///
/// A relative `log_file` is resolved against `config_dir`. Returns false
/// when a subscriber is already installed; the first one stays in place.
pub fn init_logging(settings: &LoggingSettings, config_dir: Option<&Path>) -> bool {
    let mut guards = Vec::new();

    let file_layer = settings
        .log_file_path(config_dir)
        .and_then(|path| file_writer(&path))
        .map(|(writer, guard)| {
            guards.push(guard);
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false)
        });

    let console_layer = settings.console.then(|| {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
        guards.push(guard);
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(false)
    });

    let installed = tracing_subscriber::registry()
        .with(build_filter())
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        let _ = WRITER_GUARDS.set(guards);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, Instant};

    #[test]
    fn test_file_writer_needs_a_file_name() {
        assert!(file_writer(Path::new("/")).is_none());
    }

    // Only test in the crate that installs the global subscriber
    #[test]
    fn test_init_logging_writes_to_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LoggingSettings {
            console: false,
            log_file: "pokedex.log".to_string(),
        };

        assert!(init_logging(&settings, Some(dir.path())));
        let path = dir.path().join("pokedex.log");
        assert!(path.exists());

        tracing::info!(screen = "list", "[test] Logging installed");
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut contents = String::new();
        while !contents.contains("[test] Logging installed") && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(20));
            contents = fs::read_to_string(&path).unwrap_or_default();
        }
        assert!(contents.contains("[test] Logging installed"), "log file: {:?}", contents);
        assert!(contents.contains("screen=\"list\""));

        // Second install leaves the first subscriber in place
        assert!(!init_logging(&LoggingSettings::default(), None));
    }
}
