use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    prelude::*,
};

pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    Ok(File::create(path)?)
}

/// Installs the global subscriber. The log file, if any, is created (and
/// truncated) only once no other global subscriber is present.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Err(CliError::Logging(
            "a global subscriber is already installed".to_string(),
        ));
    }

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    let installed = if let Some(path) = log_file {
        let file = open_log_file(path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_target(true);

        subscriber.with(file_layer).try_init()
    } else {
        subscriber.try_init()
    };

    installed.map_err(|e| CliError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::sync::Once;
    use std::thread;
    use std::time::Duration;

    static INIT: Once = Once::new();

    fn ensure_global_logger_is_set() {
        INIT.call_once(|| {
            setup_logging(3, false, None).expect("Failed to set up global logger for tests");
        });
    }

    #[test]
    fn verbosity_maps_to_level_filters() {
        assert_eq!(level_filter(0, false), LevelFilter::WARN);
        assert_eq!(level_filter(1, false), LevelFilter::INFO);
        assert_eq!(level_filter(2, false), LevelFilter::DEBUG);
        assert_eq!(level_filter(3, false), LevelFilter::TRACE);
        assert_eq!(level_filter(9, false), LevelFilter::TRACE);
        assert_eq!(level_filter(2, true), LevelFilter::ERROR);
    }

    #[test]
    #[serial]
    fn global_logger_enables_trace_at_highest_verbosity() {
        ensure_global_logger_is_set();

        assert_eq!(LevelFilter::current(), LevelFilter::TRACE);
        assert!(tracing::enabled!(tracing::Level::TRACE));
    }

    #[test]
    #[serial]
    fn second_initialization_reports_error_instead_of_panicking() {
        ensure_global_logger_is_set();

        let result = setup_logging(0, false, None);
        assert!(matches!(result, Err(CliError::Logging(_))));
    }

    #[test]
    #[serial]
    fn second_initialization_leaves_existing_log_file_untouched() {
        ensure_global_logger_is_set();

        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("existing.log");
        std::fs::write(&log_path, "earlier run\n").unwrap();

        let result = setup_logging(1, false, Some(&log_path));
        assert!(matches!(result, Err(CliError::Logging(_))));

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert_eq!(content, "earlier run\n");
    }

    #[test]
    #[serial]
    fn file_layer_captures_core_diagnostics() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("test.log");

        let file = File::create(&log_path).unwrap();
        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true);
        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::DEBUG)
            .with(file_layer);

        tracing::subscriber::with_default(subscriber, || {
            assert!("parsec".parse::<molcore::LengthUnit>().is_err());
        });

        thread::sleep(Duration::from_millis(100));

        let content = std::fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Unknown unit name 'parsec'"));
        assert!(content.contains("DEBUG"));
        assert!(content.contains("ThreadId"));
    }

    #[test]
    #[serial]
    fn invalid_log_file_path_propagates_error() {
        let invalid_path = Path::new("/");

        if cfg!(unix) && invalid_path.is_dir() {
            let result = open_log_file(invalid_path);
            assert!(matches!(result, Err(CliError::Io(_))));
        }
    }
}
