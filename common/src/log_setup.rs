use std::sync::OnceLock;

use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle};

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

/// File logger with console duplication, for executables that host the library.
/// Later calls, and calls after [`setup_test_logging`], only warn.
pub fn setup_logging(base_level: &str) {
    let mut installed = false;
    LOGGER.get_or_init(|| {
        installed = true;
        start_file_logger(base_level)
    });
    if !installed {
        log::warn!("Logging already initialized");
    }
}

fn start_file_logger(base_level: &str) -> LoggerHandle {
    Logger::try_with_env_or_str(base_level)
        .unwrap_or_else(|e| panic!("Invalid log specification: {}", e))
        .log_to_file(FileSpec::default().directory("logs"))
        .duplicate_to_stderr(Duplicate::Warn)
        .duplicate_to_stdout(Duplicate::All)
        .rotate(
            flexi_logger::Criterion::Size(1024 * 1024), //1MB
            flexi_logger::Naming::Timestamps,
            flexi_logger::Cleanup::KeepLogFiles(5),
        )
        .start()
        .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e))
}

/// Stdout-only logger for test binaries. Honours `RUST_LOG`, defaults to `warn`.
/// Safe to call from every test; only the first call installs the logger.
pub fn setup_test_logging() {
    LOGGER.get_or_init(|| {
        Logger::try_with_env_or_str("warn")
            .unwrap_or_else(|e| panic!("Invalid log specification: {}", e))
            .log_to_stdout()
            .start()
            .unwrap_or_else(|e| panic!("Logger initialization failed with {}", e))
    });
}
