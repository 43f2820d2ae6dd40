//! Timestamped logging to standard error and two flat log files.
//!
//! The main log receives every record at or above the configured level, the error
//! log only warnings and errors. Both files are restarted on every run.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use log::{Level, LevelFilter};

use crate::{errors::TriangleError, settings::LogSettings};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats one log line.
pub fn format_line(
    time: &NaiveDateTime,
    level: Level,
    target: &str,
    message: &fmt::Arguments,
) -> String {
    format!(
        "[{} {:<5} {}] {}",
        time.format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

/// Header written at the top of a freshly restarted log file.
pub fn header(file_name: &str, time: &NaiveDateTime) -> String {
    format!(
        "{} local time {}\nbuild version: {} {}\n",
        file_name,
        time.format(TIME_FORMAT),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Truncates the log file at `path` and writes a fresh header.
pub fn restart_log(path: &Path, time: &NaiveDateTime) -> Result<File, TriangleError> {
    let mut file = File::create(path).map_err(|e| {
        TriangleError::Logging(format!("could not open {} for writing: {}", path.display(), e))
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    file.write_all(header(&name, time).as_bytes())
        .map_err(|e| TriangleError::Logging(format!("{}: {}", path.display(), e)))?;
    Ok(file)
}

/// Builds the dispatcher without installing it.
pub fn dispatch(settings: &LogSettings) -> Result<fern::Dispatch, TriangleError> {
    let level = settings.level_filter()?;
    std::fs::create_dir_all(&settings.directory).map_err(|e| {
        TriangleError::Logging(format!(
            "could not create log directory {}: {}",
            settings.directory.display(),
            e
        ))
    })?;

    let now = Local::now().naive_local();
    let main_log = restart_log(&settings.main_path(), &now)?;
    let error_log = restart_log(&settings.error_path(), &now)?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(
                    &Local::now().naive_local(),
                    record.level(),
                    record.target(),
                    message
                )
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .chain(main_log)
        .chain(
            fern::Dispatch::new()
                .level(LevelFilter::Warn)
                .chain(error_log),
        ))
}

/// Installs the global logger.
pub fn init(settings: &LogSettings) -> Result<(), TriangleError> {
    dispatch(settings)?.apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use log::Log;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_milli_opt(3, 4, 5, 678)
            .unwrap()
    }

    fn settings_in(dir: &Path) -> LogSettings {
        LogSettings {
            directory: dir.join("logs"),
            level: "info".to_string(),
            ..LogSettings::default()
        }
    }

    #[test]
    fn test_line_format() {
        let line = format_line(
            &fixed_time(),
            Level::Info,
            "hello_triangle",
            &format_args!("Renderer: {}", "llvmpipe"),
        );
        assert_eq!(
            line,
            "[2024-01-02 03:04:05.678 INFO  hello_triangle] Renderer: llvmpipe"
        );
    }

    #[test]
    fn test_header() {
        let header = header("gl.log", &fixed_time());
        let mut lines = header.lines();
        assert_eq!(lines.next(), Some("gl.log local time 2024-01-02 03:04:05"));
        assert!(lines.next().unwrap().starts_with("build version: hello-triangle"));
    }

    #[test]
    fn test_restart_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gl.log");
        std::fs::write(&path, "stale line from a previous run\n").unwrap();

        drop(restart_log(&path, &fixed_time()).unwrap());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("stale"));
        assert!(contents.starts_with("gl.log local time"));
    }

    #[test]
    fn test_restart_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = restart_log(&dir.path().join("nope").join("gl.log"), &fixed_time()).unwrap_err();
        assert!(matches!(err, TriangleError::Logging(_)));
    }

    #[test]
    fn test_records_routed_by_level() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let (_, logger) = dispatch(&settings).unwrap().into_log();

        logger.log(
            &log::Record::builder()
                .args(format_args!("vertex buffer uploaded"))
                .level(Level::Info)
                .target("hello_triangle")
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .args(format_args!("GL_INVALID_ENUM"))
                .level(Level::Error)
                .target("hello_triangle")
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .args(format_args!("too chatty"))
                .level(Level::Trace)
                .target("hello_triangle")
                .build(),
        );
        logger.flush();

        let main = std::fs::read_to_string(settings.main_path()).unwrap();
        let errors = std::fs::read_to_string(settings.error_path()).unwrap();

        assert!(main.contains("vertex buffer uploaded"));
        assert!(main.contains("GL_INVALID_ENUM"));
        assert!(!main.contains("too chatty"));
        assert!(errors.starts_with("gl_error.log local time"));
        assert!(errors.contains("GL_INVALID_ENUM"));
        assert!(!errors.contains("vertex buffer uploaded"));
    }

    #[test]
    fn test_bad_level_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LogSettings {
            level: "shouty".to_string(),
            ..settings_in(dir.path())
        };
        assert!(dispatch(&settings).is_err());
    }
}
