use std::{error::Error, fs::File, path::Path, str::FromStr, sync::Arc};

use jellyadmin::config::LogLevel;
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

const GUI_LOG_FILE_NAME: &str = "jellyadmin-gui.log";

/// Targets too verbose to be useful in the client logs.
const IGNORED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "sctk",
    "rustls",
    "hyper",
    "hyper_util",
    "reqwest",
    "tokio",
];

pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

fn is_ignored(target: &str) -> bool {
    IGNORED_TARGETS.iter().any(|t| target.starts_with(t))
}

pub fn setup_logger(log_level: LevelFilter, datadir: &Path) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(datadir)?;
    let log_path = datadir.join(GUI_LOG_FILE_NAME);

    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                .with_filter(filter::filter_fn(|metadata| !is_ignored(metadata.target()))),
        )
        .init();

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignored_targets() {
        assert!(is_ignored("wgpu_core::device"));
        assert!(is_ignored("hyper_util::client"));
        assert!(!is_ignored("jellyadmin_gui::app"));
        assert!(!is_ignored("jellyadmin::api::http"));
    }

    #[test]
    fn config_level_to_filter() {
        assert_eq!(level_filter(LogLevel::Info), LevelFilter::INFO);
        assert_eq!(level_filter(LogLevel::Trace), LevelFilter::TRACE);
    }
}
