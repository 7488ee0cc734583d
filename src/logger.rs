//! Logging setup.
//!
//! The library itself only emits through the `log` facade; embedding
//! applications that want output call [`init`] (stderr) or [`init_with_file`]
//! once at startup to install a fern dispatcher.

use anyhow::{Context, Result};
use std::path::PathBuf;

fn dispatch(level: log::LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
}

/// Install a logger writing chrono-stamped lines to stderr.
///
/// May only be called once per process; a second call fails.
pub fn init(level: log::LevelFilter) -> Result<()> {
    dispatch(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to install logger")?;
    Ok(())
}

/// Install a logger writing to both stderr and a log file.
pub fn init_with_file(level: log::LevelFilter, path: PathBuf) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = fern::log_file(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    dispatch(level)
        .chain(std::io::stderr())
        .chain(file)
        .apply()
        .context("failed to install logger")?;
    Ok(())
}

/// Default log file location under the platform data directory.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("timekit").join("timekit.log"))
}
