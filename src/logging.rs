use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::error::Result;

const APP_DIR_NAME: &str = "grid-snake";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the platform-correct log file path.
#[must_use]
pub fn log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Routes the `log` facade into `path`.
///
/// The terminal belongs to the UI while the game runs, so nothing is logged
/// to stdout or stderr.
pub fn init(path: &Path, level: LevelFilter) -> Result<()> {
    WriteLogger::init(level, ConfigBuilder::new().build(), create_log_file(path)?)?;
    Ok(())
}

fn create_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
