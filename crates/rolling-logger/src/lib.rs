//! Rolling Logger
//!
//! File logger for desktop hosts. Log lines go to `<app>.log`; once it grows
//! past the size limit it is shifted to `<app>.1.log`, `<app>.1.log` to
//! `<app>.2.log` and so on, and the oldest file falls off the end. The set of
//! files works as a circular buffer of the most recent output.
//!
//! Records emitted through the `log` facade are forwarded as well.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Rotate once the active file passes this size
pub const DEFAULT_MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Number of rotated files kept besides the active one
pub const DEFAULT_MAX_FILES: usize = 5;
/// Env var holding the filter directive (e.g. `debug`, `checklist_core=trace`)
pub const FILTER_ENV: &str = "SIMPLE_CHECKLIST_LOG";

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

#[derive(Debug)]
struct LoggerHandle {
    log_dir: PathBuf,
}

/// Size-limited file ring
#[derive(Debug)]
pub struct RollingFile {
    dir: PathBuf,
    app_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    pub fn open(dir: &Path, app_name: &str, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = file_path(dir, app_name, 0);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            dir: dir.to_path_buf(),
            app_name: app_name.to_string(),
            max_bytes,
            max_files,
            file,
            written,
        })
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;
        if self.max_files == 0 {
            // nothing kept, just start over
            self.file = File::create(file_path(&self.dir, &self.app_name, 0))?;
            self.written = 0;
            return Ok(());
        }

        let oldest = file_path(&self.dir, &self.app_name, self.max_files);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (0..self.max_files).rev() {
            let from = file_path(&self.dir, &self.app_name, index);
            if from.exists() {
                fs::rename(&from, file_path(&self.dir, &self.app_name, index + 1))?;
            }
        }

        self.file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path(&self.dir, &self.app_name, 0))?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RollingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// `<app>.log` for the active file, `<app>.<n>.log` for rotated ones
fn file_path(dir: &Path, app_name: &str, index: usize) -> PathBuf {
    if index == 0 {
        dir.join(format!("{}.log", app_name))
    } else {
        dir.join(format!("{}.{}.log", app_name, index))
    }
}

/// Shareable writer handed to the fmt layer
#[derive(Clone, Debug)]
pub struct RollingWriter {
    inner: Arc<Mutex<RollingFile>>,
}

impl RollingWriter {
    pub fn new(file: RollingFile) -> Self {
        Self {
            inner: Arc::new(Mutex::new(file)),
        }
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Local wall-clock timestamps
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber writing to `log_dir`.
///
/// The filter comes from `SIMPLE_CHECKLIST_LOG`, defaulting to `info`.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    init_logger_with(log_dir, app_name, DEFAULT_MAX_FILE_BYTES, DEFAULT_MAX_FILES)
}

pub fn init_logger_with(
    log_dir: PathBuf,
    app_name: &str,
    max_bytes: u64,
    max_files: usize,
) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Err("logger already initialized".to_string());
    }

    let file = RollingFile::open(&log_dir, app_name, max_bytes, max_files)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(RollingWriter::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_timer(LocalTime),
        )
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    LOGGER
        .set(LoggerHandle { log_dir })
        .map_err(|_| "logger already initialized".to_string())
}

/// Directory the logger writes to, once initialized
pub fn log_dir() -> Option<&'static Path> {
    LOGGER.get().map(|h| h.log_dir.as_path())
}

pub fn info(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    LOGGER
        .get()
        .map(|_| ())
        .ok_or_else(|| "logger not initialized".to_string())
}
