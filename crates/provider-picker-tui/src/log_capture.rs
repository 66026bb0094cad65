/// Debug console log capture
///
/// A custom logger that tees log records into a thread-safe ring buffer for
/// the in-app debug console, while terminal output stays Error-only so the
/// TUI is not corrupted.
use chrono::{DateTime, Utc};
use log::{Level, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 1000;

/// A single captured log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

/// Thread-safe log buffer shared between the logger and the UI
pub type LogBuffer = Arc<Mutex<VecDeque<LogEntry>>>;

/// Create a new empty log buffer
pub fn create_buffer() -> LogBuffer {
    Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES)))
}

/// Logger backing the debug console
///
/// Buffer filtering defaults to this crate at Debug level and can be
/// overridden with `RUST_LOG`; the terminal filter is fixed at Error.
pub struct ConsoleLogger {
    logs: LogBuffer,
    terminal: env_logger::Logger,
    buffer_filter: env_logger::Logger,
}

impl ConsoleLogger {
    pub fn new(logs: LogBuffer) -> Self {
        let terminal = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .build();

        let buffer_filter = if std::env::var("RUST_LOG").is_ok() {
            env_logger::Builder::from_default_env().build()
        } else {
            env_logger::Builder::new()
                .filter_module("provider_picker_tui", log::LevelFilter::Debug)
                .build()
        };

        Self {
            logs,
            terminal,
            buffer_filter,
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.buffer_filter.enabled(metadata) || self.terminal.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.buffer_filter.enabled(record.metadata()) {
            let entry = LogEntry {
                timestamp: Utc::now(),
                level: record.level(),
                target: record.target().to_string(),
                message: format!("{}", record.args()),
            };

            if let Ok(mut logs) = self.logs.lock() {
                if logs.len() >= MAX_LOG_ENTRIES {
                    logs.pop_front();
                }
                logs.push_back(entry);
            }
        }

        if self.terminal.enabled(record.metadata()) {
            self.terminal.log(record);
        }
    }

    fn flush(&self) {
        self.terminal.flush();
    }
}

/// Initialize logging and return the buffer the debug console reads from.
/// Must run once, before any logging.
pub fn init_logger() -> LogBuffer {
    let logs = create_buffer();
    let logger = ConsoleLogger::new(logs.clone());

    log::set_boxed_logger(Box::new(logger)).expect("Failed to initialize logger");
    log::set_max_level(log::LevelFilter::Debug);

    log::info!("Debug console initialized - press ` or ~ to toggle");

    logs
}
