//! `log` backend for the simulator.
//!
//! Every record is printed to stderr and the most recent lines are kept in a
//! small ring buffer so the window can show them under the status bar.

use std::sync::Mutex;

use heapless::{Deque, String};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Number of log lines kept for the on-screen view.
pub const LOG_LINES: usize = 6;

/// Maximum characters per kept line.
pub const LOG_LINE_LENGTH: usize = 56;

type Line = String<LOG_LINE_LENGTH>;

pub struct RingLogger {
    lines: Mutex<Deque<(Level, Line), LOG_LINES>>,
}

impl RingLogger {
    const fn new() -> Self { Self { lines: Mutex::new(Deque::new()) } }

    /// Copy of the buffered lines, oldest first.
    pub fn snapshot(&self) -> Vec<(Level, Line)> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn push(&self, level: Level, msg: &str) {
        let Ok(mut lines) = self.lines.lock() else { return };
        if lines.is_full() {
            lines.pop_front();
        }

        // Truncate on a char boundary
        let mut line = Line::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        lines.push_back((level, line)).ok();
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = record.args().to_string();
        eprintln!("[{:<5} {}] {msg}", record.level(), record.target());
        self.push(record.level(), &msg);
    }

    fn flush(&self) {}
}

pub static LOGGER: RingLogger = RingLogger::new();

/// Install [`LOGGER`] as the global logger.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
