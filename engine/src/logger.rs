use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
}

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level == Level::Info || self.verbose
    }

    pub fn log(&self, level: Level, file: &str, line: u32, message: &str) {
        if !self.enabled(level) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        let tag = match level {
            Level::Info => "",
            Level::Debug => "[debug]",
        };
        // stdout belongs to the game display
        if let Some(ref prefix) = self.prefix {
            eprintln!("[{}][{}]{}[{}:{}] {}", timestamp, prefix, tag, file_name, line, message);
        } else {
            eprintln!("[{}]{}[{}:{}] {}", timestamp, tag, file_name, line, message);
        }
    }
}

pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn enabled(level: Level) -> bool {
    LOGGER.get().is_some_and(|logger| logger.enabled(level))
}

/// Messages sent before `init_logger` are dropped.
pub fn log(level: Level, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, file!(), line!(), &format!($($arg)*))
    };
}

/// Like `log!`, but skips formatting entirely unless verbose output is on.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::enabled($crate::logger::Level::Debug) {
            $crate::logger::log($crate::logger::Level::Debug, file!(), line!(), &format!($($arg)*))
        }
    };
}
