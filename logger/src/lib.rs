pub mod color;

use std::io::{self, Write};

use crate::color::{Color, Style};
use log::{Level, LevelFilter, Log, Metadata, Record};
use time::error::InvalidFormatDescription;
use time::format_description::{self as fd, OwnedFormatItem};
use time::macros::format_description;
use time::OffsetDateTime;

#[macro_export]
macro_rules! warn {
    ( $ ( $ arg : tt ) * ) => ( log::warn! ( $ ( $ arg ) * ) )
}
#[macro_export]
macro_rules! err {
    ( $ ( $ arg : tt ) * ) => ( log::error! ( $ ( $ arg ) * ) )
}
#[macro_export]
macro_rules! info {
    ( $ ( $ arg : tt ) * ) => ( log::info! ( $ ( $ arg ) * ) )
}
#[macro_export]
macro_rules! debug {
    ( $ ( $ arg : tt ) * ) => ( log::debug! ( $ ( $ arg ) * ) )
}
#[macro_export]
macro_rules! trace {
    ( $ ( $ arg : tt ) * ) => ( log::trace! ( $ ( $ arg ) * ) )
}

/// Writes every record to `stderr`, so that `stdout` of the host program stays clean.
///
/// `debug` and `trace` records are prefixed with a timestamp and the target module,
/// everything else is printed as `<level>: <message>`.
pub struct Logger {
    level: LevelFilter,
    ts_format: OwnedFormatItem,
    colored: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::new_with_level(LevelFilter::Trace)
    }

    pub fn new_with_level(level: LevelFilter) -> Self {
        Logger {
            level,
            ts_format: OwnedFormatItem::from(
                format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
            ),
            colored: false,
        }
    }

    pub fn colored(mut self, yes: bool) -> Self {
        self.colored = yes;
        self
    }

    /// Replace the timestamp layout, using the `time` crate's format description syntax.
    pub fn ts_format(mut self, f: &str) -> Result<Self, InvalidFormatDescription> {
        self.ts_format = fd::parse_owned::<2>(f)?;
        Ok(self)
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Install this logger as the global [`log`] backend.
    ///
    /// Fails if a logger was already installed in this process.
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))?;
        Ok(())
    }

    fn timestamp(&self) -> String {
        // `now_local` refuses to run when the offset cannot be determined soundly.
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .format(&self.ts_format)
            .unwrap_or_default()
    }

    fn label(&self, level: Level) -> String {
        let label = level.to_string().to_lowercase();
        if !self.colored {
            return label;
        }
        let style = match level {
            Level::Error => Style::new().bright().fg(Color::Red),
            Level::Warn => Style::new().bright().fg(Color::Yellow),
            Level::Info => Style::new().bright().fg(Color::Blue),
            Level::Debug => Style::new().fg(Color::Magenta),
            Level::Trace => Style::new().fg(Color::Cyan),
        };
        style.paint(&label)
    }

    /// Format a record into the single line that [`Log::log`] writes.
    pub fn render(&self, record: &Record) -> String {
        let location = match record.level() {
            Level::Trace | Level::Debug => {
                let target = if record.target().is_empty() {
                    record.module_path().unwrap_or_default()
                } else {
                    record.target()
                };
                format!("[{}]@{target} ", self.timestamp())
            }
            _ => String::new(),
        };

        let msg = record.args().to_string();
        let msg = msg.trim_start_matches('\n');
        format!("{location}{}: {msg}", self.label(record.level()))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = self.render(record);
            let _ = writeln!(io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
