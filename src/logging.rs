//! A plain-text logger for the `log` crate.
//!
//! The library itself only emits records through the `log` facade. Binaries
//! and tests that want to see them can install [`GridLogger`]:
//!
//! ```rust,no_run
//! use log::LevelFilter;
//! use termgrid::logging::GridLogger;
//!
//! GridLogger::new()
//!     .level(LevelFilter::Debug)
//!     .show_path(false)
//!     .init()
//!     .ok();
//! ```
//!
//! Optional tracing integration is available via `GridTracingLayer` when the
//! `tracing` feature is enabled.

use std::io::{self, Write};
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::style::Align;
use crate::sync::lock_recover;
use crate::text::pad;

/// Width the level name is padded to.
const LEVEL_WIDTH: usize = 5;

/// Logger writing one line per record: time, level, message and source path.
///
/// `GridLogger` implements `Log`, which requires `Sync`. The sink and the
/// repeated-time tracker are guarded by mutexes with poison recovery.
pub struct GridLogger {
    sink: Mutex<Box<dyn Write + Send>>,
    level: LevelFilter,
    show_time: bool,
    omit_repeated_times: bool,
    show_level: bool,
    show_path: bool,
    time_format: OwnedFormatItem,
    last_time: Mutex<Option<String>>,
}

impl Default for GridLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl GridLogger {
    /// Create a logger writing to stderr with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| OwnedFormatItem::Compound(Box::default()));
        Self {
            sink: Mutex::new(Box::new(writer)),
            level: LevelFilter::Info,
            show_time: true,
            omit_repeated_times: true,
            show_level: true,
            show_path: true,
            time_format,
            last_time: Mutex::new(None),
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Blank out a timestamp equal to the previous one.
    #[must_use]
    pub fn omit_repeated_times(mut self, omit: bool) -> Self {
        self.omit_repeated_times = omit;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the trailing `file:line`.
    #[must_use]
    pub fn show_path(mut self, show: bool) -> Self {
        self.show_path = show;
        self
    }

    /// Override the time format (`time` format description, version 2).
    /// Invalid descriptions leave the current format in place.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            let time_str = self.format_time();
            if self.omit_repeated_times {
                let mut last = lock_recover(&self.last_time);
                if last.as_deref() == Some(time_str.as_str()) {
                    line.push_str(&" ".repeat(time_str.len()));
                } else {
                    line.push_str(&time_str);
                    *last = Some(time_str);
                }
            } else {
                line.push_str(&time_str);
            }
            line.push(' ');
        }

        if self.show_level {
            line.push_str(&pad(record.level().as_str(), LEVEL_WIDTH, Align::Left));
            line.push(' ');
        }

        line.push_str(&record.args().to_string());

        if self.show_path
            && let Some(path) = record.file()
        {
            line.push(' ');
            line.push_str(path);
            if let Some(line_no) = record.line() {
                line.push(':');
                line.push_str(&line_no.to_string());
            }
        }

        line
    }

    fn write_line(&self, line: &str) {
        let mut sink = lock_recover(&self.sink);
        // Write errors are dropped.
        let _ = writeln!(sink, "{line}");
    }
}

impl Log for GridLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_record(record);
        self.write_line(&line);
    }

    fn flush(&self) {
        let _ = lock_recover(&self.sink).flush();
    }
}

#[cfg(feature = "tracing")]
mod tracing_integration {
    use super::GridLogger;
    use log::Level;
    use std::fmt::Debug;

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level as TracingLevel, Subscriber};
    use tracing_subscriber::{Layer, layer::Context};

    /// Tracing layer that formats events with a [`GridLogger`].
    pub struct GridTracingLayer {
        logger: GridLogger,
    }

    impl GridTracingLayer {
        /// Create a layer backed by a default `GridLogger`.
        #[must_use]
        pub fn new() -> Self {
            Self {
                logger: GridLogger::new(),
            }
        }

        /// Use an existing logger configuration.
        #[must_use]
        pub fn with_logger(logger: GridLogger) -> Self {
            Self { logger }
        }

        /// Install as the global tracing subscriber.
        ///
        /// # Errors
        ///
        /// Fails if a global subscriber is already set.
        pub fn init(self) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
            use tracing_subscriber::prelude::*;

            let subscriber = tracing_subscriber::registry().with(self);
            tracing::subscriber::set_global_default(subscriber)
        }
    }

    impl Default for GridTracingLayer {
        fn default() -> Self {
            Self::new()
        }
    }

    #[derive(Default)]
    struct EventVisitor {
        message: Option<String>,
        fields: Vec<(String, String)>,
    }

    impl Visit for EventVisitor {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.record(field, value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
            self.record(field, format!("{value:?}"));
        }
    }

    impl EventVisitor {
        fn record(&mut self, field: &Field, value: String) {
            if field.name() == "message" {
                self.message = Some(value);
            } else {
                self.fields.push((field.name().to_string(), value));
            }
        }

        fn into_message(self) -> String {
            let mut message = self.message.unwrap_or_default();
            for (key, value) in self.fields {
                if !message.is_empty() {
                    message.push(' ');
                }
                message.push_str(&key);
                message.push('=');
                message.push_str(&value);
            }
            message
        }
    }

    impl<S> Layer<S> for GridTracingLayer
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let metadata = event.metadata();
            let level = map_tracing_level(*metadata.level());
            if level > self.logger.level {
                return;
            }

            let mut visitor = EventVisitor::default();
            event.record(&mut visitor);
            let message = visitor.into_message();

            let args = format_args!("{message}");
            let record = log::Record::builder()
                .args(args)
                .level(level)
                .target(metadata.target())
                .file(metadata.file())
                .line(metadata.line())
                .module_path(metadata.module_path())
                .build();

            let line = self.logger.format_record(&record);
            self.logger.write_line(&line);
        }
    }

    fn map_tracing_level(level: TracingLevel) -> Level {
        match level {
            TracingLevel::TRACE => Level::Trace,
            TracingLevel::DEBUG => Level::Debug,
            TracingLevel::INFO => Level::Info,
            TracingLevel::WARN => Level::Warn,
            TracingLevel::ERROR => Level::Error,
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::logging::tests::SharedBuffer;
        use tracing_subscriber::prelude::*;

        #[test]
        fn test_map_tracing_level() {
            assert_eq!(map_tracing_level(TracingLevel::TRACE), Level::Trace);
            assert_eq!(map_tracing_level(TracingLevel::DEBUG), Level::Debug);
            assert_eq!(map_tracing_level(TracingLevel::INFO), Level::Info);
            assert_eq!(map_tracing_level(TracingLevel::WARN), Level::Warn);
            assert_eq!(map_tracing_level(TracingLevel::ERROR), Level::Error);
        }

        #[test]
        fn test_layer_forwards_events() {
            let buffer = SharedBuffer::default();
            let logger = GridLogger::with_writer(buffer.clone())
                .show_time(false)
                .show_path(false);
            let subscriber =
                tracing_subscriber::registry().with(GridTracingLayer::with_logger(logger));

            tracing::subscriber::with_default(subscriber, || {
                tracing::info!(columns = 3, "rendered");
                tracing::debug!("filtered out");
            });

            assert_eq!(buffer.contents(), "INFO  rendered columns=3\n");
        }
    }
}

#[cfg(feature = "tracing")]
pub use tracing_integration::GridTracingLayer;
