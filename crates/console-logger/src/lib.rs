//! Console Logger
//!
//! `tracing` subscriber for the browser: fmt lines without timestamps or
//! ANSI colors, routed to `console.error` / `console.warn` / `console.info`
//! / `console.debug` by level. Off wasm the lines go to stderr.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `KCONNECT_LOG` is unset or invalid
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Destination of one formatted line
pub type Sink = fn(ConsoleMethod, &str);

/// Browser console function a line is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Debug,
        }
    }
}

/// `MakeWriter` handing out one buffered writer per event
#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self { sink: write_to_console }
    }
}

impl ConsoleMakeWriter {
    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::from(*meta.level()), self.sink)
    }
}

/// Collects one event and emits it as a single console call on drop
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
    sink: Sink,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod, sink: Sink) -> Self {
        Self { method, buffer: Vec::new(), sink }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        (self.sink)(self.method, line.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn write_to_console(method: ConsoleMethod, line: &str) {
    use web_sys::console;
    let value = wasm_bindgen::JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => console::error_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Info => console::info_1(&value),
        ConsoleMethod::Debug => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_to_console(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

/// Install the global subscriber.
///
/// The filter comes from `KCONNECT_LOG` at build time, e.g.
/// `KCONNECT_LOG=kconnect_core=debug,info trunk build`.
pub fn init_logger(app_name: &str) -> Result<(), TryInitError> {
    let directive = option_env!("KCONNECT_LOG").unwrap_or(DEFAULT_DIRECTIVE);
    let env_filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(ConsoleMakeWriter::default())
                .with_ansi(false)
                .with_target(true)
                .without_time(),
        )
        .try_init()?;

    tracing::info!("{} starting", app_name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Write;

    thread_local! {
        static CAPTURED: RefCell<Vec<(ConsoleMethod, String)>> = RefCell::new(Vec::new());
    }

    fn capture(method: ConsoleMethod, line: &str) {
        CAPTURED.with(|c| c.borrow_mut().push((method, line.to_string())));
    }

    fn take_captured() -> Vec<(ConsoleMethod, String)> {
        CAPTURED.with(|c| std::mem::take(&mut *c.borrow_mut()))
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(ConsoleMethod::from(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::from(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_writer_emits_one_trimmed_line_on_drop() {
        {
            let mut writer = ConsoleWriter::new(ConsoleMethod::Warn, capture);
            write!(writer, "WARN kconnect: ").unwrap();
            writeln!(writer, "save failed").unwrap();
        }
        assert_eq!(take_captured(), vec![(ConsoleMethod::Warn, "WARN kconnect: save failed".to_string())]);
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        drop(ConsoleWriter::new(ConsoleMethod::Info, capture));
        assert!(take_captured().is_empty());
    }

    #[test]
    fn test_subscriber_routes_by_level() {
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(ConsoleMakeWriter::with_sink(capture))
                .with_ansi(false)
                .without_time(),
        );
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("boom");
            tracing::info!("hello");
        });

        let lines = take_captured();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, ConsoleMethod::Error);
        assert!(lines[0].1.contains("boom"));
        assert_eq!(lines[1].0, ConsoleMethod::Info);
        assert!(lines[1].1.contains("hello"));
    }
}
