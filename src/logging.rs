//! One JSON object per log record, written to the browser console (or stderr
//! off the web).

use log::{Level, LevelFilter, Log, Metadata, Record};
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;
/// Attribute on `<html>` that selects the log level.
pub const LEVEL_ATTRIBUTE: &str = "data-log-level";

static LOGGER: JsonLogger = JsonLogger;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("logger already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

#[derive(Serialize)]
struct LogLine<'a> {
    ts: u64,
    level: &'a str,
    target: &'a str,
    event: String,
}

struct JsonLogger;

impl Log for JsonLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = render_line(
            now_unix_millis(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

pub fn parse_level(raw: Option<&str>) -> LevelFilter {
    match raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => DEFAULT_LEVEL,
    }
}

pub fn init(level: LevelFilter) -> Result<(), LoggingError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

fn render_line(ts: u64, level: Level, target: &str, event: &str) -> String {
    let line = LogLine {
        ts,
        level: level.as_str(),
        target,
        event: event.to_string(),
    };
    serde_json::to_string(&line).unwrap_or_else(|_| event.to_string())
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}
