#![warn(missing_docs)]
//! Test fixtures and deterministic capture helpers for layout tests.

mod fixtures;
mod sink;
mod snapshot;

use anyhow::Result;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use fixtures::*;
pub use sink::*;
pub use snapshot::*;

/// Tolerance used by the floating-point asserts in this crate.
pub const TOLERANCE: f64 = 1e-6;

/// Primary event record captured by layout tests.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a> {
    /// Monotonic pass counter.
    pub pass: u64,
    /// Human-readable kind label.
    pub kind: &'a str,
    /// Free-form payload (usually a report digest).
    pub payload: &'a str,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append a serializable record to the log.
    pub fn write<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}

/// Assert two scalars agree within [`TOLERANCE`].
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "expected {expected}, got {actual} (tolerance {TOLERANCE})"
    );
}

/// Assert two vectors agree component-wise within [`TOLERANCE`].
#[track_caller]
pub fn assert_vec_close(actual: glam::DVec3, expected: glam::DVec3) {
    assert!(
        (actual - expected).abs().max_element() <= TOLERANCE,
        "expected {expected}, got {actual} (tolerance {TOLERANCE})"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn jsonl_sink_writes_one_line_per_record() {
        let path = std::env::temp_dir().join(format!(
            "modlayout-events-{}.jsonl",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let mut sink = JsonlSink::create(&path).expect("sink create");
        for pass in 0..3 {
            sink.write(&EventRecord {
                pass,
                kind: "Layout",
                payload: "ok",
            })
            .expect("write succeeds");
        }
        let contents = fs::read_to_string(&path).expect("file readable");
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.contains("\"kind\":\"Layout\""));
        let _ = fs::remove_file(&path);
    }

    #[test]
    #[should_panic(expected = "tolerance")]
    fn assert_close_rejects_large_differences() {
        assert_close(1.0, 1.1);
    }
}
