//! Line-oriented observation output.
//!
//! Meters report through an [`ObservationSink`] rather than writing to
//! stdout directly, so test suites can capture and assert on the exact
//! lines a simulation produces.

/// Destination for meter observation lines.
pub trait ObservationSink {
    /// Record one observation line.
    fn record(&mut self, line: &str);
}

/// The default production sink: one line per observation on stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl ObservationSink for StdoutSink {
    fn record(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Capture sink for tests: every line is pushed onto the vector.
impl ObservationSink for Vec<String> {
    fn record(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
