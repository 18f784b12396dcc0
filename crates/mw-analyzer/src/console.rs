//! Terminal rendering of scan output.

use std::io::{self, Write};

use owo_colors::OwoColorize;

use mw_log_scan::{Emphasis, ReportSink};

/// Writes report lines to a terminal-like writer, colored when enabled.
///
/// The first write error stops all further output and is returned by
/// [`ReportSink::finish`].
pub struct ConsoleSink<W: Write> {
    out: W,
    colored: bool,
    failed: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self {
            out,
            colored,
            failed: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()> {
        if !self.colored {
            return writeln!(self.out, "{text}");
        }
        match emphasis {
            Emphasis::Plain => writeln!(self.out, "{text}"),
            Emphasis::Notice => writeln!(self.out, "{}", text.cyan()),
            Emphasis::Total => writeln!(self.out, "{}", text.bold()),
            Emphasis::Critical => writeln!(self.out, "{}", text.bright_red().bold()),
            Emphasis::Warning => writeln!(self.out, "{}", text.yellow()),
        }
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn emit(&mut self, text: &str, emphasis: Emphasis) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = self.write_line(text, emphasis) {
            tracing::debug!(error = %e, "report output failed, suppressing the rest");
            self.failed = Some(e);
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        if let Some(e) = self.failed.take() {
            return Err(e);
        }
        self.out.flush()
    }
}
