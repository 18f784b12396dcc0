//! Reporting sink — where scan narrative and tally text are sent.
//!
//! The scanner only decides *what* to say and how important it is; the sink
//! decides how that looks (colors on a terminal, a buffer in tests).

/// Visual weight of a reported line. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// Ordinary narrative text.
    Plain,
    /// Informational notice about the scan itself.
    Notice,
    /// Headline of the overall fault tally.
    Total,
    /// Faults tied to an abnormal shutdown.
    Critical,
    /// Faults not tied to any abnormal shutdown.
    Warning,
}

/// Receives (text, emphasis) pairs in the order they are produced.
pub trait ReportSink {
    fn emit(&mut self, text: &str, emphasis: Emphasis);

    /// Flush pending output and report the first write failure, if any.
    fn finish(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<F> ReportSink for F
where
    F: FnMut(&str, Emphasis),
{
    fn emit(&mut self, text: &str, emphasis: Emphasis) {
        self(text, emphasis)
    }
}
