use crate::domain::ports::PaymentReporter;
use crate::error::Result;
use std::io::Write;
use std::sync::Mutex;

/// Writes each reported line, newline-terminated, to an `io::Write` sink.
///
/// The binary wraps stdout; tests wrap an in-memory buffer.
pub struct WriterReporter<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> PaymentReporter for WriterReporter<W> {
    fn report(&self, line: &str) -> Result<()> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Emits reported lines as `info` events instead of writing them out.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl PaymentReporter for TracingReporter {
    fn report(&self, line: &str) -> Result<()> {
        tracing::info!(target: "payment", "{}", line);
        Ok(())
    }
}
