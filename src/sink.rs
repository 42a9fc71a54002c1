//! Execution sinks.
//!
//! The book reports every fill synchronously, in trade order, through an
//! [`ExecutionSink`] it owns. A sink may fail; the error is handed back to
//! whoever submitted the order (see [`BookError::Sink`](crate::BookError::Sink)).
//!
//! A sink must not submit orders to the book that is calling it.
//!
//! ## Provided sinks
//!
//! - [`LogSink`]: writes each fill through the `log` facade (the default)
//! - [`RecordingSink`]: keeps every fill in memory
//! - any `FnMut(&Execution) -> Result<(), SinkError>` closure

use crate::error::SinkError;
use crate::types::Execution;

/// Receives one call per fill, before `submit_limit_order` returns.
pub trait ExecutionSink {
    fn notify_execution(&mut self, execution: &Execution) -> Result<(), SinkError>;
}

impl<F> ExecutionSink for F
where
    F: FnMut(&Execution) -> Result<(), SinkError>,
{
    #[inline]
    fn notify_execution(&mut self, execution: &Execution) -> Result<(), SinkError> {
        self(execution)
    }
}

// ============================================================================
// LogSink
// ============================================================================

/// Default sink: one `info` record per fill under the `tick_book::execution`
/// target, e.g. `EXECUTE Kevin BUY Tom 100 @ 200`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ExecutionSink for LogSink {
    fn notify_execution(&mut self, execution: &Execution) -> Result<(), SinkError> {
        log::info!(target: "tick_book::execution", "{}", execution);
        Ok(())
    }
}

// ============================================================================
// RecordingSink
// ============================================================================

/// Keeps every reported fill, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    executions: Vec<Execution>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn executions(&self) -> &[Execution] {
        &self.executions
    }

    pub fn len(&self) -> usize {
        self.executions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executions.is_empty()
    }

    /// Hand back everything recorded so far and start over
    pub fn take(&mut self) -> Vec<Execution> {
        std::mem::take(&mut self.executions)
    }
}

impl ExecutionSink for RecordingSink {
    fn notify_execution(&mut self, execution: &Execution) -> Result<(), SinkError> {
        self.executions.push(execution.clone());
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn sample() -> Execution {
        Execution::new("Kevin".into(), "Tom".into(), 200, 100, 1, 2, Side::Sell)
    }

    #[test]
    fn test_recording_sink_take() {
        let mut sink = RecordingSink::new();
        sink.notify_execution(&sample()).unwrap();
        sink.notify_execution(&sample()).unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = 0;
        {
            let mut sink = |exec: &Execution| -> Result<(), SinkError> {
                assert_eq!(exec.as_tuple(), ("Kevin", "Tom", 200, 100));
                seen += 1;
                Ok(())
            };
            sink.notify_execution(&sample()).unwrap();
        }
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_log_sink_never_fails() {
        let mut sink = LogSink;
        assert!(sink.notify_execution(&sample()).is_ok());
    }
}
