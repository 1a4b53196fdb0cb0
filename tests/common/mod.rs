#![allow(dead_code)]

use payment_api::domain::calculation::{Calculation, Operation, calculate};
use payment_api::domain::ports::{Calculator, PaymentReporter};
use payment_api::error::Result;
use std::sync::{Arc, Mutex};

/// Calculator double that records every call.
///
/// With `returning` set it acts as a stub; otherwise it delegates to the real
/// half-up calculation.
#[derive(Clone, Default)]
pub struct SpyCalculator {
    calls: Arc<Mutex<Vec<(Operation, f64, f64)>>>,
    returning: Option<Calculation>,
}

impl SpyCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(result: Calculation) -> Self {
        Self {
            calls: Arc::default(),
            returning: Some(result),
        }
    }

    pub fn calls(&self) -> Vec<(Operation, f64, f64)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Calculator for SpyCalculator {
    fn calculate(&self, operation: Operation, a: f64, b: f64) -> Calculation {
        self.calls.lock().unwrap().push((operation, a, b));
        self.returning.unwrap_or_else(|| calculate(operation, a, b))
    }
}

/// Reporter double that keeps reported lines in memory.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl PaymentReporter for RecordingReporter {
    fn report(&self, line: &str) -> Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// Reporter double whose output channel is always broken.
pub struct FailingReporter;

impl PaymentReporter for FailingReporter {
    fn report(&self, _line: &str) -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into())
    }
}
