use super::calculation::{Calculation, Operation};
use super::token::PaymentToken;
use crate::error::Result;
use async_trait::async_trait;

/// Computes an operation over two operands.
pub trait Calculator: Send + Sync {
    fn calculate(&self, operation: Operation, a: f64, b: f64) -> Calculation;
}

/// Output channel for human-readable payment messages.
pub trait PaymentReporter: Send + Sync {
    fn report(&self, line: &str) -> Result<()>;
}

#[async_trait]
pub trait PaymentTokenProvider: Send + Sync {
    async fn payment_token(&self, success: bool) -> Option<PaymentToken>;
}

pub type CalculatorBox = Box<dyn Calculator>;
pub type PaymentReporterBox = Box<dyn PaymentReporter>;
pub type PaymentTokenProviderBox = Box<dyn PaymentTokenProvider>;
