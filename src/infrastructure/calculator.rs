use crate::domain::calculation::{Calculation, Operation, calculate};
use crate::domain::ports::Calculator;

/// Default calculator: rounds both operands half-up, then applies the operation.
///
/// Stateless, so it is `Copy` and safe to share across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundingCalculator;

impl Calculator for RoundingCalculator {
    fn calculate(&self, operation: Operation, a: f64, b: f64) -> Calculation {
        calculate(operation, a, b)
    }
}
