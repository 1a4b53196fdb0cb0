use crate::domain::calculation::Operation;
use crate::domain::ports::{CalculatorBox, PaymentReporterBox};
use crate::error::Result;

/// Totals a payment request and reports it.
///
/// `PaymentNotifier` owns its calculator and output channel, so callers (and
/// tests) decide which implementations it talks to.
pub struct PaymentNotifier {
    calculator: CalculatorBox,
    reporter: PaymentReporterBox,
}

impl PaymentNotifier {
    /// Creates a new `PaymentNotifier`.
    ///
    /// # Arguments
    ///
    /// * `calculator` - Computes the total from amount and shipping.
    /// * `reporter` - Receives the `The total is: ...` line.
    pub fn new(calculator: CalculatorBox, reporter: PaymentReporterBox) -> Self {
        Self {
            calculator,
            reporter,
        }
    }

    /// Sums `total_amount` and `total_shipping` and reports the total.
    ///
    /// The calculator is invoked exactly once and exactly one line is reported.
    pub fn send_payment_request_to_api(
        &self,
        total_amount: f64,
        total_shipping: f64,
    ) -> Result<()> {
        let total = self
            .calculator
            .calculate(Operation::Sum, total_amount, total_shipping);
        tracing::debug!(total_amount, total_shipping, %total, "payment total computed");

        self.reporter.report(&format!("The total is: {}", total))
    }
}
