mod common;

use common::{FailingReporter, RecordingReporter, SpyCalculator};
use payment_api::application::notifier::PaymentNotifier;
use payment_api::domain::calculation::{Calculation, Operation};
use payment_api::error::PaymentError;

#[test]
fn test_calls_calculator_with_sum_and_arguments() {
    let calculator = SpyCalculator::new();
    let reporter = RecordingReporter::new();
    let notifier = PaymentNotifier::new(Box::new(calculator.clone()), Box::new(reporter));

    notifier.send_payment_request_to_api(100.0, 20.0).unwrap();

    assert_eq!(calculator.calls(), vec![(Operation::Sum, 100.0, 20.0)]);
}

#[test]
fn test_reports_stubbed_total() {
    let calculator = SpyCalculator::returning(Calculation::Value(10.0));
    let reporter = RecordingReporter::new();
    let notifier = PaymentNotifier::new(Box::new(calculator.clone()), Box::new(reporter.clone()));

    notifier.send_payment_request_to_api(100.0, 20.0).unwrap();

    assert_eq!(calculator.calls(), vec![(Operation::Sum, 100.0, 20.0)]);
    assert_eq!(reporter.lines(), vec!["The total is: 10".to_string()]);
}

#[test]
fn test_logs_total_120() {
    let reporter = RecordingReporter::new();
    let notifier = PaymentNotifier::new(Box::new(SpyCalculator::new()), Box::new(reporter.clone()));

    notifier.send_payment_request_to_api(100.0, 20.0).unwrap();

    assert_eq!(reporter.lines(), vec!["The total is: 120".to_string()]);
}

#[test]
fn test_logs_total_20() {
    let reporter = RecordingReporter::new();
    let notifier = PaymentNotifier::new(Box::new(SpyCalculator::new()), Box::new(reporter.clone()));

    notifier.send_payment_request_to_api(10.0, 10.0).unwrap();

    assert_eq!(reporter.lines(), vec!["The total is: 20".to_string()]);
}

#[test]
fn test_division_marker_is_reported_verbatim() {
    let reporter = RecordingReporter::new();
    let notifier = PaymentNotifier::new(
        Box::new(SpyCalculator::returning(Calculation::DivisionByZero)),
        Box::new(reporter.clone()),
    );

    notifier.send_payment_request_to_api(1.0, 2.0).unwrap();

    assert_eq!(reporter.lines(), vec!["The total is: Error".to_string()]);
}

#[test]
fn test_reporter_failure_propagates() {
    let notifier = PaymentNotifier::new(Box::new(SpyCalculator::new()), Box::new(FailingReporter));

    let result = notifier.send_payment_request_to_api(1.0, 2.0);
    assert!(matches!(result, Err(PaymentError::IoError(_))));
}
