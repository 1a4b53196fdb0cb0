use super::format::format_number;
use crate::error::PaymentError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Arithmetic operation applied to a pair of rounded operands.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Sum,
    Subtract,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Sum => "SUM",
            Operation::Subtract => "SUBTRACT",
            Operation::Divide => "DIVIDE",
        }
    }
}

impl FromStr for Operation {
    type Err = PaymentError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "SUM" => Ok(Operation::Sum),
            "SUBTRACT" => Ok(Operation::Subtract),
            "DIVIDE" => Ok(Operation::Divide),
            other => Err(PaymentError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a calculation.
///
/// Division by a divisor that rounds to zero does not fail; it yields
/// `DivisionByZero`, rendered as the literal `Error`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Calculation {
    Value(f64),
    DivisionByZero,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calculation::Value(v) => f.write_str(&format_number(*v)),
            Calculation::DivisionByZero => f.write_str("Error"),
        }
    }
}

// Numbers serialize as numbers, the division marker as the string "Error".
impl Serialize for Calculation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Calculation::Value(v) => serializer.serialize_f64(*v),
            Calculation::DivisionByZero => serializer.serialize_str("Error"),
        }
    }
}

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// `1.5` becomes `2` and `-1.5` becomes `-1`. This differs from `f64::round`
/// (ties away from zero) and from banker's rounding at negative halves.
pub fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    // Not (x + 0.5).floor(): that rounds 0.49999999999999994 up to 1.
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Applies `operation` to `a` and `b` after rounding each one half-up.
pub fn calculate(operation: Operation, a: f64, b: f64) -> Calculation {
    let a = round_half_up(a);
    let b = round_half_up(b);

    match operation {
        Operation::Sum => Calculation::Value(a + b),
        Operation::Subtract => Calculation::Value(a - b),
        Operation::Divide => {
            if b == 0.0 {
                Calculation::DivisionByZero
            } else {
                Calculation::Value(a / b)
            }
        }
    }
}

/// String-tag entry point. Unknown tags produce no result rather than an error.
pub fn calculate_number(tag: &str, a: f64, b: f64) -> Option<Calculation> {
    tag.parse::<Operation>()
        .ok()
        .map(|operation| calculate(operation, a, b))
}
