//! Number rendering shared by CLI output and HTTP responses.

/// Formats `x` the way a JavaScript `Number` converts to a string.
///
/// Shortest round-trip digits; plain notation for magnitudes in
/// `[1e-6, 1e21)`, exponent notation with an explicit sign otherwise.
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`, and
/// negative zero prints as `0`.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    if (1e-6..1e21).contains(&x.abs()) {
        format!("{}", x)
    } else {
        let exp = format!("{:e}", x);
        if exp.contains("e-") {
            exp
        } else {
            exp.replacen('e', "e+", 1)
        }
    }
}
