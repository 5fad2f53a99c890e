//! Token-level value interpretation
//!
//! Configuration entries and definitions carry free-form tokens; this module
//! interprets each token as the most specific literal it matches, falling
//! back to the raw string.

use crate::models::{Scalar, Value};

/// Parse one token as the most specific literal it matches
///
/// Boolean literals win over numbers and integers over floats. Words that
/// are not literals stay strings, including `inf` and `nan`: a float parse
/// is only attempted when the token looks numeric.
pub fn parse_scalar(token: &str) -> Scalar {
    match token {
        "true" | "True" => return Scalar::Bool(true),
        "false" | "False" => return Scalar::Bool(false),
        _ => {}
    }

    if let Ok(n) = token.parse::<i64>() {
        return Scalar::Int(n);
    }

    if looks_numeric(token) {
        if let Ok(x) = token.parse::<f64>() {
            return Scalar::Float(x);
        }
    }

    Scalar::Str(token.to_string())
}

/// Parse a whitespace-separated entry value
///
/// One token yields a scalar, several a list. An empty input yields the
/// empty string scalar so bare keys keep a value.
pub fn parse_value(text: &str) -> Value {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Value::Scalar(Scalar::Str(String::new())),
        [token] => Value::Scalar(parse_scalar(token)),
        tokens => Value::List(tokens.iter().map(|token| parse_scalar(token)).collect()),
    }
}

// Rust's float parser accepts words like `inf` and `nan` that the
// configuration format treats as plain strings, so only tokens with a
// numeric-looking first character get a float parse.
fn looks_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == '.')
}
