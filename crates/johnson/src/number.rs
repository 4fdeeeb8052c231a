//! Number formatting and parsing.
//!
//! Floats render as the shortest decimal string that round-trips to the
//! same IEEE-754 double, in the notation the JSON-RPC wire format uses:
//! plain decimal for `1e-3 <= |d| < 1e7`, always keeping at least one
//! fractional digit (`3.5`, `10.0`, `0.001`), and uppercase-`E` scientific
//! outside that range (`2.4E16`, `1.0E7`, `3.6E-19`).

use crate::error::JohnsonError;
use crate::value::RpcValue;

pub fn format_integer(int: i64) -> String {
    int.to_string()
}

/// Canonical textual form of a finite double.
///
/// Callers must reject non-finite values first; the encoder maps those to
/// `UnsupportedValueType`.
pub fn format_float(float: f64) -> String {
    if float == 0.0 {
        return if float.is_sign_negative() {
            "-0.0".to_string()
        } else {
            "0.0".to_string()
        };
    }
    // `{:e}` already yields the shortest round-trip digits; only the
    // notation has to be adjusted.
    let sci = format!("{:e}", float);
    let (mantissa, exp_str) = match sci.split_once('e') {
        Some(pair) => pair,
        None => (sci.as_str(), "0"),
    };
    let exp: i32 = exp_str.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let body = if (-3..7).contains(&exp) {
        format_plain(&digits, exp)
    } else {
        format_scientific(&digits, exp)
    };
    if mantissa.starts_with('-') {
        format!("-{body}")
    } else {
        body
    }
}

fn format_plain(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        format!("0.{zeros}{digits}")
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            format!("{digits:0<int_len$}.0")
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    }
}

fn format_scientific(digits: &str, exp: i32) -> String {
    let (head, tail) = digits.split_at(1);
    if tail.is_empty() {
        format!("{head}.0E{exp}")
    } else {
        format!("{head}.{tail}E{exp}")
    }
}

/// Parse a numeric token: `Integer` when it has no fraction or exponent
/// and fits i64, `Float` otherwise.
pub fn parse_number(token: &str) -> Result<RpcValue, JohnsonError> {
    if !is_number_token(token) {
        return Err(JohnsonError::MalformedNumber(token.to_string()));
    }
    if !token.contains(['.', 'e', 'E']) {
        if let Ok(int) = token.parse::<i64>() {
            return Ok(RpcValue::Integer(int));
        }
    }
    token
        .parse::<f64>()
        .map(RpcValue::Float)
        .map_err(|_| JohnsonError::MalformedNumber(token.to_string()))
}

/// JSON number grammar check; keeps `f64::from_str` extras like `inf` and
/// `NaN` out.
fn is_number_token(token: &str) -> bool {
    let b = token.as_bytes();
    let len = b.len();
    let mut x = 0;
    if x < len && b[x] == b'-' {
        x += 1;
    }
    let int_start = x;
    while x < len && b[x].is_ascii_digit() {
        x += 1;
    }
    if x == int_start {
        return false;
    }
    if x < len && b[x] == b'.' {
        x += 1;
        let frac_start = x;
        while x < len && b[x].is_ascii_digit() {
            x += 1;
        }
        if x == frac_start {
            return false;
        }
    }
    if x < len && (b[x] == b'e' || b[x] == b'E') {
        x += 1;
        if x < len && (b[x] == b'+' || b[x] == b'-') {
            x += 1;
        }
        let exp_start = x;
        while x < len && b[x].is_ascii_digit() {
            x += 1;
        }
        if x == exp_start {
            return false;
        }
    }
    x == len
}
