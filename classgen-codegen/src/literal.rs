//! PHP literal export for constant values.
//!
//! Output matches `var_export()` so generated constants read the way PHP
//! itself would print them.

use classgen_ir::ConstantValue;

/// Decimal exponents outside `-4..15` switch floats to scientific notation.
const SCIENTIFIC_MIN_EXP: i32 = -4;
const SCIENTIFIC_MAX_EXP: i32 = 15;

/// Render a constant value as a PHP literal.
pub fn export_literal(value: &ConstantValue) -> String {
    match value {
        ConstantValue::String(s) => export_string(s),
        ConstantValue::Int(i) => export_int(*i),
        ConstantValue::Float(f) => export_float(*f),
        ConstantValue::Bool(true) => "true".to_string(),
        ConstantValue::Bool(false) => "false".to_string(),
        ConstantValue::Null => "NULL".to_string(),
    }
}

/// Single-quoted string with `\` and `'` escaped.
///
/// NUL bytes cannot appear in a single-quoted literal, so they are spliced
/// in as `' . "\0" . '`.
pub fn export_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\0' => out.push_str("' . \"\\0\" . '"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Decimal integer. `i64::MIN` has no positive counterpart in PHP, so it is
/// written as an expression.
pub fn export_int(i: i64) -> String {
    if i == i64::MIN {
        format!("{}-1", i64::MIN + 1)
    } else {
        i.to_string()
    }
}

/// Shortest round-trip float that always reads back as a float.
pub fn export_float(f: f64) -> String {
    if f.is_nan() {
        return "NAN".to_string();
    }
    if f.is_infinite() {
        let token = if f.is_sign_positive() { "INF" } else { "-INF" };
        return token.to_string();
    }

    let scientific = format!("{:e}", f);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if !(SCIENTIFIC_MIN_EXP..SCIENTIFIC_MAX_EXP).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}E{}{}",
            with_fraction(mantissa.to_string()),
            sign,
            exponent.abs()
        );
    }

    with_fraction(f.to_string())
}

fn with_fraction(digits: String) -> String {
    if digits.contains('.') {
        digits
    } else {
        digits + ".0"
    }
}
