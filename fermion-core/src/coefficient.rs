//! Complex coefficients of operator terms.
//!
//! Coefficients print with the shortest representation that parses back to the same `f64`,
//! for example `0.5`, `-0.5i` or `0.25+0.5i`.

use derive_more::{Display, Error};
pub use num_complex::Complex64;

/// Coefficients with a smaller magnitude are treated as zero.
pub const COEFFICIENT_TOLERANCE: f64 = 1e-12;

#[derive(Debug, Display, Error, PartialEq, Eq, Default)]
#[display("expected a coefficient such as 0.5, -i or 0.25+0.5i")]
pub struct CoefficientParsingError;

#[must_use]
pub fn is_negligible(coefficient: Complex64) -> bool {
    coefficient.norm() < COEFFICIENT_TOLERANCE
}

#[must_use]
pub fn format_coefficient(coefficient: Complex64) -> String {
    // Adding zero turns -0.0 into 0.0.
    let real = coefficient.re + 0.0;
    let imaginary = coefficient.im + 0.0;
    if imaginary == 0.0 {
        return format!("{real}");
    }
    let imaginary_text = if imaginary == 1.0 {
        "i".to_string()
    } else if imaginary == -1.0 {
        "-i".to_string()
    } else {
        format!("{imaginary}i")
    };
    if real == 0.0 {
        imaginary_text
    } else if imaginary > 0.0 {
        format!("{real}+{imaginary_text}")
    } else {
        format!("{real}{imaginary_text}")
    }
}

pub fn parse_coefficient(text: &str) -> Result<Complex64, CoefficientParsingError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoefficientParsingError);
    }
    let Some(body) = text.strip_suffix('i') else {
        return parse_real(text).map(|real| Complex64::new(real, 0.0));
    };
    match imaginary_split(body) {
        Some(split) => {
            let real = parse_real(&body[..split])?;
            let imaginary = parse_imaginary(&body[split..])?;
            Ok(Complex64::new(real, imaginary))
        }
        None => Ok(Complex64::new(0.0, parse_imaginary(body)?)),
    }
}

/// Position of the sign that starts the imaginary part, skipping a leading sign and exponent signs.
fn imaginary_split(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    (1..bytes.len())
        .rev()
        .find(|&position| matches!(bytes[position], b'+' | b'-') && !matches!(bytes[position - 1], b'e' | b'E'))
}

fn parse_real(text: &str) -> Result<f64, CoefficientParsingError> {
    let is_sign = |character: char| matches!(character, '+' | '-');
    if text.starts_with(is_sign) && text[1..].starts_with(is_sign) {
        return Err(CoefficientParsingError);
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(CoefficientParsingError)
}

fn parse_imaginary(text: &str) -> Result<f64, CoefficientParsingError> {
    match text {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_real(text),
    }
}
