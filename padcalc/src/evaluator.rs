//! Delegated expression evaluation
//!
//! The calculator never parses arithmetic itself. It hands the accumulated
//! text to an [`Evaluate`] implementation and only looks at the number that
//! comes back.

use padcore::safety::catch_or;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,
    #[error("evaluator rejected expression: {0}")]
    Rejected(String),
    #[error("result is not a real number: {0}")]
    NotANumber(String),
    #[error("result is not finite")]
    NonFinite,
    #[error("evaluator panicked")]
    Panicked,
}

pub trait Evaluate {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError>;
}

/// Evaluator backed by the `num_parser` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumParser;

impl Evaluate for NumParser {
    fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(EvalError::Empty);
        }

        let outcome = catch_or(None, || {
            Some(
                num_parser::eval(expression)
                    .map(|value| value.to_string())
                    .map_err(|err| err.to_string()),
            )
        });

        let rendered = match outcome {
            Some(Ok(rendered)) => rendered,
            Some(Err(message)) => return Err(EvalError::Rejected(message)),
            None => return Err(EvalError::Panicked),
        };

        let value: f64 = rendered
            .trim()
            .parse()
            .map_err(|_| EvalError::NotANumber(rendered.clone()))?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite)
        }
    }
}

/// Text stored for a result.
///
/// Always plain decimal notation so the text can be fed back into the
/// evaluator as part of the next expression.
pub fn format_result(n: f64) -> String {
    // -0.0 prints as "0"
    let n = if n == 0.0 { 0.0 } else { n };

    if n == n.floor() {
        if n.abs() < 1e15 {
            format!("{}", n as i64)
        } else {
            // Past i64-safe range; the ".0" keeps it a float literal.
            format!("{:.1}", n)
        }
    } else if n.abs() < 1e-6 {
        format!("{}", n)
    } else {
        let s = format!("{:.10}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Shortest exponent form of `n` that fits in `max_chars`, for display only.
pub fn format_compact(n: f64, max_chars: usize) -> Option<String> {
    (0..=max_chars)
        .rev()
        .map(|precision| {
            let s = format!("{:.*e}", precision, n);
            match s.split_once('e') {
                Some((mantissa, exponent)) if mantissa.contains('.') => {
                    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                    format!("{}e{}", mantissa, exponent)
                }
                _ => s,
            }
        })
        .find(|s| s.chars().count() <= max_chars)
}
