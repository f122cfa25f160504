//! Expression accumulator
//!
//! Two text buffers: `total` holds everything committed by an operator,
//! `current` holds the term being typed (or the last result).

use crate::evaluator::{format_compact, format_result, Evaluate, EvalError};
use crate::keypad::{Button, Operator};
use padcore::safety::truncate_chars;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Shown in place of a result when evaluation fails.
pub const INVALID: &str = "Invalid";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Expression {
    total: String,
    current: String,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn total(&self) -> &str {
        &self.total
    }

    #[cfg(test)]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Append a digit or decimal point to the current term.
    pub fn push_value(&mut self, value: &str) {
        self.current.push_str(value);
    }

    /// Commit the current term and the operator to the total.
    pub fn push_operator(&mut self, op: Operator) {
        self.current.push(op.ascii());
        self.total.push_str(&self.current);
        self.current.clear();
    }

    pub fn clear(&mut self) {
        self.total.clear();
        self.current.clear();
    }

    pub fn square(&mut self, evaluator: &dyn Evaluate) {
        self.replace_current(evaluator, |x| x * x);
    }

    pub fn square_root(&mut self, evaluator: &dyn Evaluate) {
        self.replace_current(evaluator, f64::sqrt);
    }

    fn replace_current(&mut self, evaluator: &dyn Evaluate, f: impl FnOnce(f64) -> f64) {
        let result = evaluator.evaluate(&self.current).and_then(|x| {
            let y = f(x);
            if y.is_finite() {
                Ok(y)
            } else {
                Err(EvalError::NonFinite)
            }
        });
        self.current = match result {
            Ok(y) => format_result(y),
            Err(err) => {
                warn!(term = %self.current, %err, "unary operation failed");
                INVALID.to_string()
            }
        };
    }

    /// Commit the current term and evaluate the whole expression.
    ///
    /// On failure the total keeps the rejected text so it stays visible.
    pub fn evaluate(&mut self, evaluator: &dyn Evaluate) {
        self.total.push_str(&self.current);
        match evaluator.evaluate(&self.total) {
            Ok(value) => {
                self.current = format_result(value);
                debug!(expression = %self.total, result = %self.current, "evaluated");
                self.total.clear();
            }
            Err(err) => {
                warn!(expression = %self.total, %err, "invalid expression");
                self.current = INVALID.to_string();
            }
        }
    }

    /// Apply one button press.
    pub fn apply(&mut self, button: Button, evaluator: &dyn Evaluate) {
        match button {
            Button::Digit(d) => self.push_value(&d.to_string()),
            Button::Point => self.push_value("."),
            Button::Operator(op) => self.push_operator(op),
            Button::Clear => self.clear(),
            Button::Square => self.square(evaluator),
            Button::SquareRoot => self.square_root(evaluator),
            Button::Equals => self.evaluate(evaluator),
        }
    }

    /// Total line with operators spelled as display symbols.
    pub fn total_label(&self) -> String {
        let mut label = String::with_capacity(self.total.len() * 2);
        for c in self.total.chars() {
            match Operator::from_ascii(c) {
                Some(op) => {
                    label.push(' ');
                    label.push_str(op.symbol());
                    label.push(' ');
                }
                None => label.push(c),
            }
        }
        label
    }

    /// Current term as it fits on the display.
    ///
    /// Cutting off trailing decimals is fine, but a number whose cut would
    /// change its size is shown in exponent form instead.
    pub fn current_label(&self, limit: usize) -> Cow<'_, str> {
        let cut = truncate_chars(&self.current, limit);
        if cut.len() == self.current.len() {
            return Cow::Borrowed(cut);
        }
        let Ok(value) = self.current.parse::<f64>() else {
            return Cow::Borrowed(cut);
        };
        let close_enough = cut
            .parse::<f64>()
            .map(|shown| (shown - value).abs() <= value.abs() * 1e-6)
            .unwrap_or(false);
        if close_enough {
            return Cow::Borrowed(cut);
        }
        match format_compact(value, limit) {
            Some(compact) => Cow::Owned(compact),
            None => Cow::Borrowed(cut),
        }
    }
}
