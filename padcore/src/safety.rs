//! Safety helpers for the calculator.
//!
//! The display truncates text that may contain multi-byte symbols, and the
//! delegated evaluator runs arbitrary user text. Both are guarded here.

/// The first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte_pos, _)) => &s[..byte_pos],
        None => s,
    }
}

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic.
pub fn catch_or<T>(fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(%message, "caught panic, recovered");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("123456789012345", 11), "12345678901");
        assert_eq!(truncate_chars("Invalid", 11), "Invalid");
        assert_eq!(truncate_chars("√x×÷", 2), "√x");
        assert_eq!(truncate_chars("", 11), "");
        assert_eq!(truncate_chars("42", 0), "");
        // '÷' is 2 bytes; the cut lands after it, not inside it
        assert_eq!(truncate_chars("8÷2", 2), "8÷");
    }

    #[test]
    fn test_catch_or_passes_value_through() {
        assert_eq!(catch_or(0, || 7), 7);
    }

    #[test]
    fn test_catch_or_recovers_from_panic() {
        let value = catch_or(None, || -> Option<u8> { panic!("boom") });
        assert_eq!(value, None);
    }
}
