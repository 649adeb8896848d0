//! Small helpers for log-friendly error text.

use std::error::Error;

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a character boundary) with
/// an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Render an error with all of its sources, outermost first.
///
/// `reqwest` keeps the useful detail (DNS failure, refused connection, TLS
/// alert...) in the source chain rather than in the top-level message.
pub fn error_chain(e: &dyn Error) -> String {
    let mut rendered = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = inner.source();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn Error + 'static))
        }
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        // 'é' is two bytes; cutting at 3 would split the second one.
        assert_eq!(truncate_for_log("éééé", 3), "é…(+6 bytes)");
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let e = Layer {
            message: "error sending request",
            source: Some(Box::new(Layer {
                message: "connection refused",
                source: None,
            })),
        };
        assert_eq!(error_chain(&e), "error sending request: connection refused");
    }

    #[test]
    fn test_error_chain_skips_repeated_text() {
        let e = Layer {
            message: "dns error: no such host",
            source: Some(Box::new(Layer {
                message: "no such host",
                source: None,
            })),
        };
        assert_eq!(error_chain(&e), "dns error: no such host");
    }
}
