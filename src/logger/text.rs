//! Infallible conversion of message values into log text

use std::borrow::Cow;
use std::fmt;

/// Rendered for a missing message
pub const NULL_TEXT: &str = "null";

/// Message text accepted by every logging entry point
///
/// `None` converts to the literal `null`, so a missing value is visible in the
/// console instead of producing an empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogText(String);

impl LogText {
    /// Get the converted text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the converted text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LogText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LogText {
    fn from(value: &str) -> Self {
        LogText(value.to_string())
    }
}

impl From<String> for LogText {
    fn from(value: String) -> Self {
        LogText(value)
    }
}

impl From<&String> for LogText {
    fn from(value: &String) -> Self {
        LogText(value.clone())
    }
}

impl From<Cow<'_, str>> for LogText {
    fn from(value: Cow<'_, str>) -> Self {
        LogText(value.into_owned())
    }
}

impl From<fmt::Arguments<'_>> for LogText {
    fn from(value: fmt::Arguments<'_>) -> Self {
        LogText(value.to_string())
    }
}

impl<T: Into<LogText>> From<Option<T>> for LogText {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => LogText(NULL_TEXT.to_string()),
        }
    }
}

macro_rules! log_text_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogText {
                fn from(value: $ty) -> Self {
                    LogText(value.to_string())
                }
            }
        )*
    };
}

log_text_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_becomes_null() {
        assert_eq!(LogText::from(None::<&str>).as_str(), "null");
        assert_eq!(LogText::from(None::<i32>).as_str(), "null");
        assert_eq!(LogText::from(Some(Some("x"))).as_str(), "x");
    }

    #[test]
    fn test_display_values() {
        assert_eq!(LogText::from(42u64).as_str(), "42");
        assert_eq!(LogText::from(true).as_str(), "true");
        assert_eq!(LogText::from(format_args!("{}-{}", 1, "a")).as_str(), "1-a");
        assert_eq!(LogText::from(String::from("s")).into_string(), "s");
    }
}
