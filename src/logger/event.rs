use chrono::{DateTime, Local};
use std::fmt;

pub const DEFAULT_COLOR_HEX: &str = "FFFFFF";
pub const UNKNOWN_CLASS: &str = "UnknownClass";

/// One log occurrence, normalized at construction and rendered as a single
/// color-tagged console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    text: String,
    color_hex: String,
    severity_label: String,
    class_name: String,
    time_local: DateTime<Local>,
    frame: u64,
    stack_trace: String,
}

impl LogEvent {
    /// Normalize the raw fields of one occurrence
    pub fn new(
        text: Option<&str>,
        color_hex: Option<&str>,
        severity_label: &str,
        class_name: Option<&str>,
        time_local: DateTime<Local>,
        frame: u64,
        stack_trace: Option<&str>,
    ) -> Self {
        let color_hex = match color_hex.map(str::trim) {
            Some(hex) if !hex.is_empty() => hex.trim_start_matches('#').to_string(),
            _ => DEFAULT_COLOR_HEX.to_string(),
        };

        let class_name = match class_name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_CLASS.to_string(),
        };

        Self {
            text: text.unwrap_or_default().to_string(),
            color_hex,
            severity_label: severity_label.to_string(),
            class_name,
            time_local,
            frame,
            stack_trace: stack_trace.unwrap_or_default().to_string(),
        }
    }

    /// Get the message text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bare hex triplet, never prefixed with `#`
    pub fn color_hex(&self) -> &str {
        &self.color_hex
    }

    /// Get the label shown between brackets
    pub fn severity_label(&self) -> &str {
        &self.severity_label
    }

    /// Get the issuing class, `UnknownClass` when unresolved
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Get the local time of the call
    pub fn time_local(&self) -> DateTime<Local> {
        self.time_local
    }

    /// Get the frame number of the call
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Empty when no trace was attached
    pub fn stack_trace(&self) -> &str {
        &self.stack_trace
    }

    /// Render the color-tagged console line
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<color=#{}>[{}] [{}] (T: {} | F: {}) - {}</color>",
            self.color_hex,
            self.class_name,
            self.severity_label,
            self.time_local.format("%H:%M:%S"),
            self.frame,
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn nine_am() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_render_reference_line() {
        let event = LogEvent::new(Some("OK"), None, "Log", Some("Foo"), nine_am(), 42, Some(""));
        assert_eq!(
            event.render(),
            "<color=#FFFFFF>[Foo] [Log] (T: 09:00:00 | F: 42) - OK</color>"
        );
    }

    #[test]
    fn test_color_normalization() {
        let blank = ["", "   ", "\t"];
        for color in blank {
            let event = LogEvent::new(None, Some(color), "Log", None, nine_am(), 0, None);
            assert_eq!(event.color_hex(), "FFFFFF");
        }

        let event = LogEvent::new(None, Some(" #A9DFBF "), "Log", None, nine_am(), 0, None);
        assert_eq!(event.color_hex(), "A9DFBF");

        let event = LogEvent::new(None, Some("##123456"), "Log", None, nine_am(), 0, None);
        assert_eq!(event.color_hex(), "123456");
    }

    #[test]
    fn test_missing_fields_default() {
        let event = LogEvent::new(None, None, "Warning", Some(""), nine_am(), 7, None);
        assert_eq!(event.text(), "");
        assert_eq!(event.class_name(), UNKNOWN_CLASS);
        assert_eq!(event.stack_trace(), "");
        assert_eq!(
            event.to_string(),
            "<color=#FFFFFF>[UnknownClass] [Warning] (T: 09:00:00 | F: 7) - </color>"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let time = Local.with_ymd_and_hms(2024, 3, 1, 23, 59, 7).unwrap();
        let build = || {
            LogEvent::new(
                Some("x"),
                Some("#00FF00"),
                "Error",
                Some("Bar<u8>"),
                time,
                3,
                Some("t"),
            )
        };
        let a = build();
        let b = build();
        assert_eq!(a.render(), a.render());
        assert_eq!(a.render(), b.render());
        assert_eq!(
            a.render(),
            "<color=#00FF00>[Bar<u8>] [Error] (T: 23:59:07 | F: 3) - x</color>"
        );
    }
}
