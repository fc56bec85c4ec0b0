//! Color markup handling for consoles that do not understand `<color>` tags

use colored::Colorize;
use console::Term;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COLOR_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<color=#([0-9A-Fa-f]{6})>(.*?)</color>").expect("valid color span regex")
});

static COLOR_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?color(?:=[^>]*)?>").expect("valid color tag regex"));

/// How a sink presents the color markup embedded in rendered lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupMode {
    /// Pass tags through for hosts that render them
    Keep,
    /// Translate tags into 24-bit ANSI foreground colors
    Ansi,
    /// Remove tags for plain-text consumers
    Strip,
}

impl MarkupMode {
    /// ANSI when the terminal supports colors, plain text otherwise
    pub fn detect() -> Self {
        if Term::stdout().features().colors_supported() {
            MarkupMode::Ansi
        } else {
            MarkupMode::Strip
        }
    }

    /// Present `line` according to this mode
    pub fn apply(&self, line: &str) -> String {
        match self {
            MarkupMode::Keep => line.to_string(),
            MarkupMode::Ansi => markup_to_ansi(line),
            MarkupMode::Strip => strip_color_markup(line),
        }
    }
}

/// Remove every `<color=...>` and `</color>` tag
pub fn strip_color_markup(line: &str) -> String {
    COLOR_TAG.replace_all(line, "").into_owned()
}

/// Replace color spans with ANSI foreground colors
///
/// Emits 24-bit colors when the terminal advertises truecolor through
/// `COLORTERM`, otherwise the nearest basic ANSI color.
pub fn markup_to_ansi(line: &str) -> String {
    let colored = COLOR_SPAN.replace_all(line, |caps: &Captures| {
        let (r, g, b) = parse_hex(&caps[1]);
        caps[2].truecolor(r, g, b).to_string()
    });
    // Anything left over carries a color we cannot parse
    strip_color_markup(&colored)
}

fn parse_hex(hex: &str) -> (u8, u8, u8) {
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).unwrap_or(u8::MAX)
    };
    (channel(0..2), channel(2..4), channel(4..6))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "<color=#A9DFBF>[Foo] [Success] (T: 09:00:00 | F: 1) - ok</color>";

    #[test]
    fn test_strip() {
        assert_eq!(
            strip_color_markup(LINE),
            "[Foo] [Success] (T: 09:00:00 | F: 1) - ok"
        );
        assert_eq!(strip_color_markup("<color=#zz>x</color>"), "x");
        assert_eq!(strip_color_markup("no tags"), "no tags");
    }

    #[test]
    fn test_keep() {
        assert_eq!(MarkupMode::Keep.apply(LINE), LINE);
    }

    #[test]
    fn test_ansi() {
        colored::control::set_override(true);
        let ansi = markup_to_ansi("<color=#FF8000>hot</color>\ntrace");
        // Truecolor or nearest basic color depending on COLORTERM
        let expected = format!("{}\ntrace", "hot".truecolor(255, 128, 0));
        assert_eq!(ansi, expected);
        assert!(ansi.starts_with("\x1b["));
        assert!(!ansi.contains("<color"));

        assert_eq!(markup_to_ansi("<color=#GGGGGG>odd</color>"), "odd");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("BDC3C7"), (0xBD, 0xC3, 0xC7));
    }
}
