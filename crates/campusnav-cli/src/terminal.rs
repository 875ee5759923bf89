//! ANSI styling for the `text` output format.

/// Escape sequences keyed by what they decorate in route and building
/// listings. Every field is empty when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    /// Reverse-video badge on the first step.
    pub start: &'static str,
    /// Reverse-video badge on the last step.
    pub goal: &'static str,
    pub building: &'static str,
    /// Path nodes, connectors and notes.
    pub muted: &'static str,
    pub distance: &'static str,
    pub time: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: "\x1b[0m",
            start: "\x1b[1;7;32m",
            goal: "\x1b[1;7;35m",
            building: "\x1b[1;97m",
            muted: "\x1b[90m",
            distance: "\x1b[36m",
            time: "\x1b[32m",
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            start: "",
            goal: "",
            building: "",
            muted: "",
            distance: "",
            time: "",
        }
    }

    /// Colored unless `NO_COLOR` is set (https://no-color.org/) or
    /// `TERM=dumb`.
    #[must_use]
    pub fn detect() -> Self {
        let disabled = std::env::var_os("NO_COLOR").is_some()
            || std::env::var("TERM").is_ok_and(|term| term.eq_ignore_ascii_case("dumb"));
        if disabled {
            Self::plain()
        } else {
            Self::colored()
        }
    }
}

/// Check if the locale advertises UTF-8 via `LC_ALL` or `LANG`.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LC_ALL", "LANG"].iter().any(|key| {
        std::env::var(key).is_ok_and(|value| value.to_uppercase().contains("UTF"))
    })
}

/// Group the digits of `n` in threes with commas.
///
/// ```
/// # use campusnav_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && position % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_group_thousands() {
        assert_eq!(format_with_separators(0), "0");
        assert_eq!(format_with_separators(1000), "1,000");
        assert_eq!(format_with_separators(222_390), "222,390");
        assert_eq!(format_with_separators(12_345), "12,345");
    }

    #[test]
    fn plain_palette_is_empty() {
        let plain = ColorPalette::plain();
        assert!(plain.reset.is_empty());
        assert!(plain.building.is_empty());
        assert!(!ColorPalette::colored().reset.is_empty());
    }
}
