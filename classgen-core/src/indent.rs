//! Indentation configuration for generated source.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation (PSR-12).
    pub const PHP: Self = Self::Spaces(4);

    /// The string for one indentation level.
    pub fn unit(&self) -> Cow<'static, str> {
        match self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(8) => Cow::Borrowed("        "),
            Self::Spaces(n) => Cow::Owned(" ".repeat(usize::from(*n))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }

    /// Append `level` indentation units to `buf`.
    pub fn write_to(&self, buf: &mut String, level: usize) {
        let unit = self.unit();
        for _ in 0..level {
            buf.push_str(&unit);
        }
    }

    /// The full indentation string for `level`.
    pub fn repeat(&self, level: usize) -> String {
        self.unit().repeat(level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::PHP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(4).unit(), "    ");
        assert_eq!(Indent::Spaces(3).unit(), "   ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(Indent::PHP.repeat(0), "");
        assert_eq!(Indent::PHP.repeat(2), "        ");
        assert_eq!(Indent::Tab.repeat(3), "\t\t\t");
    }

    #[test]
    fn test_write_to_appends() {
        let mut buf = String::from("x");
        Indent::Spaces(2).write_to(&mut buf, 2);
        assert_eq!(buf, "x    ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            indent: Indent,
        }

        let tab: Wrapper = toml::from_str(r#"indent = "tab""#).unwrap();
        assert_eq!(tab.indent, Indent::Tab);

        let spaces: Wrapper = toml::from_str("indent = { spaces = 2 }").unwrap();
        assert_eq!(spaces.indent, Indent::Spaces(2));
    }
}
