//! Swim-curriculum stage codes.
//!
//! A stage is a numeric level (1-6) or a letter level (A-F), displayed with
//! the fixed `S` prefix: `S2`, `SA`. Letter stages have no "previous stage"
//! concept; numeric stages do. That asymmetry is preserved from the source
//! program and is relied on by the skill-catalog filter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A curriculum stage code. "No stage detectable" is `Option<Stage>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Stage {
    /// Numeric stage 1 through 6.
    Numeric(u8),
    /// Letter stage A through F (stored uppercase).
    Letter(char),
}

impl Stage {
    /// Parses a single stage token: a digit `1`-`6` or a letter `A`-`F`
    /// (either case). Anything else is not a stage.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match first {
            '1'..='6' => Some(Self::Numeric(first as u8 - b'0')),
            'a'..='f' | 'A'..='F' => Some(Self::Letter(first.to_ascii_uppercase())),
            _ => None,
        }
    }

    /// The stage immediately preceding this one, when the curriculum defines
    /// one. Numeric stages above 1 have a previous stage; stage 1 and all
    /// letter stages do not.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Numeric(n) if *n > 1 => Some(Self::Numeric(n - 1)),
            _ => None,
        }
    }

    /// The bare code without the `S` prefix: `"2"`, `"A"`.
    #[must_use]
    pub fn code(&self) -> String {
        match self {
            Self::Numeric(n) => n.to_string(),
            Self::Letter(letter) => letter.to_string(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_accepts_digits_and_letters() {
        assert_eq!(Stage::from_token("2"), Some(Stage::Numeric(2)));
        assert_eq!(Stage::from_token("a"), Some(Stage::Letter('A')));
        assert_eq!(Stage::from_token("F"), Some(Stage::Letter('F')));
        assert_eq!(Stage::from_token("7"), None);
        assert_eq!(Stage::from_token("g"), None);
        assert_eq!(Stage::from_token("12"), None);
        assert_eq!(Stage::from_token(""), None);
    }

    #[test]
    fn previous_is_numeric_only() {
        assert_eq!(Stage::Numeric(3).previous(), Some(Stage::Numeric(2)));
        assert_eq!(Stage::Numeric(1).previous(), None);
        assert_eq!(Stage::Letter('B').previous(), None);
    }

    #[test]
    fn display_uses_fixed_prefix() {
        assert_eq!(Stage::Numeric(2).to_string(), "S2");
        assert_eq!(Stage::Letter('A').to_string(), "SA");
    }
}
