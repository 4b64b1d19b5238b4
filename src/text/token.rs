//! Display tokens.

/// Platform newline carried by [`Token::Break`].
#[cfg(windows)]
pub const NEWLINE: &str = "\r\n";

/// Platform newline carried by [`Token::Break`].
#[cfg(not(windows))]
pub const NEWLINE: &str = "\n";

/// A unit of output for the display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A word followed by exactly one space.
    Word(String),
    /// A line break.
    Break,
}

impl Token {
    /// Build a word token, appending the trailing space.
    pub fn word(text: &str) -> Self {
        let mut word = String::with_capacity(text.len() + 1);
        word.push_str(text);
        word.push(' ');
        Self::Word(word)
    }

    /// Text to write for this token.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Word(word) => word,
            Self::Break => NEWLINE,
        }
    }

    /// The word without its trailing space, or `None` for a break.
    pub fn word_text(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word.strip_suffix(' ').unwrap_or(word)),
            Self::Break => None,
        }
    }

    /// Check if this is a break token.
    #[inline]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }

    /// Whether the token renders as whitespace only.
    ///
    /// The display only pauses after non-blank tokens.
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_has_single_trailing_space() {
        let token = Token::word("hello");
        assert_eq!(token.as_str(), "hello ");
        assert_eq!(token.word_text(), Some("hello"));
        assert!(!token.is_break());
        assert!(!token.is_blank());
    }

    #[test]
    fn test_break_is_blank() {
        assert_eq!(Token::Break.as_str(), NEWLINE);
        assert_eq!(Token::Break.word_text(), None);
        assert!(Token::Break.is_break());
        assert!(Token::Break.is_blank());
    }
}
