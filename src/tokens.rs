//! Tokenization of running text into character-class runs.
//!
//! Text is split into maximal runs of a single class: whitespace, letters,
//! or everything else. `"Today is not 25th of December."` becomes
//! `[Today][ ][is][ ][not][25][th][ ][of][ ][December][.]` with classes
//! alpha, space, other. Alpha tokens additionally carry a lowercased form so
//! matching is case-insensitive while the raw text stays reproducible.

use std::borrow::Cow;

/// The character class of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Whitespace characters
    Space,
    /// Letters
    Alpha,
    /// Punctuation, digits, control characters, etc.
    Other,
}

/// One run of same-class characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The original text of the token
    pub raw: &'a str,
    /// Lowercased text for alpha tokens, the raw text otherwise
    norm: Cow<'a, str>,
    /// The character class
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    fn new(raw: &'a str, kind: TokenKind) -> Self {
        let norm = if kind == TokenKind::Alpha && raw.chars().any(char::is_uppercase) {
            Cow::Owned(raw.to_lowercase())
        } else {
            Cow::Borrowed(raw)
        };
        Token { raw, norm, kind }
    }

    /// The normalized text used for matching
    pub fn norm(&self) -> &str {
        &self.norm
    }

    /// True if the token is whitespace
    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }

    /// True if the token is letters
    pub fn is_alpha(&self) -> bool {
        self.kind == TokenKind::Alpha
    }
}

fn classify(c: char) -> TokenKind {
    if c.is_whitespace() {
        TokenKind::Space
    } else if c.is_alphabetic() {
        TokenKind::Alpha
    } else {
        TokenKind::Other
    }
}

/// Split `text` into its complete token list
///
/// Concatenating the raw text of the tokens reproduces the input exactly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut iter = text.char_indices().peekable();

    while let Some(&(start, first)) = iter.peek() {
        let kind = classify(first);
        let mut end = start + first.len_utf8();
        iter.next();

        while let Some(&(position, c)) = iter.peek() {
            if classify(c) != kind {
                break;
            }
            end = position + c.len_utf8();
            iter.next();
        }

        tokens.push(Token::new(&text[start..end], kind));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let tokens = tokenize("Today is not 25th of December, 99.8% guaranteed.\n");

        let expected: Vec<(&str, TokenKind)> = vec![
            ("Today", TokenKind::Alpha),
            (" ", TokenKind::Space),
            ("is", TokenKind::Alpha),
            (" ", TokenKind::Space),
            ("not", TokenKind::Alpha),
            (" ", TokenKind::Space),
            ("25", TokenKind::Other),
            ("th", TokenKind::Alpha),
            (" ", TokenKind::Space),
            ("of", TokenKind::Alpha),
            (" ", TokenKind::Space),
            ("December", TokenKind::Alpha),
            (",", TokenKind::Other),
            (" ", TokenKind::Space),
            ("99.8%", TokenKind::Other),
            (" ", TokenKind::Space),
            ("guaranteed", TokenKind::Alpha),
            (".", TokenKind::Other),
            ("\n", TokenKind::Space),
        ];

        let actual: Vec<(&str, TokenKind)> =
            tokens.iter().map(|token| (token.raw, token.kind)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_normalization_lowercases_alpha_only() {
        let tokens = tokenize("TWENTY-Three");
        assert_eq!(tokens[0].norm(), "twenty");
        assert_eq!(tokens[0].raw, "TWENTY");
        assert_eq!(tokens[1].norm(), "-");
        assert_eq!(tokens[2].norm(), "three");
    }

    #[test]
    fn test_raw_round_trip() {
        let text = "  mixed\tcase, 42 tokens!\nnew line ";
        let tokens = tokenize(text);
        let rebuilt: String = tokens.iter().map(|token| token.raw).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_adjacent_runs_merge() {
        let tokens = tokenize("a  \t b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].raw, "  \t ");
        assert!(tokens[1].is_space());
    }
}
