use std::ops::Range;

use logos::{Lexer as LogosLexer, Logos};

use super::IncludeToken;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, IncludeToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: IncludeToken::lexer(input),
        }
    }

    /// Next token, or `None` at the end of input.
    ///
    /// `Name` matches every run of non-delimiter characters, so the
    /// tokenizer has no error case.
    pub fn next_token(&mut self) -> Option<IncludeToken> {
        self.inner.next().and_then(Result::ok)
    }

    pub fn peek(&self) -> Option<IncludeToken> {
        self.inner.clone().next().and_then(Result::ok)
    }

    /// Byte range of the last token returned.
    pub fn span(&self) -> Range<usize> {
        self.inner.span()
    }

    /// Byte offset just past the last token returned.
    pub fn offset(&self) -> usize {
        self.inner.span().end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(input: &str) -> Vec<IncludeToken> {
        let mut lexer = Lexer::new(input);
        std::iter::from_fn(|| lexer.next_token()).collect()
    }

    #[test]
    fn test_offset_tracks_consumed_input() {
        let mut lexer = Lexer::new("pc+us");
        assert_eq!(lexer.next_token(), Some(IncludeToken::Name("pc".to_string())));
        assert_eq!(lexer.offset(), 2);
        assert_eq!(lexer.peek(), Some(IncludeToken::Plus));
        assert_eq!(lexer.next_token(), Some(IncludeToken::Plus));
        assert_eq!(lexer.span(), 2..3);
    }

    #[test]
    fn test_any_text_lexes_without_error() {
        for input in ["日本語", " ", "é*&^$#@!", "a%b", "\t\n"] {
            assert_eq!(tokens(input), vec![IncludeToken::Name(input.to_string())]);
        }
        assert_eq!(
            tokens("us(intl)"),
            vec![
                IncludeToken::Name("us".to_string()),
                IncludeToken::LParen,
                IncludeToken::Name("intl".to_string()),
                IncludeToken::RParen,
            ]
        );
    }
}
