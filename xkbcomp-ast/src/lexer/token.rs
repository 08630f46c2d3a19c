use logos::Logos;

/// Tokens of an include directive such as `pc+us(intl):2|compose(ralt)`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum IncludeToken {
    // Merge operators
    #[token("+")]
    Plus,

    #[token("|")]
    Pipe,

    // Delimiters
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(":")]
    Colon,

    // File, map or modifier text, including `%`
    #[regex(r"[^+|():]+", |lex| lex.slice().to_string())]
    Name(String),
}

impl IncludeToken {
    /// The operator character for `+` and `|`.
    pub fn merge_op(&self) -> Option<char> {
        match self {
            IncludeToken::Plus => Some('+'),
            IncludeToken::Pipe => Some('|'),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos::Logos;

    #[test]
    fn test_basic_tokens() {
        let input = "evdev(basic)|pc(pc105)";
        let mut lex = IncludeToken::lexer(input);

        assert_eq!(lex.next(), Some(Ok(IncludeToken::Name("evdev".to_string()))));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::LParen)));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::Name("basic".to_string()))));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::RParen)));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::Pipe)));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::Name("pc".to_string()))));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::LParen)));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::Name("pc105".to_string()))));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::RParen)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_modifier_and_self_reference() {
        let input = "%+us:2";
        let mut lex = IncludeToken::lexer(input);

        assert_eq!(lex.next(), Some(Ok(IncludeToken::Name("%".to_string()))));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::Plus)));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::Name("us".to_string()))));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::Colon)));
        assert_eq!(lex.next(), Some(Ok(IncludeToken::Name("2".to_string()))));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_paths_are_single_names() {
        let input = "macintosh_vndr/us";
        let mut lex = IncludeToken::lexer(input);

        assert_eq!(lex.next(), Some(Ok(IncludeToken::Name("macintosh_vndr/us".to_string()))));
        assert_eq!(lex.next(), None);
    }
}
