use crate::ast::include::{IncludeSegment, IncludeSegmentParser};

use super::{IncludeToken, Lexer};

/// Default segment parser for include directives.
///
/// A segment runs up to the first `+` or `|`. Its first `:` splits off the
/// modifier, which is taken verbatim. Before that, `file(map)` names a map
/// when the first `)` after the `(` closes the file part; otherwise the
/// whole text is the file name. A bare operator or a lone `%` refers to
/// the file being processed.
#[derive(Debug, Default, Clone, Copy)]
pub struct IncludeMapParser;

impl IncludeMapParser {
    pub fn new() -> Self {
        IncludeMapParser
    }

    fn parse(&self, text: &str) -> Option<IncludeSegment> {
        let mut lexer = Lexer::new(text);
        let mut segment = IncludeSegment::default();

        if let Some(op) = lexer.peek().and_then(|token| token.merge_op()) {
            lexer.next_token();
            segment.next_op = Some(op);
            segment.consumed = lexer.offset();
            return Some(segment);
        }

        let mut end = text.len();
        let mut colon = None;
        let mut open = None;
        let mut close = None;
        while let Some(token) = lexer.next_token() {
            let at = lexer.span().start;
            match token {
                IncludeToken::Plus | IncludeToken::Pipe => {
                    segment.next_op = token.merge_op();
                    end = at;
                    break;
                }
                IncludeToken::Colon if colon.is_none() => colon = Some(at),
                IncludeToken::LParen if colon.is_none() && open.is_none() => open = Some(at),
                IncludeToken::RParen if colon.is_none() && open.is_some() && close.is_none() => close = Some(at),
                _ => {}
            }
        }
        segment.consumed = match segment.next_op {
            Some(_) => lexer.offset(),
            None => text.len(),
        };

        let body_end = colon.unwrap_or(end);
        let body = &text[..body_end];
        if body.starts_with('%') {
            // Only a lone `%` names the current file.
            if body != "%" || colon.is_some() {
                return None;
            }
            return Some(segment);
        }

        segment.modifier = colon.map(|at| text[at + 1..end].to_string());
        match open {
            None => segment.file = Some(body.to_string()),
            Some(0) => return None,
            Some(at) => {
                if close != Some(body_end - 1) {
                    return None;
                }
                segment.file = Some(text[..at].to_string());
                segment.map = Some(text[at + 1..body_end - 1].to_string());
            }
        }
        Some(segment)
    }
}

impl IncludeSegmentParser for IncludeMapParser {
    fn parse_segment(&self, text: &str) -> Option<IncludeSegment> {
        self.parse(text)
    }
}
