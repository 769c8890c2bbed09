mod token;
use logos::Logos;
use opdec_common::Span;
pub use token::{Token, TokenKind};

#[derive(Clone)]
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer with the given source code string.
    pub fn new(src: &'a str) -> Lexer {
        Lexer {
            inner: TokenKind::lexer(src),
        }
    }

    /// Return the full source code string that's being tokenized.
    pub fn source(&self) -> &'a str {
        self.inner.source()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let text = self.inner.slice();
        let span = self.inner.span();
        Some(Token {
            kind,
            text,
            span: Span::new(span.start, span.end),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, TokenKind};
    use TokenKind::*;

    fn check(input: &str, expected: &[TokenKind]) {
        let lex = Lexer::new(input);

        let actual = lex.map(|t| t.kind).collect::<Vec<_>>();

        assert!(
            actual.iter().eq(expected.iter()),
            "\nexpected: {expected:?}\n  actual: {actual:?}"
        );
    }

    #[test]
    fn basic() {
        check(
            "NOP 0000000000000000\nADC 000111rdddddrrrr",
            &[Word, Word, Newline, Word, Word],
        );
    }

    #[test]
    fn comments_and_blanks() {
        check(
            "# AVR base set\n\nNOP 0000000000000000 # no operation\n",
            &[Newline, Newline, Word, Word, Newline],
        );
    }

    #[test]
    fn spans() {
        let mut lex = Lexer::new("RET 1001010100001000");
        let name = lex.next().unwrap();
        assert_eq!(name.text, "RET");
        assert_eq!((name.span.start, name.span.end), (0, 3));
        let template = lex.next().unwrap();
        assert_eq!(template.text, "1001010100001000");
        assert_eq!((template.span.start, template.span.end), (4, 20));
        assert!(lex.next().is_none());
    }

    #[test]
    fn errors() {
        check("LD.X 1001000ddddd1100\n@", &[Word, Word, Newline, Error]);
    }
}
