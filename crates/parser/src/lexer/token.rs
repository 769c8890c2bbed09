use logos::Logos;
use opdec_common::{Span, Spanned};

#[derive(Logos, Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum TokenKind {
    /// Anything the lexer doesn't recognize.
    #[error]
    #[regex(r"[ \t\r]+", logos::skip)]
    #[regex(r"#[^\n]*", logos::skip)]
    Error,

    #[token("\n")]
    Newline,

    /// An opcode name or a bit template; the grammar decides which.
    #[regex(r"[0-9A-Za-z_.]+")]
    Word,
}

impl TokenKind {
    /// A user-friendly description for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Error => "unrecognized token",
            TokenKind::Newline => "end of line",
            TokenKind::Word => "word",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Spanned for Token<'a> {
    fn span(&self) -> Span {
        self.span
    }
}
