use crate::lexer::{Lexer, Token, TokenKind};
use opdec_common::diagnostics::{self, Diagnostic};
use opdec_common::files::SourceFileId;
use opdec_common::Span;
use std::{error, fmt};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct ParseFailed;
impl fmt::Display for ParseFailed {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(fmt, "ParseFailed")
    }
}
impl error::Error for ParseFailed {}

pub type ParseResult<T> = Result<T, ParseFailed>;

/// `Parser` maintains the parsing state: the token stream and the
/// diagnostics emitted so far. Syntax parsing logic is in the
/// [`crate::grammar`] module.
pub struct Parser<'a> {
    pub file_id: SourceFileId,
    lexer: Lexer<'a>,

    /// Tokens that have been "peeked" but not yet consumed.
    buffered: Vec<Token<'a>>,

    /// The diagnostics (errors and warnings) emitted during parsing.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a source code string and associated file id.
    pub fn new(file_id: SourceFileId, content: &'a str) -> Self {
        Parser {
            file_id,
            lexer: Lexer::new(content),
            buffered: vec![],
            diagnostics: vec![],
        }
    }

    /// Return the next token, or `None` at the end of the file.
    #[allow(clippy::should_implement_trait)] // next() is a nice short name for a common task
    pub fn next(&mut self) -> Option<Token<'a>> {
        self.buffered.pop().or_else(|| self.lexer.next())
    }

    /// Take a peek at the next token kind without consuming it.
    pub fn peek(&mut self) -> Option<TokenKind> {
        if self.buffered.is_empty() {
            let tok = self.lexer.next()?;
            self.buffered.push(tok);
        }
        self.buffered.last().map(|tok| tok.kind)
    }

    /// Consume the next token if it's a [`TokenKind::Word`], else emit an
    /// error diagnostic describing what was expected and fail.
    pub fn expect_word(&mut self, expected: &str) -> ParseResult<Token<'a>> {
        match self.next() {
            Some(tok) if tok.kind == TokenKind::Word => Ok(tok),
            Some(tok) => {
                self.error(
                    tok.span,
                    format!("expected {}, found {}", expected, tok.kind.describe()),
                );
                // Leave the offending token for the recovery pass.
                self.buffered.push(tok);
                Err(ParseFailed)
            }
            None => {
                self.error(self.eof_span(), format!("expected {expected}"));
                Err(ParseFailed)
            }
        }
    }

    /// Consume any number of consecutive line breaks.
    pub fn eat_newlines(&mut self) {
        while self.peek() == Some(TokenKind::Newline) {
            self.next();
        }
    }

    /// Error recovery: discard tokens up to and including the next line
    /// break, so parsing can resume at the start of the following line.
    pub fn skip_line(&mut self) {
        while let Some(tok) = self.next() {
            if tok.kind == TokenKind::Newline {
                break;
            }
        }
    }

    /// A zero-length span at the end of the file.
    pub fn eof_span(&self) -> Span {
        Span::zero(self.lexer.source().len())
    }

    /// Emit an error diagnostic with a single label.
    pub fn error<S: Into<String>>(&mut self, span: Span, message: S) {
        let message = message.into();
        self.diagnostics
            .push(diagnostics::error(self.file_id, message.clone(), span, message));
    }
}
