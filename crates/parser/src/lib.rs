pub mod ast;
pub mod grammar;
pub mod lexer;
pub use lexer::{Token, TokenKind};
mod parser;
pub use parser::{ParseFailed, ParseResult, Parser};
pub mod node;

use ast::Table;
use opdec_common::diagnostics::Diagnostic;
use opdec_common::files::SourceFileId;

/// Parse an opcode [`Table`] from the file content string.
///
/// The parser recovers at line boundaries, so a single run reports every
/// malformed line and the returned table contains every line that did
/// parse. If any of the returned diagnostics are errors, the generation
/// run should ultimately fail.
///
/// A [`SourceFileId`] is required to associate any diagnostics with the
/// underlying file.
pub fn parse_table(file_id: SourceFileId, src: &str) -> (Table, Vec<Diagnostic>) {
    let mut parser = Parser::new(file_id, src);
    let table = grammar::parse_table(&mut parser);
    (table, parser.diagnostics)
}
