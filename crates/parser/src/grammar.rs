use crate::ast::{OpcodeDef, Table};
use crate::lexer::TokenKind;
use crate::node::Node;
use crate::parser::{ParseFailed, ParseResult, Parser};
use smol_str::SmolStr;

/// Parse a whole opcode table, recovering at line boundaries.
pub fn parse_table(par: &mut Parser) -> Table {
    let mut defs = vec![];
    loop {
        par.eat_newlines();
        if par.peek().is_none() {
            break;
        }
        match parse_def(par) {
            Ok(def) => defs.push(def),
            Err(ParseFailed) => par.skip_line(),
        }
    }
    Table { defs }
}

/// Parse one `NAME TEMPLATE` line.
fn parse_def(par: &mut Parser) -> ParseResult<Node<OpcodeDef>> {
    let name_tok = par.expect_word("an opcode name")?;
    let template_tok = par.expect_word("a bit template")?;

    match par.peek() {
        None | Some(TokenKind::Newline) => {}
        Some(_) => {
            if let Some(tok) = par.next() {
                par.error(
                    tok.span,
                    format!("unexpected `{}` after bit template", tok.text),
                );
            }
            return Err(ParseFailed);
        }
    }

    let span = name_tok.span + template_tok.span;
    let name = Node::new(SmolStr::new(name_tok.text), name_tok.span);
    let template = Node::new(SmolStr::new(template_tok.text), template_tok.span);
    Ok(Node::new(OpcodeDef { name, template }, span))
}
