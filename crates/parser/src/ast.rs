use crate::node::Node;
pub use smol_str::SmolStr;

/// A parsed opcode table.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Table {
    pub defs: Vec<Node<OpcodeDef>>,
}

/// One `NAME TEMPLATE` line of the table.
///
/// The name is a display identifier and need not be unique; the template is
/// kept as written, and is checked for width and alphabet by the analyzer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct OpcodeDef {
    pub name: Node<SmolStr>,
    pub template: Node<SmolStr>,
}
