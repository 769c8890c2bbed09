//! C source generation for an analyzed opcode table.
//!
//! The analyzer has already proved the table unambiguous by the time any
//! function here runs; code generation is a pure serialization of the
//! decision tree and pattern metadata.

mod decoder;
pub mod names;
mod scaffold;
mod tree;

pub use decoder::decode_function;
pub use tree::tree;

use opdec_analyzer::Analysis;

/// Identifier of the emitted enum type.
pub const ENUM_TYPE: &str = "OpcodeType";
/// Identifier of the emitted handler-table struct.
pub const TABLE_TYPE: &str = "OpcodeData";
/// Enumerator returned for values no pattern matches.
pub const SENTINEL: &str = "INVALID_OP";

/// Options for the emitted source text, passed explicitly by the caller.
#[derive(Debug, Clone)]
pub struct Config {
    /// String emitted once per nesting level.
    pub indent: String,
    /// Prefix prepended to derived handler identifiers.
    pub name_prefix: String,
    /// Identifier of the generated decode function.
    pub decode_fn: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: "    ".into(),
            name_prefix: "op_".into(),
            decode_fn: "opcode_decode".into(),
        }
    }
}

/// The narrowest stdint type that holds `bits` bits.
pub(crate) fn carrier(bits: usize) -> &'static str {
    match bits {
        0..=8 => "uint8_t",
        9..=16 => "uint16_t",
        17..=32 => "uint32_t",
        _ => "uint64_t",
    }
}

/// Append `level` indent units and one line of text.
pub(crate) fn line(out: &mut String, unit: &str, level: usize, text: &str) {
    for _ in 0..level {
        out.push_str(unit);
    }
    out.push_str(text);
    out.push('\n');
}

/// Generate the complete decoder source: includes, the opcode enum, the
/// handler table, handler declarations, and the decode function.
pub fn generate(analysis: &Analysis, config: &Config) -> String {
    [
        scaffold::includes(),
        scaffold::enum_declaration(analysis, config),
        scaffold::struct_declaration(analysis, config),
        scaffold::function_declarations(analysis, config),
        scaffold::array_definition(analysis, config),
        decoder::decode_function(analysis, config),
    ]
    .join("\n")
}

/// Generate empty handler definitions, for wiring up a new table quickly.
pub fn stubs(analysis: &Analysis, config: &Config) -> String {
    scaffold::empty_definitions(analysis, config)
}
