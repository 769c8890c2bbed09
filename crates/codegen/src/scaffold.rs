//! The fixed sections of the generated source: includes, the opcode enum,
//! the handler table, and handler declarations.

use crate::{carrier, line, names, Config, ENUM_TYPE, SENTINEL, TABLE_TYPE};
use indexmap::IndexSet;
use opdec_analyzer::Analysis;

/// Names in table order with repeats dropped. Two patterns sharing a name
/// decode to the same identifier, which exists once in the emitted source.
fn unique_names(analysis: &Analysis) -> IndexSet<&str> {
    analysis
        .patterns
        .iter()
        .map(|pattern| pattern.name.as_str())
        .collect()
}

pub fn includes() -> String {
    "#include <stdint.h>\n".into()
}

pub fn enum_declaration(analysis: &Analysis, config: &Config) -> String {
    let mut out = String::new();
    line(&mut out, &config.indent, 0, "typedef enum {");
    for name in unique_names(analysis) {
        line(
            &mut out,
            &config.indent,
            1,
            &format!("{},", names::enum_name(name)),
        );
    }
    line(&mut out, &config.indent, 1, &format!("{SENTINEL},"));
    line(&mut out, &config.indent, 0, &format!("}} {ENUM_TYPE};"));
    out
}

pub fn struct_declaration(analysis: &Analysis, config: &Config) -> String {
    let mut out = String::new();
    line(&mut out, &config.indent, 0, "typedef struct {");
    line(&mut out, &config.indent, 1, "const char *name;");
    line(
        &mut out,
        &config.indent,
        1,
        &format!("void (*function)({});", carrier(analysis.bits)),
    );
    line(&mut out, &config.indent, 0, &format!("}} {TABLE_TYPE};"));
    out
}

pub fn function_declarations(analysis: &Analysis, config: &Config) -> String {
    let mut out = String::new();
    for name in unique_names(analysis) {
        out.push_str(&format!(
            "void {}({} opcode);\n",
            names::handler_name(&config.name_prefix, name),
            carrier(analysis.bits)
        ));
    }
    out
}

pub fn empty_definitions(analysis: &Analysis, config: &Config) -> String {
    let mut out = String::new();
    for name in unique_names(analysis) {
        out.push_str(&format!(
            "void {}({}) {{ }}\n",
            names::handler_name(&config.name_prefix, name),
            carrier(analysis.bits)
        ));
    }
    out
}

/// The enum-indexed handler table, columns aligned to the widths measured
/// from the table's names.
pub fn array_definition(analysis: &Analysis, config: &Config) -> String {
    let unique = unique_names(analysis);
    let enum_width = unique
        .iter()
        .map(|name| names::enum_name(name).len())
        .max()
        .unwrap_or(0);
    let handler_width = unique
        .iter()
        .map(|name| names::handler_name(&config.name_prefix, name).len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    line(
        &mut out,
        &config.indent,
        0,
        &format!("{TABLE_TYPE} opcodes[] = {{"),
    );
    for name in unique {
        let member = format!("[{}]", names::enum_name(name));
        let quoted = format!("\"{name}\",");
        let handler = names::handler_name(&config.name_prefix, name);
        line(
            &mut out,
            &config.indent,
            1,
            &format!(
                "{:<3$} = {{ .name = {:<4$} .function = {:<5$} }},",
                member,
                quoted,
                handler,
                enum_width + 2,
                enum_width + 3,
                handler_width
            ),
        );
    }
    line(&mut out, &config.indent, 0, "};");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use opdec_common::files::SourceFileId;

    fn analysis(src: &str) -> Analysis {
        let (table, diags) = opdec_parser::parse_table(SourceFileId::dummy_file(), src);
        assert!(diags.is_empty(), "unexpected diagnostics: {diags:#?}");
        opdec_analyzer::analyze(SourceFileId::dummy_file(), &table).unwrap()
    }

    #[test]
    fn enum_in_table_order_with_sentinel() {
        let src = "NOP 0000000000000000\nMOVW 00000001ddddrrrr\n";
        assert_eq!(
            enum_declaration(&analysis(src), &Config::default()),
            "typedef enum {\n\
            \x20   NOP,\n\
            \x20   MOVW,\n\
            \x20   INVALID_OP,\n\
            } OpcodeType;\n"
        );
    }

    #[test]
    fn repeated_names_collapse() {
        let src = "BR 10xx\nBR 01xx\n";
        let text = enum_declaration(&analysis(src), &Config::default());
        assert_eq!(text.matches("BR,").count(), 1);
    }

    #[test]
    fn struct_uses_narrowest_carrier() {
        let src = "DA 10xx\nDB 11xx\n";
        assert_eq!(
            struct_declaration(&analysis(src), &Config::default()),
            "typedef struct {\n\
            \x20   const char *name;\n\
            \x20   void (*function)(uint8_t);\n\
            } OpcodeData;\n"
        );
    }

    #[test]
    fn declarations_and_stubs() {
        let src = "NOP 0000000000000000\nLD.X 1001000ddddd1100\n";
        let analysis = analysis(src);
        assert_eq!(
            function_declarations(&analysis, &Config::default()),
            "void op_nop(uint16_t opcode);\nvoid op_ld_x(uint16_t opcode);\n"
        );
        assert_eq!(
            empty_definitions(&analysis, &Config::default()),
            "void op_nop(uint16_t) { }\nvoid op_ld_x(uint16_t) { }\n"
        );
    }

    #[test]
    fn array_columns_align() {
        let src = "NOP 0000000000000000\nMOVW 00000001ddddrrrr\n";
        assert_eq!(
            array_definition(&analysis(src), &Config::default()),
            "OpcodeData opcodes[] = {\n\
            \x20   [NOP]  = { .name = \"NOP\",  .function = op_nop  },\n\
            \x20   [MOVW] = { .name = \"MOVW\", .function = op_movw },\n\
            };\n"
        );
    }
}
