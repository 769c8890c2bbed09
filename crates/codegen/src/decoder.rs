use crate::{carrier, line, names, Config, ENUM_TYPE, SENTINEL};
use indexmap::IndexMap;
use opdec_analyzer::decision_tree::DecisionTree;
use opdec_analyzer::display::hex_width;
use opdec_analyzer::Analysis;

/// Emit the decode function: the decision tree serialized as nested
/// `switch` dispatches on masked opcode bits.
///
/// The trailing sentinel return is the shared fallthrough of every
/// dispatch; no value a validated table matches can reach it. A
/// single-pattern table has nothing to dispatch on and returns its one
/// name unconditionally.
pub fn decode_function(analysis: &Analysis, config: &Config) -> String {
    let mut out = String::new();
    line(
        &mut out,
        &config.indent,
        0,
        &format!(
            "{ENUM_TYPE} {}({} opcode) {{",
            config.decode_fn,
            carrier(analysis.bits)
        ),
    );

    let hexw = hex_width(analysis.bits);
    match &analysis.tree {
        DecisionTree::Leaf(id) => {
            let name = names::enum_name(&analysis.patterns[id.index()].name);
            line(&mut out, &config.indent, 1, &format!("return {name};"));
        }
        DecisionTree::Branch { mask, arms } => {
            write_dispatch(&mut out, analysis, *mask, arms, 1, config, hexw);
            line(&mut out, &config.indent, 1, &format!("return {SENTINEL};"));
        }
    }
    line(&mut out, &config.indent, 0, "}");
    out
}

fn write_dispatch(
    out: &mut String,
    analysis: &Analysis,
    mask: u64,
    arms: &IndexMap<u64, DecisionTree>,
    level: usize,
    config: &Config,
    hexw: usize,
) {
    let ind = &config.indent;
    line(
        out,
        ind,
        level,
        &format!("switch (opcode & 0x{mask:0hexw$X}) {{"),
    );
    for (value, child) in arms {
        match child {
            DecisionTree::Leaf(id) => {
                let name = names::enum_name(&analysis.patterns[id.index()].name);
                line(out, ind, level, &format!("case 0x{value:0hexw$X}:"));
                line(out, ind, level + 1, &format!("return {name};"));
            }
            DecisionTree::Branch { mask, arms } => {
                line(out, ind, level, &format!("case 0x{value:0hexw$X}: {{"));
                write_dispatch(out, analysis, *mask, arms, level + 1, config, hexw);
                line(out, ind, level + 1, "} break;");
            }
        }
    }
    line(out, ind, level, "}");
}

#[cfg(test)]
mod tests {
    use crate::{decode_function, Config};
    use opdec_analyzer::Analysis;
    use opdec_common::files::SourceFileId;

    fn analysis(src: &str) -> Analysis {
        let (table, diags) = opdec_parser::parse_table(SourceFileId::dummy_file(), src);
        assert!(diags.is_empty(), "unexpected diagnostics: {diags:#?}");
        opdec_analyzer::analyze(SourceFileId::dummy_file(), &table).unwrap()
    }

    #[test]
    fn two_way_dispatch() {
        assert_eq!(
            decode_function(&analysis("DA 10xx\nDB 11xx\n"), &Config::default()),
            "OpcodeType opcode_decode(uint8_t opcode) {\n\
            \x20   switch (opcode & 0x0C) {\n\
            \x20   case 0x08:\n\
            \x20       return DA;\n\
            \x20   case 0x0C:\n\
            \x20       return DB;\n\
            \x20   }\n\
            \x20   return INVALID_OP;\n\
            }\n"
        );
    }

    #[test]
    fn nested_dispatch() {
        let src = "COM 1001010ddddd0000\nNEG 1001010ddddd0001\nADD 000011rdddddrrrr\n";
        assert_eq!(
            decode_function(&analysis(src), &Config::default()),
            "OpcodeType opcode_decode(uint16_t opcode) {\n\
            \x20   switch (opcode & 0xFC00) {\n\
            \x20   case 0x9400: {\n\
            \x20       switch (opcode & 0xFE0F) {\n\
            \x20       case 0x9400:\n\
            \x20           return COM;\n\
            \x20       case 0x9401:\n\
            \x20           return NEG;\n\
            \x20       }\n\
            \x20       } break;\n\
            \x20   case 0x0C00:\n\
            \x20       return ADD;\n\
            \x20   }\n\
            \x20   return INVALID_OP;\n\
            }\n"
        );
    }

    #[test]
    fn single_pattern_returns_unconditionally() {
        assert_eq!(
            decode_function(&analysis("ONLY 1010\n"), &Config::default()),
            "OpcodeType opcode_decode(uint8_t opcode) {\n\
            \x20   return ONLY;\n\
            }\n"
        );
    }

    #[test]
    fn custom_indent_and_function_name() {
        let config = Config {
            indent: "\t".into(),
            name_prefix: "op_".into(),
            decode_fn: "avr_decode".into(),
        };
        assert_eq!(
            decode_function(&analysis("DA 10xx\nDB 11xx\n"), &config),
            "OpcodeType avr_decode(uint8_t opcode) {\n\
             \tswitch (opcode & 0x0C) {\n\
             \tcase 0x08:\n\
             \t\treturn DA;\n\
             \tcase 0x0C:\n\
             \t\treturn DB;\n\
             \t}\n\
             \treturn INVALID_OP;\n\
             }\n"
        );
    }
}
