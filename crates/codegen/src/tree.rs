//! Human-readable rendering of the decision tree, for the `tree` emit
//! target. Not parsed by anything; meant for eyeballing a table's shape.

use crate::line;
use opdec_analyzer::decision_tree::DecisionTree;
use opdec_analyzer::display::hex_width;
use opdec_analyzer::Analysis;

const INDENT: &str = "  ";

pub fn tree(analysis: &Analysis) -> String {
    let mut out = String::new();
    write_node(&mut out, analysis, &analysis.tree, 0, hex_width(analysis.bits));
    out
}

fn write_node(out: &mut String, analysis: &Analysis, node: &DecisionTree, level: usize, hexw: usize) {
    match node {
        DecisionTree::Leaf(id) => {
            let pattern = &analysis.patterns[id.index()];
            line(
                out,
                INDENT,
                level,
                &format!("{} ({})", pattern.name, pattern.template),
            );
        }
        DecisionTree::Branch { mask, arms } => {
            line(out, INDENT, level, &format!("switch opcode & 0x{mask:0hexw$X}"));
            for (value, child) in arms {
                match child {
                    DecisionTree::Leaf(id) => {
                        let pattern = &analysis.patterns[id.index()];
                        line(
                            out,
                            INDENT,
                            level + 1,
                            &format!(
                                "0x{value:0hexw$X} => {} ({})",
                                pattern.name, pattern.template
                            ),
                        );
                    }
                    DecisionTree::Branch { .. } => {
                        line(out, INDENT, level + 1, &format!("0x{value:0hexw$X} =>"));
                        write_node(out, analysis, child, level + 2, hexw);
                    }
                }
            }
        }
    }
}
