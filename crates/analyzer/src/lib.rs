//! Semantic analysis of opcode tables: pattern construction, duplicate and
//! collision detection, and decision-tree construction.

pub mod decision_tree;
pub mod display;
pub mod pattern;
pub mod validate;

use decision_tree::{Collision, DecisionTree};
use display::constraint_table;
use opdec_common::diagnostics::{self, Diagnostic};
use opdec_common::files::SourceFileId;
use opdec_common::Span;
use opdec_parser::ast;
use opdec_parser::node::Node;
use pattern::{Pattern, PatternId, TemplateError, MAX_WIDTH};

/// The result of a successful analysis: the table width, every pattern with
/// its derived constraints, and the decision tree.
pub struct Analysis {
    pub bits: usize,
    pub patterns: Vec<Pattern>,
    pub tree: DecisionTree,
}

#[derive(Debug)]
pub struct AnalyzerError(pub Vec<Diagnostic>);

/// Analyze a parsed table: build the patterns, prove the table unambiguous,
/// and construct the decision tree.
///
/// Invalid templates block the later phases. The duplicate and collision
/// checks are collect-all: one run reports every finding. After they pass,
/// tree construction cannot fail.
pub fn analyze(file: SourceFileId, table: &ast::Table) -> Result<Analysis, AnalyzerError> {
    let Some(first) = table.defs.first() else {
        return Err(AnalyzerError(vec![diagnostics::error(
            file,
            "table defines no opcodes",
            Span::zero(0),
            "expected at least one `NAME TEMPLATE` line",
        )]));
    };

    // The first template establishes the table width.
    let bits = first.kind.template.kind.len();

    let mut diags = vec![];
    let mut patterns = vec![];
    for def in &table.defs {
        match Pattern::new(
            def.kind.name.kind.clone(),
            def.kind.template.kind.clone(),
            def.span,
            def.kind.template.span,
            bits,
        ) {
            Ok(pattern) => patterns.push(pattern),
            Err(err) => diags.push(template_error(file, def, err)),
        }
    }
    if !diags.is_empty() {
        return Err(AnalyzerError(diags));
    }

    for (first_id, second_id) in validate::duplicates(&patterns) {
        diags.push(duplicate_error(file, &patterns, first_id, second_id, bits));
    }
    for group in validate::collisions(&patterns) {
        diags.push(collision_error(file, &patterns, &group, bits));
    }
    if !diags.is_empty() {
        return Err(AnalyzerError(diags));
    }

    match DecisionTree::build(&patterns) {
        Ok(tree) => Ok(Analysis {
            bits,
            patterns,
            tree,
        }),
        // Unreachable once validation has passed; kept as an invariant guard.
        Err(Collision { members }) => Err(AnalyzerError(vec![collision_error(
            file, &patterns, &members, bits,
        )])),
    }
}

fn template_error(file: SourceFileId, def: &Node<ast::OpcodeDef>, err: TemplateError) -> Diagnostic {
    let name = &def.kind.name.kind;
    let span = def.kind.template.span;
    match err {
        TemplateError::WrongWidth { expected, found } => diagnostics::fancy_error(
            format!("invalid template for `{name}`: expected {expected} bits, found {found}"),
            vec![diagnostics::primary_label(
                file,
                span,
                format!("{found} bits here"),
            )],
            vec![format!(
                "the first template in the table fixes the width at {expected} bits"
            )],
        ),
        TemplateError::TooWide { found } => diagnostics::fancy_error(
            format!("invalid template for `{name}`: {found} bits is wider than the supported maximum"),
            vec![diagnostics::primary_label(
                file,
                span,
                format!("{found} bits here"),
            )],
            vec![format!("templates are limited to {MAX_WIDTH} bits")],
        ),
        TemplateError::BadSymbol { symbol, position } => diagnostics::fancy_error(
            format!("invalid template for `{name}`: illegal symbol `{symbol}`"),
            vec![diagnostics::primary_label(
                file,
                Span::new(span.start + position, span.start + position + 1),
                "expected `0`, `1`, or a field letter",
            )],
            vec![],
        ),
    }
}

fn duplicate_error(
    file: SourceFileId,
    patterns: &[Pattern],
    first: PatternId,
    second: PatternId,
    bits: usize,
) -> Diagnostic {
    let original = &patterns[first.index()];
    let duplicate = &patterns[second.index()];
    diagnostics::fancy_error(
        format!(
            "duplicate constraint: `{}` and `{}` fix the same bits to the same values",
            original.name, duplicate.name
        ),
        vec![
            diagnostics::secondary_label(file, original.span, "first defined here"),
            diagnostics::primary_label(file, duplicate.span, "same literal bits here"),
        ],
        vec![constraint_table(patterns, &[first, second], bits)],
    )
}

fn collision_error(
    file: SourceFileId,
    patterns: &[Pattern],
    members: &[PatternId],
    bits: usize,
) -> Diagnostic {
    let labels = members
        .iter()
        .map(|id| {
            diagnostics::primary_label(file, patterns[id.index()].span, "part of the colliding group")
        })
        .collect();
    diagnostics::fancy_error(
        format!(
            "collision: {} opcodes cannot be told apart by their literal bits",
            members.len()
        ),
        labels,
        vec![
            constraint_table(patterns, members, bits),
            "add a literal bit that differs between these opcodes".into(),
        ],
    )
}
