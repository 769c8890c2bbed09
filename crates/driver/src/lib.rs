//! Ties the pipeline together: parse → analyze → generate.

use opdec_analyzer::Analysis;
use opdec_codegen::Config;
use opdec_common::diagnostics::{Diagnostic, Severity};
use opdec_common::files::SourceFileId;

/// The artifacts of one generation run.
#[derive(Debug)]
pub struct CompiledDecoder {
    /// The complete C decoder source.
    pub decoder: String,
    /// Empty handler definitions, for wiring up a new table.
    pub stubs: String,
    /// A human-readable rendering of the decision tree.
    pub tree: String,
}

#[derive(Debug)]
pub struct CompileError(pub Vec<Diagnostic>);

/// Generate a decoder from table source text.
///
/// Parse errors short-circuit analysis; any analysis finding short-circuits
/// generation. Nothing is ever emitted for a table with findings.
pub fn compile(
    file: SourceFileId,
    src: &str,
    config: &Config,
) -> Result<CompiledDecoder, CompileError> {
    let analysis = analyze(file, src).map_err(CompileError)?;
    Ok(CompiledDecoder {
        decoder: opdec_codegen::generate(&analysis, config),
        stubs: opdec_codegen::stubs(&analysis, config),
        tree: opdec_codegen::tree(&analysis),
    })
}

/// Run the parse and analysis phases only, returning all diagnostics.
pub fn check(file: SourceFileId, src: &str) -> Vec<Diagnostic> {
    match analyze(file, src) {
        Ok(_) => vec![],
        Err(diags) => diags,
    }
}

fn analyze(file: SourceFileId, src: &str) -> Result<Analysis, Vec<Diagnostic>> {
    let (table, diags) = opdec_parser::parse_table(file, src);
    if diags.iter().any(|diag| diag.severity == Severity::Error) {
        return Err(diags);
    }
    opdec_analyzer::analyze(file, &table).map_err(|err| err.0)
}
