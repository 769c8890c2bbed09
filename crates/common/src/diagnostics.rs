use crate::files::{FileStore, SourceFileId};
use crate::Span;
pub use codespan_reporting::diagnostic::Severity;
use codespan_reporting::term;
use term::termcolor::{BufferWriter, ColorChoice};

pub type Diagnostic = codespan_reporting::diagnostic::Diagnostic<SourceFileId>;
pub type Label = codespan_reporting::diagnostic::Label<SourceFileId>;

/// A label that underlines its span with carets (`^^^^`), marking the spot
/// the diagnostic is about.
pub fn primary_label<S: Into<String>>(file: SourceFileId, span: Span, message: S) -> Label {
    Label::primary(file, span).with_message(message)
}

/// A label that underlines its span with hyphens (`----`), for locations
/// that give context to the primary one.
pub fn secondary_label<S: Into<String>>(file: SourceFileId, span: Span, message: S) -> Label {
    Label::secondary(file, span).with_message(message)
}

/// An error diagnostic with a single labeled location.
pub fn error<S: Into<String>>(file: SourceFileId, message: S, span: Span, label: S) -> Diagnostic {
    fancy_error(message, vec![primary_label(file, span, label)], vec![])
}

/// An error diagnostic with any number of labels and notes.
pub fn fancy_error<S: Into<String>>(
    message: S,
    labels: Vec<Label>,
    notes: Vec<String>,
) -> Diagnostic {
    Diagnostic::error()
        .with_message(message)
        .with_labels(labels)
        .with_notes(notes)
}

fn render(diagnostics: &[Diagnostic], files: &FileStore, color: ColorChoice) -> Vec<u8> {
    let writer = BufferWriter::stderr(color);
    let mut buffer = writer.buffer();
    let config = term::Config::default();

    for diag in diagnostics {
        term::emit(&mut buffer, &config, files, diag).expect("failed to emit diagnostic");
    }
    buffer.into_inner()
}

/// Print the given diagnostics to stderr.
///
/// Rendering goes through an in-memory buffer; printing that buffer with
/// `eprintln` keeps the output visible to the test harness's capture.
pub fn print_diagnostics(diagnostics: &[Diagnostic], files: &FileStore) {
    let rendered = render(diagnostics, files, ColorChoice::Auto);
    eprintln!("{}", String::from_utf8_lossy(&rendered));
}

/// Render the given diagnostics to a plain string, for test assertions.
pub fn diagnostics_string(diagnostics: &[Diagnostic], files: &FileStore) -> String {
    let rendered = render(diagnostics, files, ColorChoice::Never);
    String::from_utf8(rendered).expect("diagnostic rendering produced invalid utf8")
}
