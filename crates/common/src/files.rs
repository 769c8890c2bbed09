use codespan_reporting::files::{Error, Files, SimpleFiles};
use std::ops::Range;
use std::{fs, io};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct SourceFileId(usize);

impl SourceFileId {
    /// An id that doesn't correspond to any file in any `FileStore`.
    /// For tests that only inspect diagnostic structure.
    pub fn dummy_file() -> Self {
        SourceFileId(usize::MAX)
    }
}

/// Stores the source files known to the current run, and maps
/// [`SourceFileId`]s to their names and contents for diagnostic rendering.
pub struct FileStore {
    files: SimpleFiles<String, String>,
}

impl FileStore {
    pub fn new() -> Self {
        FileStore {
            files: SimpleFiles::new(),
        }
    }

    pub fn add_file(&mut self, name: &str, content: &str) -> SourceFileId {
        SourceFileId(self.files.add(name.into(), content.into()))
    }

    /// Read the file at `path` into the store, returning its content and id.
    pub fn load_file(&mut self, path: &str) -> io::Result<(String, SourceFileId)> {
        let content = fs::read_to_string(path)?;
        let id = self.add_file(path, &content);
        Ok((content, id))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Files<'a> for FileStore {
    type FileId = SourceFileId;
    type Name = String;
    type Source = &'a str;

    fn name(&'a self, id: SourceFileId) -> Result<String, Error> {
        self.files.name(id.0)
    }

    fn source(&'a self, id: SourceFileId) -> Result<&'a str, Error> {
        self.files.source(id.0)
    }

    fn line_index(&'a self, id: SourceFileId, byte_index: usize) -> Result<usize, Error> {
        self.files.line_index(id.0, byte_index)
    }

    fn line_range(&'a self, id: SourceFileId, line_index: usize) -> Result<Range<usize>, Error> {
        self.files.line_range(id.0, line_index)
    }
}
