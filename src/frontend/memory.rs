//! In-memory front end.
//!
//! Owns the source files, an arena of cursors with child lists, an arena of
//! types, and optional per-cursor comments and fold results. Tokenization is
//! done for real with the C/C++ [`Lexer`](super::Lexer) over the owned text.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::lexer::Lexer;
use super::{
    CursorId, CursorInfo, CursorKind, EvalResult, FrontEnd, RawComment, RawToken, TypeId,
    TypeInfo,
};
use crate::base::{SourceLocation, SourceSpan};

// ============================================================================
// SOURCE FILES
// ============================================================================

/// A source file with a line index.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: SmolStr,
    pub text: String,
    line_starts: Vec<u32>,
}

impl SourceFile {
    pub fn new(name: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i as u32 + 1),
        );
        Self {
            name: name.into(),
            text,
            line_starts,
        }
    }

    /// 1-based line/column of a byte offset.
    pub fn location(&self, offset: u32) -> SourceLocation {
        let offset = offset.min(self.text.len() as u32);
        let line = self.line_starts.partition_point(|start| *start <= offset);
        let column = offset - self.line_starts[line - 1] + 1;
        SourceLocation::new(self.name.clone(), offset, line as u32, column)
    }

    /// Byte offset of a 1-based line/column. The line just past the end of
    /// the file maps to the end of the text.
    pub fn offset_of(&self, line: u32, column: u32) -> Option<u32> {
        if line == 0 || column == 0 {
            return None;
        }
        let end = self.text.len() as u32;
        match self.line_starts.get(line as usize - 1) {
            Some(start) => Some((start + column - 1).min(end)),
            None if line as usize == self.line_starts.len() + 1 => Some(end),
            None => None,
        }
    }

    pub fn span(&self, start: u32, end: u32) -> SourceSpan {
        SourceSpan::new(self.location(start), self.location(end))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

// ============================================================================
// MEMORY UNIT
// ============================================================================

#[derive(Debug, Clone)]
pub struct MemoryUnit {
    files: Vec<SourceFile>,
    cursors: Vec<CursorInfo>,
    children: Vec<Vec<CursorId>>,
    types: Vec<TypeInfo>,
    comments: FxHashMap<CursorId, RawComment>,
    evaluations: FxHashMap<CursorId, EvalResult>,
}

impl MemoryUnit {
    /// A unit with one main file; the translation-unit cursor spans all of it.
    pub fn new(file_name: impl Into<SmolStr>, source: impl Into<String>) -> Self {
        let file = SourceFile::new(file_name, source);
        let extent = file.span(0, file.text.len() as u32);
        let root = CursorInfo::new(CursorKind::TranslationUnit, file.name.clone()).with_extent(extent);
        Self {
            files: vec![file],
            cursors: vec![root],
            children: vec![Vec::new()],
            types: Vec::new(),
            comments: FxHashMap::default(),
            evaluations: FxHashMap::default(),
        }
    }

    /// Add another file, e.g. a system header. Returns its index.
    pub fn add_file(&mut self, name: impl Into<SmolStr>, source: impl Into<String>) -> usize {
        self.files.push(SourceFile::new(name, source));
        self.files.len() - 1
    }

    pub fn file(&self, index: usize) -> &SourceFile {
        &self.files[index]
    }

    fn file_named(&self, name: &str) -> Option<&SourceFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Append `info` as the last child of `parent`. The semantic parent
    /// defaults to `parent`.
    pub fn add_cursor(&mut self, parent: CursorId, mut info: CursorInfo) -> CursorId {
        let id = CursorId(self.cursors.len() as u32);
        info.semantic_parent.get_or_insert(parent);
        self.cursors.push(info);
        self.children.push(Vec::new());
        self.children[parent.0 as usize].push(id);
        id
    }

    pub fn cursor_mut(&mut self, id: CursorId) -> &mut CursorInfo {
        &mut self.cursors[id.0 as usize]
    }

    pub fn add_type(&mut self, info: TypeInfo) -> TypeId {
        self.types.push(info);
        TypeId(self.types.len() as u32 - 1)
    }

    pub fn set_comment(&mut self, cursor: CursorId, comment: RawComment) {
        self.comments.insert(cursor, comment);
    }

    pub fn set_evaluation(&mut self, cursor: CursorId, result: EvalResult) {
        self.evaluations.insert(cursor, result);
    }

    // ------------------------------------------------------------------------
    // Span helpers
    // ------------------------------------------------------------------------

    /// Span of the `n`th (0-based) occurrence of `needle` in file `file`.
    pub fn try_span_in(&self, file: usize, needle: &str, n: usize) -> Option<SourceSpan> {
        let source = self.files.get(file)?;
        let (start, _) = source.text.match_indices(needle).nth(n)?;
        Some(source.span(start as u32, (start + needle.len()) as u32))
    }

    /// Span of the first occurrence of `needle` in the main file.
    ///
    /// # Panics
    ///
    /// Panics when the needle does not occur; fixtures are expected to name
    /// text they contain.
    #[track_caller]
    pub fn span_of(&self, needle: &str) -> SourceSpan {
        self.nth_span_of(needle, 0)
    }

    /// Span of the `n`th occurrence of `needle` in the main file.
    ///
    /// # Panics
    ///
    /// Panics when there are fewer than `n + 1` occurrences.
    #[track_caller]
    pub fn nth_span_of(&self, needle: &str, n: usize) -> SourceSpan {
        match self.try_span_in(0, needle, n) {
            Some(span) => span,
            None => panic!("`{}` (occurrence {}) not found in main file", needle, n),
        }
    }
}

impl FrontEnd for MemoryUnit {
    fn translation_unit(&self) -> CursorId {
        CursorId(0)
    }

    fn cursor(&self, id: CursorId) -> &CursorInfo {
        &self.cursors[id.0 as usize]
    }

    fn children(&self, id: CursorId) -> &[CursorId] {
        &self.children[id.0 as usize]
    }

    fn ty(&self, id: TypeId) -> &TypeInfo {
        &self.types[id.0 as usize]
    }

    fn tokenize(&self, span: &SourceSpan) -> Vec<RawToken> {
        let Some(file) = self.file_named(&span.start.file) else {
            return Vec::new();
        };
        let len = file.text.len() as u32;
        let start = span.start.offset.min(len);
        let end = span.end.offset.clamp(start, len);
        let Some(text) = file.text.get(start as usize..end as usize) else {
            return Vec::new();
        };

        Lexer::new(text)
            .map(|lexeme| {
                let from = start + lexeme.offset;
                let to = from + lexeme.text.len() as u32;
                RawToken {
                    kind: lexeme.kind,
                    span: file.span(from, to),
                }
            })
            .collect()
    }

    fn token_spelling(&self, token: &RawToken) -> SmolStr {
        self.file_named(&token.span.start.file)
            .and_then(|file| {
                file.text
                    .get(token.span.start.offset as usize..token.span.end.offset as usize)
            })
            .map(SmolStr::new)
            .unwrap_or_default()
    }

    fn location(&self, file: &str, line: u32, column: u32) -> Option<SourceLocation> {
        let source = self.file_named(file)?;
        let offset = source.offset_of(line, column)?;
        Some(source.location(offset))
    }

    fn evaluate(&self, id: CursorId) -> EvalResult {
        self.evaluations
            .get(&id)
            .cloned()
            .unwrap_or(EvalResult::Unexposed)
    }

    fn comment(&self, id: CursorId) -> Option<&RawComment> {
        self.comments.get(&id)
    }
}
