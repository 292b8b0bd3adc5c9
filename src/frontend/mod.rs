//! Front-end contract.
//!
//! The builder never parses C/C++ itself. It walks a cursor tree through
//! [`FrontEnd`], which any parser binding can implement. [`MemoryUnit`] is an
//! owned implementation used for tests and for trees produced elsewhere.

mod comment;
mod cursor;
mod lexer;
mod memory;
mod types;

use smol_str::SmolStr;

pub use comment::{RawComment, RawCommentKind};
pub use cursor::{AccessSpecifier, CursorInfo, CursorKind, MethodTraits, StorageClass};
pub use lexer::{Lexeme, Lexer, is_keyword, tokenize};
pub use memory::{MemoryUnit, SourceFile};
pub use types::{TypeInfo, TypeKind};

use crate::base::{SourceLocation, SourceSpan};

/// Handle to a cursor owned by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorId(pub u32);

/// Handle to a type owned by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

/// Lexical class of a re-lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawTokenKind {
    Punctuation,
    Keyword,
    Identifier,
    Literal,
    Comment,
    /// Not a valid C/C++ token.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub kind: RawTokenKind,
    pub span: SourceSpan,
}

/// Result of constant-folding a cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalResult {
    Int(i64),
    Float(f64),
    Str(String),
    /// Not a constant expression.
    Unexposed,
    /// A constant of a kind the model cannot hold, by front-end name.
    Unsupported(SmolStr),
}

/// Visitor verdict for one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildVisit {
    Continue,
    Recurse,
    Break,
}

pub trait FrontEnd {
    fn translation_unit(&self) -> CursorId;

    fn cursor(&self, id: CursorId) -> &CursorInfo;

    /// Direct children in source order.
    fn children(&self, id: CursorId) -> &[CursorId];

    fn ty(&self, id: TypeId) -> &TypeInfo;

    /// Re-lex a source range.
    fn tokenize(&self, span: &SourceSpan) -> Vec<RawToken>;

    fn token_spelling(&self, token: &RawToken) -> SmolStr;

    /// Position of `line:column` in `file`, if the file has it.
    fn location(&self, file: &str, line: u32, column: u32) -> Option<SourceLocation>;

    fn evaluate(&self, id: CursorId) -> EvalResult;

    fn comment(&self, id: CursorId) -> Option<&RawComment>;
}

/// Walk the children of `parent` in pre-order.
///
/// The visitor gets `(child, parent)` and decides whether to skip the child's
/// subtree, descend into it, or stop the walk. Returns `Ok(true)` when the
/// walk was stopped by [`ChildVisit::Break`].
pub fn visit_children<F, E>(
    fe: &F,
    parent: CursorId,
    visitor: &mut dyn FnMut(CursorId, CursorId) -> Result<ChildVisit, E>,
) -> Result<bool, E>
where
    F: FrontEnd + ?Sized,
{
    for &child in fe.children(parent) {
        match visitor(child, parent)? {
            ChildVisit::Continue => {}
            ChildVisit::Recurse => {
                if visit_children(fe, child, visitor)? {
                    return Ok(true);
                }
            }
            ChildVisit::Break => return Ok(true),
        }
    }
    Ok(false)
}
