//! Type descriptors exposed by a front end.

use smol_str::SmolStr;

use super::{CursorId, TypeId};
use crate::model::CallingConvention;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Invalid,
    Unexposed,
    Void,
    Bool,
    CharU,
    UChar,
    Char16,
    Char32,
    UShort,
    UInt,
    ULong,
    ULongLong,
    CharS,
    SChar,
    WChar,
    Short,
    Int,
    Long,
    LongLong,
    Float,
    Double,
    LongDouble,
    Pointer,
    LValueReference,
    RValueReference,
    Record,
    Enum,
    Typedef,
    FunctionProto,
    ConstantArray,
    IncompleteArray,
    DependentSizedArray,
    Elaborated,
    Attributed,
    TemplateTypeParm,
    Other(SmolStr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    pub kind: TypeKind,
    pub spelling: SmolStr,
    pub is_const: bool,
    pub is_volatile: bool,
    /// `-1` when the front end cannot size the type.
    pub size_of: i64,
    pub pointee: Option<TypeId>,
    pub element: Option<TypeId>,
    pub array_size: i64,
    pub canonical: Option<TypeId>,
    /// Type under an attribute, for `Attributed`.
    pub modified: Option<TypeId>,
    pub result: Option<TypeId>,
    pub arguments: Vec<TypeId>,
    pub declaration: Option<CursorId>,
    pub calling_convention: CallingConvention,
}

impl TypeInfo {
    pub fn new(kind: TypeKind, spelling: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            is_const: false,
            is_volatile: false,
            size_of: -1,
            pointee: None,
            element: None,
            array_size: -1,
            canonical: None,
            modified: None,
            result: None,
            arguments: Vec::new(),
            declaration: None,
            calling_convention: CallingConvention::Default,
        }
    }

    pub fn with_size(mut self, size_of: i64) -> Self {
        self.size_of = size_of;
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn volatile(mut self) -> Self {
        self.is_volatile = true;
        self
    }

    pub fn with_pointee(mut self, pointee: TypeId) -> Self {
        self.pointee = Some(pointee);
        self
    }

    pub fn with_element(mut self, element: TypeId, array_size: i64) -> Self {
        self.element = Some(element);
        self.array_size = array_size;
        self
    }

    pub fn with_canonical(mut self, canonical: TypeId) -> Self {
        self.canonical = Some(canonical);
        self
    }

    pub fn with_modified(mut self, modified: TypeId) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn with_declaration(mut self, declaration: CursorId) -> Self {
        self.declaration = Some(declaration);
        self
    }

    pub fn with_signature(mut self, result: TypeId, arguments: Vec<TypeId>) -> Self {
        self.result = Some(result);
        self.arguments = arguments;
        self
    }

    pub fn with_calling_convention(mut self, calling_convention: CallingConvention) -> Self {
        self.calling_convention = calling_convention;
        self
    }
}
