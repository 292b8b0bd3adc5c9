//! Cursor descriptors exposed by a front end.

use smol_str::SmolStr;

use super::{CursorId, TypeId};
use crate::base::{SourceLocation, SourceSpan};
use crate::model::{ExpressionKind, LinkageKind};

/// Cursor kinds the builder understands, plus a catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CursorKind {
    TranslationUnit,
    Namespace,
    ClassDecl,
    StructDecl,
    UnionDecl,
    ClassTemplate,
    EnumDecl,
    EnumConstantDecl,
    FieldDecl,
    VarDecl,
    ParmDecl,
    FunctionDecl,
    FunctionTemplate,
    Constructor,
    Destructor,
    CxxMethod,
    TypedefDecl,
    CxxBaseSpecifier,
    CxxAccessSpecifier,
    TemplateTypeParameter,
    NonTypeTemplateParameter,
    TemplateTemplateParameter,
    UsingDirective,
    LinkageSpec,
    UnexposedDecl,
    TypeRef,
    MacroDefinition,
    MacroExpansion,
    InclusionDirective,
    /// Any expression cursor.
    Expression(ExpressionKind),
    Other(SmolStr),
}

impl CursorKind {
    pub fn is_expression(&self) -> bool {
        matches!(self, CursorKind::Expression(_))
    }

    pub fn is_record(&self) -> bool {
        matches!(
            self,
            CursorKind::ClassDecl
                | CursorKind::StructDecl
                | CursorKind::UnionDecl
                | CursorKind::ClassTemplate
        )
    }

    /// Front-end spelling, used in diagnostics.
    pub fn name(&self) -> &str {
        match self {
            CursorKind::TranslationUnit => "TranslationUnit",
            CursorKind::Namespace => "Namespace",
            CursorKind::ClassDecl => "ClassDecl",
            CursorKind::StructDecl => "StructDecl",
            CursorKind::UnionDecl => "UnionDecl",
            CursorKind::ClassTemplate => "ClassTemplate",
            CursorKind::EnumDecl => "EnumDecl",
            CursorKind::EnumConstantDecl => "EnumConstantDecl",
            CursorKind::FieldDecl => "FieldDecl",
            CursorKind::VarDecl => "VarDecl",
            CursorKind::ParmDecl => "ParmDecl",
            CursorKind::FunctionDecl => "FunctionDecl",
            CursorKind::FunctionTemplate => "FunctionTemplate",
            CursorKind::Constructor => "Constructor",
            CursorKind::Destructor => "Destructor",
            CursorKind::CxxMethod => "CXXMethod",
            CursorKind::TypedefDecl => "TypedefDecl",
            CursorKind::CxxBaseSpecifier => "CXXBaseSpecifier",
            CursorKind::CxxAccessSpecifier => "CXXAccessSpecifier",
            CursorKind::TemplateTypeParameter => "TemplateTypeParameter",
            CursorKind::NonTypeTemplateParameter => "NonTypeTemplateParameter",
            CursorKind::TemplateTemplateParameter => "TemplateTemplateParameter",
            CursorKind::UsingDirective => "UsingDirective",
            CursorKind::LinkageSpec => "LinkageSpec",
            CursorKind::UnexposedDecl => "UnexposedDecl",
            CursorKind::TypeRef => "TypeRef",
            CursorKind::MacroDefinition => "MacroDefinition",
            CursorKind::MacroExpansion => "MacroExpansion",
            CursorKind::InclusionDirective => "InclusionDirective",
            CursorKind::Expression(_) => "Expression",
            CursorKind::Other(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StorageClass {
    #[default]
    Invalid,
    None,
    Extern,
    Static,
    PrivateExtern,
    Auto,
    Register,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessSpecifier {
    #[default]
    Invalid,
    Public,
    Protected,
    Private,
}

/// C++ method traits, all false for free functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodTraits {
    pub is_const: bool,
    pub is_virtual: bool,
    pub is_pure_virtual: bool,
    pub is_defaulted: bool,
    pub is_inlined: bool,
}

/// Everything the builder asks about one cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorInfo {
    pub kind: CursorKind,
    pub spelling: SmolStr,
    /// Unique symbol; empty for cursors that have none.
    pub usr: SmolStr,
    pub semantic_parent: Option<CursorId>,
    /// Position of the declared name.
    pub location: SourceLocation,
    pub extent: SourceSpan,
    pub is_definition: bool,
    pub is_anonymous: bool,
    /// Anonymous struct/union declared as a member of a record.
    pub is_anonymous_record: bool,
    pub in_system_header: bool,
    pub storage: StorageClass,
    pub linkage: LinkageKind,
    pub access: AccessSpecifier,
    pub ty: Option<TypeId>,
    pub result_type: Option<TypeId>,
    pub typedef_underlying: Option<TypeId>,
    pub enum_integer_type: Option<TypeId>,
    pub enum_is_scoped: bool,
    pub enum_constant_value: i64,
    pub is_bit_field: bool,
    pub bit_field_width: i32,
    pub is_virtual_base: bool,
    pub method: MethodTraits,
    /// Record kind behind a class template.
    pub templated_kind: Option<CursorKind>,
}

impl CursorInfo {
    pub fn new(kind: CursorKind, spelling: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            usr: SmolStr::default(),
            semantic_parent: None,
            location: SourceLocation::default(),
            extent: SourceSpan::default(),
            is_definition: false,
            is_anonymous: false,
            is_anonymous_record: false,
            in_system_header: false,
            storage: StorageClass::None,
            linkage: LinkageKind::Invalid,
            access: AccessSpecifier::Invalid,
            ty: None,
            result_type: None,
            typedef_underlying: None,
            enum_integer_type: None,
            enum_is_scoped: false,
            enum_constant_value: 0,
            is_bit_field: false,
            bit_field_width: 0,
            is_virtual_base: false,
            method: MethodTraits::default(),
            templated_kind: None,
        }
    }

    pub fn with_usr(mut self, usr: impl Into<SmolStr>) -> Self {
        self.usr = usr.into();
        self
    }

    /// Sets the extent; the location follows its start.
    pub fn with_extent(mut self, extent: SourceSpan) -> Self {
        self.location = extent.start.clone();
        self.extent = extent;
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_type(mut self, ty: TypeId) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_result_type(mut self, ty: TypeId) -> Self {
        self.result_type = Some(ty);
        self
    }

    pub fn with_semantic_parent(mut self, parent: CursorId) -> Self {
        self.semantic_parent = Some(parent);
        self
    }

    pub fn with_storage(mut self, storage: StorageClass) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_linkage(mut self, linkage: LinkageKind) -> Self {
        self.linkage = linkage;
        self
    }

    pub fn with_access(mut self, access: AccessSpecifier) -> Self {
        self.access = access;
        self
    }

    pub fn with_method(mut self, method: MethodTraits) -> Self {
        self.method = method;
        self
    }

    pub fn definition(mut self) -> Self {
        self.is_definition = true;
        self
    }

    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    pub fn system_header(mut self) -> Self {
        self.in_system_header = true;
        self
    }
}
