//! Containers: namespaces, classes/structs/unions and enums.

use smol_str::SmolStr;

use super::attribute::Attribute;
use super::comment::Comment;
use super::decl::Visibility;
use super::types::CppType;
use super::{
    ClassId, ContainerId, EnumId, EnumItemId, FieldId, FunctionId, NamespaceId, TypedefId,
};
use crate::base::SourceSpan;

/// Declarations owned by a namespace, a class or a global scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Members {
    pub namespaces: Vec<NamespaceId>,
    pub classes: Vec<ClassId>,
    pub enums: Vec<EnumId>,
    pub functions: Vec<FunctionId>,
    pub fields: Vec<FieldId>,
    pub typedefs: Vec<TypedefId>,
}

impl Members {
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
            && self.classes.is_empty()
            && self.enums.is_empty()
            && self.functions.is_empty()
            && self.fields.is_empty()
            && self.typedefs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    pub name: SmolStr,
    pub parent: Option<ContainerId>,
    pub members: Members,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

impl Namespace {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            members: Members::default(),
            comment: None,
            span: SourceSpan::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    #[default]
    Struct,
    Union,
}

impl ClassKind {
    /// Member visibility before any access specifier.
    pub fn default_visibility(self) -> Visibility {
        match self {
            ClassKind::Class => Visibility::Private,
            ClassKind::Struct | ClassKind::Union => Visibility::Public,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Struct => "struct",
            ClassKind::Union => "union",
        }
    }
}

/// One entry of a class's base-specifier list.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseType {
    pub ty: CppType,
    pub visibility: Visibility,
    pub is_virtual: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub name: SmolStr,
    pub kind: ClassKind,
    pub parent: Option<ContainerId>,
    pub is_anonymous: bool,
    /// Set once, when the defining cursor is first seen.
    pub is_definition: bool,
    pub size_of: i64,
    pub base_types: Vec<BaseType>,
    /// Type parameter names of a class template, in order.
    pub template_parameters: Vec<SmolStr>,
    pub constructors: Vec<FunctionId>,
    pub members: Members,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

impl Class {
    pub fn new(name: impl Into<SmolStr>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            is_anonymous: false,
            is_definition: false,
            size_of: 0,
            base_types: Vec::new(),
            template_parameters: Vec::new(),
            constructors: Vec::new(),
            members: Members::default(),
            attributes: Vec::new(),
            comment: None,
            span: SourceSpan::default(),
        }
    }

    pub fn is_template(&self) -> bool {
        !self.template_parameters.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enum {
    pub name: SmolStr,
    pub parent: Option<ContainerId>,
    pub is_anonymous: bool,
    /// `enum class` / `enum struct`
    pub is_scoped: bool,
    pub integer_type: Option<CppType>,
    pub items: Vec<EnumItemId>,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

impl Enum {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            is_anonymous: false,
            is_scoped: false,
            integer_type: None,
            items: Vec::new(),
            attributes: Vec::new(),
            comment: None,
            span: SourceSpan::default(),
        }
    }
}
