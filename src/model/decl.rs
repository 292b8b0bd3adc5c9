//! Leaf declarations: functions, fields/variables, typedefs, enum items, macros.

use smol_str::SmolStr;

use super::ContainerId;
use super::attribute::Attribute;
use super::comment::Comment;
use super::expr::{Expression, Value};
use super::token::{Token, tokens_to_string};
use super::types::CppType;
use crate::base::SourceSpan;

// ============================================================================
// DECLARATION ATTRIBUTES
// ============================================================================

/// Member access. `Default` is used outside of classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Default,
    Public,
    Protected,
    Private,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StorageQualifier {
    #[default]
    None,
    Extern,
    Static,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LinkageKind {
    #[default]
    Invalid,
    NoLinkage,
    Internal,
    UniqueExternal,
    External,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum CallingConvention {
    #[default]
    Default,
    C,
    X86StdCall,
    X86FastCall,
    X86ThisCall,
    X86Pascal,
    AAPCS,
    AAPCS_VFP,
    X86RegCall,
    IntelOclBicc,
    Win64,
    X86_64SysV,
    X86VectorCall,
    Swift,
    PreserveMost,
    PreserveAll,
    AArch64VectorCall,
    Invalid,
    Unexposed,
}

bitflags::bitflags! {
    /// Independent function properties.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FunctionFlags: u32 {
        const INLINE      = 1 << 0;
        const CONST       = 1 << 1;
        const DEFAULTED   = 1 << 2;
        const VIRTUAL     = 1 << 3;
        // Pure always comes with VIRTUAL
        const PURE        = 1 << 4;
        const METHOD      = 1 << 5;
        const CONSTRUCTOR = 1 << 6;
        const DESTRUCTOR  = 1 << 7;
    }
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// A function or method parameter, also used by function types.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: SmolStr,
    pub ty: CppType,
    pub init_expression: Option<Expression>,
    pub init_value: Option<Value>,
}

impl Parameter {
    pub fn new(name: impl Into<SmolStr>, ty: CppType) -> Self {
        Self {
            name: name.into(),
            ty,
            init_expression: None,
            init_value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: SmolStr,
    pub parent: Option<ContainerId>,
    pub visibility: Visibility,
    pub storage: StorageQualifier,
    pub linkage: LinkageKind,
    pub flags: FunctionFlags,
    pub return_type: CppType,
    pub parameters: Vec<Parameter>,
    pub calling_convention: CallingConvention,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

impl Function {
    pub fn new(name: impl Into<SmolStr>, return_type: CppType) -> Self {
        Self {
            name: name.into(),
            parent: None,
            visibility: Visibility::Default,
            storage: StorageQualifier::None,
            linkage: LinkageKind::Invalid,
            flags: FunctionFlags::empty(),
            return_type,
            parameters: Vec::new(),
            calling_convention: CallingConvention::Default,
            attributes: Vec::new(),
            comment: None,
            span: SourceSpan::default(),
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.flags.contains(FunctionFlags::CONSTRUCTOR)
    }

    pub fn is_virtual(&self) -> bool {
        self.flags.contains(FunctionFlags::VIRTUAL)
    }

    pub fn is_pure(&self) -> bool {
        self.flags.contains(FunctionFlags::PURE)
    }
}

/// A class field or a namespace-scope variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: SmolStr,
    pub parent: Option<ContainerId>,
    pub ty: CppType,
    pub visibility: Visibility,
    pub storage: StorageQualifier,
    /// Generated name (`__anonymous__N`) for an anonymous nested record.
    pub is_anonymous: bool,
    pub is_bit_field: bool,
    pub bit_field_width: i32,
    pub init_expression: Option<Expression>,
    pub init_value: Option<Value>,
    pub attributes: Vec<Attribute>,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

impl Field {
    pub fn new(name: impl Into<SmolStr>, ty: CppType) -> Self {
        Self {
            name: name.into(),
            parent: None,
            ty,
            visibility: Visibility::Default,
            storage: StorageQualifier::None,
            is_anonymous: false,
            is_bit_field: false,
            bit_field_width: 0,
            init_expression: None,
            init_value: None,
            attributes: Vec::new(),
            comment: None,
            span: SourceSpan::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Typedef {
    pub name: SmolStr,
    pub parent: Option<ContainerId>,
    pub element_type: CppType,
    pub visibility: Visibility,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

impl Typedef {
    pub fn new(name: impl Into<SmolStr>, element_type: CppType) -> Self {
        Self {
            name: name.into(),
            parent: None,
            element_type,
            visibility: Visibility::Default,
            comment: None,
            span: SourceSpan::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumItem {
    pub name: SmolStr,
    pub parent: Option<ContainerId>,
    pub value: i64,
    pub value_expression: Option<Expression>,
    pub comment: Option<Comment>,
    pub span: SourceSpan,
}

impl EnumItem {
    pub fn new(name: impl Into<SmolStr>, value: i64) -> Self {
        Self {
            name: name.into(),
            parent: None,
            value,
            value_expression: None,
            comment: None,
            span: SourceSpan::default(),
        }
    }
}

/// A `#define`. Object-like macros have `parameters == None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Macro {
    pub name: SmolStr,
    pub parameters: Option<Vec<SmolStr>>,
    /// Body tokens, without the name and parameter list.
    pub tokens: Vec<Token>,
    pub value: String,
    pub span: SourceSpan,
}

impl Macro {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
            tokens: Vec::new(),
            value: String::new(),
            span: SourceSpan::default(),
        }
    }

    pub fn is_function_like(&self) -> bool {
        self.parameters.is_some()
    }

    /// Recompute `value` from `tokens`.
    pub fn update_value_from_tokens(&mut self) {
        self.value = tokens_to_string(&self.tokens);
    }
}

impl std::fmt::Display for Macro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#define {}", self.name)?;
        if let Some(parameters) = &self.parameters {
            write!(f, "({})", parameters.join(", "))?;
        }
        if !self.value.is_empty() {
            write!(f, " {}", self.value)?;
        }
        Ok(())
    }
}
