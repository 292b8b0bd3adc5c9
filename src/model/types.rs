//! C/C++ types as seen by the model.
//!
//! Named types refer to declarations by id, so rendering a type needs the
//! owning [`Compilation`]; see [`CppType::display`].

use std::fmt;

use smol_str::SmolStr;

use super::decl::{CallingConvention, Parameter};
use super::{ClassId, Compilation, EnumId, TypedefId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Void,
    Bool,
    WChar,
    Char,
    Short,
    Int,
    Long,
    LongLong,
    UnsignedChar,
    UnsignedShort,
    UnsignedInt,
    UnsignedLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Void => "void",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::WChar => "wchar_t",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::LongLong => "long long",
            PrimitiveKind::UnsignedChar => "unsigned char",
            PrimitiveKind::UnsignedShort => "unsigned short",
            PrimitiveKind::UnsignedInt => "unsigned int",
            PrimitiveKind::UnsignedLong => "unsigned long",
            PrimitiveKind::UnsignedLongLong => "unsigned long long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::LongDouble => "long double",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeQualifier {
    Const,
    Volatile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub return_type: CppType,
    pub parameters: Vec<Parameter>,
    pub calling_convention: CallingConvention,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CppType {
    Primitive(PrimitiveKind),
    /// Only one qualifier is kept; `const` wins over `volatile`.
    Qualified {
        qualifier: TypeQualifier,
        element: Box<CppType>,
    },
    Pointer {
        element: Box<CppType>,
        size_of: i64,
    },
    /// Both `T&` and `T&&`.
    Reference { element: Box<CppType> },
    /// `size` is negative for `T[]`.
    Array { element: Box<CppType>, size: i64 },
    Function(Box<FunctionType>),
    Class(ClassId),
    Enum(EnumId),
    Typedef(TypedefId),
    /// Anything without a structured mapping, by its front-end spelling.
    Unexposed { name: SmolStr, size_of: i64 },
}

impl CppType {
    pub fn void() -> Self {
        CppType::Primitive(PrimitiveKind::Void)
    }

    pub fn int() -> Self {
        CppType::Primitive(PrimitiveKind::Int)
    }

    pub fn pointer_to(element: CppType, size_of: i64) -> Self {
        CppType::Pointer {
            element: Box::new(element),
            size_of,
        }
    }

    pub fn qualified(qualifier: TypeQualifier, element: CppType) -> Self {
        CppType::Qualified {
            qualifier,
            element: Box::new(element),
        }
    }

    /// The wrapped type of a qualifier, pointer, reference or array.
    pub fn element(&self) -> Option<&CppType> {
        match self {
            CppType::Qualified { element, .. }
            | CppType::Pointer { element, .. }
            | CppType::Reference { element }
            | CppType::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    /// Strip qualifiers.
    pub fn unqualified(&self) -> &CppType {
        let mut ty = self;
        while let CppType::Qualified { element, .. } = ty {
            ty = element;
        }
        ty
    }

    pub fn is_const(&self) -> bool {
        matches!(
            self,
            CppType::Qualified {
                qualifier: TypeQualifier::Const,
                ..
            }
        )
    }

    pub fn as_class(&self) -> Option<ClassId> {
        match self.unqualified() {
            CppType::Class(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<EnumId> {
        match self.unqualified() {
            CppType::Enum(id) => Some(*id),
            _ => None,
        }
    }

    /// Render with declaration names resolved against `compilation`.
    pub fn display<'a>(&'a self, compilation: &'a Compilation) -> TypeDisplay<'a> {
        TypeDisplay {
            ty: self,
            compilation,
        }
    }
}

pub struct TypeDisplay<'a> {
    ty: &'a CppType,
    compilation: &'a Compilation,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.compilation;
        match self.ty {
            CppType::Primitive(kind) => f.write_str(kind.name()),
            CppType::Qualified { qualifier, element } => {
                let keyword = match qualifier {
                    TypeQualifier::Const => "const",
                    TypeQualifier::Volatile => "volatile",
                };
                write!(f, "{} {}", keyword, element.display(c))
            }
            CppType::Pointer { element, .. } => write!(f, "{}*", element.display(c)),
            CppType::Reference { element } => write!(f, "{}&", element.display(c)),
            CppType::Array { element, size } if *size < 0 => write!(f, "{}[]", element.display(c)),
            CppType::Array { element, size } => write!(f, "{}[{}]", element.display(c), size),
            CppType::Function(function) => {
                write!(f, "{} (", function.return_type.display(c))?;
                for (i, parameter) in function.parameters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", parameter.ty.display(c))?;
                    if !parameter.name.is_empty() {
                        write!(f, " {}", parameter.name)?;
                    }
                }
                f.write_str(")")
            }
            CppType::Class(id) => f.write_str(&c.class(*id).name),
            CppType::Enum(id) => f.write_str(&c.enum_(*id).name),
            CppType::Typedef(id) => f.write_str(&c.typedef(*id).name),
            CppType::Unexposed { name, .. } => f.write_str(name),
        }
    }
}
