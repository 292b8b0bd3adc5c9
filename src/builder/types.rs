//! Type resolution.
//!
//! Every front-end type lowers to some [`CppType`]. Kinds without a
//! structured mapping become [`CppType::Unexposed`] with a diagnostic, so
//! resolution only fails on builder contract violations.

use crate::frontend::{ChildVisit, CursorId, CursorKind, FrontEnd, TypeId, TypeKind, visit_children};
use crate::model::{
    ContainerId, CppType, FunctionType, Parameter, PrimitiveKind, TypeQualifier, Typedef, codes,
};

use super::context::symbol_key;
use super::{BuildError, ModelBuilder};

impl<F: FrontEnd + ?Sized> ModelBuilder<'_, F> {
    /// Resolve `ty`, the declared type of `cursor`. The cursor locates
    /// diagnostics and provides parameter names for a function type that is
    /// `ty` itself or what it points to.
    pub(super) fn resolve_type(&mut self, ty: TypeId, cursor: CursorId) -> Result<CppType, BuildError> {
        self.resolve_with_names(ty, cursor, Some(cursor))
    }

    /// Resolve the result type of the function at `cursor`. The function's
    /// parameter cursors name its own parameters, never those of a returned
    /// function type.
    pub(super) fn resolve_result_type(
        &mut self,
        ty: Option<TypeId>,
        cursor: CursorId,
    ) -> Result<CppType, BuildError> {
        match ty {
            Some(ty) => self.resolve_with_names(ty, cursor, None),
            None => Ok(self.unsupported_type(cursor, "", -1, "<missing>")),
        }
    }

    /// `names` is the cursor whose parameter children name function-type
    /// parameters, if any.
    fn resolve_with_names(
        &mut self,
        ty: TypeId,
        cursor: CursorId,
        names: Option<CursorId>,
    ) -> Result<CppType, BuildError> {
        let info = self.fe.ty(ty);
        let qualifier = if info.is_const {
            Some(TypeQualifier::Const)
        } else if info.is_volatile {
            Some(TypeQualifier::Volatile)
        } else {
            None
        };

        let resolved = self.resolve_unqualified(ty, cursor, names)?;
        Ok(match qualifier {
            Some(qualifier) => CppType::qualified(qualifier, resolved),
            None => resolved,
        })
    }

    /// [`resolve_type`](Self::resolve_type) for a type the front end may not
    /// have reported.
    pub(super) fn resolve_optional(
        &mut self,
        ty: Option<TypeId>,
        cursor: CursorId,
    ) -> Result<CppType, BuildError> {
        match ty {
            Some(ty) => self.resolve_type(ty, cursor),
            None => Ok(self.unsupported_type(cursor, "", -1, "<missing>")),
        }
    }

    fn resolve_unqualified(
        &mut self,
        ty: TypeId,
        cursor: CursorId,
        names: Option<CursorId>,
    ) -> Result<CppType, BuildError> {
        let fe = self.fe;
        let info = fe.ty(ty);

        if let Some(primitive) = primitive_kind(&info.kind) {
            return Ok(CppType::Primitive(primitive));
        }

        let resolved = match &info.kind {
            TypeKind::Pointer => match info.pointee {
                Some(pointee) => CppType::pointer_to(self.resolve_with_names(pointee, cursor, names)?, info.size_of),
                None => self.unsupported_type(cursor, &info.spelling, info.size_of, "Pointer"),
            },
            TypeKind::LValueReference | TypeKind::RValueReference => match info.pointee {
                Some(pointee) => CppType::Reference {
                    element: Box::new(self.resolve_with_names(pointee, cursor, names)?),
                },
                None => self.unsupported_type(cursor, &info.spelling, info.size_of, "Reference"),
            },
            TypeKind::Record => match info.declaration {
                Some(declaration) => CppType::Class(self.visit_class(declaration)?),
                None => self.unsupported_type(cursor, &info.spelling, info.size_of, "Record"),
            },
            TypeKind::Enum => match info.declaration {
                Some(declaration) => CppType::Enum(self.visit_enum(declaration)?),
                None => self.unsupported_type(cursor, &info.spelling, info.size_of, "Enum"),
            },
            TypeKind::Typedef => match info.declaration {
                Some(declaration) => self.visit_typedef(declaration)?,
                None => self.unsupported_type(cursor, &info.spelling, info.size_of, "Typedef"),
            },
            TypeKind::FunctionProto => CppType::Function(Box::new(self.function_type(ty, cursor, names)?)),
            TypeKind::ConstantArray | TypeKind::IncompleteArray => {
                let size = match info.kind {
                    TypeKind::ConstantArray => info.array_size,
                    _ => -1,
                };
                self.array_of(info.element, size, cursor, names)?
            }
            TypeKind::DependentSizedArray => {
                self.compilation.diagnostics_mut().warning(
                    codes::DEPENDENT_ARRAY,
                    fe.cursor(cursor).location.clone(),
                    format!("Dependent-sized array `{}` treated as incomplete", info.spelling),
                );
                self.array_of(info.element, -1, cursor, names)?
            }
            TypeKind::Elaborated => match info.canonical {
                Some(canonical) => self.resolve_unqualified(canonical, cursor, names)?,
                None => self.unsupported_type(cursor, &info.spelling, info.size_of, "Elaborated"),
            },
            TypeKind::Attributed => match info.modified {
                Some(modified) => self.resolve_unqualified(modified, cursor, names)?,
                None => self.unsupported_type(cursor, &info.spelling, info.size_of, "Attributed"),
            },
            TypeKind::Unexposed | TypeKind::TemplateTypeParm => CppType::Unexposed {
                name: info.spelling.clone(),
                size_of: info.size_of,
            },
            kind => {
                let kind_name = match kind {
                    TypeKind::Other(name) => name.as_str(),
                    TypeKind::Char16 => "Char16",
                    TypeKind::Char32 => "Char32",
                    _ => "Invalid",
                };
                self.unsupported_type(cursor, &info.spelling, info.size_of, kind_name)
            }
        };
        Ok(resolved)
    }

    fn array_of(
        &mut self,
        element: Option<TypeId>,
        size: i64,
        cursor: CursorId,
        names: Option<CursorId>,
    ) -> Result<CppType, BuildError> {
        let element = match element {
            Some(element) => self.resolve_with_names(element, cursor, names)?,
            None => self.unsupported_type(cursor, "", -1, "<missing>"),
        };
        Ok(CppType::Array {
            element: Box::new(element),
            size,
        })
    }

    /// Opaque fallback with a W0002 at the cursor.
    fn unsupported_type(&mut self, cursor: CursorId, spelling: &str, size_of: i64, kind: &str) -> CppType {
        let location = self.fe.cursor(cursor).location.clone();
        self.compilation.diagnostics_mut().warning(
            codes::UNSUPPORTED_TYPE,
            location,
            format!("Unsupported type kind `{}` for `{}`", kind, spelling),
        );
        CppType::Unexposed {
            name: spelling.into(),
            size_of,
        }
    }

    /// Signature of a function prototype. Types come from the prototype;
    /// names come from the parameter cursors under `names`, when given.
    fn function_type(
        &mut self,
        ty: TypeId,
        cursor: CursorId,
        names: Option<CursorId>,
    ) -> Result<FunctionType, BuildError> {
        let fe = self.fe;
        let info = fe.ty(ty);
        let return_type = match info.result {
            Some(result) => self.resolve_with_names(result, cursor, None)?,
            None => CppType::void(),
        };

        let mut parameter_names = Vec::new();
        if let Some(source) = names {
            visit_children(fe, source, &mut |child, _| {
                if fe.cursor(child).kind == CursorKind::ParmDecl {
                    parameter_names.push(fe.cursor(child).spelling.clone());
                    Ok::<_, BuildError>(ChildVisit::Continue)
                } else if parameter_names.is_empty() {
                    Ok(ChildVisit::Recurse)
                } else {
                    Ok(ChildVisit::Continue)
                }
            })?;
        }

        let mut parameters = Vec::with_capacity(info.arguments.len());
        for (i, &argument) in info.arguments.iter().enumerate() {
            let name = parameter_names.get(i).cloned().unwrap_or_default();
            parameters.push(Parameter::new(name, self.resolve_with_names(argument, cursor, None)?));
        }

        Ok(FunctionType {
            return_type,
            parameters,
            calling_convention: info.calling_convention,
        })
    }

    /// Resolve a typedef declaration, once per unique symbol.
    ///
    /// With squashing on, `typedef struct { .. } Name;` renames the record to
    /// `Name` and resolves to the record itself instead of a new typedef.
    pub(super) fn visit_typedef(&mut self, cursor: CursorId) -> Result<CppType, BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        let key = symbol_key(info);
        if let Some(ty) = self.typedefs.get(&key) {
            return Ok(ty.clone());
        }

        let container = self.semantic_container(info)?;
        let underlying = self.resolve_optional(info.typedef_underlying, cursor)?;

        if self.options.auto_squash_typedef {
            if let Some(target) = squash_target(&underlying) {
                if self.can_squash(target, &info.spelling) && self.squashed.insert(target) {
                    tracing::debug!(
                        "[MODEL] squash typedef '{}' into {} '{}'",
                        info.spelling,
                        target.kind_name(),
                        self.compilation.container_name(target)
                    );
                    self.rename_container(target, &info.spelling);
                    self.typedefs.insert(key, underlying.clone());
                    return Ok(underlying);
                }
            }
        }

        let mut typedef = Typedef::new(info.spelling.clone(), underlying);
        typedef.visibility = self.context_mut(container).visibility;
        let id = self.compilation.alloc_typedef(typedef);
        self.compilation.attach_typedef(container, id)?;
        Ok(self
            .typedefs
            .entry(key)
            .or_insert(CppType::Typedef(id))
            .clone())
    }

    fn can_squash(&self, target: ContainerId, typedef_name: &str) -> bool {
        let (name, is_anonymous) = match target {
            ContainerId::Class(id) => {
                let class = self.compilation.class(id);
                (&class.name, class.is_anonymous)
            }
            ContainerId::Enum(id) => {
                let node = self.compilation.enum_(id);
                (&node.name, node.is_anonymous)
            }
            _ => return false,
        };
        is_anonymous || name.is_empty() || name == typedef_name
    }

    fn rename_container(&mut self, target: ContainerId, name: &str) {
        match target {
            ContainerId::Class(id) => {
                let class = self.compilation.class_mut(id);
                class.name = name.into();
                class.is_anonymous = false;
            }
            ContainerId::Enum(id) => {
                let node = self.compilation.enum_mut(id);
                node.name = name.into();
                node.is_anonymous = false;
            }
            _ => {}
        }
    }
}

fn squash_target(ty: &CppType) -> Option<ContainerId> {
    match ty {
        CppType::Class(id) => Some(ContainerId::Class(*id)),
        CppType::Enum(id) => Some(ContainerId::Enum(*id)),
        _ => None,
    }
}

fn primitive_kind(kind: &TypeKind) -> Option<PrimitiveKind> {
    let primitive = match kind {
        TypeKind::Void => PrimitiveKind::Void,
        TypeKind::Bool => PrimitiveKind::Bool,
        TypeKind::CharU | TypeKind::CharS | TypeKind::SChar => PrimitiveKind::Char,
        TypeKind::UChar => PrimitiveKind::UnsignedChar,
        TypeKind::UShort => PrimitiveKind::UnsignedShort,
        TypeKind::UInt => PrimitiveKind::UnsignedInt,
        TypeKind::ULong => PrimitiveKind::UnsignedLong,
        TypeKind::ULongLong => PrimitiveKind::UnsignedLongLong,
        TypeKind::WChar => PrimitiveKind::WChar,
        TypeKind::Short => PrimitiveKind::Short,
        TypeKind::Int => PrimitiveKind::Int,
        TypeKind::Long => PrimitiveKind::Long,
        TypeKind::LongLong => PrimitiveKind::LongLong,
        TypeKind::Float => PrimitiveKind::Float,
        TypeKind::Double => PrimitiveKind::Double,
        TypeKind::LongDouble => PrimitiveKind::LongDouble,
        _ => return None,
    };
    Some(primitive)
}
