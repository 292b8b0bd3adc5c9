//! Container resolution: namespaces, records and enums.

use smol_str::SmolStr;

use crate::frontend::{CursorId, CursorInfo, CursorKind, FrontEnd};
use crate::model::{
    Class, ClassId, ClassKind, ContainerId, CppType, Enum, EnumId, Field, Namespace, Visibility,
    codes,
};

use super::attributes::parse_attributes;
use super::context::{ContainerContext, storage_of, symbol_key};
use super::tokens::Tokenizer;
use super::{BuildError, ModelBuilder};

impl<F: FrontEnd + ?Sized> ModelBuilder<'_, F> {
    /// The container a cursor stands for, created and attached on first use.
    ///
    /// Translation units and transparent declarations (`extern "C"` blocks)
    /// resolve to the current root. A cursor of any other non-container kind
    /// is reported once and resolves to its own parent.
    pub(super) fn get_or_create_container(
        &mut self,
        cursor: CursorId,
    ) -> Result<ContainerId, BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        if matches!(
            info.kind,
            CursorKind::TranslationUnit | CursorKind::UnexposedDecl | CursorKind::LinkageSpec
        ) {
            return Ok(self.root);
        }

        let key = symbol_key(info);
        if let Some(&container) = self.containers.get(&key) {
            return Ok(container);
        }

        let parent = self.semantic_container(info)?;
        let (container, visibility) = match &info.kind {
            CursorKind::Namespace => {
                let id = self
                    .compilation
                    .alloc_namespace(Namespace::new(info.spelling.clone()));
                self.compilation.attach_namespace(parent, id)?;
                (ContainerId::Namespace(id), Visibility::Default)
            }
            CursorKind::EnumDecl => {
                let mut node = Enum::new(info.spelling.clone());
                node.is_anonymous = info.is_anonymous;
                let id = self.compilation.alloc_enum(node);
                self.compilation.attach_enum(parent, id)?;
                (ContainerId::Enum(id), Visibility::Default)
            }
            kind if kind.is_record() => {
                let class_kind = record_kind(info);
                let mut node = Class::new(info.spelling.clone(), class_kind);
                node.is_anonymous = info.is_anonymous;
                if *kind == CursorKind::ClassTemplate {
                    node.template_parameters = template_parameters(fe, cursor);
                }
                let id = self.compilation.alloc_class(node);
                self.compilation.attach_class(parent, id)?;
                (ContainerId::Class(id), class_kind.default_visibility())
            }
            kind => {
                self.compilation.diagnostics_mut().warning(
                    codes::UNHANDLED_DECLARATION,
                    info.location.clone(),
                    format!(
                        "Unhandled container kind `{}` for `{}`",
                        kind.name(),
                        info.spelling
                    ),
                );
                self.containers.insert(key, parent);
                return Ok(parent);
            }
        };

        tracing::debug!(
            "[MODEL] create {} '{}' in {}",
            container.kind_name(),
            info.spelling,
            parent.kind_name()
        );
        self.containers.insert(key, container);
        self.contexts
            .insert(container, ContainerContext::new(visibility));
        Ok(container)
    }

    /// Owner of a declaration by its semantic parent, or the root.
    pub(super) fn semantic_container(&mut self, info: &CursorInfo) -> Result<ContainerId, BuildError> {
        match info.semantic_parent {
            Some(parent) => self.get_or_create_container(parent),
            None => Ok(self.root),
        }
    }

    /// Resolve a record and, the first time its definition is seen, fill in
    /// definition-only data and visit its members.
    pub(super) fn visit_class(&mut self, cursor: CursorId) -> Result<ClassId, BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        let container = self.get_or_create_container(cursor)?;
        let ContainerId::Class(id) = container else {
            return Err(BuildError::unexpected_container(
                "class",
                container,
                info.spelling.clone(),
            ));
        };

        let visited = self.context_mut(container).children_visited;
        if !info.is_definition || self.compilation.class(id).is_definition || visited {
            return Ok(id);
        }

        let attributes = if self.options.parse_attributes {
            parse_attributes(&Tokenizer::new(fe, &info.extent))
        } else {
            Vec::new()
        };
        let class = self.compilation.class_mut(id);
        class.attributes = attributes;
        class.is_definition = true;
        if let Some(ty) = info.ty {
            class.size_of = fe.ty(ty).size_of;
        }
        let visibility = class.kind.default_visibility();

        let context = self.context_mut(container);
        context.children_visited = true;
        context.visibility = visibility;

        self.visit_members(cursor)?;
        Ok(id)
    }

    /// Resolve an enum and, once, its integer type and items.
    pub(super) fn visit_enum(&mut self, cursor: CursorId) -> Result<EnumId, BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        let container = self.get_or_create_container(cursor)?;
        let ContainerId::Enum(id) = container else {
            return Err(BuildError::unexpected_container(
                "enum",
                container,
                info.spelling.clone(),
            ));
        };

        if !info.is_definition || self.context_mut(container).children_visited {
            return Ok(id);
        }

        let integer_type = match info.enum_integer_type {
            Some(ty) => Some(self.resolve_type(ty, cursor)?),
            None => None,
        };
        let attributes = if self.options.parse_attributes {
            parse_attributes(&Tokenizer::new(fe, &info.extent))
        } else {
            Vec::new()
        };
        let node = self.compilation.enum_mut(id);
        node.integer_type = integer_type;
        node.is_scoped = info.enum_is_scoped;
        node.attributes = attributes;
        self.context_mut(container).children_visited = true;

        self.visit_members(cursor)?;
        Ok(id)
    }

    /// Name the unnamed field an anonymous struct/union member implies.
    pub(super) fn add_anonymous_field(
        &mut self,
        cursor: CursorId,
        record: ClassId,
        parent: CursorId,
    ) -> Result<(), BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        let container = self.get_or_create_container(parent)?;
        if matches!(container, ContainerId::Enum(_)) {
            return Ok(());
        }

        let context = self.context_mut(container);
        let name = context.next_anonymous_field_name();
        let visibility = context.visibility;

        let mut field = Field::new(name, CppType::Class(record));
        field.is_anonymous = true;
        field.visibility = visibility;
        field.storage = storage_of(info.storage);
        field.span = info.extent.clone();
        if self.options.parse_attributes {
            field.attributes = parse_attributes(&Tokenizer::new(fe, &info.extent));
        }

        let id = self.compilation.alloc_field(field);
        self.compilation.attach_field(container, id)?;
        Ok(())
    }
}

/// Record kind of a class cursor. A class template takes the kind of the
/// record it declares.
fn record_kind(info: &CursorInfo) -> ClassKind {
    let kind = match (&info.kind, &info.templated_kind) {
        (CursorKind::ClassTemplate, Some(templated)) => templated,
        (kind, _) => kind,
    };
    match kind {
        CursorKind::StructDecl => ClassKind::Struct,
        CursorKind::UnionDecl => ClassKind::Union,
        _ => ClassKind::Class,
    }
}

fn template_parameters<F: FrontEnd + ?Sized>(fe: &F, cursor: CursorId) -> Vec<SmolStr> {
    fe.children(cursor)
        .iter()
        .map(|&child| fe.cursor(child))
        .filter(|child| child.kind == CursorKind::TemplateTypeParameter)
        .map(|child| child.spelling.clone())
        .collect()
}
