//! Declaration model.
//!
//! The [`Compilation`] owns every node of one build in per-kind arenas.
//! Nodes refer to each other through typed ids; the upward edge of each
//! declaration is a [`ContainerId`] set exactly once when the node is
//! attached to its owner.

mod attribute;
mod comment;
mod container;
mod decl;
mod diagnostics;
mod error;
mod expr;
mod token;
mod types;

use indexmap::IndexMap;
use smol_str::SmolStr;

pub use attribute::Attribute;
pub use comment::{
    BlockCommand, Comment, CommentKind, HtmlStartTag, InlineCommand, InlineRenderKind,
    ParamCommand, ParamDirection, TemplateParamCommand, needs_line_break,
};
pub use container::{BaseType, Class, ClassKind, Enum, Members, Namespace};
pub use decl::{
    CallingConvention, EnumItem, Field, Function, FunctionFlags, LinkageKind, Macro, Parameter,
    StorageQualifier, Typedef, Visibility,
};
pub use diagnostics::{Diagnostic, Diagnostics, Severity, codes};
pub use error::ModelError;
pub use expr::{Expression, ExpressionKind, RawExpression, Value};
pub use token::{Token, TokenKind, tokens_to_string};
pub use types::{CppType, FunctionType, PrimitiveKind, TypeDisplay, TypeQualifier};

// ============================================================================
// IDS
// ============================================================================

macro_rules! arena_ids {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name(u32);

            impl $name {
                pub fn index(self) -> usize {
                    self.0 as usize
                }

                fn next(len: usize) -> Self {
                    Self(len as u32)
                }
            }
        )*
    };
}

arena_ids! {
    NamespaceId,
    ClassId,
    EnumId,
    FunctionId,
    FieldId,
    TypedefId,
    EnumItemId,
}

/// Anything that can own declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    /// Declarations from user files.
    Global,
    /// Declarations from system headers.
    System,
    Namespace(NamespaceId),
    Class(ClassId),
    Enum(EnumId),
}

impl ContainerId {
    pub fn kind_name(self) -> &'static str {
        match self {
            ContainerId::Global => "global scope",
            ContainerId::System => "system scope",
            ContainerId::Namespace(_) => "namespace",
            ContainerId::Class(_) => "class",
            ContainerId::Enum(_) => "enum",
        }
    }

    pub fn is_root(self) -> bool {
        matches!(self, ContainerId::Global | ContainerId::System)
    }
}

// ============================================================================
// PARENTING
// ============================================================================

trait Parented {
    const KIND: &'static str;
    fn name(&self) -> &SmolStr;
    fn parent_slot(&mut self) -> &mut Option<ContainerId>;
}

macro_rules! parented {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl Parented for $ty {
                const KIND: &'static str = $kind;
                fn name(&self) -> &SmolStr {
                    &self.name
                }
                fn parent_slot(&mut self) -> &mut Option<ContainerId> {
                    &mut self.parent
                }
            }
        )*
    };
}

parented! {
    Namespace => "namespace",
    Class => "class",
    Enum => "enum",
    Function => "function",
    Field => "field",
    Typedef => "typedef",
    EnumItem => "enum item",
}

/// Record `container` as the node's parent, once.
fn claim<N: Parented>(node: &mut N, container: ContainerId) -> Result<(), ModelError> {
    if node.parent_slot().is_some() {
        return Err(ModelError::already_parented(N::KIND, node.name().clone()));
    }
    *node.parent_slot() = Some(container);
    Ok(())
}

// ============================================================================
// COMPILATION
// ============================================================================

/// Root of one build: every container and declaration, the flat macro
/// table and the diagnostics list.
#[derive(Debug, Clone, Default)]
pub struct Compilation {
    global: Members,
    system: Members,
    namespaces: Vec<Namespace>,
    classes: Vec<Class>,
    enums: Vec<Enum>,
    functions: Vec<Function>,
    fields: Vec<Field>,
    typedefs: Vec<Typedef>,
    enum_items: Vec<EnumItem>,
    macros: IndexMap<SmolStr, Macro>,
    diagnostics: Diagnostics,
}

macro_rules! arena_access {
    ($($field:ident: $id:ident => $ty:ty, $get:ident, $get_mut:ident, $alloc:ident, $iter:ident;)*) => {
        $(
            pub fn $get(&self, id: $id) -> &$ty {
                &self.$field[id.index()]
            }

            pub fn $get_mut(&mut self, id: $id) -> &mut $ty {
                &mut self.$field[id.index()]
            }

            /// Store a new, still unparented node.
            pub fn $alloc(&mut self, node: $ty) -> $id {
                let id = $id::next(self.$field.len());
                self.$field.push(node);
                id
            }

            pub fn $iter(&self) -> impl Iterator<Item = ($id, &$ty)> + '_ {
                self.$field
                    .iter()
                    .enumerate()
                    .map(|(i, node)| ($id::next(i), node))
            }
        )*
    };
}

impl Compilation {
    pub fn new() -> Self {
        Self::default()
    }

    arena_access! {
        namespaces: NamespaceId => Namespace, namespace, namespace_mut, alloc_namespace, namespaces;
        classes: ClassId => Class, class, class_mut, alloc_class, classes;
        enums: EnumId => Enum, enum_, enum_mut, alloc_enum, enums;
        functions: FunctionId => Function, function, function_mut, alloc_function, functions;
        fields: FieldId => Field, field, field_mut, alloc_field, fields;
        typedefs: TypedefId => Typedef, typedef, typedef_mut, alloc_typedef, typedefs;
        enum_items: EnumItemId => EnumItem, enum_item, enum_item_mut, alloc_enum_item, enum_items;
    }

    /// Members of user-file declarations at file scope.
    pub fn global(&self) -> &Members {
        &self.global
    }

    /// Members of system-header declarations at file scope.
    pub fn system(&self) -> &Members {
        &self.system
    }

    /// Member lists of a container; `None` for enums, which own items only.
    pub fn members(&self, container: ContainerId) -> Option<&Members> {
        match container {
            ContainerId::Global => Some(&self.global),
            ContainerId::System => Some(&self.system),
            ContainerId::Namespace(id) => Some(&self.namespace(id).members),
            ContainerId::Class(id) => Some(&self.class(id).members),
            ContainerId::Enum(_) => None,
        }
    }

    fn members_mut(&mut self, container: ContainerId) -> Option<&mut Members> {
        match container {
            ContainerId::Global => Some(&mut self.global),
            ContainerId::System => Some(&mut self.system),
            ContainerId::Namespace(id) => Some(&mut self.namespace_mut(id).members),
            ContainerId::Class(id) => Some(&mut self.class_mut(id).members),
            ContainerId::Enum(_) => None,
        }
    }

    pub fn parent_of(&self, container: ContainerId) -> Option<ContainerId> {
        match container {
            ContainerId::Global | ContainerId::System => None,
            ContainerId::Namespace(id) => self.namespace(id).parent,
            ContainerId::Class(id) => self.class(id).parent,
            ContainerId::Enum(id) => self.enum_(id).parent,
        }
    }

    pub fn container_name(&self, container: ContainerId) -> &str {
        match container {
            ContainerId::Global | ContainerId::System => "",
            ContainerId::Namespace(id) => &self.namespace(id).name,
            ContainerId::Class(id) => &self.class(id).name,
            ContainerId::Enum(id) => &self.enum_(id).name,
        }
    }

    /// `outer::Inner` style name of a container.
    pub fn qualified_name(&self, container: ContainerId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(container);
        while let Some(c) = current {
            if !c.is_root() {
                parts.push(self.container_name(c));
            }
            current = self.parent_of(c);
        }
        parts.reverse();
        parts.join("::")
    }

    // ------------------------------------------------------------------------
    // Attaching
    // ------------------------------------------------------------------------

    pub fn attach_namespace(
        &mut self,
        container: ContainerId,
        id: NamespaceId,
    ) -> Result<(), ModelError> {
        if !matches!(
            container,
            ContainerId::Global | ContainerId::System | ContainerId::Namespace(_)
        ) {
            let name = self.namespace(id).name.clone();
            return Err(ModelError::invalid_member("namespace", name, container.kind_name()));
        }
        claim(self.namespace_mut(id), container)?;
        self.push_member(container, |m| m.namespaces.push(id))
    }

    pub fn attach_class(&mut self, container: ContainerId, id: ClassId) -> Result<(), ModelError> {
        self.check_scope::<Class>(container, &self.class(id).name)?;
        claim(self.class_mut(id), container)?;
        self.push_member(container, |m| m.classes.push(id))
    }

    pub fn attach_enum(&mut self, container: ContainerId, id: EnumId) -> Result<(), ModelError> {
        self.check_scope::<Enum>(container, &self.enum_(id).name)?;
        claim(self.enum_mut(id), container)?;
        self.push_member(container, |m| m.enums.push(id))
    }

    pub fn attach_function(
        &mut self,
        container: ContainerId,
        id: FunctionId,
    ) -> Result<(), ModelError> {
        self.check_scope::<Function>(container, &self.function(id).name)?;
        claim(self.function_mut(id), container)?;
        self.push_member(container, |m| m.functions.push(id))
    }

    pub fn attach_field(&mut self, container: ContainerId, id: FieldId) -> Result<(), ModelError> {
        self.check_scope::<Field>(container, &self.field(id).name)?;
        claim(self.field_mut(id), container)?;
        self.push_member(container, |m| m.fields.push(id))
    }

    pub fn attach_typedef(
        &mut self,
        container: ContainerId,
        id: TypedefId,
    ) -> Result<(), ModelError> {
        self.check_scope::<Typedef>(container, &self.typedef(id).name)?;
        claim(self.typedef_mut(id), container)?;
        self.push_member(container, |m| m.typedefs.push(id))
    }

    /// File a constructor onto its class, not the function list.
    pub fn attach_constructor(&mut self, class: ClassId, id: FunctionId) -> Result<(), ModelError> {
        claim(self.function_mut(id), ContainerId::Class(class))?;
        self.class_mut(class).constructors.push(id);
        Ok(())
    }

    pub fn attach_enum_item(&mut self, owner: EnumId, id: EnumItemId) -> Result<(), ModelError> {
        claim(self.enum_item_mut(id), ContainerId::Enum(owner))?;
        self.enum_mut(owner).items.push(id);
        Ok(())
    }

    fn check_scope<N: Parented>(&self, container: ContainerId, name: &SmolStr) -> Result<(), ModelError> {
        match container {
            ContainerId::Enum(_) => Err(ModelError::invalid_member(
                N::KIND,
                name.clone(),
                container.kind_name(),
            )),
            _ => Ok(()),
        }
    }

    fn push_member(
        &mut self,
        container: ContainerId,
        push: impl FnOnce(&mut Members),
    ) -> Result<(), ModelError> {
        match self.members_mut(container) {
            Some(members) => {
                push(members);
                Ok(())
            }
            None => Err(ModelError::invalid_member(
                "declaration",
                "",
                container.kind_name(),
            )),
        }
    }

    // ------------------------------------------------------------------------
    // Lookup
    // ------------------------------------------------------------------------

    pub fn find_namespace(&self, container: ContainerId, name: &str) -> Option<NamespaceId> {
        self.members(container)?
            .namespaces
            .iter()
            .copied()
            .find(|id| self.namespace(*id).name == name)
    }

    pub fn find_class(&self, container: ContainerId, name: &str) -> Option<ClassId> {
        self.members(container)?
            .classes
            .iter()
            .copied()
            .find(|id| self.class(*id).name == name)
    }

    pub fn find_enum(&self, container: ContainerId, name: &str) -> Option<EnumId> {
        self.members(container)?
            .enums
            .iter()
            .copied()
            .find(|id| self.enum_(*id).name == name)
    }

    pub fn find_function(&self, container: ContainerId, name: &str) -> Option<FunctionId> {
        self.members(container)?
            .functions
            .iter()
            .copied()
            .find(|id| self.function(*id).name == name)
    }

    pub fn find_field(&self, container: ContainerId, name: &str) -> Option<FieldId> {
        self.members(container)?
            .fields
            .iter()
            .copied()
            .find(|id| self.field(*id).name == name)
    }

    pub fn find_typedef(&self, container: ContainerId, name: &str) -> Option<TypedefId> {
        self.members(container)?
            .typedefs
            .iter()
            .copied()
            .find(|id| self.typedef(*id).name == name)
    }

    pub fn find_enum_item(&self, owner: EnumId, name: &str) -> Option<EnumItemId> {
        self.enum_(owner)
            .items
            .iter()
            .copied()
            .find(|id| self.enum_item(*id).name == name)
    }

    /// Resolve `a::B::C` from `root` through namespaces, classes and enums.
    pub fn lookup(&self, root: ContainerId, path: &str) -> Option<ContainerId> {
        path.split("::")
            .filter(|segment| !segment.is_empty())
            .try_fold(root, |scope, segment| {
                self.find_namespace(scope, segment)
                    .map(ContainerId::Namespace)
                    .or_else(|| self.find_class(scope, segment).map(ContainerId::Class))
                    .or_else(|| self.find_enum(scope, segment).map(ContainerId::Enum))
            })
    }

    // ------------------------------------------------------------------------
    // Macros and diagnostics
    // ------------------------------------------------------------------------

    /// Insert or replace a macro; names are unique across the compilation.
    pub fn add_macro(&mut self, definition: Macro) {
        self.macros.insert(definition.name.clone(), definition);
    }

    pub fn macro_named(&self, name: &str) -> Option<&Macro> {
        self.macros.get(name)
    }

    pub fn macros(&self) -> impl Iterator<Item = &Macro> + '_ {
        self.macros.values()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}
