//! Declaration-model builder.
//!
//! Walks a [`FrontEnd`] cursor tree and lowers it into a [`Compilation`].
//! The walk is pre-order and single-threaded. Containers, typedefs,
//! functions and variables are memoized by unique symbol so repeated
//! visits (forward declarations, type references, out-of-line definitions)
//! resolve to one node.
//!
//! ```text
//! visit_translation_unit
//!   └─ visit_member ──┬─ containers  (namespace, class, enum, anonymous field)
//!                     ├─ dispatch    (function, field, enum item, base, access)
//!                     ├─ types       (type resolver, typedefs, function types)
//!                     ├─ macros / attributes / expressions / comments
//!                     └─ decorate    (span and comment)
//! ```

mod attributes;
mod comments;
mod containers;
mod context;
mod dispatch;
mod error;
mod expressions;
mod macros;
mod options;
mod tokens;
mod types;


use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

pub use error::BuildError;
pub use options::BuildOptions;

use crate::base::SourceSpan;
use crate::frontend::{CursorId, FrontEnd, visit_children};
use crate::model::{
    Comment, Compilation, ContainerId, CppType, EnumItemId, FieldId, FunctionId, TypedefId,
    Visibility,
};

use context::ContainerContext;

/// Build a compilation from the front end's translation unit.
///
/// Returns an error only for contract violations; problems in the input are
/// recorded as diagnostics on the result.
pub fn build<F: FrontEnd + ?Sized>(fe: &F, options: BuildOptions) -> Result<Compilation, BuildError> {
    let mut builder = ModelBuilder::new(fe, options);
    builder.visit_translation_unit()?;
    Ok(builder.finish())
}

/// Traversal state of one build.
pub struct ModelBuilder<'fe, F: FrontEnd + ?Sized> {
    fe: &'fe F,
    options: BuildOptions,
    compilation: Compilation,
    /// Root of the file-scope declaration being dispatched.
    root: ContainerId,
    containers: FxHashMap<SmolStr, ContainerId>,
    contexts: FxHashMap<ContainerId, ContainerContext>,
    typedefs: FxHashMap<SmolStr, CppType>,
    /// Records and enums already renamed after a typedef.
    squashed: FxHashSet<ContainerId>,
    functions: FxHashMap<SmolStr, FunctionId>,
    variables: FxHashMap<SmolStr, FieldId>,
}

/// The model node a cursor was lowered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Element {
    Container(ContainerId),
    Function(FunctionId),
    Field(FieldId),
    Typedef(TypedefId),
    EnumItem(EnumItemId),
    None,
}

impl<'fe, F: FrontEnd + ?Sized> ModelBuilder<'fe, F> {
    pub fn new(fe: &'fe F, options: BuildOptions) -> Self {
        let mut contexts = FxHashMap::default();
        contexts.insert(ContainerId::Global, ContainerContext::new(Visibility::Default));
        contexts.insert(ContainerId::System, ContainerContext::new(Visibility::Default));
        Self {
            fe,
            options,
            compilation: Compilation::new(),
            root: ContainerId::Global,
            containers: FxHashMap::default(),
            contexts,
            typedefs: FxHashMap::default(),
            squashed: FxHashSet::default(),
            functions: FxHashMap::default(),
            variables: FxHashMap::default(),
        }
    }

    pub fn compilation(&self) -> &Compilation {
        &self.compilation
    }

    pub fn finish(self) -> Compilation {
        self.compilation
    }

    /// Dispatch every file-scope cursor. Declarations from system headers go
    /// under the system root.
    pub fn visit_translation_unit(&mut self) -> Result<(), BuildError> {
        let fe = self.fe;
        let tu = fe.translation_unit();
        tracing::debug!("[MODEL] build translation unit '{}'", fe.cursor(tu).spelling);

        visit_children(fe, tu, &mut |child, parent| {
            if parent == tu {
                self.root = if fe.cursor(child).in_system_header {
                    ContainerId::System
                } else {
                    ContainerId::Global
                };
            }
            self.visit_member(child, parent)
        })?;
        Ok(())
    }

    /// Dispatch the children of a container cursor.
    fn visit_members(&mut self, cursor: CursorId) -> Result<(), BuildError> {
        let fe = self.fe;
        visit_children(fe, cursor, &mut |child, parent| self.visit_member(child, parent))?;
        Ok(())
    }

    fn context_mut(&mut self, container: ContainerId) -> &mut ContainerContext {
        self.contexts
            .entry(container)
            .or_insert_with(|| ContainerContext::new(Visibility::Default))
    }

    fn span_and_comment(
        &mut self,
        element: Element,
    ) -> Option<(&mut SourceSpan, &mut Option<Comment>)> {
        let c = &mut self.compilation;
        match element {
            Element::Container(ContainerId::Namespace(id)) => {
                let node = c.namespace_mut(id);
                Some((&mut node.span, &mut node.comment))
            }
            Element::Container(ContainerId::Class(id)) => {
                let node = c.class_mut(id);
                Some((&mut node.span, &mut node.comment))
            }
            Element::Container(ContainerId::Enum(id)) => {
                let node = c.enum_mut(id);
                Some((&mut node.span, &mut node.comment))
            }
            Element::Function(id) => {
                let node = c.function_mut(id);
                Some((&mut node.span, &mut node.comment))
            }
            Element::Field(id) => {
                let node = c.field_mut(id);
                Some((&mut node.span, &mut node.comment))
            }
            Element::Typedef(id) => {
                let node = c.typedef_mut(id);
                Some((&mut node.span, &mut node.comment))
            }
            Element::EnumItem(id) => {
                let node = c.enum_item_mut(id);
                Some((&mut node.span, &mut node.comment))
            }
            Element::Container(ContainerId::Global | ContainerId::System) | Element::None => None,
        }
    }

    /// Give the node its span and comment. A definition always wins; a
    /// declaration only fills what is still empty.
    fn decorate(&mut self, element: Element, cursor: CursorId) {
        let fe = self.fe;
        let info = fe.cursor(cursor);

        let wants_comment = match self.span_and_comment(element) {
            Some((span, comment)) => {
                if info.is_definition || *span == SourceSpan::default() {
                    *span = info.extent.clone();
                }
                info.is_definition || comment.is_none()
            }
            None => return,
        };
        if !wants_comment || !self.options.parse_comments {
            return;
        }

        let Some(raw) = fe.comment(cursor) else {
            return;
        };
        let lowered = comments::lower_comment(raw, &info.location, self.compilation.diagnostics_mut());
        if let (Some(lowered), Some((_, comment))) = (lowered, self.span_and_comment(element)) {
            *comment = Some(lowered);
        }
    }
}
