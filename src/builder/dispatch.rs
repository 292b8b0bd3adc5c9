//! Per-cursor dispatch and leaf declarations.

use crate::frontend::{ChildVisit, CursorId, CursorInfo, CursorKind, FrontEnd};
use crate::model::{
    BaseType, ContainerId, CppType, EnumItem, Field, Function, FunctionFlags, FunctionId,
    Parameter, codes,
};

use super::attributes::{parse_attributes, parse_function_attributes};
use super::context::{storage_of, symbol_key, visibility_of};
use super::expressions::{initializer, lower_expression, lower_init_value};
use super::macros::recover_macro;
use super::tokens::Tokenizer;
use super::{BuildError, Element, ModelBuilder};

impl<F: FrontEnd + ?Sized> ModelBuilder<'_, F> {
    /// Lower one cursor met while walking the children of `parent`.
    pub(super) fn visit_member(
        &mut self,
        cursor: CursorId,
        parent: CursorId,
    ) -> Result<ChildVisit, BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        tracing::trace!(
            "[MODEL] visit kind={} name='{}'",
            info.kind.name(),
            info.spelling
        );

        let element = match &info.kind {
            CursorKind::Namespace => {
                let container = self.get_or_create_container(cursor)?;
                self.visit_members(cursor)?;
                Element::Container(container)
            }
            kind if kind.is_record() => {
                let id = self.visit_class(cursor)?;
                if info.is_anonymous_record {
                    self.add_anonymous_field(cursor, id, parent)?;
                }
                Element::Container(ContainerId::Class(id))
            }
            CursorKind::EnumDecl => Element::Container(ContainerId::Enum(self.visit_enum(cursor)?)),
            CursorKind::EnumConstantDecl => self.visit_enum_constant(cursor, parent)?,
            CursorKind::FieldDecl | CursorKind::VarDecl => self.visit_field(cursor, parent)?,
            CursorKind::FunctionDecl
            | CursorKind::FunctionTemplate
            | CursorKind::Constructor
            | CursorKind::Destructor
            | CursorKind::CxxMethod => self.visit_function(cursor)?,
            CursorKind::TypedefDecl => match self.visit_typedef(cursor)? {
                CppType::Typedef(id) => Element::Typedef(id),
                CppType::Class(id) => Element::Container(ContainerId::Class(id)),
                CppType::Enum(id) => Element::Container(ContainerId::Enum(id)),
                _ => Element::None,
            },
            CursorKind::CxxBaseSpecifier => {
                self.visit_base(cursor, parent)?;
                Element::None
            }
            CursorKind::CxxAccessSpecifier => {
                let container = self.get_or_create_container(parent)?;
                self.context_mut(container).visibility = visibility_of(info.access);
                Element::None
            }
            CursorKind::MacroDefinition => {
                if self.options.parse_macros {
                    let definition = recover_macro(fe, cursor, self.compilation.diagnostics_mut());
                    self.compilation.add_macro(definition);
                }
                Element::None
            }
            CursorKind::UnexposedDecl | CursorKind::LinkageSpec => return Ok(ChildVisit::Recurse),
            CursorKind::UsingDirective
            | CursorKind::MacroExpansion
            | CursorKind::InclusionDirective
            | CursorKind::TemplateTypeParameter
            | CursorKind::NonTypeTemplateParameter
            | CursorKind::TemplateTemplateParameter => Element::None,
            kind => {
                let location = if info.location.is_unknown() {
                    fe.cursor(parent).location.clone()
                } else {
                    info.location.clone()
                };
                self.compilation.diagnostics_mut().warning(
                    codes::UNHANDLED_DECLARATION,
                    location,
                    format!("Unhandled declaration `{}` of kind `{}`", info.spelling, kind.name()),
                );
                Element::None
            }
        };

        self.decorate(element, cursor);
        Ok(ChildVisit::Continue)
    }

    fn visit_enum_constant(&mut self, cursor: CursorId, parent: CursorId) -> Result<Element, BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        let container = self.get_or_create_container(parent)?;
        let ContainerId::Enum(owner) = container else {
            return Err(BuildError::unexpected_container(
                "enum",
                container,
                info.spelling.clone(),
            ));
        };

        let mut item = EnumItem::new(info.spelling.clone(), info.enum_constant_value);
        item.value_expression = initializer(fe, cursor).and_then(|init| lower_expression(fe, init));
        let id = self.compilation.alloc_enum_item(item);
        self.compilation.attach_enum_item(owner, id)?;
        Ok(Element::EnumItem(id))
    }

    /// Fields and variables, owned by their lexical parent. A variable seen
    /// again under the same symbol (`extern` then definition) is merged.
    fn visit_field(&mut self, cursor: CursorId, parent: CursorId) -> Result<Element, BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);

        if let Some(&id) = self.variables.get(&info.usr) {
            if info.is_definition {
                let (init_expression, init_value) =
                    lower_init_value(fe, cursor, self.compilation.diagnostics_mut());
                let field = self.compilation.field_mut(id);
                field.storage = storage_of(info.storage);
                if init_expression.is_some() {
                    field.init_expression = init_expression;
                    field.init_value = init_value;
                }
                tracing::debug!("[MODEL] merge variable '{}'", info.spelling);
            }
            return Ok(Element::Field(id));
        }

        let container = self.get_or_create_container(parent)?;
        let ty = self.resolve_optional(info.ty, cursor)?;
        let mut field = Field::new(info.spelling.clone(), ty);
        field.visibility = self.context_mut(container).visibility;
        field.storage = storage_of(info.storage);
        field.is_bit_field = info.is_bit_field;
        field.bit_field_width = info.bit_field_width;
        if self.options.parse_attributes {
            field.attributes = parse_attributes(&Tokenizer::new(fe, &info.extent));
        }
        let (init_expression, init_value) =
            lower_init_value(fe, cursor, self.compilation.diagnostics_mut());
        field.init_expression = init_expression;
        field.init_value = init_value;

        let id = self.compilation.alloc_field(field);
        self.compilation.attach_field(container, id)?;
        if !info.usr.is_empty() {
            self.variables.insert(info.usr.clone(), id);
        }
        Ok(Element::Field(id))
    }

    /// Functions and methods, owned by their semantic parent so out-of-line
    /// definitions land in their class. Constructors go to the class's
    /// constructor list.
    fn visit_function(&mut self, cursor: CursorId) -> Result<Element, BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        let key = symbol_key(info);

        if let Some(&id) = self.functions.get(&key) {
            if info.is_definition {
                self.merge_function_definition(id, cursor);
            }
            return Ok(Element::Function(id));
        }

        let container = self.semantic_container(info)?;
        let return_type = self.resolve_result_type(info.result_type, cursor)?;
        let mut function = Function::new(info.spelling.clone(), return_type);
        function.visibility = self.context_mut(container).visibility;
        function.storage = storage_of(info.storage);
        function.linkage = info.linkage;
        function.flags = function_flags(info);
        if let Some(ty) = info.ty {
            function.calling_convention = fe.ty(ty).calling_convention;
        }
        if self.options.parse_attributes {
            function.attributes =
                parse_function_attributes(&Tokenizer::new(fe, &info.extent), &info.spelling);
        }
        function.parameters = self.parameters_of(cursor)?;

        let id = self.compilation.alloc_function(function);
        if info.kind == CursorKind::Constructor {
            let ContainerId::Class(class) = container else {
                return Err(BuildError::unexpected_container(
                    "class",
                    container,
                    info.spelling.clone(),
                ));
            };
            self.compilation.attach_constructor(class, id)?;
        } else {
            self.compilation.attach_function(container, id)?;
        }
        self.functions.insert(key, id);
        Ok(Element::Function(id))
    }

    fn parameters_of(&mut self, cursor: CursorId) -> Result<Vec<Parameter>, BuildError> {
        let fe = self.fe;
        let mut parameters = Vec::new();
        for &child in fe.children(cursor) {
            let info = fe.cursor(child);
            if info.kind != CursorKind::ParmDecl {
                continue;
            }
            let ty = self.resolve_optional(info.ty, child)?;
            let mut parameter = Parameter::new(info.spelling.clone(), ty);
            let (init_expression, init_value) =
                lower_init_value(fe, child, self.compilation.diagnostics_mut());
            parameter.init_expression = init_expression;
            parameter.init_value = init_value;
            parameters.push(parameter);
        }
        Ok(parameters)
    }

    /// A definition seen after a prototype adds its flags and the parameter
    /// names the prototype left out.
    fn merge_function_definition(&mut self, id: FunctionId, cursor: CursorId) {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        let names: Vec<_> = fe
            .children(cursor)
            .iter()
            .map(|&child| fe.cursor(child))
            .filter(|child| child.kind == CursorKind::ParmDecl)
            .map(|child| child.spelling.clone())
            .collect();

        let function = self.compilation.function_mut(id);
        function.flags |= function_flags(info);
        for (parameter, name) in function.parameters.iter_mut().zip(names) {
            if parameter.name.is_empty() {
                parameter.name = name;
            }
        }
        tracing::debug!("[MODEL] merge function definition '{}'", info.spelling);
    }

    fn visit_base(&mut self, cursor: CursorId, parent: CursorId) -> Result<(), BuildError> {
        let fe = self.fe;
        let info = fe.cursor(cursor);
        let container = self.get_or_create_container(parent)?;
        let ContainerId::Class(class) = container else {
            return Err(BuildError::unexpected_container(
                "class",
                container,
                info.spelling.clone(),
            ));
        };

        let ty = self.resolve_optional(info.ty, cursor)?;
        self.compilation.class_mut(class).base_types.push(BaseType {
            ty,
            visibility: visibility_of(info.access),
            is_virtual: info.is_virtual_base,
        });
        Ok(())
    }
}

pub(super) fn function_flags(info: &CursorInfo) -> FunctionFlags {
    let mut flags = match info.kind {
        CursorKind::CxxMethod => FunctionFlags::METHOD,
        CursorKind::Constructor => FunctionFlags::METHOD | FunctionFlags::CONSTRUCTOR,
        CursorKind::Destructor => FunctionFlags::METHOD | FunctionFlags::DESTRUCTOR,
        _ => FunctionFlags::empty(),
    };
    let method = &info.method;
    flags.set(FunctionFlags::INLINE, method.is_inlined);
    flags.set(FunctionFlags::CONST, method.is_const);
    flags.set(FunctionFlags::DEFAULTED, method.is_defaulted);
    flags.set(FunctionFlags::VIRTUAL, method.is_virtual || method.is_pure_virtual);
    flags.set(FunctionFlags::PURE, method.is_pure_virtual);
    flags
}
