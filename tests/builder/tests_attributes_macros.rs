//! Attributes and macro definitions recovered from source tokens.

use crate::helpers::model_assertions::*;
use crate::helpers::source_fixtures::*;
use crate::helpers::unit_fixtures::Fixture;
use declgraph::frontend::{CursorInfo, CursorKind};
use declgraph::model::Attribute;
use declgraph::{BuildOptions, ContainerId};
use smol_str::SmolStr;

// =============================================================================
// ATTRIBUTES
// =============================================================================

fn attributed_functions() -> Fixture {
    let mut fx = Fixture::new(ATTRIBUTED_FUNCTIONS);
    let tu = fx.tu();
    let int = fx.int();
    let void = fx.void();
    for (name, result, needle) in [
        ("f", int, "[[nodiscard]] int f()"),
        ("g", void, "__declspec(dllexport) void g()"),
        ("h", void, "void h() __attribute__((noreturn, cold))"),
    ] {
        fx.add(
            tu,
            CursorInfo::new(CursorKind::FunctionDecl, name)
                .with_usr(format!("c:@F@{}", name))
                .with_result_type(result),
            needle,
        );
    }
    fx
}

fn attributes_of<'a>(c: &'a declgraph::Compilation, function: &str) -> &'a [Attribute] {
    let id = c
        .find_function(ContainerId::Global, function)
        .unwrap_or_else(|| panic!("Expected function '{}'", function));
    &c.function(id).attributes
}

#[test]
fn test_bracketed_attribute_on_function() {
    let c = attributed_functions().build();
    let attributes = attributes_of(&c, "f");
    assert_eq!(attributes.len(), 1);
    let nodiscard = &attributes[0];
    assert_eq!(nodiscard.identifier, "nodiscard");
    assert_eq!(nodiscard.scope, None);
    assert_eq!(nodiscard.arguments, None);
    assert!(!nodiscard.is_variadic);
}

#[test]
fn test_declspec_attribute_on_function() {
    let c = attributed_functions().build();
    let attributes = attributes_of(&c, "g");
    assert_eq!(attributes.len(), 1);
    assert_eq!(attributes[0].identifier, "dllexport");
}

#[test]
fn test_trailing_gnu_attributes_after_parameter_list() {
    let c = attributed_functions().build();
    let names: Vec<_> = attributes_of(&c, "h")
        .iter()
        .map(|a| a.identifier.as_str())
        .collect();
    assert_eq!(names, ["noreturn", "cold"]);
    assert_no_diagnostics(&c);
}

#[test]
fn test_attributes_can_be_disabled() {
    let c = attributed_functions().build_with(BuildOptions::new().with_parse_attributes(false));
    for name in ["f", "g", "h"] {
        assert!(attributes_of(&c, name).is_empty());
    }
}

#[test]
fn test_malformed_gnu_group_yields_no_attributes() {
    let source = "__attribute__((packed struct S {};";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    fx.record(tu, CursorKind::StructDecl, "S", "__attribute__((packed struct S {}");

    let c = fx.build();
    assert!(get_class(&c, "S").attributes.is_empty());
}

#[test]
fn test_attribute_between_class_keyword_and_name() {
    let source = "struct __declspec(novtable) [[deprecated(\"use V2\")]] V1 {};";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    fx.record(tu, CursorKind::StructDecl, "V1", source.trim_end_matches(';'));

    let c = fx.build();
    let rendered: Vec<_> = get_class(&c, "V1")
        .attributes
        .iter()
        .map(|a| a.to_string())
        .collect();
    assert_eq!(rendered, ["novtable", "deprecated(\"use V2\")"]);
}

// =============================================================================
// MACROS
// =============================================================================

fn macro_unit() -> Fixture {
    let mut fx = Fixture::new(MACROS);
    let tu = fx.tu();
    let int = fx.int();
    for (name, needle) in [
        ("F", "F(x,y) ((x)+(y))"),
        ("G", "G (1+2)"),
        ("VERSION", "VERSION \"1.0\""),
    ] {
        fx.add(tu, CursorInfo::new(CursorKind::MacroDefinition, name), needle);
    }
    fx.field(tu, CursorKind::VarDecl, "after", int, "int after");
    fx
}

#[test]
fn test_function_like_macro_parameters_and_value() {
    let c = macro_unit().build();
    let f = c.macro_named("F").unwrap();
    assert_eq!(f.parameters, Some(vec![SmolStr::new("x"), SmolStr::new("y")]));
    let value: Vec<_> = f.tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(value, ["(", "(", "x", ")", "+", "(", "y", ")", ")"]);
    assert_eq!(f.value, "((x)+(y))");
}

#[test]
fn test_space_before_paren_makes_object_like_macro() {
    let c = macro_unit().build();
    let g = c.macro_named("G").unwrap();
    assert!(!g.is_function_like());
    assert_eq!(g.value, "(1+2)");
}

#[test]
fn test_trailing_comment_dropped_and_next_line_kept_out() {
    let c = macro_unit().build();
    let version = c.macro_named("VERSION").unwrap();
    assert_eq!(version.value, "\"1.0\"");
    assert_eq!(version.tokens.len(), 1);
    assert_field_names(&c, ContainerId::Global, &["after"]);
}

#[test]
fn test_macros_keep_definition_order() {
    let c = macro_unit().build();
    let names: Vec<_> = c.macros().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["F", "G", "VERSION"]);
    assert_no_diagnostics(&c);
}
