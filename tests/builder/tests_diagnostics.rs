//! Recoverable problems become located warnings; contract violations stop
//! the build.

use crate::helpers::model_assertions::*;
use crate::helpers::unit_fixtures::Fixture;
use declgraph::frontend::{CursorInfo, CursorKind, EvalResult, RawComment, RawCommentKind, TypeInfo, TypeKind};
use declgraph::model::{ExpressionKind, Severity, codes};
use declgraph::{BuildError, BuildOptions, ContainerId, build};

// =============================================================================
// WARNINGS
// =============================================================================

#[test]
fn test_warnings_accumulate_in_order_without_deduplication() {
    let source = "_Static_assert(1, \"a\");\n_Static_assert(2, \"b\");\nint kept;";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let int = fx.int();
    fx.add(tu, CursorInfo::new(CursorKind::Other("StaticAssert".into()), ""), "_Static_assert(1, \"a\")");
    fx.add(tu, CursorInfo::new(CursorKind::Other("StaticAssert".into()), ""), "_Static_assert(2, \"b\")");
    fx.field(tu, CursorKind::VarDecl, "kept", int, "int kept");

    let c = fx.build();
    assert_field_names(&c, ContainerId::Global, &["kept"]);

    let diagnostics: Vec<_> = c.diagnostics().iter().collect();
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
    assert!(diagnostics.iter().all(|d| d.code.as_deref() == Some(codes::UNHANDLED_DECLARATION)));
    assert_eq!(diagnostics[0].location().line, 1);
    assert_eq!(diagnostics[1].location().line, 2);
}

#[test]
fn test_unhandled_declaration_without_location_uses_parent() {
    let source = "namespace n { }";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let n = fx.add(tu, CursorInfo::new(CursorKind::Namespace, "n").with_usr("c:@N@n"), source);
    fx.unit.add_cursor(n, CursorInfo::new(CursorKind::Other("StaticAssert".into()), ""));

    let c = fx.build();
    let warning = c.diagnostics().iter().next().unwrap();
    assert_eq!(warning.location(), &fx.unit.span_of(source).start);
}

#[test]
fn test_unsupported_constant_fold_result_warns() {
    let source = "void* p = nullptr;";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let void = fx.void();
    let pointer = fx.unit.add_type(TypeInfo::new(TypeKind::Pointer, "void *").with_size(8).with_pointee(void));
    let p = fx.field(tu, CursorKind::VarDecl, "p", pointer, "void* p = nullptr");
    let null = fx.expr(p, ExpressionKind::CxxNullPtrLiteral, "nullptr");
    fx.evaluates_to(null, EvalResult::Unsupported("Other".into()));

    let c = fx.build();
    let p = fields_of(&c, ContainerId::Global)[0];
    assert!(p.init_expression.is_some());
    assert_eq!(p.init_value, None);
    let warning = c.diagnostics().with_code(codes::UNSUPPORTED_VALUE).next().unwrap();
    assert_eq!(warning.location(), &fx.unit.span_of("nullptr").start);
}

#[test]
fn test_unsupported_macro_token_warns() {
    let source = "#define AT @x\n";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    fx.add(tu, CursorInfo::new(CursorKind::MacroDefinition, "AT"), "AT @x");

    let c = fx.build();
    assert_eq!(c.diagnostics().with_code(codes::UNSUPPORTED_MACRO_TOKEN).count(), 1);
    assert_eq!(c.macro_named("AT").unwrap().value, "@x");
}

#[test]
fn test_unknown_comment_node_warns_and_is_skipped() {
    let source = "/// Kept. <unknown>\nint documented;";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let int = fx.int();
    let documented = fx.field(tu, CursorKind::VarDecl, "documented", int, "int documented");
    fx.unit.set_comment(
        documented,
        RawComment::full(vec![RawComment::paragraph(vec![
            RawComment::text(" Kept."),
            RawComment::new(RawCommentKind::Other("Unknown".into())),
        ])]),
    );

    let c = fx.build();
    let field = fields_of(&c, ContainerId::Global)[0];
    assert_eq!(field.comment.as_ref().map(|comment| comment.to_string()).as_deref(), Some("Kept."));
    assert_eq!(c.diagnostics().with_code(codes::UNSUPPORTED_COMMENT).count(), 1);
}

#[test]
fn test_disabled_passes_report_nothing() {
    let source = "#define AT @x\n";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    fx.add(tu, CursorInfo::new(CursorKind::MacroDefinition, "AT"), "AT @x");

    let c = fx.build_with(BuildOptions::new().with_parse_macros(false));
    assert_no_diagnostics(&c);
    assert_eq!(c.macros().count(), 0);
}

// =============================================================================
// FATAL ERRORS
// =============================================================================

#[test]
fn test_base_specifier_outside_class_is_fatal() {
    let source = "namespace n { }";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let int = fx.int();
    let n = fx.add(tu, CursorInfo::new(CursorKind::Namespace, "n").with_usr("c:@N@n"), source);
    fx.unit.add_cursor(n, CursorInfo::new(CursorKind::CxxBaseSpecifier, "int").with_type(int));

    let err = build(&fx.unit, BuildOptions::default()).unwrap_err();
    assert_eq!(
        err,
        BuildError::UnexpectedContainer {
            expected: "class",
            found: "namespace",
            symbol: "int".into(),
        }
    );
    assert_eq!(err.to_string(), "expected class for `int`, found namespace");
}

#[test]
fn test_namespace_inside_class_is_fatal() {
    let source = "struct S { namespace n { } };";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let (s, _) = fx.record(tu, CursorKind::StructDecl, "S", "struct S { namespace n { } }");
    fx.add(s, CursorInfo::new(CursorKind::Namespace, "n").with_usr("c:@S@S@N@n"), "namespace n { }");

    let err = build(&fx.unit, BuildOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        BuildError::InvalidMember {
            kind: "namespace",
            container: "class",
            ..
        }
    ));
}
