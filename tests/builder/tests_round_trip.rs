//! Rendering a recovered node and lexing the result again gives the tokens
//! the node was recovered from.

use crate::helpers::model_assertions::*;
use crate::helpers::source_fixtures::*;
use crate::helpers::unit_fixtures::Fixture;
use declgraph::frontend::{CursorInfo, CursorKind, EvalResult, RawComment};
use declgraph::model::{Expression, ExpressionKind, Value};
use declgraph::ContainerId;

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// `int v = (a + b) * -c;`
fn arithmetic_initializer() -> Fixture {
    let source = "int v = (a + b) * -c;";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let int = fx.int();
    let v = fx.field(tu, CursorKind::VarDecl, "v", int, "int v = (a + b) * -c");
    let product = fx.expr(v, ExpressionKind::BinaryOperator, "(a + b) * -c");
    let paren = fx.expr(product, ExpressionKind::Paren, "(a + b)");
    let sum = fx.expr(paren, ExpressionKind::BinaryOperator, "a + b");
    fx.expr(sum, ExpressionKind::DeclRef, "a");
    fx.expr(sum, ExpressionKind::DeclRef, "b");
    let negate = fx.expr(product, ExpressionKind::UnaryOperator, "-c");
    fx.expr_nth(negate, ExpressionKind::DeclRef, "c", 0);
    fx
}

#[test]
fn test_structured_initializer_renders_to_source_tokens() {
    let fx = arithmetic_initializer();
    let c = fx.build();
    let v = fields_of(&c, ContainerId::Global)[0];
    let init = v.init_expression.as_ref().unwrap();

    assert_eq!(init.kind(), ExpressionKind::BinaryOperator);
    assert_same_tokens(&init.to_string(), "(a + b) * -c");
    assert_eq!(v.init_value, None);
}

#[test]
fn test_binary_operator_recovered_between_operands() {
    let source = "int m = bits <<= 3;";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let int = fx.int();
    let m = fx.field(tu, CursorKind::VarDecl, "m", int, "int m = bits <<= 3");
    let assign = fx.expr(m, ExpressionKind::CompoundAssignOperator, "bits <<= 3");
    fx.expr(assign, ExpressionKind::DeclRef, "bits");
    fx.expr(assign, ExpressionKind::IntegerLiteral, "3");

    let left = fx.unit.span_of("bits");
    let right = fx.unit.span_of("3");
    assert_eq!((left.start.offset, left.end.offset), (8, 12));
    assert_eq!((right.start.offset, right.end.offset), (17, 18));

    let c = fx.build();
    let init = fields_of(&c, ContainerId::Global)[0].init_expression.clone().unwrap();
    match &init {
        Expression::Binary { operator, arguments, .. } => {
            assert_eq!(operator, "<<=");
            assert_eq!(arguments.len(), 2);
        }
        other => panic!("Expected a binary expression, got {:?}", other),
    }
    assert_same_tokens(&init.to_string(), "bits <<= 3");
}

#[test]
fn test_raw_fallback_keeps_every_token() {
    let source = "int n = sizeof(struct { int a[4]; });";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let int = fx.int();
    let n = fx.field(tu, CursorKind::VarDecl, "n", int, "int n = sizeof(struct { int a[4]; })");
    let size = fx.expr(n, ExpressionKind::Unary, "sizeof(struct { int a[4]; })");
    fx.evaluates_to(size, EvalResult::Int(16));

    let c = fx.build();
    let field = fields_of(&c, ContainerId::Global)[0];
    let init = field.init_expression.as_ref().unwrap();
    assert!(matches!(init, Expression::Raw(_)));
    assert_same_tokens(&init.to_string(), "sizeof(struct { int a[4]; })");
    assert_eq!(field.init_value, Some(Value::Int(16)));
}

// =============================================================================
// MACROS AND ATTRIBUTES
// =============================================================================

#[test]
fn test_macro_values_relex_like_their_bodies() {
    let mut fx = Fixture::new(MACROS);
    let tu = fx.tu();
    fx.add(tu, CursorInfo::new(CursorKind::MacroDefinition, "F"), "F(x,y) ((x)+(y))");
    fx.add(tu, CursorInfo::new(CursorKind::MacroDefinition, "G"), "G (1+2)");

    let c = fx.build();
    assert_same_tokens(&c.macro_named("F").unwrap().value, "((x)+(y))");
    assert_same_tokens(&c.macro_named("G").unwrap().value, "(1+2)");
    assert_same_tokens(
        &c.macro_named("F").unwrap().to_string(),
        "#define F(x,y) ((x)+(y))",
    );
}

#[test]
fn test_attribute_arguments_relex_like_source() {
    let source = "[[gnu::format(printf, 1, 2)]] int log(const char* fmt, ...);";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let int = fx.int();
    fx.add(
        tu,
        CursorInfo::new(CursorKind::FunctionDecl, "log")
            .with_usr("c:@F@log")
            .with_result_type(int),
        source.trim_end_matches(';'),
    );

    let c = fx.build();
    let log = c.function(c.find_function(ContainerId::Global, "log").unwrap());
    assert_eq!(log.attributes.len(), 1);
    let format = &log.attributes[0];
    assert_eq!(format.scope.as_deref(), Some("gnu"));
    assert_same_tokens(&format.to_string(), "gnu::format(printf, 1, 2)");
}

// =============================================================================
// COMMENTS
// =============================================================================

#[test]
fn test_comment_renders_as_doxygen_text() {
    let source = "/// Adds two numbers.\n/// @param a first operand\nint add(int a);";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let int = fx.int();
    let add = fx.add(
        tu,
        CursorInfo::new(CursorKind::FunctionDecl, "add")
            .with_usr("c:@F@add")
            .with_result_type(int),
        "int add(int a)",
    );
    fx.add_nth(add, CursorInfo::new(CursorKind::ParmDecl, "a").with_type(int), "int a", 1);

    let mut param = RawComment::param(
        "a",
        0,
        vec![RawComment::paragraph(vec![RawComment::text(" first operand")])],
    );
    param.is_index_valid = true;
    fx.unit.set_comment(
        add,
        RawComment::full(vec![
            RawComment::paragraph(vec![RawComment::text(" Adds two numbers."), RawComment::text(" ")]),
            param,
        ]),
    );

    let c = fx.build();
    let function = c.function(c.find_function(ContainerId::Global, "add").unwrap());
    let rendered = function.comment.as_ref().unwrap().to_string();
    assert_same_tokens(&rendered, "Adds two numbers. @param a first operand");
}
