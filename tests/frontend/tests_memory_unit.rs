//! The in-memory front end through its public trait.

use declgraph::frontend::{
    ChildVisit, CursorInfo, CursorKind, EvalResult, FrontEnd, MemoryUnit, RawTokenKind, is_keyword,
    tokenize, visit_children,
};
use rstest::rstest;

// =============================================================================
// LEXING
// =============================================================================

#[rstest]
#[case("unsigned int", &[RawTokenKind::Keyword, RawTokenKind::Keyword])]
#[case("x += 0x1Fu;", &[
    RawTokenKind::Identifier,
    RawTokenKind::Punctuation,
    RawTokenKind::Literal,
    RawTokenKind::Punctuation,
])]
#[case("s = u8\"hi\" // tail", &[
    RawTokenKind::Identifier,
    RawTokenKind::Punctuation,
    RawTokenKind::Literal,
    RawTokenKind::Comment,
])]
#[case("a::b...", &[
    RawTokenKind::Identifier,
    RawTokenKind::Punctuation,
    RawTokenKind::Identifier,
    RawTokenKind::Punctuation,
])]
#[case("@", &[RawTokenKind::Unknown])]
fn test_token_classes(#[case] source: &str, #[case] expected: &[RawTokenKind]) {
    let kinds: Vec<_> = tokenize(source).into_iter().map(|lexeme| lexeme.kind).collect();
    assert_eq!(kinds, expected, "Unexpected token classes for '{}'", source);
}

#[test]
fn test_attribute_spellings_are_keywords() {
    assert!(is_keyword("__attribute__"));
    assert!(is_keyword("__declspec"));
    assert!(is_keyword("constexpr"));
    assert!(!is_keyword("Widget"));
}

#[test]
fn test_tokenize_range_reports_source_spans() {
    let unit = MemoryUnit::new("t.h", "int a;\nfloat b;");
    let span = unit.span_of("float b");
    let tokens = unit.tokenize(&span);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, RawTokenKind::Keyword);
    assert_eq!(unit.token_spelling(&tokens[1]), "b");
    assert_eq!(tokens[1].span.start.line, 2);
    assert_eq!(tokens[1].span.start.column, 7);
}

#[test]
fn test_tokenize_unknown_file_is_empty() {
    let unit = MemoryUnit::new("t.h", "int a;");
    let other = MemoryUnit::new("other.h", "int a;");
    assert!(unit.tokenize(&other.span_of("int a")).is_empty());
}

// =============================================================================
// LOCATIONS
// =============================================================================

#[test]
fn test_location_past_last_line_is_end_of_file() {
    let unit = MemoryUnit::new("t.h", "#define X 1");
    let end = unit.location("t.h", 2, 1).unwrap();
    assert_eq!(end.offset, 11);
    assert!(unit.location("t.h", 3, 1).is_none());
    assert!(unit.location("missing.h", 1, 1).is_none());
}

// =============================================================================
// CURSOR TREE
// =============================================================================

#[test]
fn test_visit_children_pre_order_with_break() {
    let mut unit = MemoryUnit::new("t.h", "");
    let tu = unit.translation_unit();
    let ns = unit.add_cursor(tu, CursorInfo::new(CursorKind::Namespace, "ns"));
    unit.add_cursor(ns, CursorInfo::new(CursorKind::VarDecl, "inner"));
    unit.add_cursor(tu, CursorInfo::new(CursorKind::VarDecl, "stop"));
    unit.add_cursor(tu, CursorInfo::new(CursorKind::VarDecl, "never"));

    let mut seen = Vec::new();
    let broken = visit_children(&unit, tu, &mut |child, _| {
        let info = unit.cursor(child);
        seen.push(info.spelling.to_string());
        Ok::<_, ()>(match info.spelling.as_str() {
            "ns" => ChildVisit::Recurse,
            "stop" => ChildVisit::Break,
            _ => ChildVisit::Continue,
        })
    })
    .unwrap();

    assert!(broken);
    assert_eq!(seen, ["ns", "inner", "stop"]);
    assert_eq!(unit.cursor(ns).semantic_parent, Some(tu));
}

#[test]
fn test_unset_evaluation_is_unexposed() {
    let mut unit = MemoryUnit::new("t.h", "");
    let tu = unit.translation_unit();
    let v = unit.add_cursor(tu, CursorInfo::new(CursorKind::VarDecl, "v"));
    assert_eq!(unit.evaluate(v), EvalResult::Unexposed);
    unit.set_evaluation(v, EvalResult::Float(1.5));
    assert_eq!(unit.evaluate(v), EvalResult::Float(1.5));
    assert!(unit.comment(v).is_none());
}
