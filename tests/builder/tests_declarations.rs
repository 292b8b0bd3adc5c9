//! Declaration lowering: one node per symbol, visibility defaults,
//! anonymous members, templates and out-of-line definitions.

use crate::helpers::model_assertions::*;
use crate::helpers::source_fixtures::*;
use crate::helpers::unit_fixtures::Fixture;
use declgraph::frontend::{AccessSpecifier, CursorInfo, CursorKind, TypeInfo, TypeKind};
use declgraph::model::{ClassKind, Visibility};
use declgraph::{ContainerId, CppType};
use rstest::rstest;

// =============================================================================
// ONE NODE PER SYMBOL
// =============================================================================

/// `class Widget;`, a pointer to it from `Holder`, then the definition.
fn forward_then_defined() -> Fixture {
    let mut fx = Fixture::new(FORWARD_THEN_DEFINED);
    let tu = fx.tu();
    let int = fx.int();
    let void = fx.void();

    fx.add(
        tu,
        CursorInfo::new(CursorKind::ClassDecl, "Widget").with_usr("c:@S@Widget"),
        "class Widget;",
    );
    let (holder, _) = fx.record(tu, CursorKind::StructDecl, "Holder", "struct Holder { Widget* widget; }");
    let (widget, widget_ty) = fx.record(
        tu,
        CursorKind::ClassDecl,
        "Widget",
        "class Widget {\n  int id;\npublic:\n  void draw();\n}",
    );

    let pointer = fx.unit.add_type(
        TypeInfo::new(TypeKind::Pointer, "Widget *")
            .with_size(8)
            .with_pointee(widget_ty),
    );
    fx.field(holder, CursorKind::FieldDecl, "widget", pointer, "Widget* widget");

    fx.field(widget, CursorKind::FieldDecl, "id", int, "int id");
    fx.add(
        widget,
        CursorInfo::new(CursorKind::CxxAccessSpecifier, "").with_access(AccessSpecifier::Public),
        "public:",
    );
    fx.add(
        widget,
        CursorInfo::new(CursorKind::CxxMethod, "draw")
            .with_usr("c:@S@Widget@F@draw#")
            .with_result_type(void),
        "void draw()",
    );
    fx
}

#[test]
fn test_forward_declaration_reference_and_definition_share_one_class() {
    let fx = forward_then_defined();
    let c = fx.build();

    assert_eq!(c.global().classes.len(), 2);
    let widget = get_class(&c, "Widget");
    assert!(widget.is_definition);
    assert_eq!(widget.kind, ClassKind::Class);
    assert_field_names(&c, ContainerId::Class(class_id(&c, "Widget")), &["id"]);
    assert_eq!(widget.members.functions.len(), 1);
    assert_eq!(
        widget.span,
        fx.unit.span_of("class Widget {\n  int id;\npublic:\n  void draw();\n}")
    );

    let holder = ContainerId::Class(class_id(&c, "Holder"));
    let widget_field = fields_of(&c, holder)[0];
    assert_eq!(widget_field.ty.display(&c).to_string(), "Widget*");
    assert_no_diagnostics(&c);
}

#[test]
fn test_members_expanded_early_keep_their_visibility() {
    let c = forward_then_defined().build();
    let widget = get_class(&c, "Widget");

    let id = fields_of(&c, ContainerId::Class(class_id(&c, "Widget")))[0];
    assert_eq!(id.visibility, Visibility::Private);
    let draw = c.function(widget.members.functions[0]);
    assert_eq!(draw.name, "draw");
    assert_eq!(draw.visibility, Visibility::Public);
}

#[rstest]
#[case::class(CursorKind::ClassDecl, "class", Visibility::Private)]
#[case::struct_(CursorKind::StructDecl, "struct", Visibility::Public)]
#[case::union_(CursorKind::UnionDecl, "union", Visibility::Public)]
fn test_first_member_default_visibility(
    #[case] kind: CursorKind,
    #[case] keyword: &str,
    #[case] expected: Visibility,
) {
    let source = format!("{} R {{ int first; }};", keyword);
    let mut fx = Fixture::new(&source);
    let tu = fx.tu();
    let int = fx.int();
    let (record, _) = fx.record(tu, kind, "R", source.trim_end_matches(';'));
    fx.field(record, CursorKind::FieldDecl, "first", int, "int first");

    let c = fx.build();
    let first = fields_of(&c, ContainerId::Class(class_id(&c, "R")))[0];
    assert_eq!(first.visibility, expected);
}

// =============================================================================
// ANONYMOUS MEMBERS
// =============================================================================

fn anonymous_members() -> Fixture {
    let mut fx = Fixture::new(ANONYMOUS_MEMBERS);
    let tu = fx.tu();
    let int = fx.int();
    let float = fx.primitive(TypeKind::Float, "float", 4);
    let short = fx.primitive(TypeKind::Short, "short", 2);

    let (packet, _) = fx.record(tu, CursorKind::StructDecl, "Packet", ANONYMOUS_MEMBERS.trim_end_matches(';'));

    let mut union_info = CursorInfo::new(CursorKind::UnionDecl, "")
        .with_usr("c:@S@Packet@Ua")
        .definition()
        .anonymous();
    union_info.is_anonymous_record = true;
    let union = fx.add(packet, union_info, "union { int raw; float real; }");
    fx.field(union, CursorKind::FieldDecl, "raw", int, "int raw");
    fx.field(union, CursorKind::FieldDecl, "real", float, "float real");

    fx.field(packet, CursorKind::FieldDecl, "tag", int, "int tag");

    let mut struct_info = CursorInfo::new(CursorKind::StructDecl, "")
        .with_usr("c:@S@Packet@Sa")
        .definition()
        .anonymous();
    struct_info.is_anonymous_record = true;
    let halves = fx.add(packet, struct_info, "struct { short lo; short hi; }");
    fx.field(halves, CursorKind::FieldDecl, "lo", short, "short lo");
    fx.field(halves, CursorKind::FieldDecl, "hi", short, "short hi");
    fx
}

#[test]
fn test_anonymous_fields_numbered_in_insertion_order() {
    let c = anonymous_members().build();
    let packet = ContainerId::Class(class_id(&c, "Packet"));
    assert_field_names(&c, packet, &["__anonymous__0", "tag", "__anonymous__1"]);

    let fields = fields_of(&c, packet);
    assert!(fields[0].is_anonymous);
    assert!(!fields[1].is_anonymous);
    let union = fields[0].ty.as_class().unwrap();
    assert_eq!(c.class(union).kind, ClassKind::Union);
    assert_eq!(c.parent_of(ContainerId::Class(union)), Some(packet));
    assert_field_names(&c, ContainerId::Class(union), &["raw", "real"]);
}

#[test]
fn test_anonymous_field_names_stable_across_builds() {
    let fx = anonymous_members();
    let first = fx.build();
    let second = fx.build();

    let packet = ContainerId::Class(class_id(&first, "Packet"));
    let names = |c: &declgraph::Compilation| -> Vec<String> {
        fields_of(c, packet).iter().map(|f| f.name.to_string()).collect()
    };
    assert_eq!(names(&first), names(&second));
    assert_eq!(first.class(class_id(&first, "Packet")), second.class(class_id(&second, "Packet")));
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[test]
fn test_class_template_parameters_in_order() {
    let source = "template <typename K, typename V> class Map { K key; };";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let mut info = CursorInfo::new(CursorKind::ClassTemplate, "Map")
        .with_usr("c:@ST>2#T#T@Map")
        .definition();
    info.templated_kind = Some(CursorKind::ClassDecl);
    let map = fx.add(tu, info, source.trim_end_matches(';'));
    fx.add(map, CursorInfo::new(CursorKind::TemplateTypeParameter, "K"), "typename K");
    fx.add(map, CursorInfo::new(CursorKind::TemplateTypeParameter, "V"), "typename V");
    let k = fx.unit.add_type(TypeInfo::new(TypeKind::TemplateTypeParm, "K"));
    fx.field(map, CursorKind::FieldDecl, "key", k, "K key");

    let c = fx.build();
    let map = get_class(&c, "Map");
    assert!(map.is_template());
    assert_eq!(map.template_parameters, ["K", "V"]);
    assert_eq!(map.kind, ClassKind::Class);

    let key = fields_of(&c, ContainerId::Class(class_id(&c, "Map")))[0];
    assert_eq!(key.visibility, Visibility::Private);
    assert_eq!(
        key.ty,
        CppType::Unexposed {
            name: "K".into(),
            size_of: -1,
        }
    );
    assert_no_diagnostics(&c);
}

#[test]
fn test_function_template_is_an_ordinary_function() {
    let source = "template <typename T> T larger(T a, T b);";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let t = fx.unit.add_type(TypeInfo::new(TypeKind::TemplateTypeParm, "T"));
    let larger = fx.add(
        tu,
        CursorInfo::new(CursorKind::FunctionTemplate, "larger")
            .with_usr("c:@FT@>1#Tlarger#t0.0#S0_#t0.0")
            .with_result_type(t),
        source.trim_end_matches(';'),
    );
    fx.add(larger, CursorInfo::new(CursorKind::TemplateTypeParameter, "T"), "typename T");
    fx.add(larger, CursorInfo::new(CursorKind::ParmDecl, "a").with_type(t), "T a");
    fx.add(larger, CursorInfo::new(CursorKind::ParmDecl, "b").with_type(t), "T b");

    let c = fx.build();
    let id = c.find_function(ContainerId::Global, "larger").unwrap();
    let function = c.function(id);
    let names: Vec<_> = function.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
    assert!(function.flags.is_empty());
    assert_no_diagnostics(&c);
}

// =============================================================================
// OWNERSHIP
// =============================================================================

#[test]
fn test_out_of_line_method_definition_lands_in_its_class() {
    let source = "struct S { void run(); };\nvoid S::run() {}";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let void = fx.void();
    let (s, _) = fx.record(tu, CursorKind::StructDecl, "S", "struct S { void run(); }");
    fx.add(
        s,
        CursorInfo::new(CursorKind::CxxMethod, "run")
            .with_usr("c:@S@S@F@run#")
            .with_result_type(void),
        "void run()",
    );
    fx.add(
        tu,
        CursorInfo::new(CursorKind::CxxMethod, "run")
            .with_usr("c:@S@S@F@run#")
            .with_result_type(void)
            .with_semantic_parent(s)
            .definition(),
        "void S::run() {}",
    );

    let c = fx.build();
    assert!(c.global().functions.is_empty());
    let s = get_class(&c, "S");
    assert_eq!(s.members.functions.len(), 1);
    let run = c.function(s.members.functions[0]);
    assert_eq!(run.span, fx.unit.span_of("void S::run() {}"));
    assert_eq!(run.parent, Some(ContainerId::Class(class_id(&c, "S"))));
}

#[test]
fn test_nested_namespaces_navigate_upwards() {
    let source = "namespace outer { namespace inner { struct Leaf {}; } }";
    let mut fx = Fixture::new(source);
    let tu = fx.tu();
    let outer = fx.add(
        tu,
        CursorInfo::new(CursorKind::Namespace, "outer").with_usr("c:@N@outer"),
        source,
    );
    let inner = fx.add(
        outer,
        CursorInfo::new(CursorKind::Namespace, "inner").with_usr("c:@N@outer@N@inner"),
        "namespace inner { struct Leaf {}; }",
    );
    fx.record(inner, CursorKind::StructDecl, "Leaf", "struct Leaf {}");

    let c = fx.build();
    let leaf = ContainerId::Class(class_id(&c, "outer::inner::Leaf"));
    assert_eq!(c.qualified_name(leaf), "outer::inner::Leaf");

    let inner = c.parent_of(leaf).unwrap();
    assert_eq!(c.container_name(inner), "inner");
    let outer = c.parent_of(inner).unwrap();
    assert_eq!(c.container_name(outer), "outer");
    assert_eq!(c.parent_of(outer), Some(ContainerId::Global));
}
