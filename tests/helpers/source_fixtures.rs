//! Source text shared by several test files.

/// A class seen first as a forward declaration, then defined, then
/// referenced from a field of another struct.
pub const FORWARD_THEN_DEFINED: &str = r#"class Widget;
struct Holder { Widget* widget; };
class Widget {
  int id;
public:
  void draw();
};"#;

/// Nested anonymous records inside a struct and a namespace-scope union.
pub const ANONYMOUS_MEMBERS: &str = r#"struct Packet {
  union { int raw; float real; };
  int tag;
  struct { short lo; short hi; };
};"#;

pub const ATTRIBUTED_FUNCTIONS: &str = r#"[[nodiscard]] int f();
__declspec(dllexport) void g();
void h() __attribute__((noreturn, cold));
"#;

pub const MACROS: &str = r#"#define F(x,y) ((x)+(y))
#define G (1+2)
#define VERSION "1.0" /* release */
int after;
"#;
