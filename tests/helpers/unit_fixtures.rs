//! Helpers for describing a translation unit as an in-memory cursor tree.

use declgraph::frontend::{
    CursorId, CursorInfo, CursorKind, EvalResult, FrontEnd, MemoryUnit, TypeId, TypeInfo, TypeKind,
};
use declgraph::model::ExpressionKind;
use declgraph::{BuildOptions, Compilation, build};

/// A [`MemoryUnit`] plus shorthands for the cursors tests keep repeating.
pub struct Fixture {
    pub unit: MemoryUnit,
}

impl Fixture {
    pub fn new(source: &str) -> Self {
        Self {
            unit: MemoryUnit::new("test.h", source),
        }
    }

    pub fn tu(&self) -> CursorId {
        self.unit.translation_unit()
    }

    /// Add `info` under `parent`, spanning the first occurrence of `needle`.
    #[track_caller]
    pub fn add(&mut self, parent: CursorId, info: CursorInfo, needle: &str) -> CursorId {
        self.add_nth(parent, info, needle, 0)
    }

    #[track_caller]
    pub fn add_nth(&mut self, parent: CursorId, info: CursorInfo, needle: &str, n: usize) -> CursorId {
        let extent = self.unit.nth_span_of(needle, n);
        self.unit.add_cursor(parent, info.with_extent(extent))
    }

    pub fn primitive(&mut self, kind: TypeKind, spelling: &str, size: i64) -> TypeId {
        self.unit.add_type(TypeInfo::new(kind, spelling).with_size(size))
    }

    pub fn int(&mut self) -> TypeId {
        self.primitive(TypeKind::Int, "int", 4)
    }

    pub fn void(&mut self) -> TypeId {
        self.primitive(TypeKind::Void, "void", 0)
    }

    /// A defined record named `name`, with USR `c:@S@<name>` and its own
    /// record type.
    #[track_caller]
    pub fn record(&mut self, parent: CursorId, kind: CursorKind, name: &str, needle: &str) -> (CursorId, TypeId) {
        let info = CursorInfo::new(kind, name)
            .with_usr(format!("c:@S@{}", name))
            .definition();
        let cursor = self.add(parent, info, needle);
        let ty = self.unit.add_type(
            TypeInfo::new(TypeKind::Record, name)
                .with_size(4)
                .with_declaration(cursor),
        );
        self.unit.cursor_mut(cursor).ty = Some(ty);
        (cursor, ty)
    }

    /// A field or variable of type `ty`.
    #[track_caller]
    pub fn field(&mut self, parent: CursorId, kind: CursorKind, name: &str, ty: TypeId, needle: &str) -> CursorId {
        let info = CursorInfo::new(kind, name)
            .with_usr(format!("c:@{}@{}", parent.0, name))
            .with_type(ty);
        self.add(parent, info, needle)
    }

    #[track_caller]
    pub fn expr(&mut self, parent: CursorId, kind: ExpressionKind, needle: &str) -> CursorId {
        self.add(parent, CursorInfo::new(CursorKind::Expression(kind), ""), needle)
    }

    #[track_caller]
    pub fn expr_nth(&mut self, parent: CursorId, kind: ExpressionKind, needle: &str, n: usize) -> CursorId {
        self.add_nth(parent, CursorInfo::new(CursorKind::Expression(kind), ""), needle, n)
    }

    pub fn evaluates_to(&mut self, cursor: CursorId, result: EvalResult) {
        self.unit.set_evaluation(cursor, result);
    }

    /// Build with default options; fatal errors fail the test.
    pub fn build(&self) -> Compilation {
        self.build_with(BuildOptions::default())
    }

    pub fn build_with(&self, options: BuildOptions) -> Compilation {
        build(&self.unit, options).unwrap_or_else(|err| panic!("build failed: {}", err))
    }
}
