//! # declgraph
//!
//! Lowers the cursor tree of a C/C++ front end into a strongly-typed
//! declaration model: namespaces, classes, enums, functions, fields,
//! typedefs and macros, with types, comments and attributes attached.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! builder   → Traversal, type resolution, comment/attribute/macro recovery
//!   ↓
//! frontend  → FrontEnd trait, cursor and type records, in-memory unit, lexer
//!   ↓
//! model     → Compilation arenas, declarations, types, comments, diagnostics
//!   ↓
//! base      → Source locations and spans
//! ```
//!
//! ```ignore
//! use declgraph::{BuildOptions, ContainerId, build};
//!
//! let compilation = build(&front_end, BuildOptions::default())?;
//! for &class in &compilation.global().classes {
//!     println!("{}", compilation.qualified_name(ContainerId::Class(class)));
//! }
//! ```

// ============================================================================
// MODULES (dependency order: base → model → frontend → builder)
// ============================================================================

/// Foundation types: SourceLocation, SourceSpan
pub mod base;

/// Declaration model: Compilation, CppType, Comment, Diagnostics
pub mod model;

/// Front-end contract and the in-memory front end
pub mod frontend;

/// Model builder: cursor traversal and lowering
pub mod builder;

// Re-export the entry points
pub use builder::{BuildError, BuildOptions, ModelBuilder, build};
pub use model::{Compilation, ContainerId, CppType, Diagnostic, Diagnostics};

// Re-export foundation types
pub use base::{SourceLocation, SourceSpan};
