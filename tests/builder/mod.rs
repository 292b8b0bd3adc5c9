//! Builder tests
//!
//! End-to-end builds of in-memory translation units:
//! - Container memoization, visibility and anonymous members
//! - Attributes and macros recovered from source tokens
//! - Render-then-relex equivalence of recovered nodes
//! - Recoverable diagnostics and fatal contract violations

pub mod tests_attributes_macros;
pub mod tests_declarations;
pub mod tests_diagnostics;
pub mod tests_round_trip;
