//! Front-end tests
//!
//! The in-memory front end and the source lexer behind it:
//! - Token classification and spans
//! - Cursor tree visitation order
//! - Line/column mapping

pub mod tests_memory_unit;
