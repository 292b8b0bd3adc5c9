//! Syntactic attributes: `[[scope::name(args)]]`, `__attribute__((name))`,
//! `__declspec(name)`. Captured as written, never interpreted.

use std::fmt;

use smol_str::SmolStr;

use crate::base::SourceSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub identifier: SmolStr,
    /// `gnu` in `[[gnu::always_inline]]`
    pub scope: Option<SmolStr>,
    /// Raw argument text between the parentheses, `None` when there were none.
    pub arguments: Option<String>,
    /// Followed by `...`
    pub is_variadic: bool,
    pub span: SourceSpan,
}

impl Attribute {
    pub fn new(identifier: impl Into<SmolStr>) -> Self {
        Self {
            identifier: identifier.into(),
            scope: None,
            arguments: None,
            is_variadic: false,
            span: SourceSpan::default(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scope) = &self.scope {
            write!(f, "{}::", scope)?;
        }
        f.write_str(&self.identifier)?;
        if let Some(arguments) = &self.arguments {
            write!(f, "({})", arguments)?;
        }
        if self.is_variadic {
            f.write_str("...")?;
        }
        Ok(())
    }
}
