//! Classified source tokens and the text renderer shared by macros,
//! raw expressions and attribute arguments.

use std::fmt;

use smol_str::SmolStr;

use crate::base::SourceSpan;

/// Lexical class of a [`Token`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[default]
    Punctuation,
    Keyword,
    Identifier,
    Literal,
    Comment,
}

impl TokenKind {
    /// Identifiers and keywords need a separating space when adjacent.
    pub fn is_identifier_or_keyword(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Keyword)
    }
}

/// A token with its kind, exact spelling and span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    pub span: SourceSpan,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>, span: SourceSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Reconstitute source text from tokens.
///
/// One space is inserted between two consecutive identifier/keyword tokens
/// (`unsigned` + `int`); everything else is concatenated as-is.
pub fn tokens_to_string<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    let mut text = String::new();
    let mut previous = TokenKind::Punctuation;
    for token in tokens {
        if previous.is_identifier_or_keyword() && token.kind.is_identifier_or_keyword() {
            text.push(' ');
        }
        text.push_str(&token.text);
        previous = token.kind;
    }
    text
}
