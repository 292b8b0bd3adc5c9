//! Token reconstruction over a cursor's source range.

use std::cell::OnceCell;

use crate::base::SourceSpan;
use crate::frontend::{FrontEnd, RawToken, RawTokenKind};
use crate::model::{Token, TokenKind, tokens_to_string};

pub(super) fn token_kind(kind: RawTokenKind) -> Option<TokenKind> {
    match kind {
        RawTokenKind::Punctuation => Some(TokenKind::Punctuation),
        RawTokenKind::Keyword => Some(TokenKind::Keyword),
        RawTokenKind::Identifier => Some(TokenKind::Identifier),
        RawTokenKind::Literal => Some(TokenKind::Literal),
        RawTokenKind::Comment => Some(TokenKind::Comment),
        RawTokenKind::Unknown => None,
    }
}

/// Tokens of one source range, converted to model tokens on first access.
pub(super) struct Tokenizer<'a, F: FrontEnd + ?Sized> {
    fe: &'a F,
    raw: Vec<RawToken>,
    cache: Vec<OnceCell<Token>>,
}

impl<'a, F: FrontEnd + ?Sized> Tokenizer<'a, F> {
    pub fn new(fe: &'a F, span: &SourceSpan) -> Self {
        let raw = fe.tokenize(span);
        let cache = (0..raw.len()).map(|_| OnceCell::new()).collect();
        Self { fe, raw, cache }
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        let raw = self.raw.get(index)?;
        let token = self.cache[index].get_or_init(|| {
            Token::new(
                token_kind(raw.kind).unwrap_or(TokenKind::Punctuation),
                self.fe.token_spelling(raw),
                raw.span.clone(),
            )
        });
        Some(token)
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        self.get(index).map(|token| token.text.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    pub fn to_vec(&self) -> Vec<Token> {
        self.iter().cloned().collect()
    }

    /// Source text of the whole range, with the token spacing rule.
    pub fn to_text(&self) -> String {
        tokens_to_string(self.iter())
    }

    /// Rendered tokens that lie fully inside `[start, end)` byte offsets.
    pub fn text_between(&self, start: u32, end: u32) -> String {
        tokens_to_string(
            self.iter()
                .filter(|t| t.span.start.offset >= start && t.span.end.offset <= end),
        )
    }
}

/// Cursor over a [`Tokenizer`] with the small matching vocabulary the
/// attribute parser needs.
pub(super) struct TokenIterator<'t, 'a, F: FrontEnd + ?Sized> {
    tokens: &'t Tokenizer<'a, F>,
    index: usize,
}

impl<'t, 'a, F: FrontEnd + ?Sized> TokenIterator<'t, 'a, F> {
    pub fn new(tokens: &'t Tokenizer<'a, F>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn can_peek(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.index)
    }

    pub fn peek_text(&self) -> Option<&'t str> {
        self.tokens.text(self.index)
    }

    pub fn previous(&self) -> Option<&'t Token> {
        self.index.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    pub fn next(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    pub fn advance(&mut self) -> bool {
        self.next().is_some()
    }

    /// Consume one token if its text is `expected`.
    pub fn skip(&mut self, expected: &str) -> bool {
        self.skip_seq(&[expected])
    }

    /// Consume the whole sequence, or nothing.
    pub fn skip_seq(&mut self, expected: &[&str]) -> bool {
        if !self.matches_at(self.index, expected) {
            return false;
        }
        self.index += expected.len();
        true
    }

    /// Move to the next position where `expected` starts, without consuming it.
    pub fn find(&mut self, expected: &[&str]) -> bool {
        let found = (self.index..self.tokens.len()).find(|&i| self.matches_at(i, expected));
        match found {
            Some(i) => {
                self.index = i;
                true
            }
            None => false,
        }
    }

    fn matches_at(&self, start: usize, expected: &[&str]) -> bool {
        expected
            .iter()
            .enumerate()
            .all(|(offset, text)| self.tokens.text(start + offset) == Some(*text))
    }
}
