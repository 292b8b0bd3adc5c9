//! Syntactic attribute recovery.
//!
//! Front ends do not expose attributes structurally, so they are re-read from
//! the declaration's tokens. Three spellings are recognized:
//!
//! ```text
//! [[scope::name(args), other]]
//! __attribute__((name(args), other))
//! __declspec(name(args))
//! ```

use crate::base::SourceSpan;
use crate::frontend::FrontEnd;
use crate::model::{Attribute, TokenKind, tokens_to_string};

use super::tokens::{TokenIterator, Tokenizer};

/// Attributes of a record, field or variable.
///
/// Leading keywords are skipped so that attributes placed between a class
/// keyword and its name are still found.
pub(super) fn parse_attributes<F: FrontEnd + ?Sized>(tokens: &Tokenizer<'_, F>) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut it = TokenIterator::new(tokens);

    while it.can_peek() {
        if parse_attribute_group(&mut it, &mut attributes) {
            continue;
        }
        if it.peek().is_some_and(|t| t.kind == TokenKind::Keyword) {
            it.advance();
            continue;
        }
        break;
    }

    attributes
}

/// Attributes of a function: leading groups, then groups after the
/// parameter list of `name`.
///
/// When `name (` cannot be found, or its parentheses never balance, only the
/// leading attributes are returned.
pub(super) fn parse_function_attributes<F: FrontEnd + ?Sized>(
    tokens: &Tokenizer<'_, F>,
    name: &str,
) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut it = TokenIterator::new(tokens);

    while it.can_peek() && parse_attribute_group(&mut it, &mut attributes) {}

    if !it.find(&[name, "("]) {
        return attributes;
    }
    it.skip_seq(&[name, "("]);

    let mut depth = 1;
    while depth > 0 {
        match it.next().map(|t| t.text.as_str()) {
            Some("(") => depth += 1,
            Some(")") => depth -= 1,
            Some(_) => {}
            None => return attributes,
        }
    }

    while it.can_peek() {
        if !parse_attribute_group(&mut it, &mut attributes) {
            it.advance();
        }
    }

    attributes
}

/// One bracketed, GNU or declspec group. Attributes are kept only when the
/// group is properly closed.
fn parse_attribute_group<F: FrontEnd + ?Sized>(
    it: &mut TokenIterator<'_, '_, F>,
    attributes: &mut Vec<Attribute>,
) -> bool {
    let closers: &[&str] = if it.skip_seq(&["[", "["]) {
        &["]", "]"]
    } else if it.skip_seq(&["__attribute__", "(", "("]) {
        &[")", ")"]
    } else if it.skip_seq(&["__declspec", "("]) {
        &[")"]
    } else {
        return false;
    };

    let mut group = Vec::new();
    while let Some(attribute) = parse_attribute(it) {
        group.push(attribute);
        it.skip(",");
    }

    if !it.skip_seq(closers) {
        return false;
    }
    attributes.append(&mut group);
    true
}

/// `(identifier ::)? identifier ('(' tokens ')')? '...'?`
fn parse_attribute<F: FrontEnd + ?Sized>(it: &mut TokenIterator<'_, '_, F>) -> Option<Attribute> {
    let first = it.peek().filter(|t| t.kind.is_identifier_or_keyword())?;
    it.advance();

    let mut name = first;
    let mut scope = None;
    if it.skip("::") {
        scope = Some(first.text.clone());
        name = it.peek().filter(|t| t.kind.is_identifier_or_keyword())?;
        it.advance();
    }

    let mut arguments = None;
    if it.skip("(") {
        let mut argument_tokens = Vec::new();
        let mut depth = 1usize;
        loop {
            let token = it.next()?;
            match token.text.as_str() {
                "(" => depth += 1,
                ")" => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                _ => {}
            }
            argument_tokens.push(token);
        }
        arguments = Some(tokens_to_string(argument_tokens));
    }

    let is_variadic = it.skip("...");
    let last = it.previous()?;

    Some(Attribute {
        identifier: name.text.clone(),
        scope,
        arguments,
        is_variadic,
        span: SourceSpan::new(first.span.start.clone(), last.span.end.clone()),
    })
}
