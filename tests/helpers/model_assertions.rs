//! Assertion helpers over a built [`Compilation`].

use declgraph::frontend::{RawTokenKind, tokenize};
use declgraph::model::{Class, ClassId, Field};
use declgraph::{Compilation, ContainerId};

/// Look up a class by `a::B` path from the global root.
pub fn class_id(c: &Compilation, path: &str) -> ClassId {
    match c.lookup(ContainerId::Global, path) {
        Some(ContainerId::Class(id)) => id,
        other => panic!("Expected class '{}', found {:?}", path, other),
    }
}

pub fn get_class<'a>(c: &'a Compilation, path: &str) -> &'a Class {
    c.class(class_id(c, path))
}

/// Fields of a container, in order.
pub fn fields_of(c: &Compilation, container: ContainerId) -> Vec<&Field> {
    c.members(container)
        .unwrap_or_else(|| panic!("{} has no member lists", container.kind_name()))
        .fields
        .iter()
        .map(|&id| c.field(id))
        .collect()
}

pub fn assert_field_names(c: &Compilation, container: ContainerId, expected: &[&str]) {
    let names: Vec<_> = fields_of(c, container)
        .iter()
        .map(|field| field.name.to_string())
        .collect();
    assert_eq!(
        names,
        expected,
        "Unexpected fields in '{}'",
        c.qualified_name(container)
    );
}

pub fn assert_no_diagnostics(c: &Compilation) {
    assert!(
        c.diagnostics().is_empty(),
        "Expected no diagnostics, got: {:?}",
        c.diagnostics().iter().map(|d| d.to_string()).collect::<Vec<_>>()
    );
}

/// Non-comment token spellings of `text`; whitespace does not matter.
pub fn token_texts(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|lexeme| lexeme.kind != RawTokenKind::Comment)
        .map(|lexeme| lexeme.text.to_string())
        .collect()
}

/// Assert that `rendered` re-lexes to the same token stream as `original`.
pub fn assert_same_tokens(rendered: &str, original: &str) {
    assert_eq!(
        token_texts(rendered),
        token_texts(original),
        "'{}' does not re-tokenize like '{}'",
        rendered,
        original
    );
}
