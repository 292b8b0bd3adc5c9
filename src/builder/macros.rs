//! Macro definition recovery from source tokens.

use smol_str::SmolStr;

use crate::base::{SourceLocation, SourceSpan};
use crate::frontend::{CursorId, FrontEnd};
use crate::model::{Diagnostics, Macro, Token, TokenKind, codes};

use super::tokens::token_kind;

/// Rebuild a `#define` from the tokens of its extent.
///
/// The first token is the name. A `(` glued to the name opens a parameter
/// list; every other token up to the end of the definition's last line is
/// body. Comments are dropped from the body.
pub(super) fn recover_macro<F: FrontEnd + ?Sized>(
    fe: &F,
    cursor: CursorId,
    diagnostics: &mut Diagnostics,
) -> Macro {
    let info = fe.cursor(cursor);
    let extent = &info.extent;
    let next_line = extent.end.line + 1;
    let range = match fe.location(&extent.start.file, next_line, 1) {
        Some(end) => SourceSpan::new(extent.start.clone(), end),
        None => extent.clone(),
    };

    let mut definition = Macro::new(info.spelling.clone());
    definition.span = extent.clone();

    let mut parameters: Vec<SmolStr> = Vec::new();
    let mut function_like = false;
    let mut in_parameters = false;
    let mut previous_end: Option<SourceLocation> = None;

    for (i, raw) in fe.tokenize(&range).into_iter().enumerate() {
        if raw.span.start.line >= next_line {
            break;
        }

        let text = fe.token_spelling(&raw);
        let kind = match token_kind(raw.kind) {
            Some(kind) => kind,
            None => {
                diagnostics.warning(
                    codes::UNSUPPORTED_MACRO_TOKEN,
                    raw.span.start.clone(),
                    format!("Unsupported token `{}` in macro `{}`", text, info.spelling),
                );
                TokenKind::Punctuation
            }
        };

        let glued = previous_end
            .as_ref()
            .is_some_and(|end| end.same_line_col(&raw.span.start));
        previous_end = Some(raw.span.end.clone());

        if kind == TokenKind::Comment {
            continue;
        }

        if i == 1 && glued && text == "(" {
            function_like = true;
            in_parameters = true;
        } else if in_parameters {
            if text == ")" {
                in_parameters = false;
            } else if kind != TokenKind::Punctuation {
                parameters.push(text);
            }
        } else if i > 0 {
            definition.tokens.push(Token::new(kind, text, raw.span));
        }
    }

    if function_like {
        definition.parameters = Some(parameters);
    }
    definition.update_value_from_tokens();
    definition
}
