//! Expression lowering for initializers and default arguments.

use smol_str::SmolStr;

use crate::frontend::{CursorId, CursorKind, EvalResult, FrontEnd};
use crate::model::{Diagnostics, Expression, ExpressionKind, RawExpression, Value, codes};

use super::tokens::Tokenizer;

/// Lower an expression cursor. Non-expression cursors give `None`.
pub(super) fn lower_expression<F: FrontEnd + ?Sized>(fe: &F, cursor: CursorId) -> Option<Expression> {
    let info = fe.cursor(cursor);
    let CursorKind::Expression(kind) = &info.kind else {
        return None;
    };
    let span = info.extent.clone();
    let tokens = Tokenizer::new(fe, &span);

    let mut expression = match kind {
        kind if kind.is_literal() => {
            return Some(Expression::Literal {
                kind: kind.clone(),
                value: tokens.to_text(),
                span,
            });
        }
        ExpressionKind::Paren => Expression::Paren {
            arguments: Vec::new(),
            span,
        },
        ExpressionKind::UnaryOperator => Expression::Unary {
            operator: tokens.text(0).map(SmolStr::new).unwrap_or_default(),
            arguments: Vec::new(),
            span,
        },
        ExpressionKind::BinaryOperator | ExpressionKind::CompoundAssignOperator => {
            let arguments = lower_children(fe, cursor);
            let operator = match arguments.as_slice() {
                [left, right, ..] => {
                    tokens.text_between(left.span().end.offset, right.span().start.offset)
                }
                _ => String::new(),
            };
            return Some(Expression::Binary {
                kind: kind.clone(),
                operator: operator.into(),
                arguments,
                span,
            });
        }
        ExpressionKind::InitList => Expression::InitList {
            arguments: Vec::new(),
            span,
        },
        _ => {
            return Some(Expression::Raw(RawExpression::new(
                kind.clone(),
                tokens.to_vec(),
                span,
            )));
        }
    };

    for argument in lower_children(fe, cursor) {
        expression.push_argument(argument);
    }
    Some(expression)
}

fn lower_children<F: FrontEnd + ?Sized>(fe: &F, cursor: CursorId) -> Vec<Expression> {
    fe.children(cursor)
        .iter()
        .filter_map(|&child| lower_expression(fe, child))
        .collect()
}

/// Initializer cursor of a declaration: its first expression child, or the
/// second one for a bit field, whose first is the width.
pub(super) fn initializer<F: FrontEnd + ?Sized>(fe: &F, cursor: CursorId) -> Option<CursorId> {
    let skip = usize::from(fe.cursor(cursor).is_bit_field);
    fe.children(cursor)
        .iter()
        .copied()
        .filter(|&child| fe.cursor(child).kind.is_expression())
        .nth(skip)
}

/// The initializer of a field, variable or parameter, with its folded value
/// when the front end could compute one.
pub(super) fn lower_init_value<F: FrontEnd + ?Sized>(
    fe: &F,
    cursor: CursorId,
    diagnostics: &mut Diagnostics,
) -> (Option<Expression>, Option<Value>) {
    let Some(init) = initializer(fe, cursor) else {
        return (None, None);
    };

    let expression = lower_expression(fe, init);
    let value = match fe.evaluate(init) {
        EvalResult::Int(v) => Some(Value::Int(v)),
        EvalResult::Float(v) => Some(Value::Float(v)),
        EvalResult::Str(v) => Some(Value::Str(v)),
        EvalResult::Unexposed => None,
        EvalResult::Unsupported(name) => {
            let info = fe.cursor(init);
            diagnostics.warning(
                codes::UNSUPPORTED_VALUE,
                info.location.clone(),
                format!("Unsupported evaluation result `{}`", name),
            );
            None
        }
    };
    (expression, value)
}
