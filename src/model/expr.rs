//! Initializer and default-value expressions.
//!
//! Only a small set of expression shapes is modeled structurally (literals,
//! parentheses, unary, binary, init lists). Anything else keeps its foreign
//! kind plus the original tokens in a [`RawExpression`].

use std::fmt;

use smol_str::SmolStr;

use super::token::{Token, tokens_to_string};
use crate::base::SourceSpan;

/// Expression kinds as reported by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Unexposed,
    DeclRef,
    MemberRef,
    Call,
    ObjCMessage,
    Block,
    IntegerLiteral,
    FloatingLiteral,
    ImaginaryLiteral,
    StringLiteral,
    CharacterLiteral,
    FixedPointLiteral,
    Paren,
    UnaryOperator,
    ArraySubscript,
    BinaryOperator,
    CompoundAssignOperator,
    ConditionalOperator,
    CStyleCast,
    CompoundLiteral,
    InitList,
    AddrLabel,
    Stmt,
    GenericSelection,
    GnuNull,
    CxxStaticCast,
    CxxDynamicCast,
    CxxReinterpretCast,
    CxxConstCast,
    CxxFunctionalCast,
    CxxTypeid,
    CxxBoolLiteral,
    CxxNullPtrLiteral,
    CxxThis,
    CxxThrow,
    CxxNew,
    CxxDelete,
    Unary,
    ObjCStringLiteral,
    ObjCEncode,
    ObjCSelector,
    ObjCProtocol,
    ObjCBridgedCast,
    PackExpansion,
    SizeOfPack,
    Lambda,
    ObjCBoolLiteral,
    ObjCSelf,
    OmpArraySection,
    ObjCAvailabilityCheck,
    /// A kind the model has no name for, carrying the front end's spelling.
    Other(SmolStr),
}

impl ExpressionKind {
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            ExpressionKind::IntegerLiteral
                | ExpressionKind::FloatingLiteral
                | ExpressionKind::ImaginaryLiteral
                | ExpressionKind::StringLiteral
                | ExpressionKind::CharacterLiteral
                | ExpressionKind::FixedPointLiteral
        )
    }
}

/// An expression kept only as tokens and their rendered text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawExpression {
    pub kind: ExpressionKind,
    pub tokens: Vec<Token>,
    pub text: String,
    pub span: SourceSpan,
}

impl RawExpression {
    pub fn new(kind: ExpressionKind, tokens: Vec<Token>, span: SourceSpan) -> Self {
        let text = tokens_to_string(&tokens);
        Self {
            kind,
            tokens,
            text,
            span,
        }
    }
}

/// An expression tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal {
        kind: ExpressionKind,
        value: String,
        span: SourceSpan,
    },
    Paren {
        arguments: Vec<Expression>,
        span: SourceSpan,
    },
    Unary {
        operator: SmolStr,
        arguments: Vec<Expression>,
        span: SourceSpan,
    },
    Binary {
        kind: ExpressionKind,
        operator: SmolStr,
        arguments: Vec<Expression>,
        span: SourceSpan,
    },
    InitList {
        arguments: Vec<Expression>,
        span: SourceSpan,
    },
    Raw(RawExpression),
}

impl Expression {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Literal { kind, .. } | Expression::Binary { kind, .. } => kind.clone(),
            Expression::Paren { .. } => ExpressionKind::Paren,
            Expression::Unary { .. } => ExpressionKind::UnaryOperator,
            Expression::InitList { .. } => ExpressionKind::InitList,
            Expression::Raw(raw) => raw.kind.clone(),
        }
    }

    pub fn span(&self) -> &SourceSpan {
        match self {
            Expression::Literal { span, .. }
            | Expression::Paren { span, .. }
            | Expression::Unary { span, .. }
            | Expression::Binary { span, .. }
            | Expression::InitList { span, .. } => span,
            Expression::Raw(raw) => &raw.span,
        }
    }

    /// Ordered children; empty for leaves.
    pub fn arguments(&self) -> &[Expression] {
        match self {
            Expression::Paren { arguments, .. }
            | Expression::Unary { arguments, .. }
            | Expression::Binary { arguments, .. }
            | Expression::InitList { arguments, .. } => arguments,
            Expression::Literal { .. } | Expression::Raw(_) => &[],
        }
    }

    /// Append a child to a node that has a child list. Leaves ignore it.
    pub(crate) fn push_argument(&mut self, argument: Expression) {
        match self {
            Expression::Paren { arguments, .. }
            | Expression::Unary { arguments, .. }
            | Expression::Binary { arguments, .. }
            | Expression::InitList { arguments, .. } => arguments.push(argument),
            Expression::Literal { .. } | Expression::Raw(_) => {}
        }
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, arguments: &[Expression]) -> fmt::Result {
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", argument)?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal { value, .. } => f.write_str(value),
            Expression::Paren { arguments, .. } => {
                f.write_str("(")?;
                write_comma_separated(f, arguments)?;
                f.write_str(")")
            }
            Expression::Unary {
                operator,
                arguments,
                ..
            } => {
                f.write_str(operator)?;
                match arguments.first() {
                    Some(operand) => write!(f, "{}", operand),
                    None => Ok(()),
                }
            }
            Expression::Binary {
                operator,
                arguments,
                ..
            } => {
                if let Some(left) = arguments.first() {
                    write!(f, "{}", left)?;
                }
                write!(f, " {} ", operator)?;
                if let Some(right) = arguments.get(1) {
                    write!(f, "{}", right)?;
                }
                Ok(())
            }
            Expression::InitList { arguments, .. } => {
                f.write_str("{")?;
                write_comma_separated(f, arguments)?;
                f.write_str("}")
            }
            Expression::Raw(raw) => f.write_str(&raw.text),
        }
    }
}

/// A constant folded by the front end, attached next to an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{:?}", v),
        }
    }
}
