//! Documentation-comment tree as reported by a front end.
//!
//! One flat node type carries the union of all per-kind properties; the
//! builder reads only the ones that matter for each [`RawCommentKind`].

use smol_str::SmolStr;

use crate::model::{InlineRenderKind, ParamDirection};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RawCommentKind {
    Null,
    Text,
    InlineCommand,
    HtmlStartTag,
    HtmlEndTag,
    Paragraph,
    BlockCommand,
    ParamCommand,
    TParamCommand,
    VerbatimBlockCommand,
    VerbatimBlockLine,
    VerbatimLine,
    FullComment,
    Other(SmolStr),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawComment {
    pub kind: RawCommentKind,
    /// Text of `Text`, `VerbatimBlockLine` and `VerbatimLine` nodes.
    pub text: String,
    /// Command or tag name.
    pub name: SmolStr,
    pub render_kind: InlineRenderKind,
    pub arguments: Vec<String>,
    pub html_attributes: Vec<(String, String)>,
    pub is_self_closing: bool,
    pub param_name: SmolStr,
    pub direction: ParamDirection,
    pub is_direction_explicit: bool,
    pub is_index_valid: bool,
    pub index: u32,
    pub depth: u32,
    pub children: Vec<RawComment>,
}

impl RawComment {
    pub fn new(kind: RawCommentKind) -> Self {
        Self {
            kind,
            text: String::new(),
            name: SmolStr::default(),
            render_kind: InlineRenderKind::Normal,
            arguments: Vec::new(),
            html_attributes: Vec::new(),
            is_self_closing: false,
            param_name: SmolStr::default(),
            direction: ParamDirection::In,
            is_direction_explicit: false,
            is_index_valid: false,
            index: 0,
            depth: 0,
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new(RawCommentKind::Text)
        }
    }

    pub fn paragraph(children: Vec<RawComment>) -> Self {
        Self {
            children,
            ..Self::new(RawCommentKind::Paragraph)
        }
    }

    pub fn full(children: Vec<RawComment>) -> Self {
        Self {
            children,
            ..Self::new(RawCommentKind::FullComment)
        }
    }

    pub fn block(name: impl Into<SmolStr>, children: Vec<RawComment>) -> Self {
        Self {
            name: name.into(),
            children,
            ..Self::new(RawCommentKind::BlockCommand)
        }
    }

    /// A `@param` whose index the front end could validate.
    pub fn param(name: impl Into<SmolStr>, index: u32, children: Vec<RawComment>) -> Self {
        Self {
            param_name: name.into(),
            is_index_valid: true,
            index,
            children,
            ..Self::new(RawCommentKind::ParamCommand)
        }
    }

    pub fn inline(name: impl Into<SmolStr>, render_kind: InlineRenderKind, arguments: Vec<String>) -> Self {
        Self {
            name: name.into(),
            render_kind,
            arguments,
            ..Self::new(RawCommentKind::InlineCommand)
        }
    }
}
