//! Documentation comment lowering.

use crate::base::SourceLocation;
use crate::frontend::{RawComment, RawCommentKind};
use crate::model::{
    BlockCommand, Comment, Diagnostics, HtmlStartTag, InlineCommand, ParamCommand,
    TemplateParamCommand, codes,
};

/// Convert a front-end comment tree. `location` is where unknown nodes are
/// reported.
pub(super) fn lower_comment(
    raw: &RawComment,
    location: &SourceLocation,
    diagnostics: &mut Diagnostics,
) -> Option<Comment> {
    let comment = match &raw.kind {
        RawCommentKind::Null => return None,
        RawCommentKind::Text => Comment::Text(raw.text.trim_start().to_string()),
        RawCommentKind::InlineCommand => Comment::InlineCommand(InlineCommand {
            name: raw.name.clone(),
            render_kind: raw.render_kind,
            arguments: raw.arguments.clone(),
            children: lower_children(raw, location, diagnostics),
        }),
        RawCommentKind::HtmlStartTag => Comment::HtmlStartTag(HtmlStartTag {
            tag_name: raw.name.clone(),
            attributes: raw.html_attributes.clone(),
            is_self_closing: raw.is_self_closing,
        }),
        RawCommentKind::HtmlEndTag => Comment::HtmlEndTag {
            tag_name: raw.name.clone(),
        },
        RawCommentKind::Paragraph => Comment::Paragraph(lower_children(raw, location, diagnostics)),
        RawCommentKind::BlockCommand => {
            let mut children = lower_children(raw, location, diagnostics);
            trim_trailing_blank_text(&mut children);
            Comment::BlockCommand(BlockCommand {
                name: raw.name.clone(),
                arguments: raw.arguments.clone(),
                children,
            })
        }
        RawCommentKind::ParamCommand => {
            let mut children = lower_children(raw, location, diagnostics);
            trim_trailing_blank_text(&mut children);
            Comment::ParamCommand(ParamCommand {
                param_name: raw.param_name.clone(),
                direction: raw.direction,
                is_direction_explicit: raw.is_direction_explicit,
                index: raw.is_index_valid.then_some(raw.index),
                children,
            })
        }
        RawCommentKind::TParamCommand => {
            let mut children = lower_children(raw, location, diagnostics);
            trim_trailing_blank_text(&mut children);
            Comment::TemplateParamCommand(TemplateParamCommand {
                param_name: raw.param_name.clone(),
                depth: raw.depth,
                index: raw.is_index_valid.then_some(raw.index),
                children,
            })
        }
        RawCommentKind::VerbatimBlockCommand => Comment::VerbatimBlockCommand(BlockCommand {
            name: raw.name.clone(),
            arguments: raw.arguments.clone(),
            children: lower_children(raw, location, diagnostics),
        }),
        RawCommentKind::VerbatimBlockLine => Comment::VerbatimBlockLine(raw.text.clone()),
        RawCommentKind::VerbatimLine => Comment::VerbatimLine(raw.text.clone()),
        RawCommentKind::FullComment => Comment::Full(lower_children(raw, location, diagnostics)),
        RawCommentKind::Other(name) => {
            diagnostics.warning(
                codes::UNSUPPORTED_COMMENT,
                location.clone(),
                format!("Unsupported comment kind `{}`", name),
            );
            return None;
        }
    };
    Some(comment)
}

fn lower_children(
    raw: &RawComment,
    location: &SourceLocation,
    diagnostics: &mut Diagnostics,
) -> Vec<Comment> {
    raw.children
        .iter()
        .filter_map(|child| lower_comment(child, location, diagnostics))
        .collect()
}

/// Commands end with the whitespace that separated them from the next
/// command; drop it from their last paragraph.
fn trim_trailing_blank_text(children: &mut [Comment]) {
    let Some(Comment::Paragraph(_)) = children.last() else {
        return;
    };
    let Some(paragraph) = children.last_mut().and_then(Comment::children_mut) else {
        return;
    };
    if paragraph
        .last()
        .and_then(Comment::text)
        .is_some_and(|text| text.trim().is_empty())
    {
        paragraph.pop();
    }
}
