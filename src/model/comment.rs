//! Structured documentation comments.
//!
//! Mirrors the shape of a Doxygen-style comment tree: a [`Comment::Full`]
//! root holding paragraphs and commands, whose leaves are text, inline
//! commands, HTML tags and verbatim lines.

use std::fmt;

use smol_str::SmolStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentKind {
    Text,
    InlineCommand,
    HtmlStartTag,
    HtmlEndTag,
    Paragraph,
    BlockCommand,
    ParamCommand,
    TemplateParamCommand,
    VerbatimBlockCommand,
    VerbatimBlockLine,
    VerbatimLine,
    Full,
}

/// How an inline command such as `\b word` should be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InlineRenderKind {
    #[default]
    Normal,
    Bold,
    Monospaced,
    Emphasized,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParamDirection {
    #[default]
    In,
    Out,
    InOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineCommand {
    pub name: SmolStr,
    pub render_kind: InlineRenderKind,
    pub arguments: Vec<String>,
    pub children: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlStartTag {
    pub tag_name: SmolStr,
    pub attributes: Vec<(String, String)>,
    pub is_self_closing: bool,
}

/// `@brief`, `@return`, ... and verbatim blocks such as `@code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCommand {
    pub name: SmolStr,
    pub arguments: Vec<String>,
    pub children: Vec<Comment>,
}

/// `@param [in] name ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamCommand {
    pub param_name: SmolStr,
    pub direction: ParamDirection,
    pub is_direction_explicit: bool,
    /// Position in the function's parameter list, when the front end validated it.
    pub index: Option<u32>,
    pub children: Vec<Comment>,
}

/// `@tparam T ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParamCommand {
    pub param_name: SmolStr,
    pub depth: u32,
    pub index: Option<u32>,
    pub children: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    Text(String),
    InlineCommand(InlineCommand),
    HtmlStartTag(HtmlStartTag),
    HtmlEndTag { tag_name: SmolStr },
    Paragraph(Vec<Comment>),
    BlockCommand(BlockCommand),
    ParamCommand(ParamCommand),
    TemplateParamCommand(TemplateParamCommand),
    VerbatimBlockCommand(BlockCommand),
    VerbatimBlockLine(String),
    VerbatimLine(String),
    Full(Vec<Comment>),
}

impl Comment {
    pub fn kind(&self) -> CommentKind {
        match self {
            Comment::Text(_) => CommentKind::Text,
            Comment::InlineCommand(_) => CommentKind::InlineCommand,
            Comment::HtmlStartTag(_) => CommentKind::HtmlStartTag,
            Comment::HtmlEndTag { .. } => CommentKind::HtmlEndTag,
            Comment::Paragraph(_) => CommentKind::Paragraph,
            Comment::BlockCommand(_) => CommentKind::BlockCommand,
            Comment::ParamCommand(_) => CommentKind::ParamCommand,
            Comment::TemplateParamCommand(_) => CommentKind::TemplateParamCommand,
            Comment::VerbatimBlockCommand(_) => CommentKind::VerbatimBlockCommand,
            Comment::VerbatimBlockLine(_) => CommentKind::VerbatimBlockLine,
            Comment::VerbatimLine(_) => CommentKind::VerbatimLine,
            Comment::Full(_) => CommentKind::Full,
        }
    }

    /// Ordered children; empty for leaves.
    pub fn children(&self) -> &[Comment] {
        match self {
            Comment::InlineCommand(c) => &c.children,
            Comment::Paragraph(children) | Comment::Full(children) => children,
            Comment::BlockCommand(c) | Comment::VerbatimBlockCommand(c) => &c.children,
            Comment::ParamCommand(c) => &c.children,
            Comment::TemplateParamCommand(c) => &c.children,
            Comment::Text(_)
            | Comment::HtmlStartTag(_)
            | Comment::HtmlEndTag { .. }
            | Comment::VerbatimBlockLine(_)
            | Comment::VerbatimLine(_) => &[],
        }
    }

    /// Mutable child list, `None` for leaf kinds.
    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Comment>> {
        match self {
            Comment::InlineCommand(c) => Some(&mut c.children),
            Comment::Paragraph(children) | Comment::Full(children) => Some(children),
            Comment::BlockCommand(c) | Comment::VerbatimBlockCommand(c) => Some(&mut c.children),
            Comment::ParamCommand(c) => Some(&mut c.children),
            Comment::TemplateParamCommand(c) => Some(&mut c.children),
            Comment::Text(_)
            | Comment::HtmlStartTag(_)
            | Comment::HtmlEndTag { .. }
            | Comment::VerbatimBlockLine(_)
            | Comment::VerbatimLine(_) => None,
        }
    }

    /// Text of a text-like leaf.
    pub fn text(&self) -> Option<&str> {
        match self {
            Comment::Text(text) | Comment::VerbatimBlockLine(text) | Comment::VerbatimLine(text) => {
                Some(text)
            }
            _ => None,
        }
    }

    /// Rendered children only, without this node's own decoration.
    pub fn children_to_string(&self) -> String {
        let mut out = String::new();
        render_children(self.children(), &mut out);
        out
    }

    fn render(&self, out: &mut String) {
        match self {
            Comment::Text(text) => out.push_str(text),
            Comment::InlineCommand(c) => {
                render_command_head(&c.name, &c.arguments, out);
                render_children(&c.children, out);
            }
            Comment::HtmlStartTag(tag) => {
                out.push('<');
                out.push_str(&tag.tag_name);
                for (name, value) in &tag.attributes {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(value);
                    out.push('"');
                }
                if tag.is_self_closing {
                    out.push_str(" /");
                }
                out.push('>');
            }
            Comment::HtmlEndTag { tag_name } => {
                out.push_str("</");
                out.push_str(tag_name);
                out.push('>');
            }
            Comment::Paragraph(children) => {
                for (i, child) in children.iter().enumerate() {
                    child.render(out);
                    if let (Comment::Text(text), Some(Comment::Text(next))) =
                        (child, children.get(i + 1))
                    {
                        if needs_line_break(text, next) {
                            out.push('\n');
                        }
                    }
                }
                out.push('\n');
            }
            Comment::BlockCommand(c) => {
                render_command_head(&c.name, &c.arguments, out);
                render_children(&c.children, out);
            }
            Comment::ParamCommand(c) => {
                out.push_str("@param ");
                out.push_str(&c.param_name);
                out.push(' ');
                render_children(&c.children, out);
            }
            Comment::TemplateParamCommand(c) => {
                out.push_str("@tparam ");
                out.push_str(&c.param_name);
                out.push(' ');
                render_children(&c.children, out);
            }
            Comment::VerbatimBlockCommand(c) => {
                render_command_head(&c.name, &c.arguments, out);
                render_children(&c.children, out);
                out.push_str("@end");
                out.push_str(&c.name);
                out.push('\n');
            }
            Comment::VerbatimBlockLine(text) | Comment::VerbatimLine(text) => {
                out.push_str(text);
                out.push('\n');
            }
            Comment::Full(children) => render_children(children, out),
        }
    }
}

/// Two adjacent text nodes in a paragraph were separated by a line break in
/// the source unless both are empty.
///
/// The comparison is between the current node and the *next* node.
pub fn needs_line_break(current: &str, next: &str) -> bool {
    !current.is_empty() || !next.is_empty()
}

fn render_command_head(name: &str, arguments: &[String], out: &mut String) {
    out.push('@');
    out.push_str(name);
    for argument in arguments {
        out.push(' ');
        out.push_str(argument);
    }
    out.push(' ');
}

fn render_children(children: &[Comment], out: &mut String) {
    for child in children {
        child.render(out);
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(&mut out);
        match self {
            Comment::Full(_) => f.write_str(out.trim_end()),
            _ => f.write_str(&out),
        }
    }
}
