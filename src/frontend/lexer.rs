//! Logos-based lexer for C and C++ source ranges
//!
//! Classifies tokens the way a C/C++ front end reports them: punctuation,
//! keyword, identifier, literal, comment. Whitespace and line splices are
//! skipped; anything unrecognized comes out as [`RawTokenKind::Unknown`].

use logos::Logos;

use super::RawTokenKind;

/// A token with its class, text, and byte offset in the lexed input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: RawTokenKind,
    pub text: &'a str,
    pub offset: u32,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = self.inner.span().start as u32;

        let kind = match logos_token {
            Ok(LogosToken::Word) if is_keyword(text) => RawTokenKind::Keyword,
            Ok(LogosToken::Word) => RawTokenKind::Identifier,
            Ok(LogosToken::Number | LogosToken::Char | LogosToken::String) => {
                RawTokenKind::Literal
            }
            Ok(LogosToken::LineComment | LogosToken::BlockComment) => RawTokenKind::Comment,
            Ok(LogosToken::Punct) => RawTokenKind::Punctuation,
            Err(()) => RawTokenKind::Unknown,
        };

        Some(Lexeme { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Lexeme<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f\v]+")]
#[logos(skip r"\\\r?\n")]
enum LogosToken {
    // =========================================================================
    // COMMENTS
    // =========================================================================
    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // WORDS AND LITERALS
    // =========================================================================
    /// Identifiers and keywords; split by [`is_keyword`].
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Word,

    /// Preprocessing number: covers suffixes, hex, exponents and digit separators.
    #[regex(r"\.?[0-9]([0-9a-zA-Z_.']|[eEpP][+-])*")]
    Number,

    #[regex(r"(u8|u|U|L)?'([^'\\\n]|\\.)*'")]
    Char,

    #[regex(r#"(u8|u|U|L)?"([^"\\\n]|\\.)*""#)]
    String,

    // =========================================================================
    // PUNCTUATORS (longest match wins)
    // =========================================================================
    #[token("...")]
    #[token("<<=")]
    #[token(">>=")]
    #[token("->*")]
    #[token("<=>")]
    #[token("::")]
    #[token("->")]
    #[token("++")]
    #[token("--")]
    #[token("<<")]
    #[token(">>")]
    #[token("<=")]
    #[token(">=")]
    #[token("==")]
    #[token("!=")]
    #[token("&&")]
    #[token("||")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("%=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("##")]
    #[token(".*")]
    #[token("{")]
    #[token("}")]
    #[token("[")]
    #[token("]")]
    #[token("(")]
    #[token(")")]
    #[token(";")]
    #[token(":")]
    #[token(",")]
    #[token(".")]
    #[token("?")]
    #[token("~")]
    #[token("!")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("^")]
    #[token("&")]
    #[token("|")]
    #[token("=")]
    #[token("<")]
    #[token(">")]
    #[token("#")]
    Punct,
}

/// C and C++ keywords plus the vendor attribute spellings, sorted for binary search.
const KEYWORDS: &[&str] = &[
    "_Alignas",
    "_Alignof",
    "_Atomic",
    "_Bool",
    "_Complex",
    "_Generic",
    "_Imaginary",
    "_Noreturn",
    "_Static_assert",
    "_Thread_local",
    "__asm__",
    "__attribute__",
    "__cdecl",
    "__declspec",
    "__fastcall",
    "__inline",
    "__restrict",
    "__stdcall",
    "alignas",
    "alignof",
    "asm",
    "auto",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char16_t",
    "char32_t",
    "char8_t",
    "class",
    "co_await",
    "co_return",
    "co_yield",
    "concept",
    "const",
    "const_cast",
    "consteval",
    "constexpr",
    "constinit",
    "continue",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "nullptr",
    "operator",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "requires",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}
