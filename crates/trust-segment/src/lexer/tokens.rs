//! Token definitions for element boundary scanning.
//!
//! Only the keywords that open or close an element are distinguished. Every
//! other word lexes as [`TokenKind::Ident`] so that keywords keep word
//! boundaries (`END_VARIANT` is an identifier, not `END_VAR`), and comments,
//! pragmas and string literals are consumed whole so keyword-like text
//! inside them is never reported.

use logos::Logos;

use crate::kind::{DelimiterKind, ElementKind, EndKind};

fn lex_block_comment_pascal(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_block_comment(lex, "*)")
}

fn lex_block_comment_c(lex: &mut logos::Lexer<TokenKind>) -> bool {
    lex_block_comment(lex, "*/")
}

/// Consumes a block comment body up to the first `close`. Block comments do
/// not nest. An unterminated comment swallows the rest of the input.
fn lex_block_comment(lex: &mut logos::Lexer<TokenKind>, close: &str) -> bool {
    let remainder = lex.remainder();
    let end = remainder
        .find(close)
        .map_or(remainder.len(), |offset| offset + close.len());
    lex.bump(end);
    true
}

/// Token kinds seen by the boundary scanner.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    /// Whitespace (spaces, tabs, newlines)
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    /// Single-line comment: // ...
    #[regex(r"//[^\r\n]*")]
    LineComment,

    /// Block comment: (* ... *) or /* ... */, ending at the first close.
    #[token("(*", lex_block_comment_pascal)]
    #[token("/*", lex_block_comment_c)]
    BlockComment,

    /// Pragma: { ... }
    #[regex(r"\{[^}]*\}")]
    Pragma,

    // =========================================================================
    // LITERALS
    // =========================================================================
    // A doubled quote lexes as two adjacent literals, which covers the same
    // text as one escaped literal.
    /// Single-quoted string: 'it$'s'. Literals end at the line break.
    #[regex(r"'([^$'\r\n]|\$[^\r\n])*'")]
    StringLiteral,

    /// Wide string: "it$"s"
    #[regex(r#""([^$"\r\n]|\$[^\r\n])*""#)]
    WideStringLiteral,

    /// Numeric literal, including based and typed forms up to the first `#`.
    #[regex(r"[0-9][0-9A-Za-z_]*")]
    Number,

    // =========================================================================
    // OPENING KEYWORDS
    // =========================================================================
    /// `FUNCTION_BLOCK`
    #[token("FUNCTION_BLOCK", ignore(ascii_case))]
    KwFunctionBlock,

    /// `FUNCTION`
    #[token("FUNCTION", ignore(ascii_case))]
    KwFunction,

    /// `INTERFACE`
    #[token("INTERFACE", ignore(ascii_case))]
    KwInterface,

    /// `PROGRAM`
    #[token("PROGRAM", ignore(ascii_case))]
    KwProgram,

    /// `TYPE`
    #[token("TYPE", ignore(ascii_case))]
    KwType,

    /// `METHOD`
    #[token("METHOD", ignore(ascii_case))]
    KwMethod,

    /// `ACTION`
    #[token("ACTION", ignore(ascii_case))]
    KwAction,

    // =========================================================================
    // VARIABLE SECTIONS
    // =========================================================================
    /// `VAR`
    #[token("VAR", ignore(ascii_case))]
    KwVar,

    /// `VAR_GLOBAL`
    #[token("VAR_GLOBAL", ignore(ascii_case))]
    KwVarGlobal,

    /// `VAR_INPUT`
    #[token("VAR_INPUT", ignore(ascii_case))]
    KwVarInput,

    /// `VAR_OUTPUT`
    #[token("VAR_OUTPUT", ignore(ascii_case))]
    KwVarOutput,

    /// `VAR_TEMP`
    #[token("VAR_TEMP", ignore(ascii_case))]
    KwVarTemp,

    /// `VAR_IN_OUT`
    #[token("VAR_IN_OUT", ignore(ascii_case))]
    KwVarInOut,

    /// `VAR_EXTERNAL`
    #[token("VAR_EXTERNAL", ignore(ascii_case))]
    KwVarExternal,

    /// `VAR_STAT`
    #[token("VAR_STAT", ignore(ascii_case))]
    KwVarStat,

    /// `VAR_INST`
    #[token("VAR_INST", ignore(ascii_case))]
    KwVarInst,

    /// `VAR_CONFIG`
    #[token("VAR_CONFIG", ignore(ascii_case))]
    KwVarConfig,

    /// `VAR_ACCESS`
    #[token("VAR_ACCESS", ignore(ascii_case))]
    KwVarAccess,

    // =========================================================================
    // CLOSING KEYWORDS
    // =========================================================================
    /// `END_FUNCTION_BLOCK`
    #[token("END_FUNCTION_BLOCK", ignore(ascii_case))]
    KwEndFunctionBlock,

    /// `END_FUNCTION`
    #[token("END_FUNCTION", ignore(ascii_case))]
    KwEndFunction,

    /// `END_INTERFACE`
    #[token("END_INTERFACE", ignore(ascii_case))]
    KwEndInterface,

    /// `END_PROGRAM`
    #[token("END_PROGRAM", ignore(ascii_case))]
    KwEndProgram,

    /// `END_TYPE`
    #[token("END_TYPE", ignore(ascii_case))]
    KwEndType,

    /// `END_METHOD`
    #[token("END_METHOD", ignore(ascii_case))]
    KwEndMethod,

    /// `END_ACTION`
    #[token("END_ACTION", ignore(ascii_case))]
    KwEndAction,

    /// `END_VAR`
    #[token("END_VAR", ignore(ascii_case))]
    KwEndVar,

    // =========================================================================
    // MODIFIERS
    // =========================================================================
    /// `PUBLIC`
    #[token("PUBLIC", ignore(ascii_case))]
    KwPublic,

    /// `PRIVATE`
    #[token("PRIVATE", ignore(ascii_case))]
    KwPrivate,

    /// `PROTECTED`
    #[token("PROTECTED", ignore(ascii_case))]
    KwProtected,

    /// `INTERNAL`
    #[token("INTERNAL", ignore(ascii_case))]
    KwInternal,

    /// `FINAL`
    #[token("FINAL", ignore(ascii_case))]
    KwFinal,

    /// `ABSTRACT`
    #[token("ABSTRACT", ignore(ascii_case))]
    KwAbstract,

    // =========================================================================
    // IDENTIFIERS
    // =========================================================================
    /// Identifier: starts with letter or underscore, contains letters, digits, underscores
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Anything else: punctuation, operators, unterminated literals.
    #[default]
    Error,
}

impl TokenKind {
    /// Returns `true` for whitespace, comments and pragmas.
    #[inline]
    #[must_use]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment | Self::Pragma
        )
    }

    /// Returns `true` for access and inheritance modifiers that may sit
    /// between `METHOD`/`FUNCTION_BLOCK` and the element name.
    #[inline]
    #[must_use]
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Self::KwPublic
                | Self::KwPrivate
                | Self::KwProtected
                | Self::KwInternal
                | Self::KwFinal
                | Self::KwAbstract
        )
    }

    /// Maps boundary keywords to the delimiter they produce.
    #[must_use]
    pub fn delimiter(self) -> Option<DelimiterKind> {
        let open = match self {
            Self::KwFunctionBlock => ElementKind::FunctionBlock,
            Self::KwFunction => ElementKind::Function,
            Self::KwInterface => ElementKind::Interface,
            Self::KwProgram => ElementKind::Program,
            Self::KwType => ElementKind::Type,
            Self::KwMethod => ElementKind::Method,
            Self::KwAction => ElementKind::Action,
            Self::KwVar => ElementKind::Var,
            Self::KwVarGlobal => ElementKind::VarGlobal,
            Self::KwVarInput => ElementKind::VarInput,
            Self::KwVarOutput => ElementKind::VarOutput,
            Self::KwVarTemp => ElementKind::VarTemp,
            Self::KwVarInOut => ElementKind::VarInOut,
            Self::KwVarExternal => ElementKind::VarExternal,
            Self::KwVarStat => ElementKind::VarStat,
            Self::KwVarInst => ElementKind::VarInst,
            Self::KwVarConfig => ElementKind::VarConfig,
            Self::KwVarAccess => ElementKind::VarAccess,
            _ => return self.end_kind().map(DelimiterKind::Close),
        };
        Some(DelimiterKind::Open(open))
    }

    fn end_kind(self) -> Option<EndKind> {
        Some(match self {
            Self::KwEndFunctionBlock => EndKind::FunctionBlock,
            Self::KwEndFunction => EndKind::Function,
            Self::KwEndInterface => EndKind::Interface,
            Self::KwEndProgram => EndKind::Program,
            Self::KwEndType => EndKind::Type,
            Self::KwEndMethod => EndKind::Method,
            Self::KwEndAction => EndKind::Action,
            Self::KwEndVar => EndKind::Var,
            _ => return None,
        })
    }
}
