//! Element kinds and the static keyword tables.
//!
//! The keyword vocabulary is closed: anything outside these tables is body
//! text as far as segmentation is concerned. Extending the vocabulary means
//! adding a variant here and a matching token in the lexer.

use std::fmt;

/// The opening keyword that created an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    /// `FUNCTION_BLOCK name`
    FunctionBlock,
    /// `FUNCTION name`
    Function,
    /// `INTERFACE name`
    Interface,
    /// `PROGRAM name`
    Program,
    /// `TYPE name`
    Type,
    /// `METHOD name`
    Method,
    /// `ACTION name`
    Action,
    /// `TRANSITION` - never scanned, only carried by host objects.
    Transition,
    /// `VAR`
    Var,
    /// `VAR_GLOBAL`
    VarGlobal,
    /// `VAR_INPUT`
    VarInput,
    /// `VAR_OUTPUT`
    VarOutput,
    /// `VAR_TEMP`
    VarTemp,
    /// `VAR_IN_OUT`
    VarInOut,
    /// `VAR_EXTERNAL`
    VarExternal,
    /// `VAR_STAT`
    VarStat,
    /// `VAR_INST`
    VarInst,
    /// `VAR_CONFIG`
    VarConfig,
    /// `VAR_ACCESS`
    VarAccess,
}

/// A closing keyword.
///
/// Every variable section shares `END_VAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EndKind {
    /// `END_FUNCTION_BLOCK`
    FunctionBlock,
    /// `END_FUNCTION`
    Function,
    /// `END_INTERFACE`
    Interface,
    /// `END_PROGRAM`
    Program,
    /// `END_TYPE`
    Type,
    /// `END_METHOD`
    Method,
    /// `END_ACTION`
    Action,
    /// `END_TRANSITION`
    Transition,
    /// `END_VAR`
    Var,
}

/// What a scanned delimiter does to the nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterKind {
    /// Opens an element of the given kind.
    Open(ElementKind),
    /// Closes the innermost element whose closing kind matches.
    Close(EndKind),
}

/// Host-side artifact kinds an element maps to on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectKind {
    /// Program organization unit (program, function, function block).
    Pou,
    /// Interface.
    Interface,
    /// Data unit type (`TYPE ... END_TYPE`).
    Dut,
    /// Global variable list.
    Gvl,
    /// Method of a POU or interface.
    Method,
    /// Action of a POU.
    Action,
}

const KEYWORDS: &[(&str, ElementKind)] = &[
    ("FUNCTION_BLOCK", ElementKind::FunctionBlock),
    ("FUNCTION", ElementKind::Function),
    ("INTERFACE", ElementKind::Interface),
    ("PROGRAM", ElementKind::Program),
    ("TYPE", ElementKind::Type),
    ("METHOD", ElementKind::Method),
    ("ACTION", ElementKind::Action),
    ("TRANSITION", ElementKind::Transition),
    ("VAR", ElementKind::Var),
    ("VAR_GLOBAL", ElementKind::VarGlobal),
    ("VAR_INPUT", ElementKind::VarInput),
    ("VAR_OUTPUT", ElementKind::VarOutput),
    ("VAR_TEMP", ElementKind::VarTemp),
    ("VAR_IN_OUT", ElementKind::VarInOut),
    ("VAR_EXTERNAL", ElementKind::VarExternal),
    ("VAR_STAT", ElementKind::VarStat),
    ("VAR_INST", ElementKind::VarInst),
    ("VAR_CONFIG", ElementKind::VarConfig),
    ("VAR_ACCESS", ElementKind::VarAccess),
];

const END_KEYWORDS: &[(&str, EndKind)] = &[
    ("END_FUNCTION_BLOCK", EndKind::FunctionBlock),
    ("END_FUNCTION", EndKind::Function),
    ("END_INTERFACE", EndKind::Interface),
    ("END_PROGRAM", EndKind::Program),
    ("END_TYPE", EndKind::Type),
    ("END_METHOD", EndKind::Method),
    ("END_ACTION", EndKind::Action),
    ("END_TRANSITION", EndKind::Transition),
    ("END_VAR", EndKind::Var),
];

const OBJECT_SUFFIXES: &[(&str, ObjectKind)] = &[
    ("pou", ObjectKind::Pou),
    ("itf", ObjectKind::Interface),
    ("dut", ObjectKind::Dut),
    ("gvl", ObjectKind::Gvl),
    ("m", ObjectKind::Method),
    ("act", ObjectKind::Action),
];

impl ElementKind {
    /// Returns the keyword spelling, upper case.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("", |(keyword, _)| keyword)
    }

    /// Returns the closing keyword that terminates this element.
    #[must_use]
    pub fn closing(self) -> EndKind {
        match self {
            Self::FunctionBlock => EndKind::FunctionBlock,
            Self::Function => EndKind::Function,
            Self::Interface => EndKind::Interface,
            Self::Program => EndKind::Program,
            Self::Type => EndKind::Type,
            Self::Method => EndKind::Method,
            Self::Action => EndKind::Action,
            Self::Transition => EndKind::Transition,
            Self::Var
            | Self::VarGlobal
            | Self::VarInput
            | Self::VarOutput
            | Self::VarTemp
            | Self::VarInOut
            | Self::VarExternal
            | Self::VarStat
            | Self::VarInst
            | Self::VarConfig
            | Self::VarAccess => EndKind::Var,
        }
    }

    /// Returns `true` for `VAR` and every `VAR_*` section keyword.
    #[must_use]
    pub fn is_var_section(self) -> bool {
        self.closing() == EndKind::Var
    }

    /// Returns `true` if the keyword is followed by a name in source.
    #[must_use]
    pub fn is_named(self) -> bool {
        !self.is_var_section()
    }

    /// Returns `true` if the element's body is executable code whose
    /// closing line is regenerated on serialization.
    #[must_use]
    pub fn has_footer(self) -> bool {
        matches!(
            self,
            Self::FunctionBlock
                | Self::Function
                | Self::Interface
                | Self::Program
                | Self::Method
                | Self::Action
                | Self::Transition
        )
    }

    /// Returns `true` if the whole element is declaration text
    /// (type definitions and variable sections).
    #[must_use]
    pub fn is_declaration_only(self) -> bool {
        self == Self::Type || self.is_var_section()
    }

    /// Maps the element to the host artifact it is exported as.
    ///
    /// Variable sections other than `VAR_GLOBAL` are folded into their
    /// parent's declaration and have no artifact of their own.
    #[must_use]
    pub fn object_kind(self) -> Option<ObjectKind> {
        match self {
            Self::FunctionBlock | Self::Function | Self::Program => Some(ObjectKind::Pou),
            Self::Interface => Some(ObjectKind::Interface),
            Self::Type => Some(ObjectKind::Dut),
            Self::VarGlobal => Some(ObjectKind::Gvl),
            Self::Method => Some(ObjectKind::Method),
            Self::Action => Some(ObjectKind::Action),
            _ => None,
        }
    }
}

impl EndKind {
    /// Returns the keyword spelling, upper case.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        END_KEYWORDS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("", |(keyword, _)| keyword)
    }
}

impl ObjectKind {
    /// Short artifact suffix used by the export tooling (`pou`, `itf`, ...).
    #[must_use]
    pub fn suffix(self) -> &'static str {
        OBJECT_SUFFIXES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map_or("", |(suffix, _)| suffix)
    }

    /// Returns `true` if the artifact is never decomposed further.
    ///
    /// POUs and interfaces may own methods and actions and therefore become
    /// containers on export.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        !matches!(self, Self::Pou | Self::Interface)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for EndKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for DelimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(kind) => kind.fmt(f),
            Self::Close(kind) => kind.fmt(f),
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
