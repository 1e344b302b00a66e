use std::fmt;

///
/// Diagnostic
///
/// A generation-blocking extraction or resolution failure, scoped to exactly
/// one type. Other types in the same pass are unaffected; candidate
/// rejection (wrong shape, no marker) is a silent skip, never a diagnostic.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub type_fqn: String,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn new(type_fqn: impl Into<String>, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            type_fqn: type_fqn.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.type_fqn, self.kind, self.message)
    }
}

///
/// DiagnosticKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum DiagnosticKind {
    MalformedAttribute,
    MalformedItem,
    MissingCtor,
    UnknownBase,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MalformedAttribute => "malformed_attribute",
            Self::MalformedItem => "malformed_item",
            Self::MissingCtor => "missing_ctor",
            Self::UnknownBase => "unknown_base",
        };
        write!(f, "{label}")
    }
}
