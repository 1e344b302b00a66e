use thiserror::Error as ThisError;

///
/// LookupError
///
/// Structured runtime error surfaced by generated accessors.
/// `UnknownKey` is the default lookup-miss path; the factory variants are
/// defensive checks around a user-supplied invalid-item hook and are only
/// reachable when that hook misbehaves.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum LookupError {
    #[error("invalid-item factory for {enum_name} returned key '{key}', which collides with a declared item")]
    FactoryKeyCollision { enum_name: String, key: String },

    #[error("invalid-item factory for {enum_name} returned an instance that reports a valid state")]
    FactoryReportedValid { enum_name: String },

    #[error("no item of {enum_name} has the identifier '{key}'")]
    UnknownKey { enum_name: String, key: String },
}

impl LookupError {
    pub fn unknown_key(enum_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            enum_name: enum_name.into(),
            key: key.into(),
        }
    }
}

///
/// TableError
///
/// Construction-time failure of an item table. Raised at first use of the
/// lazily built table, naming the offending items so the declaration can be
/// fixed without a debugger.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum TableError {
    #[error(
        "duplicate key in {enum_name}: items '{first}' and '{second}' share the key '{key}'"
    )]
    DuplicateKey {
        enum_name: String,
        first: String,
        second: String,
        key: String,
    },

    #[error("item '{ident}' of validatable enum {enum_name} reports an invalid state")]
    InvalidItem { enum_name: String, ident: String },
}
