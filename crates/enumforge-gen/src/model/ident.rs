use serde::{Deserialize, Serialize};

///
/// TypeIdent
///
/// Stable identity of a declared type: module path plus type name. The
/// fully-qualified form is the cache key and the artifact key.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct TypeIdent {
    pub namespace: String,
    pub name: String,
}

impl TypeIdent {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// `namespace::Name`, or just `Name` for the crate root.
    #[must_use]
    pub fn fqn(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }

    /// Leading-colon form for use inside generated code.
    #[must_use]
    pub fn global_path(&self) -> String {
        format!("::{}", self.fqn())
    }
}
