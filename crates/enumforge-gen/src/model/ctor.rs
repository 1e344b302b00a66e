use serde::{Deserialize, Serialize};

///
/// CtorArg
///
/// One constructor argument: name plus fully-qualified type text (an
/// `Option<...>` type text encodes nullability). When base constructor
/// shapes are deduplicated, only the types participate.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CtorArg {
    pub name: String,
    pub ty: String,
}

impl CtorArg {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

///
/// CtorShape
///
/// One ordered constructor argument list. A derived enum carries one shape
/// per distinct base shape, with its own-level arguments appended.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct CtorShape {
    pub args: Vec<CtorArg>,
}

impl CtorShape {
    #[must_use]
    pub fn new(args: Vec<CtorArg>) -> Self {
        Self { args }
    }

    /// The shape's identity for deduplication: argument types only.
    #[must_use]
    pub fn type_signature(&self) -> Vec<&str> {
        self.args.iter().map(|arg| arg.ty.as_str()).collect()
    }
}
