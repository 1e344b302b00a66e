use serde::{Deserialize, Serialize};

///
/// AssignableMember
///
/// An instance member that participates in the generated type alongside the
/// key. `skip_equality` and `rename` carry the per-member overrides a
/// serialization plugin may consume through the model projection.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AssignableMember {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub skip_equality: bool,
    pub rename: Option<String>,
}
