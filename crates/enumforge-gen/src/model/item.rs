use serde::{Deserialize, Serialize};

///
/// EnumItem
///
/// One declared singleton. `key` and `args` hold the literal expression
/// text from the declaration; `arg_name` is the sanitized, collision-safe
/// parameter identifier used by the generated dispatch surface.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EnumItem {
    pub ident: String,
    pub arg_name: String,
    pub key: String,
    pub args: Vec<String>,
}
