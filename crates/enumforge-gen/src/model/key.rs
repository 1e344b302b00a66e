use serde::{Deserialize, Serialize};

///
/// KeyMember
///
/// The member a smart enum is indexed by. `nullable` records an `Option`
/// key type; such models are excluded after extraction (key members must
/// never be nullable), the flag exists so the driver can tell.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyMember {
    pub name: String,
    pub ty: String,
    pub case_insensitive: bool,
    pub nullable: bool,
}

impl KeyMember {
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.ty == "String"
    }

    /// Keys with a scalar type are passed by value in generated accessors.
    #[must_use]
    pub fn is_copy(&self) -> bool {
        matches!(
            self.ty.as_str(),
            "bool" | "char" | "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16"
                | "u32" | "u64" | "u128" | "usize"
        )
    }
}
