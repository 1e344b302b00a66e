use crate::model::{CtorShape, KeyMember, Settings, TypeIdent};
use serde::{Deserialize, Serialize};

///
/// BaseSnapshot
///
/// Everything a derived enum needs to know about its base: identity, key,
/// settings, item names, and constructor shapes. Always a copy, never a
/// live handle; the same snapshot type travels across the compilation
/// boundary as a JSON artifact.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct BaseSnapshot {
    pub ident: TypeIdent,
    pub key: KeyMember,
    pub settings: Settings,
    pub item_idents: Vec<String>,
    pub ctor_shapes: Vec<CtorShape>,
}

///
/// BaseEnumState
///
/// Closed two-variant union selected once at resolve time. Same-assembly
/// bases expose their internal validity-carrying constructor to derived
/// code; cross-assembly bases are restricted to their public surface.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum BaseEnumState {
    SameAssembly(BaseSnapshot),
    CrossAssembly(BaseSnapshot),
}

impl BaseEnumState {
    #[must_use]
    pub const fn snapshot(&self) -> &BaseSnapshot {
        match self {
            Self::SameAssembly(snapshot) | Self::CrossAssembly(snapshot) => snapshot,
        }
    }

    #[must_use]
    pub const fn is_same_assembly(&self) -> bool {
        matches!(self, Self::SameAssembly(_))
    }
}
