use crate::model::{
    AssignableMember, BaseEnumState, BaseSnapshot, CtorArg, CtorShape, EnumItem, KeyMember,
    Settings, TypeIdent,
};
use serde::{Deserialize, Serialize};

///
/// EnumModel
///
/// The finalized model of one declaration. Rebuilt on every pass, never
/// mutated in place; two models with identical field values are
/// indistinguishable, which is what the cache relies on.
///
/// `base` and `ctor_shapes` start out `None` after extraction and are
/// filled by the base-chain resolver; `derived_types` is filled from the
/// registrar's deduplicated facts.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EnumModel {
    pub ident: TypeIdent,
    pub key: KeyMember,
    pub items: Vec<EnumItem>,
    pub members: Vec<AssignableMember>,
    pub settings: Settings,
    pub base_path: Option<String>,
    pub base: Option<BaseEnumState>,
    pub ctor_shapes: Option<Vec<CtorShape>>,
    // registrar facts; no emitter reads these, they feed the cache
    // fingerprint so a new derivation re-emits the base
    pub derived_types: Vec<String>,
    pub generic_subtypes: Vec<String>,
}

impl EnumModel {
    /// The own-level constructor arguments: key first, then every member,
    /// in declaration order.
    #[must_use]
    pub fn own_ctor_args(&self) -> Vec<CtorArg> {
        let mut args = vec![CtorArg::new(&self.key.name, &self.key.ty)];
        args.extend(
            self.members
                .iter()
                .map(|member| CtorArg::new(&member.name, &member.ty)),
        );

        args
    }

    /// Project this model into the snapshot a derived enum (or another
    /// compilation) consumes. Requires resolved constructor shapes.
    #[must_use]
    pub fn snapshot(&self) -> BaseSnapshot {
        BaseSnapshot {
            ident: self.ident.clone(),
            key: self.key.clone(),
            settings: self.settings.clone(),
            item_idents: self.items.iter().map(|item| item.ident.clone()).collect(),
            ctor_shapes: self
                .ctor_shapes
                .clone()
                .unwrap_or_else(|| vec![CtorShape::new(self.own_ctor_args())]),
        }
    }
}
