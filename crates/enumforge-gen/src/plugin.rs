use crate::model::EnumModel;
use proc_macro2::TokenStream;

///
/// ModelProjection
///
/// The stable view handed to collaborating plugins: identity, key shape,
/// validity flag, and the per-member serialization overrides. Always built
/// from a finalized, post-cache model, so a plugin can never observe a
/// half-resolved declaration or trigger re-extraction.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModelProjection {
    pub type_fqn: String,
    pub namespace: String,
    pub name: String,
    pub key_name: String,
    pub key_ty: String,
    pub validatable: bool,
    pub members: Vec<MemberProjection>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberProjection {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub skip_equality: bool,
    pub rename: Option<String>,
}

impl ModelProjection {
    #[must_use]
    pub fn of(model: &EnumModel) -> Self {
        Self {
            type_fqn: model.ident.fqn(),
            namespace: model.ident.namespace.clone(),
            name: model.ident.name.clone(),
            key_name: model.key.name.clone(),
            key_ty: model.key.ty.clone(),
            validatable: model.settings.validatable,
            members: model
                .members
                .iter()
                .map(|member| MemberProjection {
                    name: member.name.clone(),
                    ty: member.ty.clone(),
                    optional: member.optional,
                    skip_equality: member.skip_equality,
                    rename: member.rename.clone(),
                })
                .collect(),
        }
    }
}

///
/// FragmentPlugin
///
/// A collaborating generator. Each registered plugin may contribute one
/// extra fragment per model, appended verbatim after the core output.
///

pub trait FragmentPlugin {
    fn name(&self) -> &'static str;

    fn contribute(&self, projection: &ModelProjection) -> Option<TokenStream>;
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::model::{AssignableMember, KeyMember, Settings, TypeIdent};

    #[test]
    fn projection_carries_identity_and_member_overrides() {
        let model = EnumModel {
            ident: TypeIdent::new("palette", "Color"),
            key: KeyMember {
                name: "code".to_string(),
                ty: "String".to_string(),
                case_insensitive: true,
                nullable: false,
            },
            items: Vec::new(),
            members: vec![AssignableMember {
                name: "hex".to_string(),
                ty: "String".to_string(),
                optional: false,
                skip_equality: true,
                rename: Some("hexCode".to_string()),
            }],
            settings: Settings::default(),
            base_path: None,
            base: None,
            ctor_shapes: None,
            derived_types: Vec::new(),
            generic_subtypes: Vec::new(),
        };

        let projection = ModelProjection::of(&model);

        assert_eq!(projection.type_fqn, "palette::Color");
        assert_eq!(projection.key_name, "code");
        assert!(!projection.validatable);
        assert!(projection.members[0].skip_equality);
        assert_eq!(projection.members[0].rename.as_deref(), Some("hexCode"));
    }
}
