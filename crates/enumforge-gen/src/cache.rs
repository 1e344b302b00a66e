use crate::model::EnumModel;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

///
/// Verdict
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Verdict {
    Changed,
    Unchanged,
}

///
/// ModelCache
///
/// The incremental layer: one fingerprint per fully-qualified type name.
/// A model whose fingerprint matches the previous pass is reported
/// `Unchanged` and skips synthesis entirely; passes rerun on every edit,
/// so this skip carries the whole incremental win.
///
/// Fingerprints are xxh3 over the model's structural `Hash`, which covers
/// every field in declaration order; models hold no live handles, so a
/// semantically identical declaration always fingerprints the same across
/// passes.
///

#[derive(Debug, Default)]
pub struct ModelCache {
    fingerprints: HashMap<String, u64>,
}

impl ModelCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `model` and report whether it differs from the previous pass.
    pub fn refresh(&mut self, model: &EnumModel) -> Verdict {
        let fingerprint = Self::fingerprint(model);

        match self.fingerprints.insert(model.ident.fqn(), fingerprint) {
            Some(previous) if previous == fingerprint => Verdict::Unchanged,
            _ => Verdict::Changed,
        }
    }

    #[must_use]
    pub fn fingerprint(model: &EnumModel) -> u64 {
        let mut hasher = Xxh3::new();
        model.hash(&mut hasher);
        hasher.finish()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fingerprints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fingerprints.is_empty()
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::model::{
        AssignableMember, EnumItem, KeyMember, OperatorLevel, Settings, TypeIdent,
    };
    use proptest::prelude::*;

    fn model(name: &str, validatable: bool, item_key: &str) -> EnumModel {
        EnumModel {
            ident: TypeIdent::new("demo", name),
            key: KeyMember {
                name: "key".to_string(),
                ty: "String".to_string(),
                case_insensitive: false,
                nullable: false,
            },
            items: vec![EnumItem {
                ident: "One".to_string(),
                arg_name: "one".to_string(),
                key: item_key.to_string(),
                args: Vec::new(),
            }],
            members: Vec::new(),
            settings: Settings::new(
                validatable,
                None,
                false,
                OperatorLevel::Default,
                OperatorLevel::Default,
            ),
            base_path: None,
            base: None,
            ctor_shapes: None,
            derived_types: Vec::new(),
            generic_subtypes: Vec::new(),
        }
    }

    #[test]
    fn first_sighting_is_changed_then_unchanged() {
        let mut cache = ModelCache::new();
        let m = model("Color", false, "\"R\"");

        assert_eq!(cache.refresh(&m), Verdict::Changed);
        assert_eq!(cache.refresh(&m), Verdict::Unchanged);

        // a rebuilt-but-identical model is still unchanged
        let rebuilt = model("Color", false, "\"R\"");
        assert_eq!(cache.refresh(&rebuilt), Verdict::Unchanged);
    }

    #[test]
    fn any_field_edit_flips_the_verdict() {
        let mut cache = ModelCache::new();
        cache.refresh(&model("Color", false, "\"R\""));

        assert_eq!(
            cache.refresh(&model("Color", true, "\"R\"")),
            Verdict::Changed
        );
        assert_eq!(
            cache.refresh(&model("Color", true, "\"G\"")),
            Verdict::Changed
        );
    }

    #[test]
    fn distinct_types_are_cached_independently() {
        let mut cache = ModelCache::new();

        assert_eq!(cache.refresh(&model("Color", false, "\"R\"")), Verdict::Changed);
        assert_eq!(cache.refresh(&model("Shade", false, "\"R\"")), Verdict::Changed);
        assert_eq!(cache.len(), 2);
    }

    proptest! {
        // the structural-equality contract: equal models always fingerprint
        // equal, whatever the field values are
        #[test]
        fn equal_models_fingerprint_equal(
            name in "[A-Z][a-zA-Z]{0,8}",
            validatable in any::<bool>(),
            item_key in "\"[a-z]{1,6}\"",
            optional in any::<bool>(),
        ) {
            let mut a = model(&name, validatable, &item_key);
            let mut b = model(&name, validatable, &item_key);
            a.members.push(AssignableMember {
                name: "extra".to_string(),
                ty: "String".to_string(),
                optional,
                skip_equality: false,
                rename: None,
            });
            b.members.push(AssignableMember {
                name: "extra".to_string(),
                ty: "String".to_string(),
                optional,
                skip_equality: false,
                rename: None,
            });

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(ModelCache::fingerprint(&a), ModelCache::fingerprint(&b));
        }
    }
}
