pub mod accessors;
pub mod ctors;
pub mod dispatch;
pub mod equality;
pub mod helper;
pub mod operators;
pub mod table;
pub mod traits_impl;
pub mod type_def;

use crate::model::EnumModel;
use proc_macro2::TokenStream;
use quote::quote;

///
/// Code Synthesizer
///
/// Turns a resolved model into the full declaration set for one smart enum:
/// type definition, backing statics, constructor tiers, accessors, trait
/// impls, identity and operator impls, and the dispatch family. Plugin
/// fragments are appended verbatim after the core output.
///

pub fn synthesize(model: &EnumModel, fragments: &[TokenStream]) -> TokenStream {
    let type_def = type_def::generate(model);
    let table = table::generate(model);
    let ctors = ctors::generate(model);
    let accessors = accessors::generate(model);
    let traits_impl = traits_impl::generate(model);
    let equality = equality::generate(model);
    let operators = operators::generate(model);
    let dispatch = dispatch::generate(model);

    quote! {
        #type_def
        #table
        #ctors
        #accessors
        #traits_impl
        #equality
        #operators
        #dispatch
        #(#fragments)*
    }
}

/// Render a synthesized token stream as artifact text.
pub fn render(tokens: &TokenStream) -> String {
    format!("// @generated\n\n{tokens}\n")
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::model::{
        AssignableMember, CtorArg, CtorShape, EnumItem, EnumModel, KeyMember, OperatorLevel,
        Settings, TypeIdent,
    };

    fn color_model() -> EnumModel {
        let mut model = EnumModel {
            ident: TypeIdent::new("palette", "Color"),
            key: KeyMember {
                name: "code".to_string(),
                ty: "String".to_string(),
                case_insensitive: true,
                nullable: false,
            },
            items: vec![
                EnumItem {
                    ident: "Red".to_string(),
                    arg_name: "red".to_string(),
                    key: "\"R\"".to_string(),
                    args: vec!["\"#FF0000\"".to_string()],
                },
                EnumItem {
                    ident: "Green".to_string(),
                    arg_name: "green".to_string(),
                    key: "\"G\"".to_string(),
                    args: vec!["\"#00FF00\"".to_string()],
                },
            ],
            members: vec![AssignableMember {
                name: "hex".to_string(),
                ty: "String".to_string(),
                optional: false,
                skip_equality: false,
                rename: None,
            }],
            settings: Settings::default(),
            base_path: None,
            base: None,
            ctor_shapes: None,
            derived_types: Vec::new(),
            generic_subtypes: Vec::new(),
        };
        model.ctor_shapes = Some(vec![CtorShape::new(model.own_ctor_args())]);

        model
    }

    fn status_model() -> EnumModel {
        let mut model = EnumModel {
            ident: TypeIdent::new("flow", "Status"),
            key: KeyMember {
                name: "key".to_string(),
                ty: "i32".to_string(),
                case_insensitive: false,
                nullable: false,
            },
            items: vec![EnumItem {
                ident: "Active".to_string(),
                arg_name: "active".to_string(),
                key: "1".to_string(),
                args: Vec::new(),
            }],
            members: Vec::new(),
            settings: Settings::new(
                true,
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
        };
        model.ctor_shapes = Some(vec![CtorShape::new(model.own_ctor_args())]);

        model
    }

    #[test]
    fn color_output_uses_pointer_identity_and_normalized_lookup() {
        let output = synthesize(&color_model(), &[]).to_string();

        assert!(output.contains("pub struct Color"));
        assert!(output.contains("__COLOR_ITEMS"));
        assert!(output.contains("__COLOR_TABLE"));
        assert!(output.contains("ptr :: eq"));
        assert!(output.contains("to_lowercase"));
        // singleton sets never clone
        assert!(!output.contains("__new_with_validity"));
        assert!(!output.contains("derive (Clone"));
    }

    #[test]
    fn color_items_are_constructed_in_declaration_order() {
        let output = synthesize(&color_model(), &[]).to_string();

        let red = output.find("\"#FF0000\"").unwrap();
        let green = output.find("\"#00FF00\"").unwrap();
        assert!(red < green);
        assert!(output.contains("String :: from (\"R\")"));
    }

    #[test]
    fn validatable_output_carries_the_validity_tier_and_value_equality() {
        let output = synthesize(&status_model(), &[]).to_string();

        assert!(output.contains("__new_with_validity"));
        assert!(output.contains("valid : bool"));
        assert!(output.contains("fn __invalid"));
        assert!(output.contains("self . valid == other . valid"));
        assert!(output.contains("get_or_invalid"));
        assert!(!output.contains("ptr :: eq"));
    }

    #[test]
    fn dispatch_parameters_follow_declaration_order() {
        let output = synthesize(&color_model(), &[]).to_string();

        let map = output.find("pub fn map <").unwrap();
        let red = output[map..].find("red").unwrap();
        let green = output[map..].find("green").unwrap();
        assert!(red < green);
        assert!(output.contains("no map branch matched"));
        assert!(output.contains("no switch branch matched"));
        // the key is Debug-formatted; Display is not in the key bounds
        assert!(output.contains("with key '{:?}'"));
        assert!(!output.contains("with key '{}'"));
    }

    #[test]
    fn cached_hash_replays_through_the_hasher() {
        let output = synthesize(&status_model(), &[]).to_string();

        assert!(output.contains("write_u64 (self . hash)"));
        assert!(output.contains("instance_hash"));
    }

    #[test]
    fn plugin_fragments_are_appended_after_core_output() {
        let fragment = quote!(impl Color { pub fn extra() {} });
        let output = synthesize(&color_model(), &[fragment]).to_string();

        let dispatch = output.find("no switch branch matched").unwrap();
        let extra = output.find("pub fn extra").unwrap();
        assert!(dispatch < extra);
    }

    #[test]
    fn render_marks_the_artifact_generated() {
        let rendered = render(&synthesize(&color_model(), &[]));

        assert!(rendered.starts_with("// @generated\n"));
    }
}
