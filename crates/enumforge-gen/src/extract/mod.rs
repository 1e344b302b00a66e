mod meta;
mod sanitize;

pub use self::meta::*;
pub use self::sanitize::*;

use crate::{
    diagnostic::{Diagnostic, DiagnosticKind},
    model::{AssignableMember, EnumItem, EnumModel, KeyMember, Settings, TypeIdent},
};
use darling::FromMeta;

/// Name of the marker attribute.
pub const MARKER: &str = "smart_enum";

///
/// Outcome
///
/// The three-way result of looking at one type declaration: not a candidate
/// (silent skip), a finalized model, or a generation-blocking diagnostic
/// scoped to this one type.
///

#[derive(Debug)]
pub enum Outcome {
    Skip,
    Model(Box<EnumModel>),
    Error(Box<Diagnostic>),
}

impl Outcome {
    fn error(fqn: &TypeIdent, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self::Error(Box::new(Diagnostic::new(fqn.fqn(), kind, message)))
    }
}

/// Convert one struct declaration into a model, reject it silently, or fail
/// it with a scoped diagnostic.
///
/// The returned model has no resolved base state or constructor shapes;
/// those are filled by the resolver.
pub fn extract(namespace: &str, item: &syn::ItemStruct) -> Outcome {
    let Some(attr) = item.attrs.iter().find(|attr| attr.path().is_ident(MARKER)) else {
        return Outcome::Skip;
    };

    // candidate rejection: the construct is a non-generic unit struct
    if !item.generics.params.is_empty() {
        return Outcome::Skip;
    }
    if !matches!(item.fields, syn::Fields::Unit) {
        return Outcome::Skip;
    }

    let ident = TypeIdent::new(namespace, item.ident.to_string());

    let syn::Meta::List(meta_list) = &attr.meta else {
        return Outcome::error(
            &ident,
            DiagnosticKind::MalformedAttribute,
            "the smart_enum attribute requires an argument list",
        );
    };
    let nested = match darling::ast::NestedMeta::parse_meta_list(meta_list.tokens.clone()) {
        Ok(nested) => nested,
        Err(err) => {
            return Outcome::error(&ident, DiagnosticKind::MalformedAttribute, err.to_string());
        }
    };
    let meta = match SmartEnumMeta::from_list(&nested) {
        Ok(meta) => meta,
        Err(err) => {
            return Outcome::error(&ident, DiagnosticKind::MalformedAttribute, err.to_string());
        }
    };

    // an unresolvable key type is not this pipeline's error to report
    if syn::parse_str::<syn::Type>(&meta.key.ty).is_err() {
        return Outcome::Skip;
    }

    let key = KeyMember {
        name: meta.key.name.clone(),
        ty: meta.key.ty.clone(),
        case_insensitive: meta.key.case_insensitive,
        nullable: is_option(&meta.key.ty),
    };

    let members: Vec<AssignableMember> = meta
        .members
        .iter()
        .map(|member| AssignableMember {
            name: member.name.clone(),
            ty: member.ty.clone(),
            optional: is_option(&member.ty),
            skip_equality: member.skip_equality,
            rename: member.rename.clone(),
        })
        .collect();
    for member in &members {
        if syn::parse_str::<syn::Type>(&member.ty).is_err() {
            return Outcome::error(
                &ident,
                DiagnosticKind::MalformedAttribute,
                format!("member '{}' has an unparseable type '{}'", member.name, member.ty),
            );
        }
    }

    // the required constructor: its declared argument names must match the
    // key + member name list, in order
    let Some(ctor) = &meta.ctor else {
        return Outcome::error(
            &ident,
            DiagnosticKind::MissingCtor,
            "declaration carries no ctor(args = \"...\") entry; the required constructor is missing",
        );
    };
    let declared: Vec<&str> = ctor
        .args
        .split(',')
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .collect();
    let expected: Vec<&str> = std::iter::once(key.name.as_str())
        .chain(members.iter().map(|member| member.name.as_str()))
        .collect();
    if declared != expected {
        return Outcome::error(
            &ident,
            DiagnosticKind::MissingCtor,
            format!(
                "constructor arguments [{}] do not match the declared members [{}]",
                declared.join(", "),
                expected.join(", ")
            ),
        );
    }

    // items, in declaration order; arg names double as the per-item
    // accessor fns, so the rest of the generated surface is off limits
    let mut taken = reserved_names(
        std::iter::once(key.name.as_str()).chain(members.iter().map(|member| member.name.as_str())),
    );
    let mut items = Vec::with_capacity(meta.items.len());
    for item_meta in &meta.items {
        if let Err(message) = check_item(&key, &members, meta.base.is_some(), item_meta) {
            return Outcome::error(&ident, DiagnosticKind::MalformedItem, message);
        }

        items.push(EnumItem {
            ident: item_meta.ident.clone(),
            arg_name: sanitize_arg_name(&item_meta.ident, &mut taken),
            key: item_meta.key.clone(),
            args: item_meta.args.clone(),
        });
    }

    let settings = Settings::new(
        meta.validatable,
        meta.invalid_factory.clone(),
        meta.skip_display,
        meta.operators.equality.unwrap_or_default(),
        meta.operators.comparison.unwrap_or_default(),
    );

    // a derived validatable enum cannot default-fill an invalid instance
    // across its base; the declaration must name a factory
    if settings.validatable && meta.base.is_some() && settings.invalid_factory.is_none() {
        return Outcome::error(
            &ident,
            DiagnosticKind::MalformedAttribute,
            "a validatable declaration with a base must name an invalid_factory",
        );
    }

    let generic_subtypes = meta
        .subtypes
        .iter()
        .filter(|subtype| subtype.generic)
        .map(|subtype| subtype.ident.clone())
        .collect();

    Outcome::Model(Box::new(EnumModel {
        ident,
        key,
        items,
        members,
        settings,
        base_path: meta.base.clone(),
        base: None,
        ctor_shapes: None,
        derived_types: Vec::new(),
        generic_subtypes,
    }))
}

fn check_item(
    key: &KeyMember,
    members: &[AssignableMember],
    has_base: bool,
    item: &ItemMeta,
) -> Result<(), String> {
    let first = item.ident.chars().next();
    if !first.is_some_and(char::is_uppercase) {
        return Err(format!("item ident '{}' must be UpperCamelCase", item.ident));
    }

    let Ok(key_expr) = syn::parse_str::<syn::Expr>(&item.key) else {
        return Err(format!(
            "item '{}' has an unparseable key expression '{}'",
            item.ident, item.key
        ));
    };
    if key.is_string() && !matches!(&key_expr, syn::Expr::Lit(lit) if matches!(lit.lit, syn::Lit::Str(_)))
    {
        return Err(format!(
            "item '{}' requires a string literal key, got '{}'",
            item.ident, item.key
        ));
    }

    // items of a derived enum also fill the base constructor arguments,
    // which are unknown until the base chain resolves; the driver re-checks
    // the count against the merged shape
    if !has_base && item.args.len() != members.len() {
        return Err(format!(
            "item '{}' supplies {} argument(s), the declaration has {} member(s)",
            item.ident,
            item.args.len(),
            members.len()
        ));
    }
    for arg in &item.args {
        if syn::parse_str::<syn::Expr>(arg).is_err() {
            return Err(format!(
                "item '{}' has an unparseable argument expression '{arg}'",
                item.ident
            ));
        }
    }

    Ok(())
}

fn is_option(ty: &str) -> bool {
    let Ok(parsed) = syn::parse_str::<syn::Type>(ty) else {
        return false;
    };
    let syn::Type::Path(path) = parsed else {
        return false;
    };

    path.path
        .segments
        .last()
        .is_some_and(|segment| segment.ident == "Option")
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::model::OperatorLevel;

    fn parse(source: &str) -> syn::ItemStruct {
        syn::parse_str(source).expect("fixture parses")
    }

    fn extract_model(source: &str) -> EnumModel {
        match extract("demo", &parse(source)) {
            Outcome::Model(model) => *model,
            other => panic!("expected a model, got {other:?}"),
        }
    }

    fn extract_error(source: &str) -> Diagnostic {
        match extract("demo", &parse(source)) {
            Outcome::Error(diagnostic) => *diagnostic,
            other => panic!("expected a diagnostic, got {other:?}"),
        }
    }

    const COLOR: &str = r##"
        #[smart_enum(
            key(name = "code", ty = "String", case_insensitive),
            member(name = "hex", ty = "String"),
            ctor(args = "code, hex"),
            item(ident = "Red", key = "\"R\"", arg = "\"#FF0000\""),
            item(ident = "Green", key = "\"G\"", arg = "\"#00FF00\""),
        )]
        pub struct Color;
    "##;

    #[test]
    fn extracts_a_complete_model() {
        let model = extract_model(COLOR);

        assert_eq!(model.ident.fqn(), "demo::Color");
        assert_eq!(model.key.name, "code");
        assert!(model.key.case_insensitive);
        assert!(!model.key.nullable);
        assert_eq!(model.items.len(), 2);
        assert_eq!(model.items[0].arg_name, "red");
        assert_eq!(model.members.len(), 1);
        assert!(model.base.is_none());
        assert!(model.ctor_shapes.is_none());
    }

    #[test]
    fn unmarked_or_generic_declarations_are_skipped() {
        assert!(matches!(
            extract("demo", &parse("pub struct Plain;")),
            Outcome::Skip
        ));
        assert!(matches!(
            extract(
                "demo",
                &parse(
                    r#"#[smart_enum(key(ty = "String"), ctor(args = "key"))] pub struct Gen<T>;"#
                )
            ),
            Outcome::Skip
        ));
        assert!(matches!(
            extract(
                "demo",
                &parse(
                    r#"#[smart_enum(key(ty = "String"), ctor(args = "key"))] pub struct Shaped { a: u8 }"#
                )
            ),
            Outcome::Skip
        ));
    }

    #[test]
    fn unresolvable_key_type_is_a_silent_skip() {
        let source = r#"
            #[smart_enum(key(ty = "Not A Type"), ctor(args = "key"))]
            pub struct Odd;
        "#;

        assert!(matches!(extract("demo", &parse(source)), Outcome::Skip));
    }

    #[test]
    fn missing_ctor_is_a_scoped_diagnostic() {
        let source = r#"
            #[smart_enum(key(ty = "String"), item(ident = "One", key = "\"1\""))]
            pub struct NoCtor;
        "#;
        let diagnostic = extract_error(source);

        assert_eq!(diagnostic.kind, DiagnosticKind::MissingCtor);
        assert_eq!(diagnostic.type_fqn, "demo::NoCtor");
    }

    #[test]
    fn ctor_arg_mismatch_is_a_missing_ctor_diagnostic() {
        let source = r#"
            #[smart_enum(
                key(name = "code", ty = "String"),
                member(name = "hex", ty = "String"),
                ctor(args = "hex, code"),
            )]
            pub struct Swapped;
        "#;

        assert_eq!(extract_error(source).kind, DiagnosticKind::MissingCtor);
    }

    #[test]
    fn non_string_key_literal_for_a_string_key_fails() {
        let source = r#"
            #[smart_enum(
                key(ty = "String"),
                ctor(args = "key"),
                item(ident = "One", key = "1"),
            )]
            pub struct Mixed;
        "#;

        assert_eq!(extract_error(source).kind, DiagnosticKind::MalformedItem);
    }

    #[test]
    fn nullable_key_is_flagged_for_exclusion() {
        let source = r#"
            #[smart_enum(key(ty = "Option<String>"), ctor(args = "key"))]
            pub struct Maybe;
        "#;

        assert!(extract_model(source).key.nullable);
    }

    #[test]
    fn operator_levels_and_escalation_come_through() {
        let source = r#"
            #[smart_enum(
                key(ty = "i32"),
                ctor(args = "key"),
                operators(equality = "none", comparison = "key_overloads"),
            )]
            pub struct Ops;
        "#;
        let model = extract_model(source);

        assert_eq!(model.settings.equality, OperatorLevel::KeyOverloads);
        assert_eq!(model.settings.comparison, OperatorLevel::KeyOverloads);
    }

    #[test]
    fn derived_validatable_without_a_factory_is_rejected() {
        let source = r#"
            #[smart_enum(
                key(ty = "i32"),
                ctor(args = "key"),
                validatable,
                base = "demo::Base",
            )]
            pub struct NeedsFactory;
        "#;

        assert_eq!(
            extract_error(source).kind,
            DiagnosticKind::MalformedAttribute
        );
    }

    #[test]
    fn item_idents_shadowing_generated_fns_are_renamed() {
        let source = r#"
            #[smart_enum(
                key(name = "code", ty = "String"),
                ctor(args = "code"),
                item(ident = "Get", key = "\"g\""),
                item(ident = "Items", key = "\"i\""),
                item(ident = "Code", key = "\"c\""),
            )]
            pub struct Clash;
        "#;
        let model = extract_model(source);

        let names: Vec<&str> = model.items.iter().map(|item| item.arg_name.as_str()).collect();
        assert_eq!(names, vec!["get1", "items1", "code1"]);
    }

    #[test]
    fn generic_subtypes_are_recorded() {
        let source = r#"
            #[smart_enum(
                key(ty = "String"),
                ctor(args = "key"),
                subtype(ident = "Shade", generic),
                subtype(ident = "Fixed"),
            )]
            pub struct Sub;
        "#;
        let model = extract_model(source);

        assert_eq!(model.generic_subtypes, vec!["Shade".to_string()]);
    }
}
