use crate::model::OperatorLevel;
use darling::FromMeta;

///
/// SmartEnumMeta
///
/// The `#[smart_enum(...)]` attribute surface, parsed with darling. This is
/// the only place declaration syntax is interpreted; everything downstream
/// works on the pure-data model.
///

#[derive(Debug, FromMeta)]
pub struct SmartEnumMeta {
    pub key: KeyMeta,

    #[darling(default, multiple, rename = "member")]
    pub members: Vec<MemberMeta>,

    #[darling(default)]
    pub ctor: Option<CtorMeta>,

    #[darling(default, multiple, rename = "item")]
    pub items: Vec<ItemMeta>,

    #[darling(default)]
    pub validatable: bool,

    #[darling(default)]
    pub invalid_factory: Option<String>,

    #[darling(default)]
    pub base: Option<String>,

    #[darling(default)]
    pub skip_display: bool,

    #[darling(default)]
    pub operators: OperatorsMeta,

    #[darling(default, multiple, rename = "subtype")]
    pub subtypes: Vec<SubtypeMeta>,
}

///
/// KeyMeta
///

#[derive(Debug, FromMeta)]
pub struct KeyMeta {
    #[darling(default = KeyMeta::default_name)]
    pub name: String,

    pub ty: String,

    #[darling(default)]
    pub case_insensitive: bool,
}

impl KeyMeta {
    fn default_name() -> String {
        "key".to_string()
    }
}

///
/// MemberMeta
///

#[derive(Debug, FromMeta)]
pub struct MemberMeta {
    pub name: String,
    pub ty: String,

    #[darling(default)]
    pub skip_equality: bool,

    #[darling(default)]
    pub rename: Option<String>,
}

///
/// CtorMeta
///
/// The separately-declared constructor argument name list the declaration
/// must carry; extraction fails without it.
///

#[derive(Debug, FromMeta)]
pub struct CtorMeta {
    pub args: String,
}

///
/// ItemMeta
///

#[derive(Debug, FromMeta)]
pub struct ItemMeta {
    pub ident: String,
    pub key: String,

    #[darling(default, multiple, rename = "arg")]
    pub args: Vec<String>,
}

///
/// OperatorsMeta
///

#[derive(Debug, Default, FromMeta)]
pub struct OperatorsMeta {
    #[darling(default)]
    pub equality: Option<OperatorLevel>,

    #[darling(default)]
    pub comparison: Option<OperatorLevel>,
}

///
/// SubtypeMeta
///
/// A nested subtype declaration; `generic` ones are tracked by the
/// registrar, which discovers their concrete instantiations.
///

#[derive(Debug, FromMeta)]
pub struct SubtypeMeta {
    pub ident: String,

    #[darling(default)]
    pub generic: bool,
}
