use crate::emit::helper::{call_arg, items_static, table_static, type_ident};
use crate::model::{CtorShape, EnumModel};
use proc_macro2::TokenStream;
use quote::quote;

/// Emit the two lazy statics backing an enum: the item vector, constructed
/// in declaration order through the first constructor tier, and the lookup
/// table built over it. A malformed table is a declaration bug, so the
/// builder's error panics with its message on first touch.
pub fn generate(model: &EnumModel) -> TokenStream {
    let ident = type_ident(model);
    let items_name = items_static(model);
    let table_name = table_static(model);

    let shape = first_shape(model);
    let constructions: Vec<TokenStream> = model
        .items
        .iter()
        .map(|item| {
            let call_args = item_call_args(model, &shape, &item.key, &item.args);
            quote!(#ident::new(#(#call_args),*))
        })
        .collect();

    let idents: Vec<&str> = model.items.iter().map(|item| item.ident.as_str()).collect();
    let normalize = if model.key.case_insensitive && model.key.is_string() {
        quote!(|key: &::std::string::String| key.to_lowercase())
    } else {
        quote!(|key| ::std::clone::Clone::clone(key))
    };
    let validity = if model.settings.validatable {
        quote!(::std::option::Option::Some(|item: &#ident| item.valid))
    } else {
        quote!(::std::option::Option::None)
    };

    quote! {
        static #items_name: ::std::sync::LazyLock<::std::vec::Vec<#ident>> =
            ::std::sync::LazyLock::new(|| ::std::vec![#(#constructions),*]);

        static #table_name: ::std::sync::LazyLock<::enumforge::core::table::ItemTable<#ident>> =
            ::std::sync::LazyLock::new(|| {
                match ::enumforge::core::table::ItemTable::build(
                    ::std::sync::LazyLock::force(&#items_name).as_slice(),
                    &[#(#idents),*],
                    #normalize,
                    #validity,
                ) {
                    Ok(table) => table,
                    Err(err) => ::std::panic!("{err}"),
                }
            });
    }
}

fn first_shape(model: &EnumModel) -> CtorShape {
    model
        .ctor_shapes
        .as_ref()
        .and_then(|shapes| shapes.first().cloned())
        .unwrap_or_else(|| CtorShape::new(model.own_ctor_args()))
}

/// Order a declared item's argument expressions along the constructor
/// shape: supplied args fill every slot except the key's, which takes the
/// item's declared key expression.
fn item_call_args(
    model: &EnumModel,
    shape: &CtorShape,
    key_expr: &str,
    args: &[String],
) -> Vec<TokenStream> {
    let key_slot = shape.args.len() - (1 + model.members.len());
    let mut supplied = args.iter();

    shape
        .args
        .iter()
        .enumerate()
        .map(|(slot, arg)| {
            if slot == key_slot {
                call_arg(&arg.ty, key_expr)
            } else {
                let expr = supplied
                    .next()
                    .expect("item argument count was validated before synthesis");
                call_arg(&arg.ty, expr)
            }
        })
        .collect()
}
