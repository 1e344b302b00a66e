use crate::emit::helper::type_ident;
use crate::model::EnumModel;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the exhaustive dispatch family, one parameter per declared item in
/// declaration order. Every form funnels through an if-chain over item
/// identity and panics with the designated no-branch message when handed an
/// instance outside the closed set.
///
/// `switch` branches lazily, `switch_with` threads a caller context value,
/// `map` selects an eagerly built value, and `map_with` hands the matched
/// instance itself to the branch.
pub fn generate(model: &EnumModel) -> TokenStream {
    let ident = type_ident(model);

    let arg_names: Vec<syn::Ident> = model
        .items
        .iter()
        .map(|item| format_ident!("{}", item.arg_name))
        .collect();
    let accessors = arg_names.clone();

    // the key type is only bound Debug, not Display
    let no_branch = |family: &str| {
        let message = format!(
            "no {family} branch matched the item of {{}} with key '{{:?}}'"
        );
        quote! {
            ::std::panic!(
                #message,
                <Self as ::enumforge::core::traits::SmartEnum>::NAME,
                <Self as ::enumforge::core::traits::SmartEnum>::key(self),
            )
        }
    };

    let switch_panic = no_branch("switch");
    let map_panic = no_branch("map");

    quote! {
        impl #ident {
            pub fn switch<R>(
                &self,
                #(#arg_names: impl ::std::ops::FnOnce() -> R),*
            ) -> R {
                #(if self == Self::#accessors() {
                    return #arg_names();
                })*

                #switch_panic
            }

            pub fn switch_with<C, R>(
                &self,
                context: C,
                #(#arg_names: impl ::std::ops::FnOnce(C) -> R),*
            ) -> R {
                #(if self == Self::#accessors() {
                    return #arg_names(context);
                })*

                #switch_panic
            }

            pub fn map<R>(&self, #(#arg_names: R),*) -> R {
                #(if self == Self::#accessors() {
                    return #arg_names;
                })*

                #map_panic
            }

            pub fn map_with<R>(
                &self,
                #(#arg_names: impl ::std::ops::FnOnce(&Self) -> R),*
            ) -> R {
                #(if self == Self::#accessors() {
                    return #arg_names(self);
                })*

                #map_panic
            }
        }
    }
}
