use crate::emit::helper::type_ident;
use crate::model::EnumModel;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the equality and hash impls.
///
/// Non-validatable enums are singleton sets, so identity is pointer
/// equality. Validatable enums hand out owned clones and manufactured
/// instances, so equality is the (validity, key) pair. Both hash by
/// replaying the instance hash cached at construction, which agrees with
/// equality in either scheme.
pub fn generate(model: &EnumModel) -> TokenStream {
    let ident = type_ident(model);
    let key_name = format_ident!("{}", model.key.name);

    let eq_body = if model.settings.validatable {
        quote!(self.valid == other.valid && self.#key_name == other.#key_name)
    } else {
        quote!(::std::ptr::eq(self, other))
    };

    quote! {
        impl ::std::cmp::PartialEq for #ident {
            fn eq(&self, other: &Self) -> bool {
                #eq_body
            }
        }

        impl ::std::cmp::Eq for #ident {}

        impl ::std::hash::Hash for #ident {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_u64(self.hash);
            }
        }
    }
}
