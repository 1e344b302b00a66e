use crate::emit::helper::{parse_type, type_ident};
use crate::model::EnumModel;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the type definition: key member, assignable members, the embedded
/// base (when the chain resolved one), the validity flag for validatable
/// enums, and the cached instance hash.
pub fn generate(model: &EnumModel) -> TokenStream {
    let ident = type_ident(model);

    let mut fields = Vec::new();
    if let Some(base) = &model.base {
        let base_ty = parse_type(&base.snapshot().ident.global_path());
        fields.push(quote!(base: #base_ty));
    }

    let key_name = format_ident!("{}", model.key.name);
    let key_ty = parse_type(&model.key.ty);
    fields.push(quote!(#key_name: #key_ty));

    for member in &model.members {
        let name = format_ident!("{}", member.name);
        let ty = parse_type(&member.ty);
        fields.push(quote!(#name: #ty));
    }

    if model.settings.validatable {
        fields.push(quote!(valid: bool));
    }
    fields.push(quote!(hash: u64));

    // validatable enums manufacture owned instances, so they must clone
    let derive = if model.settings.validatable {
        quote!(#[derive(Clone, Debug)])
    } else {
        quote!(#[derive(Debug)])
    };

    quote! {
        #derive
        pub struct #ident {
            #(#fields),*
        }
    }
}
