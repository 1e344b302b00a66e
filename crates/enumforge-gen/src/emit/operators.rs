use crate::emit::helper::{parse_type, type_ident};
use crate::model::{EnumModel, OperatorLevel};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the operator surface selected by the declaration: `Display` over the
/// key unless suppressed, ordering when the comparison level asks for it,
/// and direct key-operand overloads at the `KeyOverloads` level.
pub fn generate(model: &EnumModel) -> TokenStream {
    let ident = type_ident(model);
    let key_name = format_ident!("{}", model.key.name);
    let key_ty = parse_type(&model.key.ty);

    let mut impls = Vec::new();

    if !model.settings.skip_display {
        impls.push(quote! {
            impl ::std::fmt::Display for #ident {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    write!(f, "{}", self.#key_name)
                }
            }
        });
    }

    if model.settings.comparison >= OperatorLevel::Default {
        // ordering agrees with equality: validatable instances compare the
        // key first and break ties on validity
        let cmp_body = if model.settings.validatable {
            quote! {
                (&self.#key_name, self.valid).cmp(&(&other.#key_name, other.valid))
            }
        } else {
            quote!(self.#key_name.cmp(&other.#key_name))
        };

        impls.push(quote! {
            impl ::std::cmp::Ord for #ident {
                fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                    #cmp_body
                }
            }

            impl ::std::cmp::PartialOrd for #ident {
                fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                    ::std::option::Option::Some(self.cmp(other))
                }
            }
        });
    }

    if model.settings.equality == OperatorLevel::KeyOverloads {
        let eq_body = if model.key.case_insensitive && model.key.is_string() {
            quote!(self.#key_name.to_lowercase() == other.to_lowercase())
        } else {
            quote!(self.#key_name == *other)
        };

        impls.push(quote! {
            impl ::std::cmp::PartialEq<#key_ty> for #ident {
                fn eq(&self, other: &#key_ty) -> bool {
                    #eq_body
                }
            }
        });
    }

    if model.settings.comparison == OperatorLevel::KeyOverloads {
        impls.push(quote! {
            impl ::std::cmp::PartialOrd<#key_ty> for #ident {
                fn partial_cmp(&self, other: &#key_ty) -> ::std::option::Option<::std::cmp::Ordering> {
                    self.#key_name.partial_cmp(other)
                }
            }
        });
    }

    quote!(#(#impls)*)
}
