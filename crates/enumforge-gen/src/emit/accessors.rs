use crate::emit::helper::{parse_type, type_ident};
use crate::model::EnumModel;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the static accessor surface: one function per declared item, the
/// item slice, the key lookups, and a getter per data member. Validatable
/// enums swap the failing lookups for the manufacture-on-miss family.
pub fn generate(model: &EnumModel) -> TokenStream {
    let ident = type_ident(model);

    let mut fns = Vec::new();

    for (index, item) in model.items.iter().enumerate() {
        let name = format_ident!("{}", item.arg_name);
        fns.push(quote! {
            pub fn #name() -> &'static Self {
                &<Self as ::enumforge::core::traits::SmartEnum>::items()[#index]
            }
        });
    }

    fns.push(quote! {
        pub fn items() -> &'static [Self] {
            <Self as ::enumforge::core::traits::SmartEnum>::items()
        }
    });

    fns.push(lookups(model));
    fns.push(getters(model));

    quote! {
        impl #ident {
            #(#fns)*
        }
    }
}

fn lookups(model: &EnumModel) -> TokenStream {
    let key_ty = parse_type(&model.key.ty);

    if model.settings.validatable {
        // validatable lookups take the key by value so a miss can hand it
        // to the invalid-item factory
        return quote! {
            pub fn get(key: #key_ty) -> Self {
                ::enumforge::core::lookup::get_or_invalid(key)
            }

            pub fn try_get(key: #key_ty) -> (bool, Self) {
                ::enumforge::core::lookup::try_get_or_invalid(key)
            }

            pub fn validate(
                key: #key_ty,
            ) -> ::std::result::Result<Self, ::enumforge::core::error::LookupError> {
                ::enumforge::core::lookup::validate(key)
            }
        };
    }

    if model.key.is_copy() {
        quote! {
            pub fn get(
                key: #key_ty,
            ) -> ::std::result::Result<&'static Self, ::enumforge::core::error::LookupError>
            {
                ::enumforge::core::lookup::get(&key)
            }

            pub fn try_get(key: #key_ty) -> ::std::option::Option<&'static Self> {
                ::enumforge::core::lookup::try_get(&key)
            }
        }
    } else {
        quote! {
            pub fn get(
                key: &#key_ty,
            ) -> ::std::result::Result<&'static Self, ::enumforge::core::error::LookupError>
            {
                ::enumforge::core::lookup::get(key)
            }

            pub fn try_get(key: &#key_ty) -> ::std::option::Option<&'static Self> {
                ::enumforge::core::lookup::try_get(key)
            }
        }
    }
}

fn getters(model: &EnumModel) -> TokenStream {
    let mut fns = vec![getter(&model.key.name, &model.key.ty)];
    for member in &model.members {
        fns.push(getter(&member.name, &member.ty));
    }

    quote!(#(#fns)*)
}

fn getter(name: &str, ty: &str) -> TokenStream {
    let name = format_ident!("{name}");

    if ty == "String" {
        quote! {
            pub fn #name(&self) -> &str {
                &self.#name
            }
        }
    } else if is_scalar(ty) {
        let ty = parse_type(ty);
        quote! {
            pub const fn #name(&self) -> #ty {
                self.#name
            }
        }
    } else {
        let ty = parse_type(ty);
        quote! {
            pub fn #name(&self) -> &#ty {
                &self.#name
            }
        }
    }
}

fn is_scalar(ty: &str) -> bool {
    matches!(
        ty,
        "bool" | "char" | "f32" | "f64" | "i8" | "i16" | "i32" | "i64" | "i128" | "isize"
            | "u8" | "u16" | "u32" | "u64" | "u128" | "usize"
    )
}
