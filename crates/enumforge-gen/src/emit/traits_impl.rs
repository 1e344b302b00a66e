use crate::emit::helper::{items_static, parse_expr, parse_type, table_static, type_ident};
use crate::model::EnumModel;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the trait impls wiring the type into the runtime: `SmartEnum` for
/// every model, `ValidatableEnum` on top when the declaration asked for it.
pub fn generate(model: &EnumModel) -> TokenStream {
    let ident = type_ident(model);
    let key_ty = parse_type(&model.key.ty);
    let key_name = format_ident!("{}", model.key.name);
    let fqn = model.ident.fqn();
    let items_name = items_static(model);
    let table_name = table_static(model);

    let smart = quote! {
        impl ::enumforge::core::traits::SmartEnum for #ident {
            type Key = #key_ty;

            const NAME: &'static str = #fqn;

            fn items() -> &'static [Self] {
                ::std::sync::LazyLock::force(&#items_name).as_slice()
            }

            fn table() -> &'static ::enumforge::core::table::ItemTable<Self> {
                ::std::sync::LazyLock::force(&#table_name)
            }

            fn key(&self) -> &#key_ty {
                &self.#key_name
            }
        }
    };

    if !model.settings.validatable {
        return smart;
    }

    // a declared factory replaces the synthesized default-filled instance
    let manufacture = if let Some(factory) = &model.settings.invalid_factory {
        let factory = parse_expr(factory);
        quote!(#factory(key))
    } else {
        quote!(Self::__invalid(key))
    };

    quote! {
        #smart

        impl ::enumforge::core::traits::ValidatableEnum for #ident {
            fn is_valid(&self) -> bool {
                self.valid
            }

            fn create_invalid(key: #key_ty) -> Self {
                #manufacture
            }
        }
    }
}
