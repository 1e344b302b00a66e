use crate::emit::helper::{
    ctor_ident, key_hash_expr, parse_type, type_ident, validity_ctor_ident,
};
use crate::model::{BaseSnapshot, CtorArg, CtorShape, EnumModel};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Emit the constructor tiers, one per merged shape. Validatable models
/// additionally get the internal validity-carrying tier and, when no factory
/// was declared, the default invalid-item constructor. Public tiers always
/// pass `valid = true`; only the `pub(crate)` tier accepts an explicit flag,
/// so nothing outside the declaring crate can manufacture a false validity.
pub fn generate(model: &EnumModel) -> TokenStream {
    let ident = type_ident(model);
    let shapes = model
        .ctor_shapes
        .clone()
        .unwrap_or_else(|| vec![CtorShape::new(model.own_ctor_args())]);

    let mut fns: Vec<TokenStream> = shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| ctor_tier(model, index, shape))
        .collect();

    if model.settings.validatable && model.base.is_none() && model.settings.invalid_factory.is_none()
    {
        fns.push(invalid_ctor(model));
    }

    quote! {
        impl #ident {
            #(#fns)*
        }
    }
}

fn ctor_tier(model: &EnumModel, index: usize, shape: &CtorShape) -> TokenStream {
    let params: Vec<TokenStream> = shape
        .args
        .iter()
        .map(|arg| {
            let name = format_ident!("{}", arg.name);
            let ty = parse_type(&arg.ty);
            quote!(#name: #ty)
        })
        .collect();
    let arg_names: Vec<syn::Ident> = shape
        .args
        .iter()
        .map(|arg| format_ident!("{}", arg.name))
        .collect();

    let own_count = 1 + model.members.len();
    let base_count = shape.args.len() - own_count;
    let body = tier_body(model, shape, base_count);

    let name = ctor_ident(index);
    if model.settings.validatable {
        let validity_name = validity_ctor_ident(index);

        quote! {
            #[doc(hidden)]
            pub fn #name(#(#params),*) -> Self {
                Self::#validity_name(#(#arg_names,)* true)
            }

            pub(crate) fn #validity_name(#(#params,)* valid: bool) -> Self {
                #body
            }
        }
    } else {
        quote! {
            #[doc(hidden)]
            pub fn #name(#(#params),*) -> Self {
                #body
            }
        }
    }
}

fn tier_body(model: &EnumModel, shape: &CtorShape, base_count: usize) -> TokenStream {
    let key_name = format_ident!("{}", model.key.name);
    let hash_expr = key_hash_expr(model, &key_name);

    let base_init = model.base.as_ref().map(|state| {
        let snapshot = state.snapshot();
        let base_ty = parse_type(&snapshot.ident.global_path());
        let base_args: Vec<syn::Ident> = shape.args[..base_count]
            .iter()
            .map(|arg| format_ident!("{}", arg.name))
            .collect();
        let tier = base_tier_index(snapshot, &shape.args[..base_count]);

        // same-assembly validatable bases thread the validity flag through
        // their internal tier; everything else goes through the public one
        if state.is_same_assembly() && snapshot.settings.validatable && model.settings.validatable
        {
            let base_ctor = validity_ctor_ident(tier);
            quote!(let base = #base_ty::#base_ctor(#(#base_args,)* valid);)
        } else {
            let base_ctor = ctor_ident(tier);
            quote!(let base = #base_ty::#base_ctor(#(#base_args),*);)
        }
    });

    let mut field_inits = Vec::new();
    if base_init.is_some() {
        field_inits.push(quote!(base));
    }
    field_inits.push(quote!(#key_name));
    for member in &model.members {
        let name = format_ident!("{}", member.name);
        field_inits.push(quote!(#name));
    }
    if model.settings.validatable {
        field_inits.push(quote!(valid));
    }
    field_inits.push(quote!(hash));

    quote! {
        #base_init
        let hash = ::enumforge::core::hash::instance_hash(
            <Self as ::enumforge::core::traits::SmartEnum>::NAME,
            #hash_expr,
        );

        Self { #(#field_inits),* }
    }
}

fn invalid_ctor(model: &EnumModel) -> TokenStream {
    let key_name = format_ident!("{}", model.key.name);
    let key_ty = parse_type(&model.key.ty);
    let hash_expr = key_hash_expr(model, &key_name);

    let mut field_inits = vec![quote!(#key_name)];
    for member in &model.members {
        let name = format_ident!("{}", member.name);
        field_inits.push(quote!(#name: ::std::default::Default::default()));
    }
    field_inits.push(quote!(valid: false));
    field_inits.push(quote!(hash));

    quote! {
        fn __invalid(#key_name: #key_ty) -> Self {
            let hash = ::enumforge::core::hash::instance_hash(
                <Self as ::enumforge::core::traits::SmartEnum>::NAME,
                #hash_expr,
            );

            Self { #(#field_inits),* }
        }
    }
}

fn base_tier_index(base: &BaseSnapshot, prefix: &[CtorArg]) -> usize {
    let signature: Vec<&str> = prefix.iter().map(|arg| arg.ty.as_str()).collect();

    base.ctor_shapes
        .iter()
        .position(|shape| shape.type_signature() == signature)
        .unwrap_or(0)
}
