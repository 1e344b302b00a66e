use crate::model::EnumModel;
use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::Ident;

// Naming and quoting support shared by the per-concern emitters.

// Parse helpers
//
// Everything emitted here was validated during extraction, so a parse
// failure at this point is a pipeline defect, not a user error.

pub fn parse_type(ty: &str) -> syn::Type {
    syn::parse_str(ty).expect("type text was validated at extraction")
}

pub fn parse_expr(expr: &str) -> syn::Expr {
    syn::parse_str(expr).expect("expression text was validated at extraction")
}

/// Render a constructor call argument, converting bare string literals into
/// owned strings when the parameter type requires one.
pub fn call_arg(ty: &str, expr_text: &str) -> TokenStream {
    let expr = parse_expr(expr_text);

    if ty == "String"
        && matches!(&expr, syn::Expr::Lit(lit) if matches!(lit.lit, syn::Lit::Str(_)))
    {
        return quote!(::std::string::String::from(#expr));
    }

    expr.to_token_stream()
}

// Naming helpers

pub fn type_ident(model: &EnumModel) -> Ident {
    format_ident!("{}", model.ident.name)
}

pub fn items_static(model: &EnumModel) -> Ident {
    format_ident!("__{}_ITEMS", model.ident.name.to_case(Case::UpperSnake))
}

pub fn table_static(model: &EnumModel) -> Ident {
    format_ident!("__{}_TABLE", model.ident.name.to_case(Case::UpperSnake))
}

/// Constructor tier name for merged shape `index`: `new`, `new2`, `new3`...
pub fn ctor_ident(index: usize) -> Ident {
    if index == 0 {
        format_ident!("new")
    } else {
        format_ident!("new{}", index + 1)
    }
}

/// Internal validity-carrying tier name for merged shape `index`.
pub fn validity_ctor_ident(index: usize) -> Ident {
    if index == 0 {
        format_ident!("__new_with_validity")
    } else {
        format_ident!("__new_with_validity{}", index + 1)
    }
}

/// The expression hashing a key value for the cached instance hash,
/// normalized for case-insensitive keys.
pub fn key_hash_expr(model: &EnumModel, key_var: &Ident) -> TokenStream {
    if model.key.case_insensitive && model.key.is_string() {
        quote!(::enumforge::core::hash::key_hash(&#key_var.to_lowercase()))
    } else {
        quote!(::enumforge::core::hash::key_hash(&#key_var))
    }
}
