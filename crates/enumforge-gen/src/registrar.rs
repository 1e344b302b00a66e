use crate::model::EnumModel;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use std::collections::HashMap;
use syn::visit::Visit;

///
/// SubtypeFact
///
/// One discovery site: a concrete type observed deriving from (or
/// instantiating a generic subtype of) a base smart enum. Sites are
/// independent emissions; the same pair may be discovered many times and is
/// collapsed before anything is published.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SubtypeFact {
    pub base_fqn: String,
    pub concrete_fqn: String,
}

///
/// Registrar
///
/// The whole-pass derived-type scan. Explicit `base = "..."` declarations
/// are recorded from resolved models; concrete instantiations of declared
/// generic subtypes are found by walking every source file's syntax. The
/// deduplicated pairs become one startup registration hook per pass.
///

#[derive(Debug, Default)]
pub struct Registrar {
    facts: Vec<SubtypeFact>,
    // declared generic subtype ident -> owning enum fqn
    subtype_owners: HashMap<String, String>,
}

impl Registrar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved model: its explicit base fact, if any, and its
    /// declared generic subtype idents for the syntax scan.
    pub fn record_model(&mut self, model: &EnumModel) {
        if let Some(base) = &model.base {
            self.facts.push(SubtypeFact {
                base_fqn: base.snapshot().ident.fqn(),
                concrete_fqn: model.ident.fqn(),
            });
        }

        for subtype in &model.generic_subtypes {
            self.subtype_owners
                .insert(subtype.clone(), model.ident.fqn());
        }
    }

    /// Scan one parsed source file for concrete instantiations of declared
    /// generic subtypes, resolving each back to its owning enum.
    pub fn scan_file(&mut self, file: &syn::File) {
        let mut visitor = SubtypeVisitor {
            owners: &self.subtype_owners,
            facts: &mut self.facts,
        };
        visitor.visit_file(file);
    }

    /// The deduplicated pairs, in first-discovery order.
    #[must_use]
    pub fn facts(&self) -> Vec<SubtypeFact> {
        let mut seen = std::collections::HashSet::new();
        self.facts
            .iter()
            .filter(|fact| seen.insert((*fact).clone()))
            .cloned()
            .collect()
    }

    /// Emit the per-pass registration artifact: a single startup hook
    /// inserting every deduplicated pair. The registry insert is itself
    /// idempotent, so re-running the hook across passes is harmless.
    #[must_use]
    pub fn emit(&self) -> Option<TokenStream> {
        let facts = self.facts();
        if facts.is_empty() {
            return None;
        }

        let inserts: Vec<TokenStream> = facts
            .iter()
            .map(|fact| {
                let base = &fact.base_fqn;
                let concrete = &fact.concrete_fqn;
                quote! {
                    registry.register(
                        #base,
                        ::enumforge::core::registry::DerivedType::new(#concrete),
                    );
                }
            })
            .collect();

        Some(quote! {
            #[::enumforge::__reexports::ctor::ctor(anonymous, crate_path = ::enumforge::__reexports::ctor)]
            fn __register_derived_types() {
                let mut registry = ::enumforge::core::registry::registry_write();
                #(#inserts)*
            }
        })
    }
}

struct SubtypeVisitor<'a> {
    owners: &'a HashMap<String, String>,
    facts: &'a mut Vec<SubtypeFact>,
}

impl<'a, 'ast> Visit<'ast> for SubtypeVisitor<'a> {
    fn visit_path(&mut self, path: &'ast syn::Path) {
        if let Some(segment) = path.segments.last() {
            let has_args = matches!(
                &segment.arguments,
                syn::PathArguments::AngleBracketed(args) if !args.args.is_empty()
            );
            if has_args {
                if let Some(owner) = self.owners.get(&segment.ident.to_string()) {
                    let concrete = segment
                        .to_token_stream()
                        .to_string()
                        .replace(' ', "");
                    self.facts.push(SubtypeFact {
                        base_fqn: owner.clone(),
                        concrete_fqn: concrete,
                    });
                }
            }
        }

        syn::visit::visit_path(self, path);
    }
}
