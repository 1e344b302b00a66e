//! ## Crate layout
//! - `core`: runtime support consumed by generated code (traits, tables,
//!   lookups, the derived-type registry).
//! - `codegen`: the build-time pipeline (model, extractor, resolver, cache,
//!   synthesizer, registrar).
//! - `build`: build-script entry point and the `generate!` macro.
//!
//! A consuming crate calls `enumforge::generate!("src/enums")` from its
//! `build.rs` and pulls the output in with `enumforge::include_artifacts!()`.

pub use enumforge_build as build;
pub use enumforge_core as core;
// `gen` is reserved in edition 2024, so the pipeline crate surfaces as
// `codegen`
pub use enumforge_gen as codegen;

/// re-exports
///
/// generated code can use these, stops the user having to specify the
/// dependencies in their Cargo.toml manually
pub mod __reexports {
    pub use ctor;
}

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use enumforge_core::Error;

// the macro and the one-shot fn share the name; both come through
pub use enumforge_build::generate;

/// Pull the combined generated artifact into the consuming crate.
#[macro_export]
macro_rules! include_artifacts {
    () => {
        include!(concat!(env!("OUT_DIR"), "/smart_enums.rs"));
    };
}

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        error::{LookupError, TableError},
        lookup,
        registry::{DerivedType, registry_read},
        table::ItemTable,
        traits::{SmartEnum as _, ValidatableEnum as _},
    };
}

#[cfg(test)]
pub mod test {
    #[test]
    fn facade_aliases_resolve() {
        let _pipeline = crate::codegen::pipeline::Pipeline::new();
        assert!(crate::codegen::cache::ModelCache::new().is_empty());
    }
}
