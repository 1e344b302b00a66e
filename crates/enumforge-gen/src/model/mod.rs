//! Pure-data model of one smart-enum declaration.
//!
//! Every field is a string, bool, enum, or ordered list, never a `syn` node
//! or any other live handle into the parsed syntax. Structural equality and
//! hashing over these snapshots is what lets the incremental cache recognize
//! an unedited declaration across passes.

mod base;
mod ctor;
mod enum_model;
mod ident;
mod item;
mod key;
mod member;
mod settings;

pub use self::base::*;
pub use self::ctor::*;
pub use self::enum_model::*;
pub use self::ident::*;
pub use self::item::*;
pub use self::key::*;
pub use self::member::*;
pub use self::settings::*;
