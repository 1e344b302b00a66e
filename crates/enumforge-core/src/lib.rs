pub mod error;
pub mod hash;
pub mod lookup;
pub mod registry;
pub mod table;
pub mod traits;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::{LookupError, TableError},
        lookup,
        table::ItemTable,
        traits::{SmartEnum, ValidatableEnum},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    LookupError(#[from] error::LookupError),

    #[error(transparent)]
    TableError(#[from] error::TableError),
}
