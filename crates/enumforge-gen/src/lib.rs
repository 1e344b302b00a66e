pub mod cache;
pub mod diagnostic;
pub mod emit;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod plugin;
pub mod registrar;
pub mod resolve;
pub mod sink;
pub mod snapshot;

use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    PipelineError(#[from] pipeline::PipelineError),

    #[error(transparent)]
    SnapshotError(#[from] snapshot::SnapshotError),
}
