//! Build-script entry point: walk a directory of smart-enum declaration
//! sources, run one pipeline pass, and write the artifacts into `OUT_DIR`.

mod macros;

use enumforge_gen::{
    pipeline::{CancelFlag, PassReport, Pipeline, PipelineError, SourceFile},
    sink::MemorySink,
    snapshot::SnapshotError,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;
use tracing::debug;

/// Name of the combined artifact consumed by `include_artifacts!`.
pub const COMBINED_FILE: &str = "smart_enums.rs";

///
/// BuildError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum BuildError {
    #[error("io error under '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl BuildError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

///
/// Generator
///
/// One build-script invocation. Owns a pipeline, optionally seeded with
/// snapshot artifacts exported by upstream compilations, and writes every
/// published artifact plus the combined include file into the output
/// directory.
///

#[derive(Default)]
pub struct Generator {
    pipeline: Pipeline,
}

impl Generator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Import every `.meta.json` snapshot under `dir` as a cross-assembly
    /// base source.
    pub fn import_snapshot_dir(&mut self, dir: &Path) -> Result<(), BuildError> {
        let mut artifacts = Vec::new();
        for path in sorted_files(dir, "json")? {
            let contents = fs::read_to_string(&path).map_err(|err| BuildError::io(&path, err))?;
            artifacts.push(contents);
        }

        self.pipeline
            .import_snapshots(artifacts.iter().map(String::as_str))?;

        Ok(())
    }

    /// Run one pass over every `.rs` file under `source_dir`, writing
    /// artifacts into `out_dir`.
    pub fn run(&mut self, source_dir: &Path, out_dir: &Path) -> Result<PassReport, BuildError> {
        let mut sources = Vec::new();
        for path in sorted_files(source_dir, "rs")? {
            let contents = fs::read_to_string(&path).map_err(|err| BuildError::io(&path, err))?;
            sources.push(SourceFile::new(namespace_of(&path), contents));
        }

        let mut sink = MemorySink::new();
        let report = self
            .pipeline
            .run_pass(&sources, &CancelFlag::new(), &mut sink)?;

        let mut combined = String::new();
        for key in sink.keys() {
            let contents = sink.get(key).unwrap_or_default();
            let path = out_dir.join(key.file_name());
            fs::write(&path, contents).map_err(|err| BuildError::io(&path, err))?;

            if key.suffix.ends_with(".rs") {
                combined.push_str(contents);
                combined.push('\n');
            }
        }
        let combined_path = out_dir.join(COMBINED_FILE);
        fs::write(&combined_path, combined).map_err(|err| BuildError::io(&combined_path, err))?;

        debug!(
            emitted = report.emitted,
            skipped = report.skipped_unchanged,
            out_dir = %out_dir.display(),
            "build pass written"
        );

        Ok(report)
    }
}

/// One-shot form used by `generate!`.
pub fn generate(source_dir: &Path, out_dir: &Path) -> Result<PassReport, BuildError> {
    Generator::new().run(source_dir, out_dir)
}

/// Declaration sources are namespaced by file stem.
fn namespace_of(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn sorted_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BuildError> {
    let entries = fs::read_dir(dir).map_err(|err| BuildError::io(dir, err))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| BuildError::io(dir, err))?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == extension) {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths)
}
