use crate::{
    cache::{ModelCache, Verdict},
    diagnostic::{Diagnostic, DiagnosticKind},
    emit,
    extract::{self, Outcome},
    model::{BaseSnapshot, EnumModel},
    plugin::{FragmentPlugin, ModelProjection},
    registrar::Registrar,
    resolve::{self, ResolveContext},
    sink::{ArtifactKey, ArtifactSink},
    snapshot,
};
use proc_macro2::TokenStream;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error as ThisError;
use tracing::{debug, trace};

/// Artifact suffix of the generated declaration set.
pub const CODE_SUFFIX: &str = "smart_enum.rs";

/// Artifact suffix of the exported base snapshot.
pub const SNAPSHOT_SUFFIX: &str = "meta.json";

/// Key of the per-pass registration artifact.
pub const REGISTRATION_FQN: &str = "__pass";
pub const REGISTRATION_SUFFIX: &str = "registrations.rs";

///
/// PipelineError
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum PipelineError {
    #[error("pass cancelled before completion")]
    Cancelled,

    #[error("failed to parse source in module '{namespace}': {message}")]
    Parse { namespace: String, message: String },

    #[error(transparent)]
    Snapshot(#[from] snapshot::SnapshotError),
}

///
/// SourceFile
///
/// One declaration source handed to a pass: the module path its types live
/// under plus the source text.
///

#[derive(Clone, Debug)]
pub struct SourceFile {
    pub namespace: String,
    pub contents: String,
}

impl SourceFile {
    pub fn new(namespace: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            contents: contents.into(),
        }
    }
}

///
/// CancelFlag
///
/// Cooperative cancellation, checked between types. A cancelled pass stops
/// before touching the next declaration and publishes nothing for the work
/// it abandoned; the next pass redoes it from scratch.
///

#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

///
/// PassReport
///

#[derive(Debug, Default)]
pub struct PassReport {
    pub emitted: usize,
    pub skipped_unchanged: usize,
    pub registered: usize,
    pub diagnostics: Vec<Diagnostic>,
}

///
/// Pipeline
///
/// The driver. Owns the incremental cache and the imported cross-assembly
/// snapshots across passes; each `run_pass` extracts, resolves, refreshes
/// the cache, synthesizes what changed, and publishes artifacts through the
/// sink.
///

#[derive(Default)]
pub struct Pipeline {
    cache: ModelCache,
    imported: HashMap<String, BaseSnapshot>,
    plugins: Vec<Box<dyn FragmentPlugin>>,
}

impl Pipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Import snapshot artifacts produced by other compilations, making
    /// their enums available as cross-assembly bases.
    pub fn import_snapshots<'a, I>(&mut self, artifacts: I) -> Result<(), PipelineError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.imported.extend(snapshot::import_all(artifacts)?);

        Ok(())
    }

    pub fn register_plugin(&mut self, plugin: Box<dyn FragmentPlugin>) {
        self.plugins.push(plugin);
    }

    /// Run one full pass over the given sources.
    pub fn run_pass(
        &mut self,
        sources: &[SourceFile],
        cancel: &CancelFlag,
        sink: &mut dyn ArtifactSink,
    ) -> Result<PassReport, PipelineError> {
        let mut report = PassReport::default();

        let files = parse_sources(sources)?;

        let models = extract_phase(&files, cancel, &mut report)?;
        let mut models = self.resolve_phase(models, cancel, &mut report)?;

        let mut registrar = Registrar::new();
        for model in &models {
            registrar.record_model(model);
        }
        for (_, file) in &files {
            registrar.scan_file(file);
        }
        let facts = registrar.facts();
        report.registered = facts.len();
        for model in &mut models {
            model.derived_types = facts
                .iter()
                .filter(|fact| fact.base_fqn == model.ident.fqn())
                .map(|fact| fact.concrete_fqn.clone())
                .collect();
        }

        for model in &models {
            if cancel.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }

            let verdict = self.cache.refresh(model);
            trace!(fqn = %model.ident.fqn(), ?verdict, "cache refresh");
            if verdict == Verdict::Unchanged {
                report.skipped_unchanged += 1;
                continue;
            }

            let projection = ModelProjection::of(model);
            let fragments: Vec<TokenStream> = self
                .plugins
                .iter()
                .filter_map(|plugin| plugin.contribute(&projection))
                .collect();

            let tokens = emit::synthesize(model, &fragments);
            sink.publish(
                ArtifactKey::new(model.ident.fqn(), CODE_SUFFIX),
                emit::render(&tokens),
            );
            sink.publish(
                ArtifactKey::new(model.ident.fqn(), SNAPSHOT_SUFFIX),
                snapshot::export(model)?,
            );
            report.emitted += 1;
            debug!(fqn = %model.ident.fqn(), "artifacts published");
        }

        if let Some(hook) = registrar.emit() {
            sink.publish(
                ArtifactKey::new(REGISTRATION_FQN, REGISTRATION_SUFFIX),
                emit::render(&hook),
            );
        }

        debug!(
            emitted = report.emitted,
            skipped = report.skipped_unchanged,
            registered = report.registered,
            diagnostics = report.diagnostics.len(),
            "pass complete"
        );

        Ok(report)
    }

    /// Resolve base chains to a fixpoint so same-assembly chains work in
    /// any declaration order, then re-check item argument counts against
    /// the merged shapes.
    fn resolve_phase(
        &self,
        models: Vec<EnumModel>,
        cancel: &CancelFlag,
        report: &mut PassReport,
    ) -> Result<Vec<EnumModel>, PipelineError> {
        let mut same_assembly: HashMap<String, BaseSnapshot> = HashMap::new();
        let mut pending = models;
        let mut resolved = Vec::with_capacity(pending.len());

        loop {
            let mut progressed = false;
            let mut still_pending = Vec::new();

            for mut model in pending {
                if cancel.is_cancelled() {
                    return Err(PipelineError::Cancelled);
                }

                let ready = model.base_path.as_ref().is_none_or(|path| {
                    same_assembly.contains_key(path) || self.imported.contains_key(path)
                });
                if !ready {
                    still_pending.push(model);
                    continue;
                }

                let ctx = ResolveContext {
                    same_assembly: &same_assembly,
                    imported: &self.imported,
                };
                match resolve::resolve(&mut model, &ctx) {
                    Ok(()) => {
                        same_assembly.insert(model.ident.fqn(), model.snapshot());
                        resolved.push(model);
                        progressed = true;
                    }
                    Err(diagnostic) => report.diagnostics.push(diagnostic),
                }
            }

            pending = still_pending;
            if pending.is_empty() || !progressed {
                break;
            }
        }

        // leftovers sit on a base nobody provides
        for mut model in pending {
            let ctx = ResolveContext {
                same_assembly: &same_assembly,
                imported: &self.imported,
            };
            if let Err(diagnostic) = resolve::resolve(&mut model, &ctx) {
                report.diagnostics.push(diagnostic);
            }
        }

        // items of derived enums must fill every merged constructor
        // argument except the key
        resolved.retain(|model| {
            let Some(shape) = model
                .ctor_shapes
                .as_ref()
                .and_then(|shapes| shapes.first())
            else {
                return true;
            };
            let expected = shape.args.len() - 1;
            match model
                .items
                .iter()
                .find(|item| item.args.len() != expected)
            {
                None => true,
                Some(item) => {
                    report.diagnostics.push(Diagnostic::new(
                        model.ident.fqn(),
                        DiagnosticKind::MalformedItem,
                        format!(
                            "item '{}' supplies {} argument(s), the merged constructor takes {}",
                            item.ident,
                            item.args.len(),
                            expected
                        ),
                    ));
                    false
                }
            }
        });

        Ok(resolved)
    }
}

fn extract_phase(
    files: &[(String, syn::File)],
    cancel: &CancelFlag,
    report: &mut PassReport,
) -> Result<Vec<EnumModel>, PipelineError> {
    let mut models = Vec::new();

    for (namespace, file) in files {
        let mut structs = Vec::new();
        collect_structs(namespace, &file.items, &mut structs);

        for (module, item) in structs {
            if cancel.is_cancelled() {
                return Err(PipelineError::Cancelled);
            }

            match extract::extract(&module, &item) {
                Outcome::Skip => {}
                Outcome::Error(diagnostic) => report.diagnostics.push(*diagnostic),
                Outcome::Model(model) => {
                    // key members must never be nullable; such declarations
                    // are excluded, not failed
                    if model.key.nullable {
                        trace!(fqn = %model.ident.fqn(), "nullable key, excluded");
                        continue;
                    }
                    models.push(*model);
                }
            }
        }
    }

    debug!(candidates = models.len(), "extraction complete");

    Ok(models)
}

fn parse_sources(sources: &[SourceFile]) -> Result<Vec<(String, syn::File)>, PipelineError> {
    sources
        .iter()
        .map(|source| {
            syn::parse_file(&source.contents)
                .map(|file| (source.namespace.clone(), file))
                .map_err(|err| PipelineError::Parse {
                    namespace: source.namespace.clone(),
                    message: err.to_string(),
                })
        })
        .collect()
}

fn collect_structs(namespace: &str, items: &[syn::Item], out: &mut Vec<(String, syn::ItemStruct)>) {
    for item in items {
        match item {
            syn::Item::Struct(item_struct) => {
                out.push((namespace.to_string(), item_struct.clone()));
            }
            syn::Item::Mod(module) => {
                if let Some((_, nested)) = &module.content {
                    let nested_namespace = if namespace.is_empty() {
                        module.ident.to_string()
                    } else {
                        format!("{namespace}::{}", module.ident)
                    };
                    collect_structs(&nested_namespace, nested, out);
                }
            }
            _ => {}
        }
    }
}
