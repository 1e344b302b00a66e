use std::collections::HashMap;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

///
/// DerivedType
///
/// One concrete subtype of a smart enum, as discovered by the registrar
/// pass. Generic subtypes appear once per concrete instantiation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DerivedType {
    pub fqn: String,
}

impl DerivedType {
    pub fn new(fqn: impl Into<String>) -> Self {
        Self { fqn: fqn.into() }
    }
}

///
/// DerivedTypeRegistry
///
/// Process-wide table mapping a base smart-enum type to every concrete
/// subtype discovered in the compiled program. Populated by generated ctor
/// hooks before any first lookup; inserts are append-only and idempotent,
/// so duplicate hooks (one per discovery site) are harmless.
///

#[derive(Debug, Default)]
pub struct DerivedTypeRegistry {
    map: HashMap<String, Vec<DerivedType>>,
}

impl DerivedTypeRegistry {
    /// Register `derived` under `base_fqn`. Returns `false` when the pair
    /// was already present.
    pub fn register(&mut self, base_fqn: &str, derived: DerivedType) -> bool {
        let slot = self.map.entry(base_fqn.to_string()).or_default();
        if slot.contains(&derived) {
            return false;
        }

        slot.push(derived);
        true
    }

    /// All registered subtypes of `base_fqn`, in registration order.
    pub fn derived_of(&self, base_fqn: &str) -> &[DerivedType] {
        self.map.get(base_fqn).map_or(&[], Vec::as_slice)
    }

    pub fn bases(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

///
/// REGISTRY
/// the static data structure
///

static REGISTRY: LazyLock<RwLock<DerivedTypeRegistry>> =
    LazyLock::new(|| RwLock::new(DerivedTypeRegistry::default()));

/// Acquire a write guard to the global registry during startup registration.
pub fn registry_write() -> RwLockWriteGuard<'static, DerivedTypeRegistry> {
    REGISTRY
        .write()
        .expect("derived-type registry RwLock poisoned while acquiring write lock")
}

/// Read the global registry. Startup hooks run before any first lookup, so
/// readers only ever observe a fully populated table.
pub fn registry_read() -> RwLockReadGuard<'static, DerivedTypeRegistry> {
    REGISTRY
        .read()
        .expect("derived-type registry RwLock poisoned while acquiring read lock")
}
