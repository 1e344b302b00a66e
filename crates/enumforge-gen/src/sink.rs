use std::collections::HashMap;

///
/// ArtifactKey
///
/// Identity of one emitted artifact: the owning type plus a suffix naming
/// the artifact kind. Re-publishing under the same key replaces the prior
/// contents, never duplicates them.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ArtifactKey {
    pub type_fqn: String,
    pub suffix: String,
}

impl ArtifactKey {
    pub fn new(type_fqn: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            type_fqn: type_fqn.into(),
            suffix: suffix.into(),
        }
    }

    /// Flatten the key into a file name, mangling path separators.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.type_fqn.replace("::", "_"), self.suffix)
    }
}

///
/// ArtifactSink
///

pub trait ArtifactSink {
    fn publish(&mut self, key: ArtifactKey, contents: String);
}

///
/// MemorySink
///
/// In-memory sink used by tests and by callers that post-process artifacts
/// before writing them anywhere.
///

#[derive(Debug, Default)]
pub struct MemorySink {
    artifacts: HashMap<ArtifactKey, String>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &ArtifactKey) -> Option<&str> {
        self.artifacts.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&ArtifactKey> {
        let mut keys: Vec<&ArtifactKey> = self.artifacts.keys().collect();
        keys.sort();

        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn publish(&mut self, key: ArtifactKey, contents: String) {
        self.artifacts.insert(key, contents);
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    #[test]
    fn republishing_a_key_replaces_the_contents() {
        let mut sink = MemorySink::new();
        let key = ArtifactKey::new("demo::Color", "smart_enum.rs");

        sink.publish(key.clone(), "first".to_string());
        sink.publish(key.clone(), "second".to_string());

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.get(&key), Some("second"));
    }

    #[test]
    fn file_names_mangle_the_path_separator() {
        let key = ArtifactKey::new("demo::nested::Color", "meta.json");

        assert_eq!(key.file_name(), "demo_nested_Color.meta.json");
    }
}
