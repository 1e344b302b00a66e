use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::{Xxh3, xxh3_64, xxh3_64_with_seed};

/// Hash an item key into the stable 64-bit form stored on instances.
///
/// Case-insensitive enums hash the normalized key, so equal instances always
/// agree regardless of the casing they were looked up with.
pub fn key_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = Xxh3::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Combine a type's fully-qualified name with its key hash.
///
/// Computed once in the generated constructor and cached on the instance;
/// `Hash` impls emit this value directly instead of re-walking the key.
#[must_use]
pub fn instance_hash(type_fqn: &str, key_hash: u64) -> u64 {
    let seed = xxh3_64(type_fqn.as_bytes());
    xxh3_64_with_seed(&key_hash.to_le_bytes(), seed)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn instance_hash_separates_types_with_equal_keys() {
        let key = key_hash("R");

        assert_ne!(
            instance_hash("demo::Color", key),
            instance_hash("demo::Shade", key),
        );
    }

    #[test]
    fn instance_hash_is_stable_per_input() {
        let key = key_hash(&42_i32);

        assert_eq!(
            instance_hash("demo::Status", key),
            instance_hash("demo::Status", key),
        );
    }
}
