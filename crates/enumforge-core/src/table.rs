use crate::{error::TableError, traits::SmartEnum};
use std::collections::HashMap;
use std::fmt;

///
/// ItemTable
///
/// The validated lookup table backing a smart enum. Built once, lazily, by
/// iterating declared items in declaration order; construction fails with a
/// descriptive error on a duplicate key or, for validatable enums, on an
/// item that reports an invalid state. Publication happens through a
/// `LazyLock` in the generated code, so the first completed build wins and
/// readers never observe a partially filled table.
///

pub struct ItemTable<T: SmartEnum> {
    items: &'static [T],
    index: HashMap<T::Key, usize>,
    normalize: fn(&T::Key) -> T::Key,
}

impl<T: SmartEnum> ItemTable<T> {
    /// Build the table over `items`, with `idents` carrying the declared
    /// item names for error reporting (parallel to `items`).
    ///
    /// `normalize` maps a key to its canonical lookup form (lower-casing for
    /// case-insensitive string keys, identity otherwise). `validity` is set
    /// for validatable enums only.
    pub fn build(
        items: &'static [T],
        idents: &'static [&'static str],
        normalize: fn(&T::Key) -> T::Key,
        validity: Option<fn(&T) -> bool>,
    ) -> Result<Self, TableError> {
        debug_assert_eq!(items.len(), idents.len());

        let mut index: HashMap<T::Key, usize> = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if let Some(is_valid) = validity
                && !is_valid(item)
            {
                return Err(TableError::InvalidItem {
                    enum_name: T::NAME.to_string(),
                    ident: idents[pos].to_string(),
                });
            }

            let key = normalize(item.key());
            if let Some(&first) = index.get(&key) {
                return Err(TableError::DuplicateKey {
                    enum_name: T::NAME.to_string(),
                    first: idents[first].to_string(),
                    second: idents[pos].to_string(),
                    key: format!("{key:?}"),
                });
            }
            index.insert(key, pos);
        }

        Ok(Self {
            items,
            index,
            normalize,
        })
    }

    /// Find the declared item for `key`, after normalization.
    pub fn get(&self, key: &T::Key) -> Option<&'static T> {
        let key = (self.normalize)(key);

        self.index.get(&key).map(|&pos| &self.items[pos])
    }

    pub fn contains_key(&self, key: &T::Key) -> bool {
        self.index.contains_key(&(self.normalize)(key))
    }

    #[must_use]
    pub const fn items(&self) -> &'static [T] {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// the normalize fn pointer and the index map carry no useful detail
impl<T: SmartEnum> fmt::Debug for ItemTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemTable")
            .field("len", &self.items.len())
            .finish_non_exhaustive()
    }
}
