use crate::table::ItemTable;
use std::fmt::Debug;
use std::hash::Hash;

///
/// SmartEnum
///
/// Implemented by synthesized code for every smart enum: a closed set of
/// named singleton instances indexed by a key. Items are declared once,
/// published through a lazily built [`ItemTable`], and looked up through the
/// accessor helpers in [`crate::lookup`].
///

pub trait SmartEnum: Sized + 'static {
    type Key: Clone + Debug + Eq + Hash;

    /// Fully-qualified type name, used in structured errors.
    const NAME: &'static str;

    /// Declared items in declaration order.
    fn items() -> &'static [Self];

    /// The validated lookup table over [`Self::items`].
    fn table() -> &'static ItemTable<Self>;

    fn key(&self) -> &Self::Key;
}

///
/// ValidatableEnum
///
/// A smart enum that manufactures a reported-invalid instance for unknown
/// keys instead of failing the lookup. Manufactured instances live outside
/// the item table, so the type must be clonable and carry value equality.
///

pub trait ValidatableEnum: SmartEnum + Clone {
    fn is_valid(&self) -> bool;

    /// Manufacture the invalid instance for an unknown key.
    ///
    /// The result is checked at the call site: it must report an invalid
    /// state and its key must not collide with a declared item.
    fn create_invalid(key: Self::Key) -> Self;
}
