use crate::{
    error::LookupError,
    traits::{SmartEnum, ValidatableEnum},
};

/// Find the declared item for `key` or fail with a structured unknown-key
/// error. The default accessor for non-validatable enums.
pub fn get<T: SmartEnum>(key: &T::Key) -> Result<&'static T, LookupError> {
    T::table()
        .get(key)
        .ok_or_else(|| LookupError::unknown_key(T::NAME, format!("{key:?}")))
}

/// Find the declared item for `key`, if any.
pub fn try_get<T: SmartEnum>(key: &T::Key) -> Option<&'static T> {
    T::table().get(key)
}

/// Find the declared item for `key`, or manufacture the reported-invalid
/// instance. The default accessor for validatable enums; never fails for an
/// unknown key.
///
/// Panics only when a user-supplied invalid-item factory violates its
/// contract (reports valid, or collides with a declared key), which is a
/// defect in the declaration, not in the caller.
pub fn get_or_invalid<T: ValidatableEnum>(key: T::Key) -> T {
    if let Some(found) = T::table().get(&key) {
        return found.clone();
    }

    match manufacture_invalid::<T>(key) {
        Ok(item) => item,
        Err(err) => panic!("{err}"),
    }
}

/// `get_or_invalid` with an explicit found/manufactured verdict.
pub fn try_get_or_invalid<T: ValidatableEnum>(key: T::Key) -> (bool, T) {
    match T::table().get(&key) {
        Some(found) => (true, found.clone()),
        None => (false, get_or_invalid(key)),
    }
}

/// Lookup phrased as a validation result, for model-binding call sites.
/// The error path carries the structured unknown-key error only; callers
/// that also want the manufactured instance use `try_get_or_invalid`.
pub fn validate<T: ValidatableEnum>(key: T::Key) -> Result<T, LookupError> {
    match T::table().get(&key) {
        Some(found) => Ok(found.clone()),
        None => Err(LookupError::unknown_key(T::NAME, format!("{key:?}"))),
    }
}

/// Run the contract checks over a freshly manufactured invalid instance.
pub fn manufacture_invalid<T: ValidatableEnum>(key: T::Key) -> Result<T, LookupError> {
    let item = T::create_invalid(key);

    if item.is_valid() {
        return Err(LookupError::FactoryReportedValid {
            enum_name: T::NAME.to_string(),
        });
    }
    if T::table().contains_key(item.key()) {
        return Err(LookupError::FactoryKeyCollision {
            enum_name: T::NAME.to_string(),
            key: format!("{:?}", item.key()),
        });
    }

    Ok(item)
}
