use darling::FromMeta;
use serde::{Deserialize, Serialize};

///
/// OperatorLevel
///
/// How much operator surface the synthesizer emits for a concern.
/// `KeyOverloads` additionally generates the mixed-type overloads against
/// the raw key type.
///

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, FromMeta, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub enum OperatorLevel {
    None,
    #[default]
    Default,
    KeyOverloads,
}

///
/// Settings
///
/// Pure value bundle of generation flags. Built through [`Settings::new`]
/// so the one derived invariant always holds: the comparison level may not
/// exceed the equality level, and equality is escalated to match rather
/// than rejecting the declaration.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Settings {
    pub validatable: bool,
    pub invalid_factory: Option<String>,
    pub skip_display: bool,
    pub equality: OperatorLevel,
    pub comparison: OperatorLevel,
}

impl Settings {
    #[must_use]
    pub fn new(
        validatable: bool,
        invalid_factory: Option<String>,
        skip_display: bool,
        equality: OperatorLevel,
        comparison: OperatorLevel,
    ) -> Self {
        Self {
            validatable,
            invalid_factory,
            skip_display,
            equality: equality.max(comparison),
            comparison,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(false, None, false, OperatorLevel::Default, OperatorLevel::Default)
    }
}
