use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A piece of a number being spelled out: the words and the value they stand for.
///
/// The composer emits one fragment per vocabulary card and folds adjacent
/// fragments together with the locale's merge rule until one remains. A
/// merge usually sums the two values; a rule that elides `current` hands
/// back `next` with its value unchanged.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment {
    text: String,
    value: BigUint,
}

impl Fragment {
    /// Create a fragment from its words and numeric value.
    pub fn new(text: impl Into<String>, value: impl Into<BigUint>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }

    /// The spelled-out words.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The numeric value the words stand for.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Consume the fragment, keeping only the words.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Consume the fragment into `(text, value)`.
    pub fn into_parts(self) -> (String, BigUint) {
        (self.text, self.value)
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment({:?}, {})", self.text, self.value)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<(&str, u128)> for Fragment {
    fn from((text, value): (&str, u128)) -> Self {
        Self::new(text, value)
    }
}
