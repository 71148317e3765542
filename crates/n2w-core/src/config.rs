use serde::{Deserialize, Serialize};

use crate::currency::CurrencyOptions;

/// Configuration for a [`crate::Converter`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Capitalize cardinal and year output, skipping the locale's
    /// `exclude_title` words.
    pub title: bool,
    /// Options used for currency conversion.
    pub currency: CurrencyOptions,
}

impl ConverterConfig {
    /// Configuration with title casing enabled.
    pub fn titled() -> Self {
        Self {
            title: true,
            ..Default::default()
        }
    }
}
