use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use n2w_core::ConverterConfig;
use n2w_ht::Features;

use crate::cli::Cli;

/// Settings read from a TOML file and overridden by command-line flags.
///
/// ```toml
/// lang = "ht"
///
/// [features]
/// currency = true
///
/// [converter]
/// title = false
///
/// [converter.currency]
/// currency = "HTG"
/// cents = true
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Language code resolved through the registry.
    pub lang: String,
    /// Optional conversions the locale provides.
    pub features: Features,
    /// Converter options.
    pub converter: ConverterConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang: n2w_ht::LANG.to_string(),
            features: Features::default(),
            converter: ConverterConfig::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Apply command-line flags on top of the loaded values.
    pub fn apply(&mut self, cli: &Cli) {
        if let Some(lang) = &cli.lang {
            self.lang = lang.clone();
        }
        if let Some(code) = &cli.currency {
            self.converter.currency.currency = code.to_ascii_uppercase();
        }
        if let Some(separator) = &cli.separator {
            self.converter.currency.separator = Some(separator.clone());
        }
        if cli.no_cents {
            self.converter.currency.cents = false;
        }
        if cli.adjective {
            self.converter.currency.adjective = true;
        }
        if cli.title {
            self.converter.title = true;
        }
    }
}
