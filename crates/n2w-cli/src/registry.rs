use anyhow::bail;
use tracing::debug;

use n2w_core::NumeralLocale;
use n2w_ht::{Features, HaitianCreole};

/// Language codes the binary can resolve.
pub const SUPPORTED: &[&str] = &[n2w_ht::LANG];

/// Reduce `ht_HT`, `ht-HT` and `HT` to the bare language code.
pub fn normalize(code: &str) -> String {
    let code = code.trim().to_ascii_lowercase().replace('-', "_");
    match code.split_once('_') {
        Some((lang, _region)) => lang.to_string(),
        None => code,
    }
}

/// Resolve a language code to its locale.
pub fn resolve(code: &str, features: Features) -> anyhow::Result<Box<dyn NumeralLocale>> {
    let lang = normalize(code);
    debug!(requested = code, %lang, "resolving locale");
    match lang.as_str() {
        n2w_ht::LANG => Ok(Box::new(HaitianCreole::with_features(features))),
        _ => bail!(
            "unsupported language \"{code}\" (available: {})",
            SUPPORTED.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_region_and_case() {
        assert_eq!(normalize("ht"), "ht");
        assert_eq!(normalize("ht_HT"), "ht");
        assert_eq!(normalize("HT-ht"), "ht");
        assert_eq!(normalize(" Ht "), "ht");
    }

    #[test]
    fn resolves_creole() {
        let locale = resolve("ht_HT", Features::default()).unwrap();
        assert_eq!(locale.lang(), "ht");
        assert_eq!(locale.to_cardinal(&21u64.into()).unwrap(), "venteyen");
    }

    #[test]
    fn passes_features_through() {
        let locale = resolve("ht", Features::cardinal_only()).unwrap();
        let err = locale.to_ordinal(&2u64.into()).unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn unknown_code_lists_available() {
        let Err(err) = resolve("fr_FR", Features::default()) else {
            panic!("expected unknown locale error");
        };
        let msg = err.to_string();
        assert!(msg.contains("fr_FR"));
        assert!(msg.contains("ht"));
    }
}
