use serde::Serialize;

/// Singular and plural spelling of one currency unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PluralForms {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl PluralForms {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }
}

/// Names of a currency's major unit (e.g. dollar) and minor unit (e.g. cent).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CurrencyForms {
    pub major: PluralForms,
    pub minor: PluralForms,
}

impl CurrencyForms {
    /// Build forms from `(singular, plural)` pairs for the major and minor units.
    pub const fn new(major: (&'static str, &'static str), minor: (&'static str, &'static str)) -> Self {
        Self {
            major: PluralForms::new(major.0, major.1),
            minor: PluralForms::new(minor.0, minor.1),
        }
    }
}
