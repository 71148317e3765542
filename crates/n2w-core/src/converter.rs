use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use n2w_types::{ConvertResult, Number};

use crate::config::ConverterConfig;
use crate::currency::CurrencyValue;
use crate::locale::NumeralLocale;
use crate::text::title_case;
use crate::validate::parse_number;

/// What to turn a number into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    #[default]
    Cardinal,
    Ordinal,
    OrdinalNum,
    Year,
    Currency,
}

impl ConversionKind {
    pub const ALL: [ConversionKind; 5] = [
        Self::Cardinal,
        Self::Ordinal,
        Self::OrdinalNum,
        Self::Year,
        Self::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cardinal => "cardinal",
            Self::Ordinal => "ordinal",
            Self::OrdinalNum => "ordinal_num",
            Self::Year => "year",
            Self::Currency => "currency",
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("unknown conversion type: {s}"))
    }
}

/// Entry point tying one locale to a configuration.
///
/// Holds the locale behind a trait object so the language can be chosen at
/// runtime. Conversions borrow the converter immutably; a `Converter` can be
/// shared across threads.
pub struct Converter {
    locale: Box<dyn NumeralLocale>,
    config: ConverterConfig,
}

impl Converter {
    pub fn new(locale: impl NumeralLocale + 'static) -> Self {
        Self::from_boxed(Box::new(locale))
    }

    pub fn from_boxed(locale: Box<dyn NumeralLocale>) -> Self {
        Self {
            locale,
            config: ConverterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn locale(&self) -> &dyn NumeralLocale {
        self.locale.as_ref()
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Parse `input` with the locale's error messages.
    pub fn parse(&self, input: &str) -> ConvertResult<Number> {
        parse_number(self.locale.as_ref(), input)
    }

    /// Parse and convert `input`.
    pub fn convert(&self, input: &str, kind: ConversionKind) -> ConvertResult<String> {
        let value = self.parse(input)?;
        self.convert_number(&value, kind)
    }

    /// Convert an already parsed number.
    pub fn convert_number(&self, value: &Number, kind: ConversionKind) -> ConvertResult<String> {
        debug!(lang = self.locale.lang(), %value, %kind, "converting");
        let locale = self.locale.as_ref();
        match kind {
            ConversionKind::Cardinal => locale.to_cardinal(value).map(|s| self.titled(s)),
            ConversionKind::Ordinal => locale.to_ordinal(value),
            ConversionKind::OrdinalNum => locale.to_ordinal_num(value),
            ConversionKind::Year => locale.to_year(value).map(|s| self.titled(s)),
            ConversionKind::Currency => locale
                .to_currency(&CurrencyValue::Amount(value.clone()), &self.config.currency)
                .map(|s| self.titled_currency(s)),
        }
    }

    fn titled(&self, words: String) -> String {
        if self.config.title {
            title_case(&words, self.locale.text().exclude_title)
        } else {
            words
        }
    }

    /// Title-case the amounts of a currency phrase. The minus word, unit
    /// names, adjective and separator keep their case.
    fn titled_currency(&self, words: String) -> String {
        if !self.config.title {
            return words;
        }
        let options = &self.config.currency;
        let text = self.locale.text();
        let mut exclude: Vec<&str> = text.exclude_title.to_vec();
        exclude.push(text.negword.trim());
        if let Some(forms) = self.locale.currency_forms(&options.currency) {
            exclude.extend([
                forms.major.singular,
                forms.major.plural,
                forms.minor.singular,
                forms.minor.plural,
            ]);
        }
        if let Some(adjective) = self.locale.currency_adjective(&options.currency) {
            exclude.push(adjective);
        }
        let separator = options
            .separator
            .as_deref()
            .unwrap_or_else(|| self.locale.default_separator());
        exclude.extend(separator.split_whitespace());
        title_case(&words, &exclude)
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("lang", &self.locale.lang())
            .field("config", &self.config)
            .finish()
    }
}
