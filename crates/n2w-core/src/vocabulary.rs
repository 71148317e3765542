use std::borrow::Cow;
use std::collections::BTreeMap;

use num_bigint::BigUint;
use num_traits::Zero;

/// The numeral words a locale composes numbers from.
///
/// Cards are keyed by value, so iteration from the largest card down is
/// always strictly decreasing regardless of the order they were added in.
/// Adding a card for a value that already has one replaces the word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    cards: BTreeMap<BigUint, Cow<'static, str>>,
}

impl Vocabulary {
    /// Start building a vocabulary.
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// The word for exactly this value, if there is a card for it.
    pub fn word(&self, value: &BigUint) -> Option<&str> {
        self.cards.get(value).map(|w| w.as_ref())
    }

    /// The largest card whose value does not exceed `value`.
    pub fn largest_at_most(&self, value: &BigUint) -> Option<(&BigUint, &str)> {
        self.cards
            .range::<BigUint, _>(..=value)
            .next_back()
            .map(|(v, w)| (v, w.as_ref()))
    }

    /// Cards from the largest value down.
    pub fn cards(&self) -> impl Iterator<Item = (&BigUint, &str)> {
        self.cards.iter().rev().map(|(v, w)| (v, w.as_ref()))
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the vocabulary has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Exclusive upper bound on convertible magnitudes: 1000 times the
    /// largest card, or zero for an empty vocabulary.
    pub fn max_value(&self) -> BigUint {
        self.cards
            .keys()
            .next_back()
            .map_or_else(BigUint::zero, |largest| largest * 1000u32)
    }
}

/// Collects scale, mid and low words into a [`Vocabulary`].
#[derive(Clone, Debug, Default)]
pub struct VocabularyBuilder {
    cards: BTreeMap<BigUint, Cow<'static, str>>,
}

impl VocabularyBuilder {
    /// Add generated scale words (million-class and up).
    pub fn high<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = (BigUint, S)>,
        S: Into<Cow<'static, str>>,
    {
        for (value, word) in words {
            self.cards.insert(value, word.into());
        }
        self
    }

    /// Add fixed `(value, word)` cards such as tens, hundred and thousand.
    pub fn mid(mut self, words: &[(u128, &'static str)]) -> Self {
        for &(value, word) in words {
            self.cards.insert(BigUint::from(value), Cow::Borrowed(word));
        }
        self
    }

    /// Add the words for `0, 1, 2, …` in order.
    pub fn low(mut self, words: &[&'static str]) -> Self {
        for (value, &word) in (0u32..).zip(words) {
            self.cards.insert(BigUint::from(value), Cow::Borrowed(word));
        }
        self
    }

    pub fn build(self) -> Vocabulary {
        Vocabulary { cards: self.cards }
    }
}

/// Locale strings used around the composed words.
///
/// Message templates take `{value}` and, for `errmsg_toobig`, `{limit}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleText {
    /// Word placed before negative numbers.
    pub negword: &'static str,
    /// Word placed between the integer part and the fractional digits.
    pub pointword: &'static str,
    pub errmsg_nonnum: &'static str,
    pub errmsg_toobig: &'static str,
    pub errmsg_floatord: &'static str,
    pub errmsg_negord: &'static str,
    /// Words left in lower case by title casing.
    pub exclude_title: &'static [&'static str],
}

impl Default for LocaleText {
    fn default() -> Self {
        Self {
            negword: "(-) ",
            pointword: "(.)",
            errmsg_nonnum: "type({value}) not in [long, int, float]",
            errmsg_toobig: "abs({value}) must be less than {limit}.",
            errmsg_floatord: "Cannot treat float {value} as ordinal.",
            errmsg_negord: "Cannot treat negative num {value} as ordinal.",
            exclude_title: &[],
        }
    }
}

const SCALE_LOWS: [&str; 9] = ["non", "oct", "sept", "sext", "quint", "quadr", "tr", "b", "m"];
const SCALE_UNITS: [&str; 10] = [
    "", "un", "duo", "tre", "quattuor", "quin", "sex", "sept", "octo", "novem",
];
const SCALE_TENS: [&str; 9] = [
    "dec",
    "vigint",
    "trigint",
    "quadragint",
    "quinquagint",
    "sexagint",
    "septuagint",
    "octogint",
    "nonagint",
];

/// Generate the European long-scale words from Latin prefixes.
///
/// Each prefix yields `prefix + giga_suffix` at `10^n` and
/// `prefix + mega_suffix` at `10^(n-3)`, starting from `m` at `n = 9`
/// (`m + "illion"` = 10^6, `m + "illiard"` = 10^9) and ending with `cent`
/// at 10^603. An empty suffix skips that half.
pub fn european_scale_words(mega_suffix: &str, giga_suffix: &str) -> Vec<(BigUint, String)> {
    let mut prefixes: Vec<String> = SCALE_TENS
        .iter()
        .flat_map(|t| SCALE_UNITS.iter().map(move |u| format!("{u}{t}")))
        .collect();
    prefixes.reverse();
    prefixes.insert(0, "cent".to_string());
    prefixes.extend(SCALE_LOWS.iter().map(|s| s.to_string()));

    let ten = BigUint::from(10u32);
    let cap = 3 + 6 * prefixes.len() as u32;
    let mut out = Vec::new();
    for (prefix, exp) in prefixes.iter().zip((9..=cap).rev().step_by(6)) {
        if !giga_suffix.is_empty() {
            out.push((ten.pow(exp), format!("{prefix}{giga_suffix}")));
        }
        if !mega_suffix.is_empty() {
            out.push((ten.pow(exp - 3), format!("{prefix}{mega_suffix}")));
        }
    }
    out
}
