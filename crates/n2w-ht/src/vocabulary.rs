//! Haitian Creole word tables.

use n2w_core::{european_scale_words, LocaleText, Vocabulary};
use n2w_types::CurrencyForms;

/// Appended to Latin prefixes for 10^(6k): `milyon`, `bilyon`, …
pub const MEGA_SUFFIX: &str = "ilyon";
/// Appended to Latin prefixes for 10^(6k+3): `milya`, `bilya`, …
pub const GIGA_SUFFIX: &str = "ilya";

/// Tens, hundred and thousand. There is no word for 70 or 90: they are
/// built as 60 + 10..19 and 80 + 10..19.
pub const MID_WORDS: [(u128, &str); 7] = [
    (1000, "mil"),
    (100, "san"),
    (80, "katreven"),
    (60, "swasant"),
    (50, "senkant"),
    (40, "karant"),
    (30, "trant"),
];

/// Words for 0 through 20.
pub const LOW_WORDS: [&str; 21] = [
    "zewo", "en", "de", "twa", "kat", "senk", "sis", "sèt", "uit", "nèf", "dis", "onz", "douz",
    "trèz", "katòz", "kenz", "sèz", "disèt", "dizuit", "diznèf", "ven",
];

/// "One" as spoken before `milyon`/`milya` and larger scales.
pub const ONE_BEFORE_SCALE: &str = "yon";

/// Links a tens word to a following "one" (`venteyen`, `tranteyen`).
pub const ONE_INFIX: &str = "ey";

pub const FIRST_ORDINAL: &str = "premye";
pub const ORDINAL_SUFFIX: &str = "yèm";
pub const FIRST_ORDINAL_NUM_SUFFIX: &str = "er";

/// Irregular ordinal endings, tried in this order; the first cardinal
/// suffix that matches is replaced and no other entry is tried.
pub const ORDINAL_SUFFIXES: [(&str, &str); 7] = [
    ("de", "dezyem"),
    ("twa", "twazyem"),
    ("kat", "katriyem"),
    ("sis", "sizyem"),
    ("nèf", "nèvyem"),
    ("dis", "dizyem"),
    ("san", "santyem"),
];

pub const CURRENCY_FORMS: [(&str, CurrencyForms); 6] = [
    ("EUR", CurrencyForms::new(("euro", "euro"), ("sant", "santim"))),
    ("USD", CurrencyForms::new(("dola", "dola"), ("sant", "santim"))),
    ("FRF", CurrencyForms::new(("fran", "frans"), ("sant", "santim"))),
    ("GBP", CurrencyForms::new(("liv", "liv"), ("penny", "pence"))),
    ("CNY", CurrencyForms::new(("yuan", "yuans"), ("fen", "jiaos"))),
    ("HTG", CurrencyForms::new(("goud", "goud"), ("santim", "santim"))),
];

pub const CURRENCY_SEPARATOR: &str = " ey";

pub static TEXT: LocaleText = LocaleText {
    negword: "mwens ",
    pointword: "vigil",
    errmsg_nonnum: "Se nimewo sèlman ki ka konvèti an mo.",
    errmsg_toobig: "Nimewo twò gwo pou konvèti an mo (abs({value}) > {limit}).",
    errmsg_floatord: "Cannot treat float {value} as ordinal.",
    errmsg_negord: "Cannot treat negative num {value} as ordinal.",
    exclude_title: &["ey", "vigil", "mwens"],
};

/// Build the full card list: scale words, then mid and low words.
pub fn build() -> Vocabulary {
    Vocabulary::builder()
        .high(european_scale_words(MEGA_SUFFIX, GIGA_SUFFIX))
        .mid(&MID_WORDS)
        .low(&LOW_WORDS)
        .build()
}

/// Currency names for a code, if Haitian Creole has them.
pub fn currency_forms(code: &str) -> Option<CurrencyForms> {
    CURRENCY_FORMS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, forms)| *forms)
}
