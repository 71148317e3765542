use std::path::PathBuf;

use clap::{ArgAction, Parser};
use n2w_core::ConversionKind;

#[derive(Parser, Debug)]
#[command(
    name = "n2w",
    about = "Spell out numbers in words",
    version
)]
pub struct Cli {
    /// Number to convert, e.g. 21 or -3.5
    #[arg(allow_negative_numbers = true)]
    pub number: String,

    /// Language code (ht, ht_HT, ht-HT)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// What to convert the number into
    #[arg(long = "to", value_enum, default_value = "cardinal")]
    pub to: Target,

    /// ISO 4217 currency code for --to currency
    #[arg(long)]
    pub currency: Option<String>,

    /// Print cents as digits instead of words
    #[arg(long)]
    pub no_cents: bool,

    /// Text between the major and minor amounts
    #[arg(long, allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Prefix the major unit with the currency adjective
    #[arg(long)]
    pub adjective: bool,

    /// Capitalize each word of cardinal and year output
    #[arg(long)]
    pub title: bool,

    /// TOML file with default settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Target {
    Cardinal,
    Ordinal,
    OrdinalNum,
    Year,
    Currency,
}

impl From<Target> for ConversionKind {
    fn from(target: Target) -> Self {
        match target {
            Target::Cardinal => ConversionKind::Cardinal,
            Target::Ordinal => ConversionKind::Ordinal,
            Target::OrdinalNum => ConversionKind::OrdinalNum,
            Target::Year => ConversionKind::Year,
            Target::Currency => ConversionKind::Currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_number() {
        let cli = Cli::try_parse_from(["n2w", "-21"]).unwrap();
        assert_eq!(cli.number, "-21");
        assert_eq!(cli.to, Target::Cardinal);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_currency_flags() {
        let cli = Cli::try_parse_from([
            "n2w", "--to", "currency", "--currency", "HTG", "--no-cents", "--separator", " e",
            "12.05",
        ])
        .unwrap();
        assert_eq!(ConversionKind::from(cli.to), ConversionKind::Currency);
        assert_eq!(cli.currency.as_deref(), Some("HTG"));
        assert!(cli.no_cents);
        assert_eq!(cli.separator.as_deref(), Some(" e"));
    }

    #[test]
    fn ordinal_num_is_kebab_case() {
        let cli = Cli::try_parse_from(["n2w", "--to", "ordinal-num", "-vv", "3"]).unwrap();
        assert_eq!(ConversionKind::from(cli.to), ConversionKind::OrdinalNum);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn number_is_required() {
        assert!(Cli::try_parse_from(["n2w", "--title"]).is_err());
    }
}
