use anyhow::Context;
use tracing::debug;

use n2w_core::{ConversionKind, Converter};

use crate::cli::Cli;
use crate::config::Settings;
use crate::registry;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let words = convert(&cli)?;
    println!("{words}");
    Ok(())
}

/// Build the converter described by the config file and flags, then convert.
pub fn convert(cli: &Cli) -> anyhow::Result<String> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.apply(cli);
    debug!(?settings, "effective settings");

    let locale = registry::resolve(&settings.lang, settings.features)?;
    let converter = Converter::from_boxed(locale).with_config(settings.converter);
    let kind = ConversionKind::from(cli.to);

    converter
        .convert(&cli.number, kind)
        .with_context(|| format!("cannot convert {} to {kind}", cli.number))
}
