use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use lore_core::lore::LoreRequest;
use lore_core::{EngineConfig, Language, LoreEngine, NameReading};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Reads a name as phonetic symbols and picks its mythical archetype.
#[derive(Parser, Debug)]
#[command(name = "lore_engine", version)]
struct Args {
    /// Name to read. Without it, `[LANGUAGE] NAME` lines are read from stdin.
    #[arg(long)]
    name: Option<String>,

    /// English, Sanskrit, Hindi, Kannada or Arabic.
    #[arg(long, short = 'l', default_value = "English")]
    language: String,

    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON, overriding the config.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Pronunciation dictionary, overriding the config.
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Binary snapshot of the parsed dictionary, overriding the config.
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Read dictionary words with the cluster tokenizer when none of their
    /// symbols are in the catalog.
    #[arg(long)]
    fallback: bool,

    /// Print the collaborator request as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;
    let engine = LoreEngine::from_config(&config).context("failed to build the lore engine")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(name) = &args.name {
        let reading = engine.read_name(name, &args.language)?;
        return emit(&reading, args.json, &mut out);
    }

    writeln!(
        out,
        "Enter `[LANGUAGE] NAME` per line (e.g. `Sanskrit Shankar`). Type 'exit' to quit."
    )?;
    for line in io::stdin().lock().lines() {
        let input = line?;
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" {
            break;
        }

        let (language, name) = split_request(input, &args.language);

        match engine.read_name(name, language) {
            Ok(reading) => emit(&reading, args.json, &mut out)?,
            Err(e) => writeln!(out, "{} {}", "error:".red().bold(), e)?,
        }
    }
    Ok(())
}

/// `Sanskrit Shankar` → (`Sanskrit`, `Shankar`). When the first word is not a
/// supported language the whole line is the name, read in `default_language`.
fn split_request<'a>(input: &'a str, default_language: &'a str) -> (&'a str, &'a str) {
    match input.split_once(char::is_whitespace) {
        Some((first, rest)) if first.parse::<Language>().is_ok() => (first, rest.trim_start()),
        _ => (default_language, input),
    }
}

fn build_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if args.catalog.is_some() {
        config.catalog_path = args.catalog.clone();
    }
    if args.dictionary.is_some() {
        config.dictionary_path = args.dictionary.clone();
    }
    if args.snapshot.is_some() {
        config.snapshot_path = args.snapshot.clone();
    }
    if args.fallback {
        config.fallback_on_empty_dictionary_hit = true;
    }
    Ok(config)
}

fn emit(reading: &NameReading, json: bool, out: &mut impl Write) -> Result<()> {
    let request = LoreRequest::from(reading);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&request)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "\n{} ({}, {:?})",
        format!("The Mythical Lore of {} ({})", reading.name, reading.archetype).bold().cyan(),
        reading.language,
        reading.source
    )?;

    if reading.phonemes.is_empty() {
        writeln!(out, "{}", "No phonemes matched. The lore and image may be limited.".yellow())?;
    } else {
        writeln!(out, "{}", "Phonemes Detected".bold())?;
        writeln!(out, "  {}", reading.phonemes.as_slice().join(", "))?;
        writeln!(out, "{}", "Phoneme Attributes".bold())?;
        for attr in &reading.attributes {
            writeln!(
                out,
                "  {}: {} (Chakra: {}, Element: {}, Bhava: {}, Rasa: {})",
                attr.phoneme.as_str().bold(),
                attr.cultural_notes,
                attr.chakra,
                attr.element,
                attr.bhava,
                attr.rasa
            )?;
        }
    }

    writeln!(out, "{}", "Lore prompt".bold())?;
    writeln!(out, "  {}", request.lore_prompt)?;
    writeln!(out, "{}", "Portrait prompt".bold())?;
    writeln!(out, "  {}", request.portrait_prompt)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_language_is_split_off() {
        assert_eq!(split_request("Sanskrit Shankar", "English"), ("Sanskrit", "Shankar"));
        assert_eq!(split_request("arabic  Noor", "English"), ("arabic", "Noor"));
    }

    #[test]
    fn multi_word_name_keeps_default_language() {
        assert_eq!(split_request("Mary Ann", "English"), ("English", "Mary Ann"));
        assert_eq!(split_request("Arjun", "Hindi"), ("Hindi", "Arjun"));
    }

    #[test]
    fn language_then_multi_word_name() {
        assert_eq!(split_request("Hindi Mary Ann", "English"), ("Hindi", "Mary Ann"));
    }
}
