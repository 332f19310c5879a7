// CLI entry point for katsuyo.
//
// Two modes. `compose` attaches helpers to a stem and prints the result;
// `convert` rewrites pre-tagged sentences with a helper substitution
// config. Diagnostics (skipped appendants, substitutions) go to stderr via
// tracing; set `RUST_LOG=debug` to see them.
//
// Usage:
//   katsuyo compose [OPTIONS]
//     --stem <STEM>           Stem text, e.g. 遊 (default: empty)
//     --paradigm <NAME>       Paradigm name, e.g. godan-ba
//     --noun <TEXT>           Start from a noun instead of a stem
//     --helper <LABEL>        Helper to attach, repeatable, in order
//   katsuyo convert [OPTIONS]
//     --tokens <FILE>         Tagged sentences as JSON (required)
//     --config <FILE>         Converter config JSON (default: embedded)
//
// Argument handling returns `Err(message)` instead of exiting so it can be
// tested; `main` prints the message and exits with status 1.

use katsuyo_text::katsuyo::paradigm_by_name;
use katsuyo_text::{Helper, KatsuyoText, NonKatsuyoText, Source};
use katsuyo_text_rewrite::{ConverterConfig, SentenceConverter, default_config, sentences_from_json};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        Some("compose") => compose(&args[2..]).map(|text| vec![text]),
        Some("convert") => parse_convert_args(&args[2..]).and_then(|parsed| convert(&parsed)),
        _ => Err("Usage: katsuyo <compose|convert> [OPTIONS]".to_string()),
    };
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

/// Take the value following a flag.
fn flag_value(args: &[String], i: usize, flag: &str) -> Result<String, String> {
    args.get(i)
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {path}: {e}"))
}

/// Parse `compose` arguments into a starting source plus helpers in order.
fn parse_compose_args(args: &[String]) -> Result<(Source, Vec<Helper>), String> {
    let mut stem = String::new();
    let mut paradigm = None;
    let mut noun = None;
    let mut helpers = Vec::new();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--stem" => {
                i += 1;
                stem = flag_value(args, i, "--stem")?;
            }
            "--paradigm" => {
                i += 1;
                let name = flag_value(args, i, "--paradigm")?;
                paradigm = Some(
                    paradigm_by_name(&name).ok_or_else(|| format!("Unknown paradigm: {name}"))?,
                );
            }
            "--noun" => {
                i += 1;
                noun = Some(flag_value(args, i, "--noun")?);
            }
            "--helper" => {
                i += 1;
                let label = flag_value(args, i, "--helper")?;
                helpers.push(
                    Helper::from_label(&label).ok_or_else(|| format!("Unknown helper: {label}"))?,
                );
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    let source: Source = match (noun, paradigm) {
        (Some(text), None) => NonKatsuyoText::noun(text).into(),
        (None, Some(paradigm)) => KatsuyoText::new(stem, paradigm).into(),
        _ => return Err("compose requires exactly one of --paradigm or --noun".to_string()),
    };
    Ok((source, helpers))
}

/// Run `compose`: attach every helper in order and render the result.
fn compose(args: &[String]) -> Result<String, String> {
    let (mut source, helpers) = parse_compose_args(args)?;
    for helper in helpers {
        source = source
            .append(helper)
            .map_err(|e| format!("Cannot attach {}: {e}", helper.label()))?;
    }
    Ok(source.render())
}

/// Parsed `convert` arguments.
#[derive(Debug, PartialEq)]
struct ConvertArgs {
    tokens_path: String,
    config: ConverterConfig,
}

fn parse_convert_args(args: &[String]) -> Result<ConvertArgs, String> {
    let mut tokens_path = None;
    let mut config = None;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--tokens" => {
                i += 1;
                tokens_path = Some(flag_value(args, i, "--tokens")?);
            }
            "--config" => {
                i += 1;
                let path = flag_value(args, i, "--config")?;
                let json = read_file(&path)?;
                config = Some(
                    ConverterConfig::from_json(&json)
                        .map_err(|e| format!("Invalid config {path}: {e}"))?,
                );
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    let tokens_path = tokens_path.ok_or_else(|| "convert requires --tokens <FILE>".to_string())?;
    Ok(ConvertArgs {
        tokens_path,
        config: config.unwrap_or_else(default_config),
    })
}

/// Run `convert`: one output line per input sentence.
fn convert(args: &ConvertArgs) -> Result<Vec<String>, String> {
    let json = read_file(&args.tokens_path)?;
    let sentences = sentences_from_json(&json)
        .map_err(|e| format!("Invalid token file {}: {e}", args.tokens_path))?;
    let converter = SentenceConverter::new(&args.config);
    sentences
        .iter()
        .map(|sentence| {
            converter
                .convert_or_keep(sentence)
                .map_err(|e| format!("Conversion failed: {e}"))
        })
        .collect()
}
