// Tokenizer-facing layer over `katsuyo_text`.
//
// Takes sentences already tagged by an external morphological analyzer
// (UniDic-style tags, serialized as JSON) and maps them onto composition
// values, then rebuilds or rewrites predicates with them.
//
// Architecture:
// - `token.rs`: serde `Token` / `Inflection` and the token file format
// - `detector.rs`: `SourceDetector` and `AppendantDetector`
// - `builder.rs`: `KatsuyoTextBuilder`, compose a source with what follows
// - `converter.rs`: `SentenceConverter`, helper substitution per sentence
// - `config.rs`: `ConverterConfig`, JSON config with an embedded default
// - `error.rs`: `RewriteError`
//
// Diagnostics go through `tracing`; this crate never installs a
// subscriber (the `katsuyo` binary does).

pub mod builder;
pub mod config;
pub mod converter;
pub mod detector;
pub mod error;
pub mod token;

pub use builder::{BuildOutcome, KatsuyoTextBuilder};
pub use config::{ConverterConfig, default_config};
pub use converter::SentenceConverter;
pub use detector::{AppendantDetector, SourceDetector};
pub use error::RewriteError;
pub use token::{Inflection, Pos, Token, sentences_from_json};
