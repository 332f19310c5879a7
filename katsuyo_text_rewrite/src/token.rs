// Pre-tagged tokens as produced by an external morphological analyzer.
//
// This crate never tokenizes. Callers run Sudachi / MeCab / spaCy-ja (or
// anything else emitting UniDic-style tags) and hand over the result as
// JSON. The field set is the minimum the detectors need: surface, lemma,
// normalized form, universal POS, the analyzer's fine-grained tag, and the
// conjugation type / form pair for inflecting words.
//
// File format (see `sentences_from_json`):
//   { "sentences": [ [ {token}, {token}, ... ], ... ] }

use serde::{Deserialize, Serialize};

/// Universal dependencies part of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

/// Conjugation type and form, e.g. `五段-バ行` / `連用形-一般`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inflection {
    pub conjugation_type: String,
    pub conjugation_form: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text as it appears in the sentence.
    pub text: String,
    /// Dictionary form (遊ぶ for 遊ん).
    pub lemma: String,
    /// Normalized form (無い for ない). Falls back to `lemma` when absent.
    #[serde(default)]
    pub norm: Option<String>,
    pub pos: Pos,
    /// Fine-grained analyzer tag, e.g. `動詞-一般`, `助詞-副助詞`.
    pub tag: String,
    #[serde(default)]
    pub inflection: Option<Inflection>,
}

impl Token {
    pub fn norm(&self) -> &str {
        self.norm.as_deref().unwrap_or(&self.lemma)
    }

    pub fn conjugation_type(&self) -> Option<&str> {
        self.inflection
            .as_ref()
            .map(|inf| inf.conjugation_type.as_str())
    }

    pub fn conjugation_form(&self) -> Option<&str> {
        self.inflection
            .as_ref()
            .map(|inf| inf.conjugation_form.as_str())
    }
}

/// The top-level JSON structure for a token file.
#[derive(Debug, Deserialize)]
struct TokenFile {
    sentences: Vec<Vec<Token>>,
}

/// Parse tagged sentences from a JSON string.
pub fn sentences_from_json(json: &str) -> Result<Vec<Vec<Token>>, serde_json::Error> {
    let file: TokenFile = serde_json::from_str(json)?;
    Ok(file.sentences)
}
