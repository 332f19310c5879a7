// Sentence rewriting by helper substitution.
//
// Walks a tagged sentence left to right. When a token carries a helper
// listed in the conversion table (e.g. ます), the token before it is taken
// as the source, the replacement helper (if any) is attached, and every
// following appendant is re-applied on top. The pending text is rendered
// when the chain ends, in the slot the analyzer reported for the last
// consumed token, so 遊びました。 with ます removed becomes 遊んだ。 rather
// than 遊んだ + 。 glued onto the wrong form.
//
// Tokens outside a rewritten chain are copied through verbatim.

use std::collections::BTreeMap;

use katsuyo_text::registry::slot_for_conjugation_form;
use katsuyo_text::{Appendant, Helper, Slot, Source};
use tracing::{debug, warn};

use crate::config::ConverterConfig;
use crate::detector::{AppendantDetector, SourceDetector};
use crate::error::RewriteError;
use crate::token::Token;

#[derive(Debug, Clone)]
pub struct SentenceConverter {
    conversions: BTreeMap<Helper, Option<Helper>>,
    keep_on_error: bool,
    sources: SourceDetector,
    trigger: AppendantDetector,
    chain: AppendantDetector,
}

impl SentenceConverter {
    pub fn new(config: &ConverterConfig) -> Self {
        SentenceConverter {
            conversions: config.conversions.clone(),
            keep_on_error: config.keep_on_error,
            sources: SourceDetector::new(),
            trigger: AppendantDetector::new(config.conversions.keys().copied()),
            chain: AppendantDetector::all(),
        }
    }

    /// Rewrite one sentence, or report why it could not be rewritten.
    pub fn convert(&self, sentence: &[Token]) -> Result<String, RewriteError> {
        let Some(first) = sentence.first() else {
            return Ok(String::new());
        };
        let mut result = String::new();
        let mut prev = first;
        let mut prev_index = 0;
        let mut pending: Option<Source> = None;

        for (index, token) in sentence.iter().enumerate().skip(1) {
            match pending.take() {
                None => match self.triggered_helper(sentence, index) {
                    Some(helper) => {
                        let source = self
                            .sources
                            .detect(sentence, prev_index)
                            .ok_or_else(|| RewriteError::unsupported(prev, "no source before helper"))?;
                        pending = Some(match self.conversions.get(&helper).copied().flatten() {
                            Some(replacement) => {
                                debug!(from = helper.label(), to = replacement.label(), "substituting helper");
                                source.append(replacement)?
                            }
                            None => {
                                debug!(helper = helper.label(), "dropping helper");
                                source
                            }
                        });
                    }
                    None => result.push_str(&prev.text),
                },
                Some(current) => match self.chain.try_detect(sentence, index) {
                    Ok(Some(appendant)) => pending = Some(current.append(appendant)?),
                    outcome => {
                        if let Err(e) = outcome {
                            debug!(error = %e, "chain ends at unsupported token");
                        }
                        result.push_str(&render_pending(&current, prev)?);
                    }
                },
            }
            prev = token;
            prev_index = index;
        }

        match pending {
            Some(current) => result.push_str(&render_pending(&current, prev)?),
            None => result.push_str(&prev.text),
        }
        Ok(result)
    }

    /// Rewrite a sentence; on failure, log and fall back to the original
    /// text when `keep_on_error` is set.
    pub fn convert_or_keep(&self, sentence: &[Token]) -> Result<String, RewriteError> {
        match self.convert(sentence) {
            Ok(text) => Ok(text),
            Err(e) if self.keep_on_error => {
                warn!(error = %e, "keeping sentence unchanged");
                Ok(sentence.iter().map(|t| t.text.as_str()).collect())
            }
            Err(e) => Err(e),
        }
    }

    /// Helper at `index` if it is one the conversion table names.
    fn triggered_helper(&self, sentence: &[Token], index: usize) -> Option<Helper> {
        match self.trigger.try_detect(sentence, index) {
            Ok(Some(Appendant::Helper(helper))) => Some(helper),
            _ => None,
        }
    }
}

/// Render a pending text in the form the analyzer saw on `last`. Texts
/// that are already resolved render as-is.
fn render_pending(current: &Source, last: &Token) -> Result<String, RewriteError> {
    let Some(text) = current.as_katsuyo() else {
        return Ok(current.render());
    };
    let slot = last
        .conjugation_form()
        .and_then(|form| match form {
            // ぬ: conclusive written with the 撥音便 variant (ん).
            "終止形-撥音便" if last.lemma == "ぬ" => Some(Slot::Conclusive),
            _ => slot_for_conjugation_form(form),
        })
        .ok_or_else(|| RewriteError::unsupported(last, "no conjugation form to render"))?;
    text.form(slot)
        .ok_or_else(|| RewriteError::unsupported(last, "paradigm has no form for this slot"))
}
