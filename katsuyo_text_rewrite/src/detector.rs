// Token detectors: map analyzer tokens onto composition values.
//
// `SourceDetector` turns the head word of a phrase into a `Source`
// (inflecting verb/adjective stem + paradigm, or a plain noun).
// `AppendantDetector` recognizes the tokens that follow it: auxiliaries via
// the registry, the adjective 無い, そう, adverbial and final particles, and
// the split のに. Detection never composes anything; the builder and the
// converter do that.
//
// Two readings need context from the left: そう (appearance after the
// continuative / a stem, hearsay after a conclusive) and のに (final
// particle only when the の follows an attributive or conclusive form).

use std::collections::BTreeSet;

use katsuyo_text::katsuyo::{
    GODAN_IKU, KEIYOUDOUSHI, KEIYOUSHI, SA_HENKAKU_SURU, SA_HENKAKU_ZURU, Slot,
};
use katsuyo_text::particle::{self, FINAL_NONI};
use katsuyo_text::registry::{
    self, AuxiliaryReading, paradigm_for_conjugation_type, slot_family,
};
use katsuyo_text::{
    Appendant, Helper, KatsuyoText, NonKatsuyoKind, NonKatsuyoText, Source, kuru, kuru_kanji,
};

use crate::error::RewriteError;
use crate::token::{Pos, Token};

/// Verbs conjugated on the 行く table (促音便 いっ instead of いい).
const IKU_LEMMAS: &[&str] = &["行く", "逝く", "往く", "いく", "ゆく"];

/// Helpers whose auxiliary is absorbed into the source or left alone unless
/// explicitly asked for: だ/です close a nominal predicate, ます is the
/// politeness layer a converter usually targets.
const CLOSING_HELPERS: [Helper; 3] = [Helper::Copula, Helper::PoliteCopula, Helper::Polite];

fn without_last_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next_back();
    chars.as_str()
}

/// Detects the head of an inflecting phrase.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceDetector;

impl SourceDetector {
    pub fn new() -> Self {
        SourceDetector
    }

    /// Detect the source at `index`, or `None` when the token cannot head a
    /// phrase the composition layer understands.
    pub fn detect(&self, sentence: &[Token], index: usize) -> Option<Source> {
        let token = sentence.get(index)?;
        let next = sentence.get(index + 1);

        if token.tag.starts_with("動詞") {
            return self.detect_verb(token);
        }
        if token.tag.starts_with("形容詞") {
            return Some(KatsuyoText::new(without_last_char(&token.lemma), &KEIYOUSHI).into());
        }
        if token.tag.starts_with("形状詞") {
            return Some(KatsuyoText::new(token.lemma.as_str(), &KEIYOUDOUSHI).into());
        }
        if token.tag.starts_with("名詞") {
            let next_lemma = next.map(|t| t.lemma.as_str());
            if token.pos == Pos::Verb || next_lemma == Some("する") {
                // サ変 noun: 勉強 + する
                return Some(KatsuyoText::new(token.lemma.as_str(), &SA_HENKAKU_SURU).into());
            }
            if token.pos == Pos::Adj || next_lemma == Some("だ") {
                return Some(KatsuyoText::new(token.lemma.as_str(), &KEIYOUDOUSHI).into());
            }
            return Some(NonKatsuyoText::noun(token.text.as_str()).into());
        }

        let kind = match token.tag.split('-').next().unwrap_or_default() {
            "副詞" => NonKatsuyoKind::Adverb,
            "接頭辞" | "連体詞" => NonKatsuyoKind::Prefix,
            "感動詞" => NonKatsuyoKind::Interjection,
            "接続詞" => NonKatsuyoKind::Conjunction,
            "代名詞" => NonKatsuyoKind::Noun,
            "記号" | "補助記号" => NonKatsuyoKind::Symbol,
            _ => return None,
        };
        Some(NonKatsuyoText::new(kind, token.text.as_str()).into())
    }

    fn detect_verb(&self, token: &Token) -> Option<Source> {
        let lemma = token.lemma.as_str();
        if IKU_LEMMAS.contains(&lemma) {
            return Some(KatsuyoText::new(without_last_char(lemma), &GODAN_IKU).into());
        }
        let conjugation_type = token.conjugation_type()?;
        if let Some(paradigm) = paradigm_for_conjugation_type(conjugation_type) {
            return Some(KatsuyoText::new(without_last_char(lemma), paradigm).into());
        }
        match conjugation_type {
            "カ行変格" => match lemma {
                "来る" => Some(kuru_kanji().into()),
                "くる" => Some(kuru().into()),
                _ => None,
            },
            "サ行変格" => {
                if let Some(stem) = lemma.strip_suffix("する") {
                    Some(KatsuyoText::new(stem, &SA_HENKAKU_SURU).into())
                } else {
                    lemma
                        .strip_suffix("ずる")
                        .map(|stem| KatsuyoText::new(stem, &SA_HENKAKU_ZURU).into())
                }
            }
            _ => None,
        }
    }
}

/// Detects appendants (auxiliaries, particles, helpers) among the tokens
/// following a source.
#[derive(Debug, Clone)]
pub struct AppendantDetector {
    helpers: BTreeSet<Helper>,
}

impl AppendantDetector {
    /// Detector that only reports the given helpers. Particles are always
    /// reported.
    pub fn new(helpers: impl IntoIterator<Item = Helper>) -> Self {
        AppendantDetector {
            helpers: helpers.into_iter().collect(),
        }
    }

    /// Detector for every helper except the closing ones (だ, です, ます).
    pub fn all() -> Self {
        Self::new(
            Helper::ALL
                .into_iter()
                .filter(|h| !CLOSING_HELPERS.contains(h)),
        )
    }

    pub fn helpers(&self) -> &BTreeSet<Helper> {
        &self.helpers
    }

    /// `Ok(None)` means "not an appendant"; `Err` means the token looks like
    /// one but is not supported.
    pub fn try_detect(
        &self,
        sentence: &[Token],
        index: usize,
    ) -> Result<Option<Appendant>, RewriteError> {
        let Some(token) = sentence.get(index) else {
            return Ok(None);
        };
        let norm = token.norm();

        match token.pos {
            Pos::Aux => match registry::auxiliary_reading(norm) {
                Some(AuxiliaryReading::Helper(helper)) => self.helper(token, helper),
                Some(AuxiliaryReading::Sou) => self.detect_sou(sentence, index),
                Some(AuxiliaryReading::Ignored) => Ok(None),
                None => Err(RewriteError::unsupported(token, "unknown auxiliary")),
            },
            Pos::Adj if norm == "無い" => self.helper(token, Helper::Negation),
            Pos::Adv if norm == "そう" => self.detect_sou(sentence, index),
            _ if token.tag == "助詞-副助詞" => Ok(particle::lookup(
                NonKatsuyoKind::AdverbialParticle,
                &token.text,
            )
            .map(Appendant::from)),
            _ if token.tag == "助詞-終助詞" => {
                Ok(particle::lookup(NonKatsuyoKind::FinalParticle, &token.text)
                    .map(Appendant::from))
            }
            Pos::Adp | Pos::Sconj if norm == "に" => Ok(self.detect_noni(sentence, index)),
            _ => Ok(None),
        }
    }

    fn helper(&self, token: &Token, helper: Helper) -> Result<Option<Appendant>, RewriteError> {
        if self.helpers.contains(&helper) {
            Ok(Some(helper.into()))
        } else if CLOSING_HELPERS.contains(&helper) {
            Ok(None)
        } else {
            Err(RewriteError::unsupported(token, "helper not enabled"))
        }
    }

    /// そう of appearance (降りそう, 美しそう, 静かそう) vs hearsay (降るそう,
    /// 美しいそう, 静かだそう).
    fn detect_sou(
        &self,
        sentence: &[Token],
        index: usize,
    ) -> Result<Option<Appendant>, RewriteError> {
        let token = &sentence[index];
        let Some(left) = index.checked_sub(1).and_then(|i| sentence.get(i)) else {
            return Err(RewriteError::unsupported(token, "そう without a predecessor"));
        };
        let family = left.conjugation_form().and_then(slot_family);
        let stem = left
            .conjugation_form()
            .is_some_and(|form| form.starts_with("語幹"));

        let helper = if left.tag.starts_with("動詞") {
            match family {
                Some(Slot::Continuative) => Helper::Appearance,
                Some(Slot::Conclusive | Slot::Attributive) => Helper::Hearsay,
                _ => return Err(RewriteError::unsupported(token, "そう after this verb form")),
            }
        } else if left.tag.contains("形容詞") {
            if stem {
                Helper::Appearance
            } else if matches!(family, Some(Slot::Conclusive | Slot::Attributive)) {
                Helper::Hearsay
            } else {
                return Err(RewriteError::unsupported(token, "そう after this adjective form"));
            }
        } else if left.pos == Pos::Aux && left.text == "だ" {
            Helper::Hearsay
        } else if left.tag.contains("形状詞") || (left.pos == Pos::Adj && left.tag.starts_with("名詞"))
        {
            Helper::Appearance
        } else {
            return Err(RewriteError::unsupported(token, "そう after this token"));
        };
        self.helper(token, helper)
    }

    /// の + に after an attributive/conclusive form is the final particle のに.
    fn detect_noni(&self, sentence: &[Token], index: usize) -> Option<Appendant> {
        let no = sentence.get(index.checked_sub(1)?)?;
        if no.norm() != "の" {
            return None;
        }
        let before = sentence.get(index.checked_sub(2)?)?;
        let form = before.conjugation_form()?;
        (form.starts_with("連体形") || form.starts_with("終止形")).then_some(FINAL_NONI.into())
    }
}

impl Default for AppendantDetector {
    fn default() -> Self {
        Self::all()
    }
}
