// Builds a composed text from a source token and the appendants that
// follow it in the sentence.
//
// The builder is lenient: an appendant that cannot attach is logged and
// skipped, and the outcome carries a `has_error` flag so callers can tell a
// clean build from a partial one. Scanning stops at the first token that is
// neither an appendant nor ignorable.

use katsuyo_text::{Appendant, Source};
use tracing::warn;

use crate::detector::{AppendantDetector, SourceDetector};
use crate::token::Token;

/// Result of `KatsuyoTextBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// `None` when the source token could not be detected.
    pub source: Option<Source>,
    /// Set when the source token could not be detected, or when any
    /// appendant was skipped or unsupported.
    pub has_error: bool,
}

#[derive(Debug, Clone, Default)]
pub struct KatsuyoTextBuilder {
    sources: SourceDetector,
    appendants: AppendantDetector,
}

impl KatsuyoTextBuilder {
    pub fn new(sources: SourceDetector, appendants: AppendantDetector) -> Self {
        KatsuyoTextBuilder {
            sources,
            appendants,
        }
    }

    /// Attach `appendants` to `root` in order, skipping any that fail.
    /// Returns the composed text and whether anything was skipped.
    pub fn append_multiple(&self, root: Source, appendants: &[Appendant]) -> (Source, bool) {
        let mut result = root;
        let mut has_error = false;
        for appendant in appendants {
            match result.append(appendant) {
                Ok(next) => result = next,
                Err(e) => {
                    warn!(error = %e, text = %result, "skipping appendant");
                    has_error = true;
                }
            }
        }
        (result, has_error)
    }

    /// Collect the appendants directly following `src_index`. Unsupported
    /// tokens are logged, flagged, and skipped; the scan ends at the first
    /// token that is not an appendant.
    pub fn detect_appendants(&self, sentence: &[Token], src_index: usize) -> (Vec<Appendant>, bool) {
        let mut found = Vec::new();
        let mut has_error = false;
        for index in src_index + 1..sentence.len() {
            match self.appendants.try_detect(sentence, index) {
                Ok(Some(appendant)) => found.push(appendant),
                Ok(None) => {
                    if !is_transparent(&sentence[index]) {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "unsupported appendant token");
                    has_error = true;
                }
            }
        }
        (found, has_error)
    }

    /// Detect the source at `src_index` and compose everything that follows.
    /// An undetectable source yields `source: None` with `has_error` set.
    pub fn build(&self, sentence: &[Token], src_index: usize) -> BuildOutcome {
        let Some(root) = self.sources.detect(sentence, src_index) else {
            warn!(index = src_index, "unsupported source token");
            return BuildOutcome {
                source: None,
                has_error: true,
            };
        };
        let (appendants, detect_error) = self.detect_appendants(sentence, src_index);
        let (source, append_error) = self.append_multiple(root, &appendants);
        BuildOutcome {
            source: Some(source),
            has_error: detect_error || append_error,
        }
    }
}

/// Tokens that sit inside a predicate without being appendants themselves:
/// the の before に (のに), the する of サ変 nouns, closing auxiliaries, and
/// subsidiary conjugation pieces.
fn is_transparent(token: &Token) -> bool {
    use crate::token::Pos;
    match token.pos {
        Pos::Aux => true,
        Pos::Sconj | Pos::Adp => token.norm() == "の",
        Pos::Verb => token.tag.contains("非自立"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Pos;
    use crate::token::fixtures::{inflected, token};
    use katsuyo_text::katsuyo::GODAN_BA;
    use katsuyo_text::{Helper, KatsuyoText};

    fn asobu() -> Source {
        KatsuyoText::new("遊", &GODAN_BA).into()
    }

    #[test]
    fn test_append_multiple_all_succeed() {
        let builder = KatsuyoTextBuilder::default();
        let (result, has_error) = builder.append_multiple(
            asobu(),
            &[Helper::Negation.into(), Helper::Past.into()],
        );
        assert_eq!(result.render(), "遊ばなかった");
        assert!(!has_error);
    }

    #[test]
    fn test_append_multiple_skips_failures() {
        let builder = KatsuyoTextBuilder::default();
        let (result, has_error) = builder.append_multiple(
            asobu(),
            &[Helper::Past.into(), Helper::Past.into(), Helper::Hearsay.into()],
        );
        assert_eq!(result.render(), "遊んだそうだ");
        assert!(has_error);
    }

    #[test]
    fn test_build_from_sentence() {
        let sentence = [
            inflected("遊ば", "遊ぶ", Pos::Verb, "動詞-一般", "五段-バ行", "未然形-一般"),
            inflected("なかっ", "ない", Pos::Aux, "助動詞", "助動詞-ナイ", "連用形-促音便"),
            inflected("た", "た", Pos::Aux, "助動詞", "助動詞-タ", "終止形-一般"),
            token("。", "。", Pos::Punct, "補助記号-句点"),
        ];
        let outcome = KatsuyoTextBuilder::default().build(&sentence, 0);
        assert_eq!(outcome.source.unwrap().render(), "遊ばなかった");
        assert!(!outcome.has_error);
    }

    #[test]
    fn test_build_flags_unsupported_tokens() {
        let sentence = [
            inflected("遊ぶ", "遊ぶ", Pos::Verb, "動詞-一般", "五段-バ行", "終止形-一般"),
            token("まい", "まい", Pos::Aux, "助動詞"),
        ];
        let outcome = KatsuyoTextBuilder::default().build(&sentence, 0);
        assert_eq!(outcome.source.unwrap().render(), "遊ぶ");
        assert!(outcome.has_error);
    }

    #[test]
    fn test_build_stops_at_content_word() {
        let sentence = [
            inflected("遊ん", "遊ぶ", Pos::Verb, "動詞-一般", "五段-バ行", "連用形-撥音便"),
            inflected("だ", "た", Pos::Aux, "助動詞", "助動詞-タ", "終止形-一般"),
            token("家", "家", Pos::Noun, "名詞-普通名詞-一般"),
            inflected("た", "た", Pos::Aux, "助動詞", "助動詞-タ", "終止形-一般"),
        ];
        let outcome = KatsuyoTextBuilder::default().build(&sentence, 0);
        assert_eq!(outcome.source.unwrap().render(), "遊んだ");
    }

    #[test]
    fn test_build_without_source_is_flagged() {
        let sentence = [token("が", "が", Pos::Adp, "助詞-格助詞")];
        let outcome = KatsuyoTextBuilder::default().build(&sentence, 0);
        assert_eq!(outcome.source, None);
        assert!(outcome.has_error);
    }

    #[test]
    fn test_build_past_end_is_flagged() {
        let sentence = [token("。", "。", Pos::Punct, "補助記号-句点")];
        let outcome = KatsuyoTextBuilder::default().build(&sentence, 1);
        assert_eq!(outcome.source, None);
        assert!(outcome.has_error);
    }
}
