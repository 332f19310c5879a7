// Registry keys shared with detectors: analyzer tags to paradigms and
// slots, and normalized auxiliary surfaces to helpers.
//
// Tags follow the UniDic conventions used by Sudachi / MeCab analyzers:
// conjugation types like `五段-カ行` and conjugation forms like
// `連用形-促音便`. Irregular verbs whose table depends on the lemma (行く,
// カ行変格, サ行変格) are not keyed here; the source detector in the
// rewrite crate resolves them from the lemma.
//
// Lookups return `None` for unknown keys. Callers treat that as "skip this
// token", never as a failure.

use crate::helper::Helper;
use crate::katsuyo::{
    AUX_DESU, AUX_MASU, AUX_TA, GODAN_BA, GODAN_GA, GODAN_KA, GODAN_MA, GODAN_NA, GODAN_RA,
    GODAN_SA, GODAN_TA, GODAN_WA, KAMI_ICHIDAN, KEIYOUDOUSHI, KEIYOUSHI, Paradigm,
    SHIMO_ICHIDAN, Slot,
};

/// Godan rows by conjugation type tag.
static GODAN_BY_TYPE: &[(&str, &Paradigm)] = &[
    ("五段-カ行", &GODAN_KA),
    ("五段-ガ行", &GODAN_GA),
    ("五段-サ行", &GODAN_SA),
    ("五段-タ行", &GODAN_TA),
    ("五段-ナ行", &GODAN_NA),
    ("五段-バ行", &GODAN_BA),
    ("五段-マ行", &GODAN_MA),
    ("五段-ラ行", &GODAN_RA),
    ("五段-ワア行", &GODAN_WA),
];

/// Paradigm for a conjugation type tag, e.g. `五段-カ行` or `下一段-バ行`.
/// Ichidan rows all share one table; the row only affects the stem.
pub fn paradigm_for_conjugation_type(conjugation_type: &str) -> Option<&'static Paradigm> {
    if let Some((_, paradigm)) = GODAN_BY_TYPE
        .iter()
        .find(|(tag, _)| *tag == conjugation_type)
    {
        return Some(*paradigm);
    }
    if conjugation_type.starts_with("上一段-") {
        return Some(&KAMI_ICHIDAN);
    }
    if conjugation_type.starts_with("下一段-") {
        return Some(&SHIMO_ICHIDAN);
    }
    match conjugation_type {
        "形容詞" => Some(&KEIYOUSHI),
        "助動詞-ダ" => Some(&KEIYOUDOUSHI),
        "助動詞-タ" => Some(&AUX_TA),
        "助動詞-マス" => Some(&AUX_MASU),
        "助動詞-デス" => Some(&AUX_DESU),
        _ => None,
    }
}

/// Slot a conjugation form tag corresponds to, for rendering a pending
/// inflecting text in the form the analyzer observed.
///
/// Only forms that map cleanly onto a slot are recognized. Archaic forms
/// (`-補助`), fused forms (`-融合` outside the conclusive), the ぬ
/// ambiguity (`-撥音便` in conclusive/attributive) and the sa-irregular
/// irrealis variants return `None`; helpers pick those slots themselves.
pub fn slot_for_conjugation_form(form: &str) -> Option<Slot> {
    match form {
        "未然形-一般" | "未然形-撥音便" => Some(Slot::Irrealis),
        "連用形-一般" | "連用形-撥音便" | "連用形-促音便" | "連用形-イ音便" | "連用形-ニ" => {
            Some(Slot::Continuative)
        }
        "終止形-一般" | "終止形-融合" => Some(Slot::Conclusive),
        "連体形-一般" | "連体形-省略" => Some(Slot::Attributive),
        "仮定形-一般" => Some(Slot::Hypothetical),
        "命令形" => Some(Slot::Imperative),
        _ => None,
    }
}

/// Broad slot family of a conjugation form tag, ignoring the variant after
/// the hyphen. Used for context checks such as telling そう of appearance
/// (after 連用形) from そう of hearsay (after 終止形 / 連体形).
pub fn slot_family(form: &str) -> Option<Slot> {
    let head = form.split('-').next().unwrap_or(form);
    match head {
        "未然形" => Some(Slot::Irrealis),
        "意志推量形" => Some(Slot::IrrealisVolitional),
        "連用形" => Some(Slot::Continuative),
        "終止形" => Some(Slot::Conclusive),
        "連体形" => Some(Slot::Attributive),
        "仮定形" => Some(Slot::Hypothetical),
        "命令形" => Some(Slot::Imperative),
        _ => None,
    }
}

/// What a normalized auxiliary surface means to the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxiliaryReading {
    /// Maps to exactly one helper.
    Helper(Helper),
    /// そう: appearance or hearsay, decided by the preceding token.
    Sou,
    /// Known, but carries no meaning the composition layer re-applies
    /// (ちゃう, やがる, the する of サ変 nouns).
    Ignored,
}

/// Look up a normalized auxiliary (助動詞) surface.
pub fn auxiliary_reading(norm: &str) -> Option<AuxiliaryReading> {
    let helper = match norm {
        "れる" | "られる" => Helper::Passive,
        "せる" | "させる" => Helper::Causative,
        "ない" | "ず" | "ぬ" => Helper::Negation,
        "たい" => Helper::Desire,
        "たがる" => Helper::DesireOthers,
        "た" => Helper::Past,
        "らしい" => Helper::Inference,
        "べし" => Helper::Obligation,
        "よう" => Helper::Likeness,
        "てる" => Helper::Progressive,
        "だ" => Helper::Copula,
        "です" => Helper::PoliteCopula,
        "ます" => Helper::Polite,
        "そう" => return Some(AuxiliaryReading::Sou),
        "ちゃう" | "やがる" | "為る" => return Some(AuxiliaryReading::Ignored),
        _ => return None,
    };
    Some(AuxiliaryReading::Helper(helper))
}
