// Bare auxiliary morphemes (助動詞) and subsidiary words (補助用言).
//
// Each `Auxiliary` is itself an inflecting word (stem + paradigm, see
// `katsuyo_text()`) with one attach rule: which slot it needs from a verb
// or adjective, and which non-inflecting predecessors it accepts as-is.
// Attaching never bridges. A predecessor the rule does not cover is an
// `AttachmentError`; `helper.rs` decides which auxiliary to use and supplies
// bridges.
//
// A fixed predecessor (`FixedKatsuyoText`) is always accepted: its slot has
// already been chosen by whoever built it.

use serde::{Deserialize, Serialize};

use crate::error::{AttachmentError, Describe};
use crate::katsuyo::{
    AUX_DA_PAST, AUX_DESU, AUX_MASU, AUX_TA, GODAN_RA, KAMI_ICHIDAN, KEIYOUDOUSHI, KEIYOUSHI,
    ParadigmClass, SHIMO_ICHIDAN, Slot,
};
use crate::text::{KatsuyoText, NonKatsuyoKind, Source};

/// Continuative-before-た first, plain continuative otherwise. Used by
/// every rule that builds on the た / て connection.
pub(crate) const TA_CONNECTION: [Slot; 2] = [Slot::ContinuativeTa, Slot::Continuative];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Auxiliary {
    /// Passive れる.
    Reru,
    /// Passive られる.
    Rareru,
    /// Causative せる.
    Seru,
    /// Causative させる.
    Saseru,
    /// Negative ない.
    Nai,
    /// Desire たい.
    Tai,
    /// Third-person desire たがる.
    Tagaru,
    /// Past た.
    Ta,
    /// Voiced past だ (読んだ).
    DaPast,
    /// Polite ます.
    Masu,
    /// そうだ of appearance (様態).
    SouAppearance,
    /// そうだ of hearsay (伝聞).
    SouHearsay,
    /// Inference らしい.
    Rashii,
    /// Obligation べきだ.
    Bekida,
    /// Likeness ようだ.
    Youda,
    /// Polite copula です.
    Desu,
    /// Plain copula だ.
    DaCopula,
    /// Progressive ている.
    Teiru,
    /// Progressive でいる (読んでいる).
    Deiru,
}

impl Auxiliary {
    pub const ALL: [Auxiliary; 19] = [
        Auxiliary::Reru,
        Auxiliary::Rareru,
        Auxiliary::Seru,
        Auxiliary::Saseru,
        Auxiliary::Nai,
        Auxiliary::Tai,
        Auxiliary::Tagaru,
        Auxiliary::Ta,
        Auxiliary::DaPast,
        Auxiliary::Masu,
        Auxiliary::SouAppearance,
        Auxiliary::SouHearsay,
        Auxiliary::Rashii,
        Auxiliary::Bekida,
        Auxiliary::Youda,
        Auxiliary::Desu,
        Auxiliary::DaCopula,
        Auxiliary::Teiru,
        Auxiliary::Deiru,
    ];

    /// The morpheme as an inflecting word. Also usable as a standalone
    /// source (e.g. a sentence-initial です).
    pub fn katsuyo_text(self) -> KatsuyoText {
        let (stem, paradigm) = match self {
            Auxiliary::Reru => ("れ", &SHIMO_ICHIDAN),
            Auxiliary::Rareru => ("られ", &SHIMO_ICHIDAN),
            Auxiliary::Seru => ("せ", &SHIMO_ICHIDAN),
            Auxiliary::Saseru => ("させ", &SHIMO_ICHIDAN),
            Auxiliary::Nai => ("な", &KEIYOUSHI),
            Auxiliary::Tai => ("た", &KEIYOUSHI),
            Auxiliary::Tagaru => ("たが", &GODAN_RA),
            Auxiliary::Ta => ("", &AUX_TA),
            Auxiliary::DaPast => ("", &AUX_DA_PAST),
            Auxiliary::Masu => ("ま", &AUX_MASU),
            Auxiliary::SouAppearance | Auxiliary::SouHearsay => ("そう", &KEIYOUDOUSHI),
            Auxiliary::Rashii => ("らし", &KEIYOUSHI),
            Auxiliary::Bekida => ("べき", &KEIYOUDOUSHI),
            Auxiliary::Youda => ("よう", &KEIYOUDOUSHI),
            Auxiliary::Desu => ("で", &AUX_DESU),
            Auxiliary::DaCopula => ("", &KEIYOUDOUSHI),
            Auxiliary::Teiru => ("てい", &KAMI_ICHIDAN),
            Auxiliary::Deiru => ("でい", &KAMI_ICHIDAN),
        };
        KatsuyoText::new(stem, paradigm)
    }

    pub fn label(self) -> &'static str {
        match self {
            Auxiliary::Reru => "れる",
            Auxiliary::Rareru => "られる",
            Auxiliary::Seru => "せる",
            Auxiliary::Saseru => "させる",
            Auxiliary::Nai => "ない",
            Auxiliary::Tai => "たい",
            Auxiliary::Tagaru => "たがる",
            Auxiliary::Ta => "た",
            Auxiliary::DaPast => "だ(past)",
            Auxiliary::Masu => "ます",
            Auxiliary::SouAppearance => "そうだ(appearance)",
            Auxiliary::SouHearsay => "そうだ(hearsay)",
            Auxiliary::Rashii => "らしい",
            Auxiliary::Bekida => "べきだ",
            Auxiliary::Youda => "ようだ",
            Auxiliary::Desu => "です",
            Auxiliary::DaCopula => "だ(copula)",
            Auxiliary::Teiru => "ている",
            Auxiliary::Deiru => "でいる",
        }
    }

    pub fn merge(self, pre: &Source) -> Result<Source, AttachmentError> {
        let prefix = match pre {
            Source::Fixed(fixed) => Some(fixed.render()),
            Source::NonKatsuyo(text) => self
                .accepts_non_katsuyo(text.kind)
                .then(|| text.text.clone()),
            Source::Katsuyo(kt) => self.katsuyo_prefix(kt),
        };
        prefix
            .map(|text| Source::joined_katsuyo(text, &self.katsuyo_text()))
            .ok_or_else(|| AttachmentError::unsupported(pre, &self))
    }

    fn accepts_non_katsuyo(self, kind: NonKatsuyoKind) -> bool {
        match self {
            Auxiliary::SouAppearance
            | Auxiliary::Rashii
            | Auxiliary::Desu
            | Auxiliary::DaCopula
            | Auxiliary::Deiru => true,
            Auxiliary::Youda => kind == NonKatsuyoKind::CaseParticle,
            _ => false,
        }
    }

    /// The surface of an inflecting predecessor this morpheme attaches to.
    fn katsuyo_prefix(self, kt: &KatsuyoText) -> Option<String> {
        let class = kt.class();
        let verb_form = |slot| if class.is_verb() { kt.form(slot) } else { None };
        match self {
            Auxiliary::Reru | Auxiliary::Seru if class == ParadigmClass::SaHenkaku => {
                kt.form(Slot::IrrealisReru)
            }
            Auxiliary::Rareru if class == ParadigmClass::SaHenkaku => kt.form(Slot::IrrealisRareru),
            Auxiliary::Reru
            | Auxiliary::Rareru
            | Auxiliary::Seru
            | Auxiliary::Saseru
            | Auxiliary::Nai => verb_form(Slot::Irrealis),
            Auxiliary::Tai | Auxiliary::Tagaru | Auxiliary::Masu => verb_form(Slot::Continuative),
            Auxiliary::Bekida => verb_form(Slot::Conclusive),
            Auxiliary::Ta | Auxiliary::DaPast | Auxiliary::Teiru | Auxiliary::Deiru => {
                kt.first_form(&TA_CONNECTION)
            }
            Auxiliary::SouAppearance => match class {
                ParadigmClass::AuxDesu | ParadigmClass::AuxMasu => None,
                ParadigmClass::Keiyoushi | ParadigmClass::Keiyoudoushi => Some(kt.stem.clone()),
                _ => kt.form(Slot::Continuative),
            },
            Auxiliary::SouHearsay => kt.form(Slot::Conclusive),
            Auxiliary::Rashii => match class {
                ParadigmClass::Keiyoudoushi => Some(kt.stem.clone()),
                _ => kt.form(Slot::Conclusive),
            },
            Auxiliary::Youda => kt.form(Slot::Attributive),
            Auxiliary::Desu => match class {
                ParadigmClass::Keiyoushi | ParadigmClass::AuxTa => kt.form(Slot::Attributive),
                ParadigmClass::Keiyoudoushi => Some(kt.stem.clone()),
                _ => None,
            },
            // The copula only follows nominals; verbs go through の.
            Auxiliary::DaCopula => None,
        }
    }
}

impl Describe for Auxiliary {
    fn describe(&self) -> String {
        format!("Auxiliary({})", self.label())
    }
}

impl From<Auxiliary> for Source {
    fn from(aux: Auxiliary) -> Self {
        Source::Katsuyo(aux.katsuyo_text())
    }
}

// ---------------------------------------------------------------------------
// Subsidiary words
// ---------------------------------------------------------------------------

/// 補助用言: ない, ある, いる used after a connective rather than as
/// independent words (美しくない, 綺麗である, 歩いている).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subsidiary {
    Nai,
    Aru,
    Iru,
}

impl Subsidiary {
    pub fn katsuyo_text(self) -> KatsuyoText {
        match self {
            Subsidiary::Nai => KatsuyoText::new("な", &KEIYOUSHI),
            Subsidiary::Aru => KatsuyoText::new("あ", &GODAN_RA),
            Subsidiary::Iru => KatsuyoText::new("い", &KAMI_ICHIDAN),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Subsidiary::Nai => "ない",
            Subsidiary::Aru => "ある",
            Subsidiary::Iru => "いる",
        }
    }

    /// Case particles take the word directly (がない, である). Adjectives
    /// use the continuative, adjectival nouns the pre-negation で, verbs
    /// the te-form.
    pub fn merge(self, pre: &Source) -> Result<Source, AttachmentError> {
        let prefix = match pre {
            Source::Fixed(fixed) => Some(fixed.render()),
            Source::NonKatsuyo(text) => {
                (text.kind == NonKatsuyoKind::CaseParticle).then(|| text.text.clone())
            }
            Source::Katsuyo(kt) => match kt.class() {
                ParadigmClass::Keiyoushi => kt.form(Slot::Continuative),
                ParadigmClass::Keiyoudoushi => kt.form(Slot::ContinuativeNai),
                class if class.is_verb() => {
                    let te = if kt.paradigm.is_voiced_past() { "で" } else { "て" };
                    kt.first_form(&TA_CONNECTION).map(|form| form + te)
                }
                _ => None,
            },
        };
        prefix
            .map(|text| Source::joined_katsuyo(text, &self.katsuyo_text()))
            .ok_or_else(|| AttachmentError::unsupported(pre, &self))
    }
}

impl Describe for Subsidiary {
    fn describe(&self) -> String {
        format!("Subsidiary({})", self.label())
    }
}
