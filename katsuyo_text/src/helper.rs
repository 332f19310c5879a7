// Helpers: grammatical meanings that choose their own morpheme and bridge
// around predecessors that cannot take it directly.
//
// Each helper is a stateless rule object implementing `HelperRule`:
// - `try_direct` picks the auxiliary or particle that expresses the meaning
//   for this predecessor and attaches it. `Ok(None)` means "not applicable
//   here"; it is a routing signal, not a failure, and is never logged.
// - `bridge` runs only after `Ok(None)`. It inserts a connective word (に
//   なる, で は, の, ...) and attaches through it. The default bridge fails.
// - `resolve` is the two-phase driver; `Helper::merge` calls it.
//
// `Helper` is the closed set of meanings and doubles as the registry key
// for detectors and sentence conversion config. `Helper::rule()` maps each
// key to its `'static` rule object.
//
// The politeness and copula helpers (`Copula`, `PoliteCopula`, `Polite`)
// refuse predecessors already closed by た / です / ます with
// `AttachmentError::HelperOrder`, which tells the caller to apply them
// earlier in the chain (遊びました, not 遊んだ + ます).

use serde::{Deserialize, Serialize};

use crate::auxiliary::{Auxiliary, Subsidiary};
use crate::error::{AttachmentError, Describe};
use crate::katsuyo::{GODAN_RA, KEIYOUSHI, SA_HENKAKU_ZURU, SHIMO_ICHIDAN, Slot};
use crate::particle::{BINDING_HA, CASE_DE, CASE_NI, CASE_NO, NOMINAL_NO};
use crate::text::{KatsuyoText, NonKatsuyoKind, Source};

/// A grammatical meaning that can be attached to any predecessor it has a
/// rule or a bridge for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Helper {
    /// 受身: れる / られる.
    Passive,
    /// 使役: せる / させる.
    Causative,
    /// 否定: ない.
    Negation,
    /// 希望 (self): たい.
    Desire,
    /// 希望 (others): たがる.
    DesireOthers,
    /// 過去・完了: た / だ.
    Past,
    /// 様態: そうだ.
    Appearance,
    /// 伝聞: そうだ.
    Hearsay,
    /// 推定: らしい.
    Inference,
    /// 当然: べきだ.
    Obligation,
    /// 比況・例示: ようだ.
    Likeness,
    /// 継続: ている / でいる.
    Progressive,
    /// 断定: だ.
    Copula,
    /// 断定 (polite): です.
    PoliteCopula,
    /// 丁寧: ます.
    Polite,
}

impl Helper {
    pub const ALL: [Helper; 15] = [
        Helper::Passive,
        Helper::Causative,
        Helper::Negation,
        Helper::Desire,
        Helper::DesireOthers,
        Helper::Past,
        Helper::Appearance,
        Helper::Hearsay,
        Helper::Inference,
        Helper::Obligation,
        Helper::Likeness,
        Helper::Progressive,
        Helper::Copula,
        Helper::PoliteCopula,
        Helper::Polite,
    ];

    /// The rule object for this meaning.
    pub fn rule(self) -> &'static dyn HelperRule {
        match self {
            Helper::Passive => &PassiveRule,
            Helper::Causative => &CausativeRule,
            Helper::Negation => &NegationRule,
            Helper::Desire => &DesireRule,
            Helper::DesireOthers => &DesireOthersRule,
            Helper::Past => &PastRule,
            Helper::Appearance => &AppearanceRule,
            Helper::Hearsay => &HearsayRule,
            Helper::Inference => &InferenceRule,
            Helper::Obligation => &ObligationRule,
            Helper::Likeness => &LikenessRule,
            Helper::Progressive => &ProgressiveRule,
            Helper::Copula => &CopulaRule,
            Helper::PoliteCopula => &PoliteCopulaRule,
            Helper::Polite => &PoliteRule,
        }
    }

    pub fn merge(self, pre: &Source) -> Result<Source, AttachmentError> {
        self.rule().resolve(pre)
    }

    pub fn label(self) -> &'static str {
        match self {
            Helper::Passive => "passive",
            Helper::Causative => "causative",
            Helper::Negation => "negation",
            Helper::Desire => "desire",
            Helper::DesireOthers => "desire_others",
            Helper::Past => "past",
            Helper::Appearance => "appearance",
            Helper::Hearsay => "hearsay",
            Helper::Inference => "inference",
            Helper::Obligation => "obligation",
            Helper::Likeness => "likeness",
            Helper::Progressive => "progressive",
            Helper::Copula => "copula",
            Helper::PoliteCopula => "polite_copula",
            Helper::Polite => "polite",
        }
    }

    /// Inverse of `label()`.
    pub fn from_label(label: &str) -> Option<Helper> {
        Helper::ALL.into_iter().find(|h| h.label() == label)
    }
}

impl Describe for Helper {
    fn describe(&self) -> String {
        format!("Helper({})", self.label())
    }
}

/// Direct attachment plus optional bridge, per helper.
pub trait HelperRule: Sync {
    fn helper(&self) -> Helper;

    /// Attach directly, or `Ok(None)` if this predecessor needs a bridge.
    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError>;

    /// Attach through a connective. Runs only after `try_direct` returned
    /// `Ok(None)`.
    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        Err(self.unsupported(pre))
    }

    fn resolve(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match self.try_direct(pre)? {
            Some(result) => Ok(result),
            None => self.bridge(pre),
        }
    }

    fn unsupported(&self, pre: &Source) -> AttachmentError {
        AttachmentError::unsupported(pre, &self.helper())
    }
}

// ---------------------------------------------------------------------------
// Shared predicates and connectives
// ---------------------------------------------------------------------------

fn verb(pre: &Source) -> Option<&KatsuyoText> {
    pre.as_katsuyo().filter(|kt| kt.class().is_verb())
}

fn adjectival(pre: &Source) -> Option<&KatsuyoText> {
    pre.as_katsuyo().filter(|kt| kt.class().is_adjectival())
}

/// Predecessor already closed by た, です, or ます.
fn closed_by_auxiliary(pre: &Source) -> bool {
    pre.class().is_some_and(|c| c.is_auxiliary())
}

fn defines(pre: &Source, slot: Slot) -> bool {
    pre.as_katsuyo().is_some_and(|kt| kt.paradigm.defines(slot))
}

/// Non-inflecting kinds that can stand before に in a passive or causative
/// bridge.
fn noun_like(kind: NonKatsuyoKind) -> bool {
    matches!(
        kind,
        NonKatsuyoKind::Noun
            | NonKatsuyoKind::Symbol
            | NonKatsuyoKind::CaseParticle
            | NonKatsuyoKind::AdverbialParticle
    )
}

/// なる (become), used by the passive bridge.
fn naru() -> KatsuyoText {
    KatsuyoText::new("な", &GODAN_RA)
}

/// させる as a plain verb, used by the causative bridge.
fn saseru() -> KatsuyoText {
    KatsuyoText::new("させ", &SHIMO_ICHIDAN)
}

/// ない as a plain adjective: attaches to any non-inflecting text by
/// concatenation.
fn plain_nai() -> KatsuyoText {
    KatsuyoText::new("な", &KEIYOUSHI)
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

struct PassiveRule;

impl HelperRule for PassiveRule {
    fn helper(&self) -> Helper {
        Helper::Passive
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        let Some(kt) = verb(pre) else {
            return Ok(None);
        };
        let aux = if *kt.paradigm == SA_HENKAKU_ZURU {
            Auxiliary::Rareru
        } else if kt.paradigm.irrealis_in_a_row() || kt.paradigm.defines(Slot::IrrealisReru) {
            Auxiliary::Reru
        } else {
            Auxiliary::Rareru
        };
        pre.append(aux).map(Some)
    }

    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match pre {
            Source::NonKatsuyo(text) if noun_like(text.kind) => pre
                .append(CASE_NI)?
                .append(naru())?
                .append(Auxiliary::Reru),
            _ if adjectival(pre).is_some() => pre.append(naru())?.append(Auxiliary::Reru),
            _ => Err(self.unsupported(pre)),
        }
    }
}

struct CausativeRule;

impl HelperRule for CausativeRule {
    fn helper(&self) -> Helper {
        Helper::Causative
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        let Some(kt) = verb(pre) else {
            return Ok(None);
        };
        let aux = if *kt.paradigm == SA_HENKAKU_ZURU {
            Auxiliary::Saseru
        } else if kt.paradigm.irrealis_in_a_row() || kt.paradigm.defines(Slot::IrrealisReru) {
            Auxiliary::Seru
        } else {
            Auxiliary::Saseru
        };
        pre.append(aux).map(Some)
    }

    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match pre {
            Source::NonKatsuyo(text) if noun_like(text.kind) => {
                pre.append(CASE_NI)?.append(saseru())
            }
            _ if adjectival(pre).is_some() => pre.append(saseru()),
            _ => Err(self.unsupported(pre)),
        }
    }
}

struct NegationRule;

impl HelperRule for NegationRule {
    fn helper(&self) -> Helper {
        Helper::Negation
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        match verb(pre) {
            Some(_) => pre.append(Auxiliary::Nai).map(Some),
            None => Ok(None),
        }
    }

    /// Adjectives take the subsidiary ない. Nominals take ではない; never a
    /// bare ない after a noun.
    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        use NonKatsuyoKind as K;
        if adjectival(pre).is_some() {
            return pre.append(Subsidiary::Nai);
        }
        let Source::NonKatsuyo(text) = pre else {
            return Err(self.unsupported(pre));
        };
        match text.kind {
            K::BindingParticle | K::CaseParticle | K::NominalParticle | K::Adverb | K::Interjection => {
                pre.append(plain_nai())
            }
            K::ConjunctiveParticle | K::Conjunction => pre.append(BINDING_HA)?.append(plain_nai()),
            K::Noun | K::Prefix | K::Symbol | K::AdverbialParticle | K::FinalParticle => pre
                .append(CASE_DE)?
                .append(BINDING_HA)?
                .append(plain_nai()),
        }
    }
}

struct DesireRule;

impl HelperRule for DesireRule {
    fn helper(&self) -> Helper {
        Helper::Desire
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        match verb(pre) {
            Some(_) => pre.append(Auxiliary::Tai).map(Some),
            None => Ok(None),
        }
    }
}

struct DesireOthersRule;

impl HelperRule for DesireOthersRule {
    fn helper(&self) -> Helper {
        Helper::DesireOthers
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        match verb(pre) {
            Some(_) => pre.append(Auxiliary::Tagaru).map(Some),
            None => Ok(None),
        }
    }
}

struct PastRule;

impl HelperRule for PastRule {
    fn helper(&self) -> Helper {
        Helper::Past
    }

    /// Anything with a continuative. Voiced godan verbs take だ.
    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        let Some(kt) = pre.as_katsuyo().filter(|kt| kt.paradigm.defines(Slot::Continuative))
        else {
            return Ok(None);
        };
        let aux = if kt.paradigm.is_voiced_past() {
            Auxiliary::DaPast
        } else {
            Auxiliary::Ta
        };
        pre.append(aux).map(Some)
    }

    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match pre {
            Source::NonKatsuyo(_) => pre.append(Auxiliary::DaCopula)?.append(Auxiliary::Ta),
            _ => Err(self.unsupported(pre)),
        }
    }
}

struct AppearanceRule;

impl HelperRule for AppearanceRule {
    fn helper(&self) -> Helper {
        Helper::Appearance
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        if defines(pre, Slot::Continuative) {
            pre.append(Auxiliary::SouAppearance).map(Some)
        } else {
            Ok(None)
        }
    }
}

struct HearsayRule;

impl HelperRule for HearsayRule {
    fn helper(&self) -> Helper {
        Helper::Hearsay
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        if defines(pre, Slot::Conclusive) {
            pre.append(Auxiliary::SouHearsay).map(Some)
        } else {
            Ok(None)
        }
    }

    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match pre {
            Source::NonKatsuyo(_) => pre
                .append(Auxiliary::DaCopula)?
                .append(Auxiliary::SouHearsay),
            _ => Err(self.unsupported(pre)),
        }
    }
}

struct InferenceRule;

impl HelperRule for InferenceRule {
    fn helper(&self) -> Helper {
        Helper::Inference
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        if defines(pre, Slot::Conclusive) {
            pre.append(Auxiliary::Rashii).map(Some)
        } else {
            Ok(None)
        }
    }

    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match pre {
            Source::NonKatsuyo(_) => pre.append(Auxiliary::Rashii),
            _ => Err(self.unsupported(pre)),
        }
    }
}

struct ObligationRule;

impl HelperRule for ObligationRule {
    fn helper(&self) -> Helper {
        Helper::Obligation
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        match verb(pre) {
            Some(_) => pre.append(Auxiliary::Bekida).map(Some),
            None => Ok(None),
        }
    }

    /// Through ある: 状態であるべきだ, 美しくあるべきだ.
    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match pre {
            Source::NonKatsuyo(_) => pre
                .append(CASE_DE)?
                .append(Subsidiary::Aru)?
                .append(Auxiliary::Bekida),
            _ if adjectival(pre).is_some() => {
                pre.append(Subsidiary::Aru)?.append(Auxiliary::Bekida)
            }
            _ => Err(self.unsupported(pre)),
        }
    }
}

struct LikenessRule;

impl HelperRule for LikenessRule {
    fn helper(&self) -> Helper {
        Helper::Likeness
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        if defines(pre, Slot::Attributive) {
            pre.append(Auxiliary::Youda).map(Some)
        } else {
            Ok(None)
        }
    }

    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match pre {
            Source::NonKatsuyo(_) => pre.append(CASE_NO)?.append(Auxiliary::Youda),
            _ => Err(self.unsupported(pre)),
        }
    }
}

struct ProgressiveRule;

impl HelperRule for ProgressiveRule {
    fn helper(&self) -> Helper {
        Helper::Progressive
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        let Some(kt) = verb(pre) else {
            return Ok(None);
        };
        let aux = if kt.paradigm.is_voiced_past() {
            Auxiliary::Deiru
        } else {
            Auxiliary::Teiru
        };
        pre.append(aux).map(Some)
    }

    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match pre {
            Source::NonKatsuyo(text)
                if !matches!(
                    text.kind,
                    NonKatsuyoKind::ConjunctiveParticle
                        | NonKatsuyoKind::FinalParticle
                        | NonKatsuyoKind::BindingParticle
                ) =>
            {
                pre.append(Auxiliary::Deiru)
            }
            _ if adjectival(pre).is_some() => pre.append(Subsidiary::Iru),
            _ => Err(self.unsupported(pre)),
        }
    }
}

struct CopulaRule;

impl HelperRule for CopulaRule {
    fn helper(&self) -> Helper {
        Helper::Copula
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        if closed_by_auxiliary(pre) {
            return Err(AttachmentError::helper_order(pre, &self.helper()));
        }
        match pre {
            Source::NonKatsuyo(_) => pre.append(Auxiliary::DaCopula).map(Some),
            _ => Ok(None),
        }
    }

    /// Predicates are nominalized with の first: 遊ぶのだ, 綺麗なのだ.
    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        if verb(pre).is_some() || adjectival(pre).is_some() {
            pre.append(NOMINAL_NO)?.append(Auxiliary::DaCopula)
        } else {
            Err(self.unsupported(pre))
        }
    }
}

struct PoliteCopulaRule;

impl PoliteCopulaRule {
    /// です directly after nominals and adjectives.
    fn attach_desu(pre: &Source) -> Option<Result<Source, AttachmentError>> {
        match pre {
            Source::NonKatsuyo(_) => Some(pre.append(Auxiliary::Desu)),
            _ if adjectival(pre).is_some() => Some(pre.append(Auxiliary::Desu)),
            _ => None,
        }
    }
}

impl HelperRule for PoliteCopulaRule {
    fn helper(&self) -> Helper {
        Helper::PoliteCopula
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        if closed_by_auxiliary(pre) {
            return Err(AttachmentError::helper_order(pre, &self.helper()));
        }
        PoliteCopulaRule::attach_desu(pre).transpose()
    }

    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match verb(pre) {
            Some(_) => pre.append(NOMINAL_NO)?.append(Auxiliary::Desu),
            None => Err(self.unsupported(pre)),
        }
    }
}

struct PoliteRule;

impl HelperRule for PoliteRule {
    fn helper(&self) -> Helper {
        Helper::Polite
    }

    fn try_direct(&self, pre: &Source) -> Result<Option<Source>, AttachmentError> {
        if closed_by_auxiliary(pre) {
            return Err(AttachmentError::helper_order(pre, &self.helper()));
        }
        match verb(pre) {
            Some(_) => pre.append(Auxiliary::Masu).map(Some),
            None => Ok(None),
        }
    }

    /// Non-verbs have no ます form; fall back to です.
    fn bridge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        PoliteCopulaRule::attach_desu(pre).unwrap_or_else(|| Err(self.unsupported(pre)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::katsuyo::{
        GODAN_BA, GODAN_GA, GODAN_IKU, GODAN_KA, GODAN_MA, GODAN_NA, GODAN_RA, GODAN_SA,
        GODAN_TA, GODAN_WA, KA_HENKAKU_KURU, KA_HENKAKU_KURU_KANJI, KAMI_ICHIDAN, KEIYOUDOUSHI,
        Paradigm, SA_HENKAKU_SURU,
    };
    use crate::particle::{ADVERBIAL_HODO, BINDING_MO, CASE_GA, CONJ_TE, FINAL_NO};
    use crate::text::{FixedKatsuyoText, NonKatsuyoText};

    fn kt(stem: &str, paradigm: &'static Paradigm) -> Source {
        Source::Katsuyo(KatsuyoText::new(stem, paradigm))
    }

    fn non(kind: NonKatsuyoKind, text: &str) -> Source {
        Source::from(NonKatsuyoText::new(kind, text))
    }

    fn asobu() -> Source {
        kt("遊", &GODAN_BA)
    }

    fn utsukushii() -> Source {
        kt("美し", &KEIYOUSHI)
    }

    fn kirei() -> Source {
        kt("綺麗", &KEIYOUDOUSHI)
    }

    fn joutai() -> Source {
        Source::from(NonKatsuyoText::noun("状態"))
    }

    fn aux_sources() -> [Source; 3] {
        [
            Source::from(Auxiliary::Ta),
            Source::from(Auxiliary::Desu),
            Source::from(Auxiliary::Masu),
        ]
    }

    fn render(pre: &Source, helper: Helper) -> String {
        match pre.append(helper) {
            Ok(result) => result.render(),
            Err(e) => panic!("{helper:?} on {}: {e}", pre.render()),
        }
    }

    #[test]
    fn test_passive() {
        assert_eq!(render(&asobu(), Helper::Passive), "遊ばれる");
        assert_eq!(render(&kt("見", &KAMI_ICHIDAN), Helper::Passive), "見られる");
        assert_eq!(render(&kt("", &KA_HENKAKU_KURU), Helper::Passive), "こられる");
        assert_eq!(render(&kt("来", &KA_HENKAKU_KURU_KANJI), Helper::Passive), "来られる");
        assert_eq!(render(&kt("尊重", &SA_HENKAKU_SURU), Helper::Passive), "尊重される");
        assert_eq!(render(&kt("重ん", &SA_HENKAKU_ZURU), Helper::Passive), "重んぜられる");
        assert_eq!(render(&kt("買", &GODAN_WA), Helper::Passive), "買われる");
    }

    #[test]
    fn test_passive_bridge() {
        assert_eq!(render(&joutai(), Helper::Passive), "状態になられる");
        assert_eq!(render(&utsukushii(), Helper::Passive), "美しくなられる");
        assert_eq!(render(&kirei(), Helper::Passive), "綺麗になられる");
        assert_eq!(render(&CASE_NO.to_source(), Helper::Passive), "のになられる");
        assert_eq!(render(&ADVERBIAL_HODO.to_source(), Helper::Passive), "ほどになられる");
        assert_eq!(render(&non(NonKatsuyoKind::Symbol, "🥺"), Helper::Passive), "🥺になられる");
        for refused in [
            CONJ_TE.to_source(),
            FINAL_NO.to_source(),
            NOMINAL_NO.to_source(),
            non(NonKatsuyoKind::Adverb, "かなり"),
            non(NonKatsuyoKind::Interjection, "ほら"),
            non(NonKatsuyoKind::Conjunction, "しかし"),
            non(NonKatsuyoKind::Prefix, "前々"),
        ] {
            assert!(refused.append(Helper::Passive).is_err(), "{refused}");
        }
        for aux in aux_sources() {
            assert!(aux.append(Helper::Passive).is_err(), "{aux}");
        }
    }

    #[test]
    fn test_causative() {
        assert_eq!(render(&asobu(), Helper::Causative), "遊ばせる");
        assert_eq!(render(&kt("見", &KAMI_ICHIDAN), Helper::Causative), "見させる");
        assert_eq!(render(&kt("", &KA_HENKAKU_KURU), Helper::Causative), "こさせる");
        assert_eq!(render(&kt("尊重", &SA_HENKAKU_SURU), Helper::Causative), "尊重させる");
        assert_eq!(render(&kt("重ん", &SA_HENKAKU_ZURU), Helper::Causative), "重んじさせる");
        assert_eq!(render(&joutai(), Helper::Causative), "状態にさせる");
        assert_eq!(render(&utsukushii(), Helper::Causative), "美しくさせる");
        assert_eq!(render(&kirei(), Helper::Causative), "綺麗にさせる");
        for aux in aux_sources() {
            assert!(aux.append(Helper::Causative).is_err(), "{aux}");
        }
    }

    #[test]
    fn test_negation() {
        assert_eq!(render(&asobu(), Helper::Negation), "遊ばない");
        assert_eq!(render(&kt("", &KA_HENKAKU_KURU), Helper::Negation), "こない");
        assert_eq!(render(&kt("尊重", &SA_HENKAKU_SURU), Helper::Negation), "尊重しない");
        assert_eq!(render(&kt("重ん", &SA_HENKAKU_ZURU), Helper::Negation), "重んじない");
        assert_eq!(render(&utsukushii(), Helper::Negation), "美しくない");
        assert_eq!(render(&kirei(), Helper::Negation), "綺麗でない");
        for aux in aux_sources() {
            assert!(aux.append(Helper::Negation).is_err(), "{aux}");
        }
    }

    #[test]
    fn test_negation_bridge_per_kind() {
        let cases = [
            (NonKatsuyoText::noun("状況"), "状況ではない"),
            (NonKatsuyoText::new(NonKatsuyoKind::BindingParticle, "も"), "もない"),
            (NonKatsuyoText::new(NonKatsuyoKind::CaseParticle, "が"), "がない"),
            (NonKatsuyoText::new(NonKatsuyoKind::NominalParticle, "の"), "のない"),
            (NonKatsuyoText::new(NonKatsuyoKind::Adverb, "かなり"), "かなりない"),
            (NonKatsuyoText::new(NonKatsuyoKind::Interjection, "ほら"), "ほらない"),
            (NonKatsuyoText::new(NonKatsuyoKind::Conjunction, "しかし"), "しかしはない"),
            (NonKatsuyoText::new(NonKatsuyoKind::ConjunctiveParticle, "て"), "てはない"),
            (NonKatsuyoText::new(NonKatsuyoKind::FinalParticle, "の"), "のではない"),
            (NonKatsuyoText::new(NonKatsuyoKind::AdverbialParticle, "ほど"), "ほどではない"),
            (NonKatsuyoText::new(NonKatsuyoKind::Prefix, "前々"), "前々ではない"),
            (NonKatsuyoText::new(NonKatsuyoKind::Symbol, "🥺"), "🥺ではない"),
        ];
        for (text, expected) in cases {
            assert_eq!(render(&Source::from(text), Helper::Negation), expected);
        }
    }

    #[test]
    fn test_desire() {
        assert_eq!(render(&asobu(), Helper::Desire), "遊びたい");
        assert_eq!(render(&kt("", &KA_HENKAKU_KURU), Helper::Desire), "きたい");
        assert_eq!(render(&asobu(), Helper::DesireOthers), "遊びたがる");
        let err = utsukushii().append(Helper::Desire).unwrap_err();
        assert_eq!(err.appendant(), "Helper(desire)");
        assert!(joutai().append(Helper::DesireOthers).is_err());
    }

    #[test]
    fn test_past() {
        let cases: [(Source, &str); 19] = [
            (kt("歩", &GODAN_KA), "歩いた"),
            (kt("稼", &GODAN_GA), "稼いだ"),
            (kt("話", &GODAN_SA), "話した"),
            (kt("待", &GODAN_TA), "待った"),
            (kt("死", &GODAN_NA), "死んだ"),
            (asobu(), "遊んだ"),
            (kt("読", &GODAN_MA), "読んだ"),
            (kt("帰", &GODAN_RA), "帰った"),
            (kt("買", &GODAN_WA), "買った"),
            (kt("行", &GODAN_IKU), "行った"),
            (kt("見", &KAMI_ICHIDAN), "見た"),
            (kt("", &KA_HENKAKU_KURU), "きた"),
            (kt("尊重", &SA_HENKAKU_SURU), "尊重した"),
            (kt("重ん", &SA_HENKAKU_ZURU), "重んじた"),
            (utsukushii(), "美しかった"),
            (kirei(), "綺麗だった"),
            (Source::from(Auxiliary::Desu), "でした"),
            (Source::from(Auxiliary::Masu), "ました"),
            (joutai(), "状態だった"),
        ];
        for (pre, expected) in cases {
            assert_eq!(render(&pre, Helper::Past), expected);
        }
        assert!(Source::from(Auxiliary::Ta).append(Helper::Past).is_err());
    }

    #[test]
    fn test_voiced_past_is_decided_by_conclusive_kana() {
        // A kami-ichidan verb whose stem ends in a voiced kana is still
        // unvoiced: the check looks at the paradigm, not the stem.
        assert_eq!(render(&kt("浴び", &KAMI_ICHIDAN), Helper::Past), "浴びた");
        // 行く has a sokuon past but is not voiced.
        assert_eq!(render(&kt("行", &GODAN_IKU), Helper::Progressive), "行っている");
    }

    #[test]
    fn test_appearance() {
        assert_eq!(render(&asobu(), Helper::Appearance), "遊びそうだ");
        assert_eq!(render(&utsukushii(), Helper::Appearance), "美しそうだ");
        assert_eq!(render(&kirei(), Helper::Appearance), "綺麗そうだ");
        for aux in aux_sources() {
            assert!(aux.append(Helper::Appearance).is_err(), "{aux}");
        }
        assert!(joutai().append(Helper::Appearance).is_err());
    }

    #[test]
    fn test_hearsay() {
        assert_eq!(render(&asobu(), Helper::Hearsay), "遊ぶそうだ");
        assert_eq!(render(&utsukushii(), Helper::Hearsay), "美しいそうだ");
        assert_eq!(render(&kirei(), Helper::Hearsay), "綺麗だそうだ");
        assert_eq!(render(&Source::from(Auxiliary::Ta), Helper::Hearsay), "たそうだ");
        assert_eq!(render(&Source::from(Auxiliary::Desu), Helper::Hearsay), "ですそうだ");
        assert_eq!(render(&Source::from(Auxiliary::Masu), Helper::Hearsay), "ますそうだ");
        assert_eq!(render(&joutai(), Helper::Hearsay), "状態だそうだ");
    }

    #[test]
    fn test_inference() {
        assert_eq!(render(&asobu(), Helper::Inference), "遊ぶらしい");
        assert_eq!(render(&utsukushii(), Helper::Inference), "美しいらしい");
        assert_eq!(render(&kirei(), Helper::Inference), "綺麗らしい");
        assert_eq!(render(&Source::from(Auxiliary::Ta), Helper::Inference), "たらしい");
        assert_eq!(render(&joutai(), Helper::Inference), "状態らしい");
    }

    #[test]
    fn test_obligation() {
        assert_eq!(render(&asobu(), Helper::Obligation), "遊ぶべきだ");
        assert_eq!(render(&kt("尊重", &SA_HENKAKU_SURU), Helper::Obligation), "尊重するべきだ");
        assert_eq!(render(&utsukushii(), Helper::Obligation), "美しくあるべきだ");
        assert_eq!(render(&kirei(), Helper::Obligation), "綺麗であるべきだ");
        assert_eq!(render(&joutai(), Helper::Obligation), "状態であるべきだ");
        for aux in aux_sources() {
            assert!(aux.append(Helper::Obligation).is_err(), "{aux}");
        }
    }

    #[test]
    fn test_likeness() {
        assert_eq!(render(&asobu(), Helper::Likeness), "遊ぶようだ");
        assert_eq!(render(&kirei(), Helper::Likeness), "綺麗なようだ");
        assert_eq!(render(&Source::from(Auxiliary::Ta), Helper::Likeness), "たようだ");
        assert_eq!(render(&joutai(), Helper::Likeness), "状態のようだ");
    }

    #[test]
    fn test_progressive() {
        assert_eq!(render(&kt("歩", &GODAN_KA), Helper::Progressive), "歩いている");
        assert_eq!(render(&kt("稼", &GODAN_GA), Helper::Progressive), "稼いでいる");
        assert_eq!(render(&kt("", &KA_HENKAKU_KURU), Helper::Progressive), "きている");
        assert_eq!(render(&joutai(), Helper::Progressive), "状態でいる");
        assert_eq!(render(&CASE_GA.to_source(), Helper::Progressive), "がでいる");
        assert_eq!(render(&utsukushii(), Helper::Progressive), "美しくいる");
        assert_eq!(render(&kirei(), Helper::Progressive), "綺麗でいる");
        for refused in [CONJ_TE.to_source(), FINAL_NO.to_source(), BINDING_MO.to_source()] {
            assert!(refused.append(Helper::Progressive).is_err(), "{refused}");
        }
        for aux in aux_sources() {
            assert!(aux.append(Helper::Progressive).is_err(), "{aux}");
        }
    }

    #[test]
    fn test_copula_family() {
        assert_eq!(render(&asobu(), Helper::Copula), "遊ぶのだ");
        assert_eq!(render(&utsukushii(), Helper::Copula), "美しいのだ");
        assert_eq!(render(&kirei(), Helper::Copula), "綺麗なのだ");
        assert_eq!(render(&joutai(), Helper::Copula), "状態だ");

        assert_eq!(render(&asobu(), Helper::PoliteCopula), "遊ぶのです");
        assert_eq!(render(&utsukushii(), Helper::PoliteCopula), "美しいです");
        assert_eq!(render(&kirei(), Helper::PoliteCopula), "綺麗です");
        assert_eq!(render(&joutai(), Helper::PoliteCopula), "状態です");

        assert_eq!(render(&asobu(), Helper::Polite), "遊びます");
        assert_eq!(render(&utsukushii(), Helper::Polite), "美しいです");
        assert_eq!(render(&kirei(), Helper::Polite), "綺麗です");
        assert_eq!(render(&joutai(), Helper::Polite), "状態です");
    }

    #[test]
    fn test_copula_family_after_tense_or_politeness_is_an_ordering_error() {
        for helper in [Helper::Copula, Helper::PoliteCopula, Helper::Polite] {
            for aux in aux_sources() {
                let err = aux.append(helper).unwrap_err();
                assert!(err.is_helper_order(), "{helper:?} after {aux}: {err}");
            }
            let past = asobu().append(Helper::Past).unwrap();
            assert!(past.append(helper).unwrap_err().is_helper_order());
        }
        // The reordered chain works.
        let polite_past = asobu()
            .append(Helper::Polite)
            .and_then(|s| s.append(Helper::Past))
            .unwrap();
        assert_eq!(polite_past.render(), "遊びました");
    }

    #[test]
    fn test_fixed_predecessor_has_no_bridge() {
        let fixed = Source::from(FixedKatsuyoText::new("遊", "び"));
        for helper in Helper::ALL {
            assert!(fixed.append(helper).is_err(), "{helper:?}");
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for helper in Helper::ALL {
            assert_eq!(Helper::from_label(helper.label()), Some(helper));
            let json = serde_json::to_string(&helper).unwrap();
            assert_eq!(json, format!("\"{}\"", helper.label()));
        }
        assert_eq!(Helper::from_label("nope"), None);
    }

    #[test]
    fn test_rule_reports_its_helper() {
        for helper in Helper::ALL {
            assert_eq!(helper.rule().helper(), helper);
        }
    }
}
