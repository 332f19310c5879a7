// Particles (助詞) as appendants.
//
// A particle is non-inflecting text plus an attach rule. The rule decides
// which slot an inflecting predecessor must expose and which non-inflecting
// kinds may precede the particle at all. The result is always a
// `NonKatsuyoText` of the particle's category, so later rules see "a case
// particle" or "a conjunctive particle" regardless of which one it was.
//
// The constants below cover the particles the detector registry knows by
// surface text; `lookup()` finds one by category and text.

use serde::{Deserialize, Serialize};

use crate::error::{AttachmentError, Describe};
use crate::katsuyo::{ParadigmClass, Slot};
use crate::text::{KatsuyoText, NonKatsuyoKind, NonKatsuyoText, Source};

/// How a particle attaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleRule {
    /// 格助詞: attributive.
    Case,
    /// 係助詞: continuative (pre-negation form for adjectival nouns).
    Binding,
    /// 副助詞 after the attributive (ばかり, まで).
    AdverbialAttributive,
    /// 副助詞 after the adjectival-noun stem or the attributive (など, か).
    AdverbialStem,
    /// 副助詞 after nominals only (ずつ).
    AdverbialNominal,
    /// 副助詞 きり: attributive of た, continuative of verbs.
    AdverbialKiri,
    /// 接続助詞 て / たって.
    ConjunctiveTe,
    /// 接続助詞 で / だって after voiced godan verbs.
    ConjunctiveDe,
    /// 接続助詞 とも.
    ConjunctiveTomo,
    /// 接続助詞 after verb continuatives (つつ, ながら).
    ConjunctiveContinuative,
    /// 接続助詞 after the conclusive (けれど, から).
    ConjunctiveConclusive,
    /// 接続助詞 after the hypothetical (ば, ど).
    ConjunctiveHypothetical,
    /// 終助詞 after the attributive (の).
    FinalAttributive,
    /// 終助詞 after the conclusive (な).
    FinalConclusive,
    /// 終助詞 after the adjectival-noun stem or the attributive (か).
    FinalStem,
    /// 準体助詞: attributive.
    Nominal,
}

impl ParticleRule {
    /// The category of text a particle with this rule produces.
    pub fn kind(self) -> NonKatsuyoKind {
        match self {
            ParticleRule::Case => NonKatsuyoKind::CaseParticle,
            ParticleRule::Binding => NonKatsuyoKind::BindingParticle,
            ParticleRule::AdverbialAttributive
            | ParticleRule::AdverbialStem
            | ParticleRule::AdverbialNominal
            | ParticleRule::AdverbialKiri => NonKatsuyoKind::AdverbialParticle,
            ParticleRule::ConjunctiveTe
            | ParticleRule::ConjunctiveDe
            | ParticleRule::ConjunctiveTomo
            | ParticleRule::ConjunctiveContinuative
            | ParticleRule::ConjunctiveConclusive
            | ParticleRule::ConjunctiveHypothetical => NonKatsuyoKind::ConjunctiveParticle,
            ParticleRule::FinalAttributive
            | ParticleRule::FinalConclusive
            | ParticleRule::FinalStem => NonKatsuyoKind::FinalParticle,
            ParticleRule::Nominal => NonKatsuyoKind::NominalParticle,
        }
    }

    fn accepts_fixed(self) -> bool {
        self != ParticleRule::AdverbialNominal
    }

    fn accepts_non_katsuyo(self, kind: NonKatsuyoKind) -> bool {
        use NonKatsuyoKind as K;
        match self {
            ParticleRule::Case
            | ParticleRule::Binding
            | ParticleRule::AdverbialAttributive
            | ParticleRule::AdverbialStem
            | ParticleRule::FinalStem
            | ParticleRule::Nominal => true,
            ParticleRule::AdverbialNominal => {
                matches!(kind, K::Noun | K::Symbol | K::NominalParticle)
            }
            ParticleRule::AdverbialKiri => matches!(
                kind,
                K::Noun | K::ConjunctiveParticle | K::Symbol | K::NominalParticle
            ),
            ParticleRule::ConjunctiveTe
            | ParticleRule::ConjunctiveDe
            | ParticleRule::ConjunctiveTomo
            | ParticleRule::ConjunctiveContinuative => kind == K::Symbol,
            ParticleRule::ConjunctiveConclusive
            | ParticleRule::ConjunctiveHypothetical
            | ParticleRule::FinalAttributive => matches!(kind, K::Symbol | K::NominalParticle),
            ParticleRule::FinalConclusive => matches!(
                kind,
                K::Symbol | K::BindingParticle | K::ConjunctiveParticle | K::NominalParticle
            ),
        }
    }
}

/// A particle: surface text plus attach rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Particle {
    pub rule: ParticleRule,
    pub text: &'static str,
}

/// Why an inflecting predecessor was refused.
enum Refusal {
    Unsupported,
    UseInstead(&'static str),
}

impl Particle {
    pub const fn new(rule: ParticleRule, text: &'static str) -> Self {
        Particle { rule, text }
    }

    pub fn kind(self) -> NonKatsuyoKind {
        self.rule.kind()
    }

    /// The particle standing alone as a source.
    pub fn to_source(self) -> Source {
        Source::NonKatsuyo(NonKatsuyoText::new(self.kind(), self.text))
    }

    pub fn merge(self, pre: &Source) -> Result<Source, AttachmentError> {
        let prefix = match pre {
            Source::Fixed(fixed) if self.rule.accepts_fixed() => Ok(fixed.render()),
            Source::NonKatsuyo(text) if self.rule.accepts_non_katsuyo(text.kind) => {
                Ok(text.text.clone())
            }
            Source::Katsuyo(kt) => self.katsuyo_prefix(kt),
            _ => Err(Refusal::Unsupported),
        };
        match prefix {
            Ok(text) => Ok(Source::joined_non_katsuyo(text, self.kind(), self.text)),
            Err(Refusal::Unsupported) => Err(AttachmentError::unsupported(pre, &self)),
            Err(Refusal::UseInstead(expected)) => {
                Err(AttachmentError::wrong_variant(pre, &self, expected))
            }
        }
    }

    fn katsuyo_prefix(self, kt: &KatsuyoText) -> Result<String, Refusal> {
        let class = kt.class();
        let form = match self.rule {
            ParticleRule::Case
            | ParticleRule::AdverbialAttributive
            | ParticleRule::FinalAttributive
            | ParticleRule::Nominal => kt.form(Slot::Attributive),
            ParticleRule::Binding => match class {
                ParadigmClass::AuxDesu | ParadigmClass::AuxMasu => None,
                _ => kt.first_form(&[Slot::ContinuativeNai, Slot::Continuative]),
            },
            ParticleRule::AdverbialStem | ParticleRule::FinalStem => match class {
                ParadigmClass::Keiyoudoushi => Some(kt.stem.clone()),
                _ => kt.form(Slot::Attributive),
            },
            ParticleRule::AdverbialNominal => None,
            ParticleRule::AdverbialKiri => match class {
                ParadigmClass::AuxTa => kt.form(Slot::Attributive),
                c if c.is_verb() => kt.form(Slot::Continuative),
                _ => None,
            },
            ParticleRule::ConjunctiveTe => {
                if kt.paradigm.is_voiced_past() {
                    return Err(Refusal::UseInstead(self.voicing_counterpart()));
                }
                match class {
                    ParadigmClass::Keiyoushi => kt.form(Slot::Continuative),
                    _ => kt.first_form(&[Slot::ContinuativeTa, Slot::Continuative]),
                }
            }
            ParticleRule::ConjunctiveDe => {
                if class.is_verb() && !kt.paradigm.is_voiced_past() {
                    return Err(Refusal::UseInstead(self.voicing_counterpart()));
                }
                if class.is_adjectival() {
                    None
                } else {
                    kt.first_form(&[Slot::ContinuativeTa, Slot::Continuative])
                }
            }
            ParticleRule::ConjunctiveTomo => match class {
                ParadigmClass::Keiyoushi => kt.form(Slot::Continuative),
                _ => kt.form(Slot::Conclusive),
            },
            ParticleRule::ConjunctiveContinuative => {
                if class.is_verb() {
                    kt.form(Slot::Continuative)
                } else {
                    None
                }
            }
            ParticleRule::ConjunctiveConclusive | ParticleRule::FinalConclusive => {
                kt.form(Slot::Conclusive)
            }
            ParticleRule::ConjunctiveHypothetical => match class {
                ParadigmClass::AuxTa | ParadigmClass::AuxDesu => None,
                _ => kt.form(Slot::Hypothetical),
            },
        };
        form.ok_or(Refusal::Unsupported)
    }

    /// て ↔ で, たって ↔ だって.
    fn voicing_counterpart(self) -> &'static str {
        match self.text {
            "て" => "で",
            "で" => "て",
            "たって" => "だって",
            "だって" => "たって",
            other => other,
        }
    }
}

impl Describe for Particle {
    fn describe(&self) -> String {
        format!("Particle[{}] {}", self.kind().label(), self.text)
    }
}

impl From<Particle> for Source {
    fn from(particle: Particle) -> Self {
        particle.to_source()
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub const CASE_GA: Particle = Particle::new(ParticleRule::Case, "が");
pub const CASE_DE: Particle = Particle::new(ParticleRule::Case, "で");
pub const CASE_TO: Particle = Particle::new(ParticleRule::Case, "と");
pub const CASE_NI: Particle = Particle::new(ParticleRule::Case, "に");
pub const CASE_NO: Particle = Particle::new(ParticleRule::Case, "の");
pub const CASE_HE: Particle = Particle::new(ParticleRule::Case, "へ");
pub const CASE_YO: Particle = Particle::new(ParticleRule::Case, "よ");
pub const CASE_WO: Particle = Particle::new(ParticleRule::Case, "を");
pub const CASE_N: Particle = Particle::new(ParticleRule::Case, "ん");
pub const CASE_KARA: Particle = Particle::new(ParticleRule::Case, "から");
pub const CASE_TOTE: Particle = Particle::new(ParticleRule::Case, "とて");
pub const CASE_NITE: Particle = Particle::new(ParticleRule::Case, "にて");
pub const CASE_YORI: Particle = Particle::new(ParticleRule::Case, "より");
pub const CASE_WOBA: Particle = Particle::new(ParticleRule::Case, "をば");

pub const BINDING_MO: Particle = Particle::new(ParticleRule::Binding, "も");
pub const BINDING_HA: Particle = Particle::new(ParticleRule::Binding, "は");
pub const BINDING_KOSO: Particle = Particle::new(ParticleRule::Binding, "こそ");
pub const BINDING_ZO: Particle = Particle::new(ParticleRule::Binding, "ぞ");

pub const ADVERBIAL_BAKARI: Particle = Particle::new(ParticleRule::AdverbialAttributive, "ばかり");
pub const ADVERBIAL_MADE: Particle = Particle::new(ParticleRule::AdverbialAttributive, "まで");
pub const ADVERBIAL_DAKE: Particle = Particle::new(ParticleRule::AdverbialAttributive, "だけ");
pub const ADVERBIAL_HODO: Particle = Particle::new(ParticleRule::AdverbialAttributive, "ほど");
pub const ADVERBIAL_KURAI: Particle = Particle::new(ParticleRule::AdverbialAttributive, "くらい");
pub const ADVERBIAL_TTE: Particle = Particle::new(ParticleRule::AdverbialStem, "って");
pub const ADVERBIAL_NADO: Particle = Particle::new(ParticleRule::AdverbialStem, "など");
pub const ADVERBIAL_NARI: Particle = Particle::new(ParticleRule::AdverbialStem, "なり");
pub const ADVERBIAL_YARA: Particle = Particle::new(ParticleRule::AdverbialStem, "やら");
pub const ADVERBIAL_KA: Particle = Particle::new(ParticleRule::AdverbialStem, "か");
pub const ADVERBIAL_NOMI: Particle = Particle::new(ParticleRule::AdverbialStem, "のみ");
pub const ADVERBIAL_ZUTSU: Particle = Particle::new(ParticleRule::AdverbialNominal, "ずつ");
pub const ADVERBIAL_KIRI: Particle = Particle::new(ParticleRule::AdverbialKiri, "きり");

pub const CONJ_TE: Particle = Particle::new(ParticleRule::ConjunctiveTe, "て");
pub const CONJ_TATTE: Particle = Particle::new(ParticleRule::ConjunctiveTe, "たって");
pub const CONJ_DE: Particle = Particle::new(ParticleRule::ConjunctiveDe, "で");
pub const CONJ_DATTE: Particle = Particle::new(ParticleRule::ConjunctiveDe, "だって");
pub const CONJ_TOMO: Particle = Particle::new(ParticleRule::ConjunctiveTomo, "とも");
pub const CONJ_TSUTSU: Particle = Particle::new(ParticleRule::ConjunctiveContinuative, "つつ");
pub const CONJ_NAGARA: Particle = Particle::new(ParticleRule::ConjunctiveContinuative, "ながら");
pub const CONJ_GA: Particle = Particle::new(ParticleRule::ConjunctiveConclusive, "が");
pub const CONJ_SHI: Particle = Particle::new(ParticleRule::ConjunctiveConclusive, "し");
pub const CONJ_TO: Particle = Particle::new(ParticleRule::ConjunctiveConclusive, "と");
pub const CONJ_NI: Particle = Particle::new(ParticleRule::ConjunctiveConclusive, "に");
pub const CONJ_KARA: Particle = Particle::new(ParticleRule::ConjunctiveConclusive, "から");
pub const CONJ_NARI: Particle = Particle::new(ParticleRule::ConjunctiveConclusive, "なり");
pub const CONJ_KEREDO: Particle = Particle::new(ParticleRule::ConjunctiveConclusive, "けれど");
pub const CONJ_BA: Particle = Particle::new(ParticleRule::ConjunctiveHypothetical, "ば");
pub const CONJ_DO: Particle = Particle::new(ParticleRule::ConjunctiveHypothetical, "ど");

pub const FINAL_NO: Particle = Particle::new(ParticleRule::FinalAttributive, "の");
pub const FINAL_NONI: Particle = Particle::new(ParticleRule::FinalAttributive, "のに");
pub const FINAL_NA: Particle = Particle::new(ParticleRule::FinalConclusive, "な");
pub const FINAL_KA: Particle = Particle::new(ParticleRule::FinalStem, "か");
pub const FINAL_KASHIRA: Particle = Particle::new(ParticleRule::FinalStem, "かしら");

pub const NOMINAL_NO: Particle = Particle::new(ParticleRule::Nominal, "の");
pub const NOMINAL_N: Particle = Particle::new(ParticleRule::Nominal, "ん");

pub static CASE_PARTICLES: &[Particle] = &[
    CASE_GA, CASE_DE, CASE_TO, CASE_NI, CASE_NO, CASE_HE, CASE_YO, CASE_WO, CASE_N, CASE_KARA,
    CASE_TOTE, CASE_NITE, CASE_YORI, CASE_WOBA,
];

pub static BINDING_PARTICLES: &[Particle] = &[BINDING_MO, BINDING_HA, BINDING_KOSO, BINDING_ZO];

pub static ADVERBIAL_PARTICLES: &[Particle] = &[
    ADVERBIAL_BAKARI,
    ADVERBIAL_MADE,
    ADVERBIAL_DAKE,
    ADVERBIAL_HODO,
    ADVERBIAL_KURAI,
    ADVERBIAL_TTE,
    ADVERBIAL_NADO,
    ADVERBIAL_NARI,
    ADVERBIAL_YARA,
    ADVERBIAL_KA,
    ADVERBIAL_NOMI,
    ADVERBIAL_ZUTSU,
    ADVERBIAL_KIRI,
];

pub static CONJUNCTIVE_PARTICLES: &[Particle] = &[
    CONJ_TE, CONJ_TATTE, CONJ_DE, CONJ_DATTE, CONJ_TOMO, CONJ_TSUTSU, CONJ_NAGARA, CONJ_GA,
    CONJ_SHI, CONJ_TO, CONJ_NI, CONJ_KARA, CONJ_NARI, CONJ_KEREDO, CONJ_BA, CONJ_DO,
];

pub static FINAL_PARTICLES: &[Particle] = &[FINAL_NO, FINAL_NONI, FINAL_NA, FINAL_KA, FINAL_KASHIRA];

pub static NOMINAL_PARTICLES: &[Particle] = &[NOMINAL_NO, NOMINAL_N];

/// Find a particle by category and surface text.
pub fn lookup(kind: NonKatsuyoKind, text: &str) -> Option<Particle> {
    let table = match kind {
        NonKatsuyoKind::CaseParticle => CASE_PARTICLES,
        NonKatsuyoKind::BindingParticle => BINDING_PARTICLES,
        NonKatsuyoKind::AdverbialParticle => ADVERBIAL_PARTICLES,
        NonKatsuyoKind::ConjunctiveParticle => CONJUNCTIVE_PARTICLES,
        NonKatsuyoKind::FinalParticle => FINAL_PARTICLES,
        NonKatsuyoKind::NominalParticle => NOMINAL_PARTICLES,
        _ => return None,
    };
    table.iter().copied().find(|p| p.text == text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auxiliary::Auxiliary;
    use crate::katsuyo::{
        AUX_DA_PAST, GODAN_BA, GODAN_KA, GODAN_NA, KA_HENKAKU_KURU, KEIYOUDOUSHI, KEIYOUSHI,
        Paradigm,
    };
    use crate::text::FixedKatsuyoText;

    fn kt(stem: &str, paradigm: &'static Paradigm) -> Source {
        Source::Katsuyo(KatsuyoText::new(stem, paradigm))
    }

    fn noun(text: &str) -> Source {
        Source::from(NonKatsuyoText::noun(text))
    }

    fn render(pre: &Source, particle: Particle) -> String {
        pre.append(particle).unwrap().render()
    }

    #[test]
    fn test_result_kind_is_particle_category() {
        let result = kt("遊", &GODAN_BA).append(CASE_GA).unwrap();
        assert_eq!(result.non_katsuyo_kind(), Some(NonKatsuyoKind::CaseParticle));
        assert_eq!(result.render(), "遊ぶが");
    }

    #[test]
    fn test_te_and_de() {
        assert_eq!(render(&kt("歩", &GODAN_KA), CONJ_TE), "歩いて");
        assert_eq!(render(&kt("美し", &KEIYOUSHI), CONJ_TE), "美しくて");
        assert_eq!(render(&kt("綺麗", &KEIYOUDOUSHI), CONJ_TE), "綺麗だって");
        assert_eq!(render(&kt("", &KA_HENKAKU_KURU), CONJ_TE), "きて");
        assert_eq!(render(&Source::from(Auxiliary::Desu), CONJ_TE), "でして");
        assert_eq!(render(&kt("死", &GODAN_NA), CONJ_DE), "死んで");
        assert_eq!(render(&kt("遊", &GODAN_BA), CONJ_DATTE), "遊んだって");
    }

    #[test]
    fn test_te_after_voiced_verb_names_de() {
        let err = kt("遊", &GODAN_BA).append(CONJ_TE).unwrap_err();
        assert_eq!(
            err,
            AttachmentError::WrongVariant {
                predecessor: "KatsuyoText[godan-ba] 遊ぶ".to_string(),
                appendant: "Particle[conjunctive-particle] て".to_string(),
                expected: "で",
            }
        );
        let err = kt("", &KA_HENKAKU_KURU).append(CONJ_DE).unwrap_err();
        assert!(matches!(err, AttachmentError::WrongVariant { expected: "て", .. }));
        assert!(kt("美し", &KEIYOUSHI).append(CONJ_DE).is_err());
        assert!(Source::from(Auxiliary::Ta).append(CONJ_TE).is_err());
    }

    #[test]
    fn test_binding() {
        assert_eq!(render(&kt("遊", &GODAN_BA), BINDING_MO), "遊びも");
        assert_eq!(render(&kt("美し", &KEIYOUSHI), BINDING_MO), "美しくも");
        assert_eq!(render(&kt("綺麗", &KEIYOUDOUSHI), BINDING_MO), "綺麗でも");
        assert_eq!(render(&noun("状態"), BINDING_HA), "状態は");
        assert!(Source::from(Auxiliary::Masu).append(BINDING_HA).is_err());
        assert!(Source::from(Auxiliary::Ta).append(BINDING_HA).is_err());
    }

    #[test]
    fn test_adverbial() {
        assert_eq!(render(&kt("遊", &GODAN_BA), ADVERBIAL_BAKARI), "遊ぶばかり");
        assert_eq!(render(&kt("綺麗", &KEIYOUDOUSHI), ADVERBIAL_NADO), "綺麗など");
        assert_eq!(render(&kt("綺麗", &KEIYOUDOUSHI), ADVERBIAL_DAKE), "綺麗なだけ");
        assert_eq!(render(&noun("一つ"), ADVERBIAL_ZUTSU), "一つずつ");
        assert!(kt("遊", &GODAN_BA).append(ADVERBIAL_ZUTSU).is_err());
        assert!(Source::from(FixedKatsuyoText::new("遊", "び")).append(ADVERBIAL_ZUTSU).is_err());
        assert_eq!(render(&kt("遊", &GODAN_BA), ADVERBIAL_KIRI), "遊びきり");
        assert_eq!(render(&Source::from(Auxiliary::Ta), ADVERBIAL_KIRI), "たきり");
        assert_eq!(render(&kt("", &AUX_DA_PAST), ADVERBIAL_KIRI), "だきり");
        assert!(Source::from(Auxiliary::Desu).append(ADVERBIAL_KIRI).is_err());
    }

    #[test]
    fn test_conjunctive() {
        assert_eq!(render(&kt("美し", &KEIYOUSHI), CONJ_TOMO), "美しくとも");
        assert_eq!(render(&kt("遊", &GODAN_BA), CONJ_TOMO), "遊ぶとも");
        assert_eq!(render(&kt("遊", &GODAN_BA), CONJ_NAGARA), "遊びながら");
        assert!(kt("美し", &KEIYOUSHI).append(CONJ_NAGARA).is_err());
        assert_eq!(render(&kt("綺麗", &KEIYOUDOUSHI), CONJ_KEREDO), "綺麗だけれど");
        assert_eq!(render(&kt("綺麗", &KEIYOUDOUSHI), CONJ_BA), "綺麗ならば");
        assert_eq!(render(&Source::from(Auxiliary::Masu), CONJ_BA), "ますれば");
        assert!(Source::from(Auxiliary::Ta).append(CONJ_BA).is_err());
        assert!(Source::from(Auxiliary::Desu).append(CONJ_BA).is_err());
        assert!(noun("状態").append(CONJ_KEREDO).is_err());
        assert_eq!(render(&NOMINAL_NO.to_source(), CONJ_KEREDO), "のけれど");
    }

    #[test]
    fn test_final() {
        assert_eq!(render(&kt("遊", &GODAN_BA), FINAL_NO), "遊ぶの");
        assert_eq!(render(&kt("遊", &GODAN_BA), FINAL_NA), "遊ぶな");
        assert_eq!(render(&kt("綺麗", &KEIYOUDOUSHI), FINAL_KA), "綺麗か");
        assert_eq!(render(&noun("状態"), FINAL_KASHIRA), "状態かしら");
        assert_eq!(render(&BINDING_MO.to_source(), FINAL_NA), "もな");
        assert!(noun("状態").append(FINAL_NA).is_err());
        assert!(FINAL_NO.to_source().append(FINAL_NA).is_err());
    }

    #[test]
    fn test_nominal() {
        assert_eq!(render(&kt("遊", &GODAN_BA), NOMINAL_NO), "遊ぶの");
        assert_eq!(render(&kt("綺麗", &KEIYOUDOUSHI), NOMINAL_N), "綺麗なん");
        assert_eq!(
            kt("遊", &GODAN_BA).append(NOMINAL_NO).unwrap().non_katsuyo_kind(),
            Some(NonKatsuyoKind::NominalParticle)
        );
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(NonKatsuyoKind::CaseParticle, "が"), Some(CASE_GA));
        assert_eq!(lookup(NonKatsuyoKind::ConjunctiveParticle, "が"), Some(CONJ_GA));
        assert_eq!(lookup(NonKatsuyoKind::FinalParticle, "のに"), Some(FINAL_NONI));
        assert_eq!(lookup(NonKatsuyoKind::Noun, "が"), None);
        assert_eq!(lookup(NonKatsuyoKind::AdverbialParticle, "ぞ"), None);
    }

    #[test]
    fn test_catalog_kinds_match_tables() {
        for p in CASE_PARTICLES {
            assert_eq!(p.kind(), NonKatsuyoKind::CaseParticle);
        }
        for p in CONJUNCTIVE_PARTICLES {
            assert_eq!(p.kind(), NonKatsuyoKind::ConjunctiveParticle);
        }
        for p in FINAL_PARTICLES {
            assert_eq!(p.kind(), NonKatsuyoKind::FinalParticle);
        }
    }
}
