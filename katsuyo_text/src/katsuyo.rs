// Paradigm tables: the conjugation classes of Japanese verbs, adjectives,
// and inflecting auxiliaries, with the literal kana suffix for each slot.
//
// A `Paradigm` is a flat record of optional slots. A slot that a class does
// not have (e.g. imperative on i-adjectives, continuative on the past
// auxiliary た) is `None`, and callers treat `None` as "not applicable"
// rather than substituting a default. The composition layer in `text.rs`
// relies on that to route unresolvable attachments into a helper's bridge.
//
// Every paradigm is a `static` so `KatsuyoText` can hold a `&'static
// Paradigm` and all texts built from the same class share one table.
// `ALL_PARADIGMS` lists the whole catalog; `registry.rs` maps analyzer tags
// onto it.
//
// Data is kana only. Stems carry any kanji (e.g. `来` for the kanji
// ka-irregular class).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Slots and classes
// ---------------------------------------------------------------------------

/// An inflection slot (活用形) a paradigm may define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// 未然形.
    Irrealis,
    /// 未然形 before the volitional う (歩こ-う).
    IrrealisVolitional,
    /// 未然形 before passive れる / causative せる on sa-irregulars (さ-れる).
    IrrealisReru,
    /// 未然形 before passive られる on sa-irregulars (ぜ-られる).
    IrrealisRareru,
    /// 連用形.
    Continuative,
    /// 連用形 before た / て (音便).
    ContinuativeTa,
    /// 連用形 before ない on adjectival nouns (綺麗で-ない).
    ContinuativeNai,
    /// 終止形.
    Conclusive,
    /// 連体形.
    Attributive,
    /// 仮定形.
    Hypothetical,
    /// 命令形.
    Imperative,
}

impl Slot {
    /// Every slot, in table order.
    pub const ALL: [Slot; 11] = [
        Slot::Irrealis,
        Slot::IrrealisVolitional,
        Slot::IrrealisReru,
        Slot::IrrealisRareru,
        Slot::Continuative,
        Slot::ContinuativeTa,
        Slot::ContinuativeNai,
        Slot::Conclusive,
        Slot::Attributive,
        Slot::Hypothetical,
        Slot::Imperative,
    ];
}

/// The conjugation class a paradigm belongs to. Composition rules branch on
/// the class, never on the individual table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParadigmClass {
    /// 五段.
    Godan,
    /// 上一段.
    KamiIchidan,
    /// 下一段.
    ShimoIchidan,
    /// カ行変格 (来る).
    KaHenkaku,
    /// サ行変格 (する, ずる).
    SaHenkaku,
    /// 形容詞 (i-adjective).
    Keiyoushi,
    /// 形容動詞 (adjectival noun, also the copula だ).
    Keiyoudoushi,
    /// Past auxiliary た / だ.
    AuxTa,
    /// Polite auxiliary ます.
    AuxMasu,
    /// Polite copula です.
    AuxDesu,
}

impl ParadigmClass {
    /// True for the five verb classes (動詞).
    pub fn is_verb(self) -> bool {
        matches!(
            self,
            ParadigmClass::Godan
                | ParadigmClass::KamiIchidan
                | ParadigmClass::ShimoIchidan
                | ParadigmClass::KaHenkaku
                | ParadigmClass::SaHenkaku
        )
    }

    /// True for i-adjectives and adjectival nouns.
    pub fn is_adjectival(self) -> bool {
        matches!(self, ParadigmClass::Keiyoushi | ParadigmClass::Keiyoudoushi)
    }

    /// True for た / だ, ます, and です: auxiliaries that close a predicate
    /// for tense or politeness.
    pub fn is_auxiliary(self) -> bool {
        matches!(
            self,
            ParadigmClass::AuxTa | ParadigmClass::AuxMasu | ParadigmClass::AuxDesu
        )
    }
}

// ---------------------------------------------------------------------------
// Paradigm record
// ---------------------------------------------------------------------------

/// Godan conclusive endings whose past and te-forms are voiced (死んだ,
/// 稼いで). Decided from the conclusive suffix alone; see
/// `Paradigm::is_voiced_past`.
pub const VOICED_PAST_CONCLUSIVES: &[&str] = &["ぐ", "ぬ", "ぶ", "む"];

/// The あ-row (あ段) kana. A godan irrealis ending in one of these takes
/// れる / せる; anything else takes られる / させる.
pub const A_ROW: &[char] = &[
    'あ', 'か', 'が', 'さ', 'ざ', 'た', 'だ', 'な', 'は', 'ば', 'ぱ', 'ま', 'や', 'ら', 'わ',
];

/// One conjugation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paradigm {
    /// Stable identifier, e.g. `"godan-ka"`.
    pub name: &'static str,
    pub class: ParadigmClass,
    pub irrealis: Option<&'static str>,
    pub irrealis_volitional: Option<&'static str>,
    pub irrealis_reru: Option<&'static str>,
    pub irrealis_rareru: Option<&'static str>,
    pub continuative: Option<&'static str>,
    pub continuative_ta: Option<&'static str>,
    pub continuative_nai: Option<&'static str>,
    pub conclusive: Option<&'static str>,
    pub attributive: Option<&'static str>,
    pub hypothetical: Option<&'static str>,
    pub imperative: Option<&'static str>,
}

impl Paradigm {
    /// A table with every slot absent. Used as the base of struct-update
    /// syntax in the catalog below.
    const fn blank(name: &'static str, class: ParadigmClass) -> Self {
        Paradigm {
            name,
            class,
            irrealis: None,
            irrealis_volitional: None,
            irrealis_reru: None,
            irrealis_rareru: None,
            continuative: None,
            continuative_ta: None,
            continuative_nai: None,
            conclusive: None,
            attributive: None,
            hypothetical: None,
            imperative: None,
        }
    }

    /// Godan rows share one shape; only the kana differ.
    #[allow(clippy::too_many_arguments)]
    const fn godan(
        name: &'static str,
        irrealis: &'static str,
        volitional: &'static str,
        continuative: &'static str,
        continuative_ta: &'static str,
        conclusive: &'static str,
        hypothetical: &'static str,
    ) -> Self {
        Paradigm {
            irrealis: Some(irrealis),
            irrealis_volitional: Some(volitional),
            continuative: Some(continuative),
            continuative_ta: Some(continuative_ta),
            conclusive: Some(conclusive),
            attributive: Some(conclusive),
            hypothetical: Some(hypothetical),
            imperative: Some(hypothetical),
            ..Paradigm::blank(name, ParadigmClass::Godan)
        }
    }

    /// Look up a slot. `None` means the class has no such form.
    pub fn slot(&self, slot: Slot) -> Option<&'static str> {
        match slot {
            Slot::Irrealis => self.irrealis,
            Slot::IrrealisVolitional => self.irrealis_volitional,
            Slot::IrrealisReru => self.irrealis_reru,
            Slot::IrrealisRareru => self.irrealis_rareru,
            Slot::Continuative => self.continuative,
            Slot::ContinuativeTa => self.continuative_ta,
            Slot::ContinuativeNai => self.continuative_nai,
            Slot::Conclusive => self.conclusive,
            Slot::Attributive => self.attributive,
            Slot::Hypothetical => self.hypothetical,
            Slot::Imperative => self.imperative,
        }
    }

    pub fn defines(&self, slot: Slot) -> bool {
        self.slot(slot).is_some()
    }

    /// First slot in `slots` this paradigm defines, with its suffix.
    pub fn first_defined(&self, slots: &[Slot]) -> Option<(Slot, &'static str)> {
        slots
            .iter()
            .find_map(|&s| self.slot(s).map(|suffix| (s, suffix)))
    }

    /// Whether the past / te-form of this paradigm is voiced (だ / で).
    ///
    /// Only godan tables whose conclusive is one of ぐ ぬ ぶ む qualify. This
    /// is a surface heuristic: it looks at the conclusive kana, not at the
    /// lexeme, which is sufficient for every table in this catalog.
    pub fn is_voiced_past(&self) -> bool {
        self.class == ParadigmClass::Godan
            && self
                .conclusive
                .is_some_and(|c| VOICED_PAST_CONCLUSIVES.contains(&c))
    }

    /// Whether the irrealis ends in an あ-row kana (遊ば, 書か, さ). Empty
    /// or absent irrealis (ichidan, kanji 来) is not.
    pub fn irrealis_in_a_row(&self) -> bool {
        self.irrealis
            .and_then(|s| s.chars().last())
            .is_some_and(|c| A_ROW.contains(&c))
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

pub static GODAN_KA: Paradigm = Paradigm::godan("godan-ka", "か", "こ", "き", "い", "く", "け");
pub static GODAN_GA: Paradigm = Paradigm::godan("godan-ga", "が", "ご", "ぎ", "い", "ぐ", "げ");
pub static GODAN_SA: Paradigm = Paradigm::godan("godan-sa", "さ", "そ", "し", "し", "す", "せ");
pub static GODAN_TA: Paradigm = Paradigm::godan("godan-ta", "た", "と", "ち", "っ", "つ", "て");
pub static GODAN_NA: Paradigm = Paradigm::godan("godan-na", "な", "の", "に", "ん", "ぬ", "ね");
pub static GODAN_BA: Paradigm = Paradigm::godan("godan-ba", "ば", "ぼ", "び", "ん", "ぶ", "べ");
pub static GODAN_MA: Paradigm = Paradigm::godan("godan-ma", "ま", "も", "み", "ん", "む", "め");
pub static GODAN_RA: Paradigm = Paradigm::godan("godan-ra", "ら", "ろ", "り", "っ", "る", "れ");
/// ワア行: 買う, 言う.
pub static GODAN_WA: Paradigm = Paradigm::godan("godan-wa", "わ", "お", "い", "っ", "う", "え");
/// 行く is godan-ka except for its sokuon past (行った, not 行いた).
pub static GODAN_IKU: Paradigm = Paradigm::godan("godan-iku", "か", "こ", "き", "っ", "く", "け");

pub static KAMI_ICHIDAN: Paradigm = Paradigm {
    irrealis: Some(""),
    continuative: Some(""),
    conclusive: Some("る"),
    attributive: Some("る"),
    hypothetical: Some("れ"),
    imperative: Some("ろ"),
    ..Paradigm::blank("kami-ichidan", ParadigmClass::KamiIchidan)
};

pub static SHIMO_ICHIDAN: Paradigm = Paradigm {
    irrealis: Some(""),
    continuative: Some(""),
    conclusive: Some("る"),
    attributive: Some("る"),
    hypothetical: Some("れ"),
    imperative: Some("ろ"),
    ..Paradigm::blank("shimo-ichidan", ParadigmClass::ShimoIchidan)
};

/// くる written in kana. Stem is empty; the whole verb lives in the slots.
pub static KA_HENKAKU_KURU: Paradigm = Paradigm {
    irrealis: Some("こ"),
    continuative: Some("き"),
    conclusive: Some("くる"),
    attributive: Some("くる"),
    hypothetical: Some("くれ"),
    imperative: Some("こい"),
    ..Paradigm::blank("ka-henkaku-kuru", ParadigmClass::KaHenkaku)
};

/// 来る. The stem carries 来, whose reading shifts under each slot.
pub static KA_HENKAKU_KURU_KANJI: Paradigm = Paradigm {
    irrealis: Some(""),
    continuative: Some(""),
    conclusive: Some("る"),
    attributive: Some("る"),
    hypothetical: Some("れ"),
    imperative: Some("い"),
    ..Paradigm::blank("ka-henkaku-kuru-kanji", ParadigmClass::KaHenkaku)
};

pub static SA_HENKAKU_SURU: Paradigm = Paradigm {
    irrealis: Some("し"),
    irrealis_reru: Some("さ"),
    irrealis_rareru: Some("せ"),
    continuative: Some("し"),
    conclusive: Some("する"),
    attributive: Some("する"),
    hypothetical: Some("すれ"),
    imperative: Some("しろ"),
    ..Paradigm::blank("sa-henkaku-suru", ParadigmClass::SaHenkaku)
};

pub static SA_HENKAKU_ZURU: Paradigm = Paradigm {
    irrealis: Some("じ"),
    irrealis_reru: Some("ざ"),
    irrealis_rareru: Some("ぜ"),
    continuative: Some("じ"),
    conclusive: Some("ずる"),
    attributive: Some("ずる"),
    hypothetical: Some("ずれ"),
    imperative: Some("じろ"),
    ..Paradigm::blank("sa-henkaku-zuru", ParadigmClass::SaHenkaku)
};

/// 形容詞. No imperative.
pub static KEIYOUSHI: Paradigm = Paradigm {
    irrealis: Some("かろ"),
    continuative: Some("く"),
    continuative_ta: Some("かっ"),
    conclusive: Some("い"),
    attributive: Some("い"),
    hypothetical: Some("けれ"),
    ..Paradigm::blank("keiyoushi", ParadigmClass::Keiyoushi)
};

/// 形容動詞. With an empty stem this is the copula だ. No imperative.
pub static KEIYOUDOUSHI: Paradigm = Paradigm {
    irrealis: Some("だろ"),
    continuative: Some("に"),
    continuative_ta: Some("だっ"),
    continuative_nai: Some("で"),
    conclusive: Some("だ"),
    attributive: Some("な"),
    hypothetical: Some("なら"),
    ..Paradigm::blank("keiyoudoushi", ParadigmClass::Keiyoudoushi)
};

/// Past auxiliary た. Has no continuative, so nothing chains through it by
/// default.
pub static AUX_TA: Paradigm = Paradigm {
    irrealis: Some("たろ"),
    conclusive: Some("た"),
    attributive: Some("た"),
    hypothetical: Some("たら"),
    ..Paradigm::blank("aux-ta", ParadigmClass::AuxTa)
};

/// Voiced past auxiliary だ (読んだ).
pub static AUX_DA_PAST: Paradigm = Paradigm {
    irrealis: Some("だろ"),
    conclusive: Some("だ"),
    attributive: Some("だ"),
    hypothetical: Some("だら"),
    ..Paradigm::blank("aux-da-past", ParadigmClass::AuxTa)
};

pub static AUX_MASU: Paradigm = Paradigm {
    irrealis: Some("せ"),
    irrealis_volitional: Some("しょ"),
    continuative: Some("し"),
    conclusive: Some("す"),
    attributive: Some("す"),
    hypothetical: Some("すれ"),
    imperative: Some("せ"),
    ..Paradigm::blank("aux-masu", ParadigmClass::AuxMasu)
};

/// です. No hypothetical and no imperative.
pub static AUX_DESU: Paradigm = Paradigm {
    irrealis: Some("しょ"),
    continuative: Some("し"),
    conclusive: Some("す"),
    attributive: Some("す"),
    ..Paradigm::blank("aux-desu", ParadigmClass::AuxDesu)
};

/// The full catalog, in declaration order.
pub static ALL_PARADIGMS: &[&Paradigm] = &[
    &GODAN_KA,
    &GODAN_GA,
    &GODAN_SA,
    &GODAN_TA,
    &GODAN_NA,
    &GODAN_BA,
    &GODAN_MA,
    &GODAN_RA,
    &GODAN_WA,
    &GODAN_IKU,
    &KAMI_ICHIDAN,
    &SHIMO_ICHIDAN,
    &KA_HENKAKU_KURU,
    &KA_HENKAKU_KURU_KANJI,
    &SA_HENKAKU_SURU,
    &SA_HENKAKU_ZURU,
    &KEIYOUSHI,
    &KEIYOUDOUSHI,
    &AUX_TA,
    &AUX_DA_PAST,
    &AUX_MASU,
    &AUX_DESU,
];

/// Look up a paradigm by its `name`.
pub fn paradigm_by_name(name: &str) -> Option<&'static Paradigm> {
    ALL_PARADIGMS.iter().copied().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        for (i, a) in ALL_PARADIGMS.iter().enumerate() {
            for b in &ALL_PARADIGMS[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate paradigm name");
            }
        }
    }

    #[test]
    fn test_paradigm_by_name() {
        assert_eq!(paradigm_by_name("godan-ka"), Some(&GODAN_KA));
        assert_eq!(paradigm_by_name("keiyoushi"), Some(&KEIYOUSHI));
        assert_eq!(paradigm_by_name("no-such-class"), None);
    }

    #[test]
    fn test_every_paradigm_has_a_conclusive() {
        for p in ALL_PARADIGMS {
            assert!(p.defines(Slot::Conclusive), "{} has no conclusive", p.name);
        }
    }

    #[test]
    fn test_adjectives_have_no_imperative() {
        assert_eq!(KEIYOUSHI.slot(Slot::Imperative), None);
        assert_eq!(KEIYOUDOUSHI.slot(Slot::Imperative), None);
        assert_eq!(AUX_DESU.slot(Slot::Imperative), None);
    }

    #[test]
    fn test_slot_matches_fields() {
        for p in ALL_PARADIGMS {
            assert_eq!(p.slot(Slot::Irrealis), p.irrealis);
            assert_eq!(p.slot(Slot::ContinuativeTa), p.continuative_ta);
            assert_eq!(p.slot(Slot::Imperative), p.imperative);
        }
    }

    #[test]
    fn test_iku_differs_from_godan_ka_only_in_past() {
        for slot in Slot::ALL {
            if slot == Slot::ContinuativeTa {
                assert_eq!(GODAN_KA.slot(slot), Some("い"));
                assert_eq!(GODAN_IKU.slot(slot), Some("っ"));
            } else {
                assert_eq!(GODAN_KA.slot(slot), GODAN_IKU.slot(slot), "{slot:?}");
            }
        }
    }

    #[test]
    fn test_sa_henkaku_passive_slots() {
        assert_eq!(SA_HENKAKU_SURU.irrealis, Some("し"));
        assert_eq!(SA_HENKAKU_SURU.irrealis_reru, Some("さ"));
        assert_eq!(SA_HENKAKU_SURU.irrealis_rareru, Some("せ"));
        assert_eq!(SA_HENKAKU_ZURU.irrealis_reru, Some("ざ"));
        assert_eq!(SA_HENKAKU_ZURU.irrealis_rareru, Some("ぜ"));
        // Only sa-irregulars carry these.
        for p in ALL_PARADIGMS {
            if p.class != ParadigmClass::SaHenkaku {
                assert_eq!(p.irrealis_reru, None, "{}", p.name);
                assert_eq!(p.irrealis_rareru, None, "{}", p.name);
            }
        }
    }

    #[test]
    fn test_voiced_past() {
        let voiced: Vec<&str> = ALL_PARADIGMS
            .iter()
            .filter(|p| p.is_voiced_past())
            .map(|p| p.name)
            .collect();
        assert_eq!(voiced, vec!["godan-ga", "godan-na", "godan-ba", "godan-ma"]);
    }

    #[test]
    fn test_irrealis_in_a_row() {
        assert!(GODAN_BA.irrealis_in_a_row());
        assert!(GODAN_WA.irrealis_in_a_row());
        assert!(!SA_HENKAKU_SURU.irrealis_in_a_row());
        assert!(!KAMI_ICHIDAN.irrealis_in_a_row());
        assert!(!KA_HENKAKU_KURU.irrealis_in_a_row());
        assert!(!KA_HENKAKU_KURU_KANJI.irrealis_in_a_row());
    }

    #[test]
    fn test_first_defined() {
        let order = [Slot::ContinuativeTa, Slot::Continuative];
        assert_eq!(GODAN_KA.first_defined(&order), Some((Slot::ContinuativeTa, "い")));
        assert_eq!(KAMI_ICHIDAN.first_defined(&order), Some((Slot::Continuative, "")));
        assert_eq!(AUX_TA.first_defined(&order), None);
    }

    #[test]
    fn test_class_predicates() {
        assert!(ParadigmClass::SaHenkaku.is_verb());
        assert!(!ParadigmClass::Keiyoushi.is_verb());
        assert!(ParadigmClass::Keiyoudoushi.is_adjectival());
        assert!(ParadigmClass::AuxDesu.is_auxiliary());
        assert!(!ParadigmClass::Godan.is_auxiliary());
    }

    #[test]
    fn test_slot_serde_names() {
        let json = serde_json::to_string(&Slot::ContinuativeTa).unwrap();
        assert_eq!(json, "\"continuative_ta\"");
        let back: Slot = serde_json::from_str("\"irrealis_rareru\"").unwrap();
        assert_eq!(back, Slot::IrrealisRareru);
    }
}
