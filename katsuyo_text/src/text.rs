// Composition algebra: sources, appendants, and the attachment operator.
//
// A `Source` is something a suffix can attach to. It is one of:
// - `KatsuyoText`: an unresolved stem + paradigm. Its final surface depends
//   on which slot the next appendant asks for.
// - `FixedKatsuyoText`: a stem with its slot already chosen; plain text.
// - `NonKatsuyoText`: text that never inflects (nouns, adverbs, particles,
//   symbols), tagged with its kind so later rules can accept or refuse it.
//
// An `Appendant` is anything that can follow a source. `Source::append`
// hands the predecessor to the appendant's own rule, which picks the slot it
// needs (continuative unless the rule says otherwise), materializes it, and
// concatenates. A missing slot is `None` ("not applicable"); for bare
// morphemes that is an `AttachmentError`, while `Helper` appendants get a
// second chance through their bridge (see `helper.rs`).
//
// Values are immutable. `append` borrows its receiver and returns a fresh
// `Source`, so one predecessor can seed any number of chains.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::auxiliary::{Auxiliary, Subsidiary};
use crate::error::{AttachmentError, Describe};
use crate::helper::Helper;
use crate::katsuyo::{Paradigm, ParadigmClass, Slot};
use crate::particle::Particle;

// ---------------------------------------------------------------------------
// Source variants
// ---------------------------------------------------------------------------

/// An unresolved inflecting word: stem plus conjugation table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KatsuyoText {
    /// 語幹. May be empty (くる, する) or carry kanji (来).
    pub stem: String,
    pub paradigm: &'static Paradigm,
}

impl KatsuyoText {
    pub fn new(stem: impl Into<String>, paradigm: &'static Paradigm) -> Self {
        KatsuyoText {
            stem: stem.into(),
            paradigm,
        }
    }

    pub fn class(&self) -> ParadigmClass {
        self.paradigm.class
    }

    /// Surface text at `slot`, or `None` if the paradigm lacks it.
    pub fn form(&self, slot: Slot) -> Option<String> {
        self.paradigm
            .slot(slot)
            .map(|suffix| format!("{}{suffix}", self.stem))
    }

    /// Surface text at the first slot in `slots` the paradigm defines.
    pub fn first_form(&self, slots: &[Slot]) -> Option<String> {
        self.paradigm
            .first_defined(slots)
            .map(|(_, suffix)| format!("{}{suffix}", self.stem))
    }

    /// Resolve to a fixed text at `slot`.
    pub fn materialize(&self, slot: Slot) -> Option<FixedKatsuyoText> {
        self.paradigm
            .slot(slot)
            .map(|suffix| FixedKatsuyoText::new(self.stem.clone(), suffix))
    }

    /// The bare stem as a fixed text (美し, 綺麗).
    pub fn stem_only(&self) -> FixedKatsuyoText {
        FixedKatsuyoText::new(self.stem.clone(), "")
    }

    /// Dictionary form: stem + conclusive.
    pub fn render(&self) -> String {
        format!("{}{}", self.stem, self.paradigm.conclusive.unwrap_or(""))
    }
}

/// An inflecting word whose slot has already been chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedKatsuyoText {
    pub stem: String,
    pub suffix: String,
}

impl FixedKatsuyoText {
    pub fn new(stem: impl Into<String>, suffix: impl Into<String>) -> Self {
        FixedKatsuyoText {
            stem: stem.into(),
            suffix: suffix.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("{}{}", self.stem, self.suffix)
    }
}

/// What a piece of non-inflecting text is. Particle kinds are kept apart
/// because several rules accept one particle category and refuse another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonKatsuyoKind {
    /// 体言.
    Noun,
    /// 副詞.
    Adverb,
    /// 接頭辞 / 連体詞.
    Prefix,
    /// 感動詞.
    Interjection,
    /// 接続詞.
    Conjunction,
    /// 記号, emoji, and other symbols.
    Symbol,
    /// 格助詞.
    CaseParticle,
    /// 係助詞.
    BindingParticle,
    /// 副助詞.
    AdverbialParticle,
    /// 接続助詞.
    ConjunctiveParticle,
    /// 終助詞.
    FinalParticle,
    /// 準体助詞.
    NominalParticle,
}

impl NonKatsuyoKind {
    pub const ALL: [NonKatsuyoKind; 12] = [
        NonKatsuyoKind::Noun,
        NonKatsuyoKind::Adverb,
        NonKatsuyoKind::Prefix,
        NonKatsuyoKind::Interjection,
        NonKatsuyoKind::Conjunction,
        NonKatsuyoKind::Symbol,
        NonKatsuyoKind::CaseParticle,
        NonKatsuyoKind::BindingParticle,
        NonKatsuyoKind::AdverbialParticle,
        NonKatsuyoKind::ConjunctiveParticle,
        NonKatsuyoKind::FinalParticle,
        NonKatsuyoKind::NominalParticle,
    ];

    pub fn is_particle(self) -> bool {
        matches!(
            self,
            NonKatsuyoKind::CaseParticle
                | NonKatsuyoKind::BindingParticle
                | NonKatsuyoKind::AdverbialParticle
                | NonKatsuyoKind::ConjunctiveParticle
                | NonKatsuyoKind::FinalParticle
                | NonKatsuyoKind::NominalParticle
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            NonKatsuyoKind::Noun => "noun",
            NonKatsuyoKind::Adverb => "adverb",
            NonKatsuyoKind::Prefix => "prefix",
            NonKatsuyoKind::Interjection => "interjection",
            NonKatsuyoKind::Conjunction => "conjunction",
            NonKatsuyoKind::Symbol => "symbol",
            NonKatsuyoKind::CaseParticle => "case-particle",
            NonKatsuyoKind::BindingParticle => "binding-particle",
            NonKatsuyoKind::AdverbialParticle => "adverbial-particle",
            NonKatsuyoKind::ConjunctiveParticle => "conjunctive-particle",
            NonKatsuyoKind::FinalParticle => "final-particle",
            NonKatsuyoKind::NominalParticle => "nominal-particle",
        }
    }
}

/// Text that never inflects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonKatsuyoText {
    pub kind: NonKatsuyoKind,
    pub text: String,
}

impl NonKatsuyoText {
    pub fn new(kind: NonKatsuyoKind, text: impl Into<String>) -> Self {
        NonKatsuyoText {
            kind,
            text: text.into(),
        }
    }

    pub fn noun(text: impl Into<String>) -> Self {
        NonKatsuyoText::new(NonKatsuyoKind::Noun, text)
    }
}

/// Anything an appendant can attach to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    Katsuyo(KatsuyoText),
    Fixed(FixedKatsuyoText),
    NonKatsuyo(NonKatsuyoText),
}

impl Source {
    /// Attach `post` and return the composed source. `self` is unchanged.
    pub fn append(&self, post: impl Into<Appendant>) -> Result<Source, AttachmentError> {
        post.into().merge(self)
    }

    /// Attach each appendant in order, stopping at the first failure.
    pub fn append_all<'a>(
        &self,
        posts: impl IntoIterator<Item = &'a Appendant>,
    ) -> Result<Source, AttachmentError> {
        posts
            .into_iter()
            .try_fold(self.clone(), |acc, post| post.merge(&acc))
    }

    pub fn render(&self) -> String {
        match self {
            Source::Katsuyo(kt) => kt.render(),
            Source::Fixed(fixed) => fixed.render(),
            Source::NonKatsuyo(text) => text.text.clone(),
        }
    }

    pub fn as_katsuyo(&self) -> Option<&KatsuyoText> {
        match self {
            Source::Katsuyo(kt) => Some(kt),
            _ => None,
        }
    }

    /// Paradigm class of an unresolved source.
    pub fn class(&self) -> Option<ParadigmClass> {
        self.as_katsuyo().map(KatsuyoText::class)
    }

    /// Kind of a non-inflecting source.
    pub fn non_katsuyo_kind(&self) -> Option<NonKatsuyoKind> {
        match self {
            Source::NonKatsuyo(text) => Some(text.kind),
            _ => None,
        }
    }

    /// Fixed and non-inflecting sources: their text is final.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Source::Katsuyo(_))
    }

    /// The surface this source contributes when it is followed by something
    /// requesting `slot`. Resolved sources ignore the slot.
    pub fn prefix_at(&self, slot: Slot) -> Option<String> {
        match self {
            Source::Katsuyo(kt) => kt.form(slot),
            _ => Some(self.render()),
        }
    }

    /// Prefix `text` onto an unresolved word, keeping its paradigm.
    pub(crate) fn joined_katsuyo(text: String, next: &KatsuyoText) -> Source {
        Source::Katsuyo(KatsuyoText::new(text + &next.stem, next.paradigm))
    }

    pub(crate) fn joined_non_katsuyo(text: String, kind: NonKatsuyoKind, next: &str) -> Source {
        Source::NonKatsuyo(NonKatsuyoText::new(kind, text + next))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Describe for Source {
    fn describe(&self) -> String {
        match self {
            Source::Katsuyo(kt) => kt.describe(),
            Source::Fixed(fixed) => fixed.describe(),
            Source::NonKatsuyo(text) => text.describe(),
        }
    }
}

impl Describe for KatsuyoText {
    fn describe(&self) -> String {
        format!("KatsuyoText[{}] {}", self.paradigm.name, self.render())
    }
}

impl Describe for FixedKatsuyoText {
    fn describe(&self) -> String {
        format!("FixedKatsuyoText {}", self.render())
    }
}

impl Describe for NonKatsuyoText {
    fn describe(&self) -> String {
        format!("NonKatsuyoText[{}] {}", self.kind.label(), self.text)
    }
}

impl From<KatsuyoText> for Source {
    fn from(kt: KatsuyoText) -> Self {
        Source::Katsuyo(kt)
    }
}

impl From<FixedKatsuyoText> for Source {
    fn from(fixed: FixedKatsuyoText) -> Self {
        Source::Fixed(fixed)
    }
}

impl From<NonKatsuyoText> for Source {
    fn from(text: NonKatsuyoText) -> Self {
        Source::NonKatsuyo(text)
    }
}

// ---------------------------------------------------------------------------
// Appendants
// ---------------------------------------------------------------------------

/// Anything that can follow a source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Appendant {
    /// A further inflecting word (compound verbs: 遊び + 歩く).
    Katsuyo(KatsuyoText),
    Fixed(FixedKatsuyoText),
    NonKatsuyo(NonKatsuyoText),
    /// 補助 verb or adjective: ない, ある, いる.
    Subsidiary(Subsidiary),
    /// A bare auxiliary morpheme with its own slot rule.
    Auxiliary(Auxiliary),
    Particle(Particle),
    /// A grammatical meaning resolved through direct attachment or a bridge.
    Helper(Helper),
}

impl Appendant {
    /// Attach this appendant to `pre`. Exhaustive over appendant variants;
    /// the variant rules themselves match on the predecessor.
    pub fn merge(&self, pre: &Source) -> Result<Source, AttachmentError> {
        match self {
            Appendant::Katsuyo(kt) => pre
                .prefix_at(Slot::Continuative)
                .map(|text| Source::joined_katsuyo(text, kt))
                .ok_or_else(|| AttachmentError::unsupported(pre, self)),
            Appendant::Fixed(fixed) => pre
                .prefix_at(Slot::Continuative)
                .map(|text| Source::Fixed(FixedKatsuyoText::new(text + &fixed.stem, fixed.suffix.clone())))
                .ok_or_else(|| AttachmentError::unsupported(pre, self)),
            Appendant::NonKatsuyo(text) => pre
                .prefix_at(Slot::Continuative)
                .map(|prefix| Source::joined_non_katsuyo(prefix, text.kind, &text.text))
                .ok_or_else(|| AttachmentError::unsupported(pre, self)),
            Appendant::Subsidiary(sub) => sub.merge(pre),
            Appendant::Auxiliary(aux) => aux.merge(pre),
            Appendant::Particle(particle) => particle.merge(pre),
            Appendant::Helper(helper) => helper.merge(pre),
        }
    }
}

impl Describe for Appendant {
    fn describe(&self) -> String {
        match self {
            Appendant::Katsuyo(kt) => kt.describe(),
            Appendant::Fixed(fixed) => fixed.describe(),
            Appendant::NonKatsuyo(text) => text.describe(),
            Appendant::Subsidiary(sub) => sub.describe(),
            Appendant::Auxiliary(aux) => aux.describe(),
            Appendant::Particle(particle) => particle.describe(),
            Appendant::Helper(helper) => helper.describe(),
        }
    }
}

impl From<KatsuyoText> for Appendant {
    fn from(kt: KatsuyoText) -> Self {
        Appendant::Katsuyo(kt)
    }
}

impl From<FixedKatsuyoText> for Appendant {
    fn from(fixed: FixedKatsuyoText) -> Self {
        Appendant::Fixed(fixed)
    }
}

impl From<NonKatsuyoText> for Appendant {
    fn from(text: NonKatsuyoText) -> Self {
        Appendant::NonKatsuyo(text)
    }
}

impl From<Subsidiary> for Appendant {
    fn from(sub: Subsidiary) -> Self {
        Appendant::Subsidiary(sub)
    }
}

impl From<Auxiliary> for Appendant {
    fn from(aux: Auxiliary) -> Self {
        Appendant::Auxiliary(aux)
    }
}

impl From<Particle> for Appendant {
    fn from(particle: Particle) -> Self {
        Appendant::Particle(particle)
    }
}

impl From<Helper> for Appendant {
    fn from(helper: Helper) -> Self {
        Appendant::Helper(helper)
    }
}

impl From<&Appendant> for Appendant {
    fn from(post: &Appendant) -> Self {
        post.clone()
    }
}
