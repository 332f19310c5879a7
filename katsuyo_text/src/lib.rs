// Japanese inflection composition.
//
// Builds inflected word forms by attaching auxiliaries, particles, and
// grammatical meanings to a stem + paradigm, checking at each step that
// the predecessor exposes the slot the suffix needs. When it does not, a
// helper may insert a connective (bridging) and retry.
//
// Architecture:
// - `katsuyo.rs`: `Paradigm` tables, `Slot`, `ParadigmClass`
// - `text.rs`: `Source` / `Appendant` and the attachment operator
// - `auxiliary.rs`: bare auxiliary morphemes and subsidiary words
// - `particle.rs`: particles with their attach rules, and the catalog
// - `helper.rs`: `Helper` meanings with direct rules and bridges
// - `registry.rs`: analyzer tag and surface lookups for detectors
// - `error.rs`: `AttachmentError`
//
// Everything here is pure: no I/O, no logging, no shared mutable state.
// Paradigms are `static`; texts are immutable values and composition
// returns new ones. The tokenizer-facing layer lives in
// `katsuyo_text_rewrite`.

pub mod auxiliary;
pub mod error;
pub mod helper;
pub mod katsuyo;
pub mod particle;
pub mod registry;
pub mod text;

// Re-export key types at crate root for convenience.
pub use auxiliary::{Auxiliary, Subsidiary};
pub use error::{AttachmentError, Describe};
pub use helper::{Helper, HelperRule};
pub use katsuyo::{Paradigm, ParadigmClass, Slot};
pub use particle::{Particle, ParticleRule};
pub use text::{
    Appendant, FixedKatsuyoText, KatsuyoText, NonKatsuyoKind, NonKatsuyoText, Source,
};

/// くる in kana.
pub fn kuru() -> KatsuyoText {
    KatsuyoText::new("", &katsuyo::KA_HENKAKU_KURU)
}

/// 来る.
pub fn kuru_kanji() -> KatsuyoText {
    KatsuyoText::new("来", &katsuyo::KA_HENKAKU_KURU_KANJI)
}

/// する.
pub fn suru() -> KatsuyoText {
    KatsuyoText::new("", &katsuyo::SA_HENKAKU_SURU)
}

/// ずる.
pub fn zuru() -> KatsuyoText {
    KatsuyoText::new("", &katsuyo::SA_HENKAKU_ZURU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_constructors() {
        assert_eq!(kuru().render(), "くる");
        assert_eq!(kuru_kanji().render(), "来る");
        assert_eq!(suru().render(), "する");
        assert_eq!(zuru().render(), "ずる");
    }

    #[test]
    fn test_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Source>();
        assert_send_sync::<Appendant>();
        assert_send_sync::<AttachmentError>();
        assert_send_sync::<&'static dyn HelperRule>();
    }
}
