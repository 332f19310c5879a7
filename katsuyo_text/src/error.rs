// Attachment failure type.
//
// Every failed composition surfaces as one `AttachmentError`. It records the
// predecessor (kind, paradigm, rendered text) and the appendant that could
// not attach, as rendered by `Describe`. Failures are deterministic: the
// same pair always fails the same way, so callers never retry.

use thiserror::Error;

/// Human-readable identification of a composition participant, used in
/// error messages and logs.
pub trait Describe {
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentError {
    /// No rule attaches the appendant and no bridge applies.
    #[error("cannot attach {appendant} to {predecessor}")]
    Unsupported {
        predecessor: String,
        appendant: String,
    },

    /// The appendant has a sibling form that does attach here, e.g. て after
    /// a voiced godan verb must be で.
    #[error("cannot attach {appendant} to {predecessor}: use {expected} instead")]
    WrongVariant {
        predecessor: String,
        appendant: String,
        expected: &'static str,
    },

    /// A politeness or copula helper applied after a predecessor that is
    /// already past or already polite. The caller should apply it earlier
    /// in the chain.
    #[error("{appendant} cannot follow {predecessor}; apply it before the tense or politeness auxiliary")]
    HelperOrder {
        predecessor: String,
        appendant: String,
    },
}

impl AttachmentError {
    pub fn unsupported(pre: &dyn Describe, post: &dyn Describe) -> Self {
        AttachmentError::Unsupported {
            predecessor: pre.describe(),
            appendant: post.describe(),
        }
    }

    pub fn wrong_variant(pre: &dyn Describe, post: &dyn Describe, expected: &'static str) -> Self {
        AttachmentError::WrongVariant {
            predecessor: pre.describe(),
            appendant: post.describe(),
            expected,
        }
    }

    pub fn helper_order(pre: &dyn Describe, post: &dyn Describe) -> Self {
        AttachmentError::HelperOrder {
            predecessor: pre.describe(),
            appendant: post.describe(),
        }
    }

    pub fn predecessor(&self) -> &str {
        match self {
            AttachmentError::Unsupported { predecessor, .. }
            | AttachmentError::WrongVariant { predecessor, .. }
            | AttachmentError::HelperOrder { predecessor, .. } => predecessor,
        }
    }

    pub fn appendant(&self) -> &str {
        match self {
            AttachmentError::Unsupported { appendant, .. }
            | AttachmentError::WrongVariant { appendant, .. }
            | AttachmentError::HelperOrder { appendant, .. } => appendant,
        }
    }

    pub fn is_helper_order(&self) -> bool {
        matches!(self, AttachmentError::HelperOrder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Describe for Named {
        fn describe(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_messages_name_both_sides() {
        let err = AttachmentError::unsupported(&Named("KatsuyoText[aux-ta] た"), &Named("Helper(past)"));
        assert_eq!(
            err.to_string(),
            "cannot attach Helper(past) to KatsuyoText[aux-ta] た"
        );
        assert_eq!(err.predecessor(), "KatsuyoText[aux-ta] た");
        assert_eq!(err.appendant(), "Helper(past)");
        assert!(!err.is_helper_order());
    }

    #[test]
    fn test_wrong_variant_names_expected_form() {
        let err = AttachmentError::wrong_variant(&Named("遊ぶ"), &Named("て"), "で");
        assert!(err.to_string().ends_with("use で instead"));
    }

    #[test]
    fn test_helper_order_is_distinct() {
        let err = AttachmentError::helper_order(&Named("遊んだ"), &Named("Helper(polite)"));
        assert!(err.is_helper_order());
        assert_ne!(
            err,
            AttachmentError::unsupported(&Named("遊んだ"), &Named("Helper(polite)"))
        );
    }
}
