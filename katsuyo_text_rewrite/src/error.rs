// Errors raised while detecting, building, or rewriting.

use katsuyo_text::AttachmentError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error(transparent)]
    Attachment(#[from] AttachmentError),

    #[error("unsupported token {text:?} ({tag}): {reason}")]
    UnsupportedToken {
        text: String,
        tag: String,
        reason: &'static str,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl RewriteError {
    pub(crate) fn unsupported(token: &crate::token::Token, reason: &'static str) -> Self {
        RewriteError::UnsupportedToken {
            text: token.text.clone(),
            tag: token.tag.clone(),
            reason,
        }
    }
}
