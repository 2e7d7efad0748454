//! Local gating of complaint text before it is sent anywhere.

use crate::{Error, ErrorContext, Result};

/// Minimum number of characters a complaint must have after trimming.
pub const MIN_COMPLAINT_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintDraft {
    text: String,
}

impl ComplaintDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The text exactly as entered; it is submitted untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count after trimming surrounding whitespace.
    pub fn normalized_len(&self) -> usize {
        self.text.trim().chars().count()
    }

    pub fn is_submittable(&self) -> bool {
        self.normalized_len() >= MIN_COMPLAINT_LENGTH
    }

    /// Characters still missing before the draft can be submitted.
    pub fn remaining(&self) -> usize {
        MIN_COMPLAINT_LENGTH.saturating_sub(self.normalized_len())
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_submittable() {
            return Ok(());
        }
        Err(Error::validation_with_context(
            format!(
                "şikayet metni en az {} karakter olmalıdır",
                MIN_COMPLAINT_LENGTH
            ),
            ErrorContext::new()
                .with_field_path("draft.text")
                .with_details(format!("{} karakter daha gerekli", self.remaining()))
                .with_source("complaint_draft"),
        ))
    }
}

impl From<&str> for ComplaintDraft {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for ComplaintDraft {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
