//! Error types for the review board.
//!
//! Storage failures are recovered on load and reported on write. Validation
//! failures carry the exact text shown to the visitor.

use thiserror::Error;
use wasm_bindgen::JsValue;
use crate::models::review::FormField;

/// Failures of the persisted review collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No browser storage could be reached (no window, storage disabled).
    #[error("browser storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read stored reviews: {0}")]
    Read(String),

    #[error("failed to write stored reviews: {0}")]
    Write(String),

    /// The persisted value is not a JSON array of reviews.
    #[error("stored reviews could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("reviews could not be encoded: {0}")]
    Encode(serde_json::Error),
}

impl StoreError {
    pub(crate) fn read(err: JsValue) -> Self {
        StoreError::Read(js_error_message(&err))
    }

    pub(crate) fn write(err: JsValue) -> Self {
        StoreError::Write(js_error_message(&err))
    }

    pub(crate) fn unavailable(err: JsValue) -> Self {
        StoreError::Unavailable(js_error_message(&err))
    }
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// A rejected form submission. The message is what the visitor sees.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a username.")]
    MissingUsername,

    #[error("Please write a comment.")]
    MissingComment,

    #[error("Please select a rating.")]
    InvalidRating(u8),
}

impl ValidationError {
    /// The input that should receive focus once the prompt is dismissed.
    pub fn field(&self) -> Option<FormField> {
        match self {
            ValidationError::MissingUsername => Some(FormField::Username),
            ValidationError::MissingComment => Some(FormField::Comment),
            ValidationError::InvalidRating(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid review: {0}")]
    Invalid(#[from] ValidationError),

    #[error("review not saved: {0}")]
    Store(#[from] StoreError),
}
