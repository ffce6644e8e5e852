use serde::{Deserialize, Serialize};
use crate::error::ValidationError;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

const ID_SUFFIX_LEN: usize = 4;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    #[serde(default)]
    pub id: String,       // Unique within the collection
    pub username: String, // Trimmed, non-empty
    pub comment: String,  // Trimmed, non-empty
    pub rating: u8,       // Number of stars, 1..=5
    pub time: i64,        // Submission time in epoch millis
}

/// Form fields that can be focused after a failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Username,
    Comment,
}

/// Raw values as read from the review form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewInput {
    pub username: String,
    pub comment: String,
    pub rating: u8, // 0 when no rating is selected
}

/// Review fields that passed validation, waiting for an id and a timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReview {
    pub username: String,
    pub comment: String,
    pub rating: u8,
}

impl ReviewInput {
    pub fn new(username: impl Into<String>, comment: impl Into<String>, rating: u8) -> Self {
        Self {
            username: username.into(),
            comment: comment.into(),
            rating,
        }
    }

    /// Trims the text fields and checks username, comment and rating in that
    /// order. The first failing check is returned.
    pub fn validate(&self) -> Result<ValidatedReview, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(ValidationError::MissingComment);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ValidationError::InvalidRating(self.rating));
        }

        Ok(ValidatedReview {
            username: username.to_string(),
            comment: comment.to_string(),
            rating: self.rating,
        })
    }
}

impl ValidatedReview {
    pub fn into_review(self, id: String, time: i64) -> Review {
        Review {
            id,
            username: self.username,
            comment: self.comment,
            rating: self.rating,
            time,
        }
    }
}

/// Builds a review id from the submission time in base 36 plus a short
/// random base-36 suffix.
pub fn generate_review_id(now_millis: i64) -> String {
    let mut id = to_base36(now_millis.max(0) as u128);
    let mut random = uuid::Uuid::new_v4().as_u128();
    for _ in 0..ID_SUFFIX_LEN {
        id.push(BASE36_DIGITS[(random % 36) as usize] as char);
        random /= 36;
    }
    id
}

fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}
