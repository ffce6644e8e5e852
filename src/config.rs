/// Storage key and user-facing texts of the review board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewConfig {
    pub storage_key: String,
    pub clear_confirm_message: String,
    pub empty_message: String,
    pub save_failed_message: String,
}

pub const DEFAULT_STORAGE_KEY: &str = "reviews_v1";

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            clear_confirm_message: "Delete all reviews from this browser? This cannot be undone."
                .to_string(),
            empty_message: "No reviews yet. Be the first to leave one!".to_string(),
            save_failed_message: "Your review could not be saved.".to_string(),
        }
    }
}

impl ReviewConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
