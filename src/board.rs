//! Form and clear controllers.
//!
//! Both flows run to completion inside one event handler: read the stored
//! collection, change it, write it back. The caller re-renders afterwards
//! from `reviews()` or `view()`.

use leptos::logging::{error, log};

use crate::config::ReviewConfig;
use crate::error::{StoreError, SubmitError};
use crate::models::review::{generate_review_id, Review, ReviewInput};
use crate::prompt::Prompter;
use crate::render::{render_reviews, ReviewsView};
use crate::store::{ReviewStore, StorageBackend};

pub struct ReviewBoard<B, P> {
    store: ReviewStore<B>,
    prompter: P,
    config: ReviewConfig,
}

impl<B: StorageBackend, P: Prompter> ReviewBoard<B, P> {
    pub fn new(backend: B, prompter: P, config: ReviewConfig) -> Self {
        Self {
            store: ReviewStore::new(backend, config.storage_key.clone()),
            prompter,
            config,
        }
    }

    pub fn store(&self) -> &ReviewStore<B> {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// The stored collection, oldest first.
    pub fn reviews(&self) -> Vec<Review> {
        self.store.load()
    }

    pub fn view(&self) -> ReviewsView {
        render_reviews(&self.store.load())
    }

    pub fn submit(&self, input: &ReviewInput) -> Result<Review, SubmitError> {
        self.submit_at(input, chrono::Utc::now().timestamp_millis())
    }

    /// Validates `input` and appends it to the stored collection, stamped
    /// with `now_millis`. Every failure is shown to the visitor and nothing
    /// is written.
    pub fn submit_at(&self, input: &ReviewInput, now_millis: i64) -> Result<Review, SubmitError> {
        let valid = match input.validate() {
            Ok(valid) => valid,
            Err(err) => {
                log!("[BOARD] Submission rejected: {:?}", err);
                self.prompter.alert(&err.to_string());
                return Err(err.into());
            }
        };

        let review = valid.into_review(generate_review_id(now_millis), now_millis);
        let mut reviews = self.store.load();
        reviews.push(review.clone());

        if let Err(err) = self.store.save(&reviews) {
            error!("[BOARD] Failed to save review {}: {}", review.id, err);
            self.prompter.alert(&self.config.save_failed_message);
            return Err(err.into());
        }

        log!("[BOARD] Added review {} ({} total)", review.id, reviews.len());
        Ok(review)
    }

    /// Asks for confirmation, then removes every stored review. Returns
    /// `Ok(false)` when the visitor declines.
    pub fn clear(&self) -> Result<bool, StoreError> {
        if !self.prompter.confirm(&self.config.clear_confirm_message) {
            log!("[BOARD] Clear cancelled");
            return Ok(false);
        }
        self.store.clear()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::prompt::ScriptedPrompter;
    use crate::store::MemoryStorage;

    const NOW: i64 = 1_733_508_840_000;

    // Reads like MemoryStorage but rejects every write, like a full quota.
    struct ReadOnlyStorage(MemoryStorage);

    impl StorageBackend for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get_item(key)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("QuotaExceededError".to_string()))
        }

        fn remove_item(&self, key: &str) -> Result<(), StoreError> {
            self.0.remove_item(key)
        }
    }

    fn create_test_board(prompter: ScriptedPrompter) -> (ReviewBoard<MemoryStorage, ScriptedPrompter>, MemoryStorage) {
        let backend = MemoryStorage::new();
        let board = ReviewBoard::new(backend.clone(), prompter, ReviewConfig::default());
        (board, backend)
    }

    #[test]
    fn test_submit_appends_review() {
        let (board, _) = create_test_board(ScriptedPrompter::accepting());
        let review = board
            .submit_at(&ReviewInput::new(" Ann ", " Great! ", 5), NOW)
            .unwrap();

        assert_eq!(review.username, "Ann");
        assert_eq!(review.comment, "Great!");
        assert_eq!(review.time, NOW);
        assert_eq!(board.reviews(), vec![review]);
        assert!(board.prompter().alerts().is_empty());
    }

    #[test]
    fn test_rejected_submit_alerts_and_writes_nothing() {
        let (board, backend) = create_test_board(ScriptedPrompter::accepting());
        let err = board
            .submit_at(&ReviewInput::new("Ann", "", 3), NOW)
            .unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(ValidationError::MissingComment)));
        assert_eq!(board.prompter().alerts(), vec!["Please write a comment.".to_string()]);
        assert!(backend.raw(&board.config().storage_key).is_none());
    }

    #[test]
    fn test_submit_recovers_from_corrupt_store() {
        let (board, backend) = create_test_board(ScriptedPrompter::accepting());
        backend.insert_raw(&board.config().storage_key, "][");

        board.submit_at(&ReviewInput::new("Ann", "Hi", 4), NOW).unwrap();
        assert_eq!(board.reviews().len(), 1);
    }

    #[test]
    fn test_declined_clear_keeps_reviews() {
        let (board, _) = create_test_board(ScriptedPrompter::declining());
        board.submit_at(&ReviewInput::new("Ann", "Hi", 4), NOW).unwrap();

        assert!(!board.clear().unwrap());
        assert_eq!(board.reviews().len(), 1);
        assert_eq!(
            board.prompter().confirms(),
            vec![ReviewConfig::default().clear_confirm_message]
        );
    }

    #[test]
    fn test_confirmed_clear_empties_store() {
        let (board, _) = create_test_board(ScriptedPrompter::accepting());
        board.submit_at(&ReviewInput::new("Ann", "Hi", 4), NOW).unwrap();

        assert!(board.clear().unwrap());
        assert!(board.reviews().is_empty());
        assert!(board.view().is_empty());
    }

    #[test]
    fn test_failed_save_alerts_and_writes_nothing() {
        let backend = MemoryStorage::new();
        let config = ReviewConfig::default();
        let board = ReviewBoard::new(
            ReadOnlyStorage(backend.clone()),
            ScriptedPrompter::accepting(),
            config.clone(),
        );

        let err = board
            .submit_at(&ReviewInput::new("Ann", "Hi", 4), NOW)
            .unwrap_err();

        assert!(matches!(err, SubmitError::Store(StoreError::Write(_))));
        assert_eq!(board.prompter().alerts(), vec![config.save_failed_message.clone()]);
        assert!(backend.raw(&config.storage_key).is_none());
        assert!(board.reviews().is_empty());
    }
}
