//! Turns the stored collection into display cards, newest first.
//!
//! Usernames and comments are escaped here because the list inserts them
//! as markup. Only `&`, `<` and `>` are replaced, so escaped values must never be placed
//! inside attribute values.

use crate::models::review::Review;

const STAR: char = '★';

/// One review, ready to be placed in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewCard {
    /// Value of the card's `data-id` attribute.
    pub key: String,
    /// Escaped username.
    pub username: String,
    pub time: String,
    pub rating: u8,
    /// Escaped comment.
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewsView {
    /// Nothing stored: show the placeholder instead of the list.
    Empty,
    Cards(Vec<ReviewCard>),
}

impl ReviewsView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ReviewsView::Empty)
    }

    pub fn cards(&self) -> &[ReviewCard] {
        match self {
            ReviewsView::Empty => &[],
            ReviewsView::Cards(cards) => cards,
        }
    }
}

pub fn render_reviews(reviews: &[Review]) -> ReviewsView {
    if reviews.is_empty() {
        return ReviewsView::Empty;
    }

    let cards = reviews
        .iter()
        .rev()
        .enumerate()
        .map(|(index, review)| ReviewCard::new(review, index))
        .collect();
    ReviewsView::Cards(cards)
}

impl ReviewCard {
    /// `index` is the position in display order, used as the key of reviews
    /// stored without an id.
    pub fn new(review: &Review, index: usize) -> Self {
        let key = if review.id.is_empty() {
            index.to_string()
        } else {
            review.id.clone()
        };
        Self {
            key,
            username: escape_html(&review.username),
            time: format_timestamp(review.time),
            rating: review.rating,
            comment: escape_html(&review.comment),
        }
    }

    pub fn stars(&self) -> String {
        render_stars(self.rating)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_stars(rating: u8) -> String {
    std::iter::repeat(STAR).take(rating as usize).collect()
}

/// Formats epoch millis with the browser's locale settings.
#[cfg(target_arch = "wasm32")]
pub fn format_timestamp(millis: i64) -> String {
    use wasm_bindgen::JsValue;

    let date = js_sys::Date::new(&JsValue::from_f64(millis as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}

/// Formats epoch millis in local time.
#[cfg(not(target_arch = "wasm32"))]
pub fn format_timestamp(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(&chrono::Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string(),
        None => "Invalid Date".to_string(),
    }
}
