/// Main application entry point for the guest review board.
/// Wires the browser-backed review board to the form, clear button and list components.
use leptos::*;
use leptos::logging::error;
use leptos_meta::*;
use leptos_router::*;
use crate::board::ReviewBoard;
use crate::components::{clear_button::ClearButton, review_form::ReviewForm, reviews_list::ReviewsList};
use crate::config::ReviewConfig;
use crate::models::review::ReviewInput;
use crate::prompt::BrowserPrompter;
use crate::store::LocalStorage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Guest Reviews"/>
        <Meta name="description" content="Leave a star rating and a comment. Reviews stay in this browser."/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=|| view! { <ReviewsPage/> }/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn ReviewsPage(#[prop(optional)] config: Option<ReviewConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let empty_message = config.empty_message.clone();
    let board = store_value(ReviewBoard::new(LocalStorage, BrowserPrompter, config));

    // Initial render from whatever this browser already holds.
    let (reviews, set_reviews) = create_signal(board.with_value(|board| board.reviews()));
    let (announce, set_announce) = create_signal(false);

    let on_submit = Callback::new(move |input: ReviewInput| {
        let outcome = board.with_value(|board| board.submit(&input));
        if outcome.is_ok() {
            set_reviews.set(board.with_value(|board| board.reviews()));
            set_announce.set(true);
        }
        outcome
    });

    let on_clear = Callback::new(move |_: ()| {
        match board.with_value(|board| board.clear()) {
            Ok(true) => set_reviews.set(board.with_value(|board| board.reviews())),
            Ok(false) => {}
            Err(err) => error!("[APP] Failed to clear reviews: {}", err),
        }
    });

    view! {
        <h1>{ "Guest Reviews" }</h1>
        <ReviewForm on_submit=on_submit />
        <ClearButton on_clear=on_clear />
        <ReviewsList reviews=reviews empty_message=empty_message announce=announce />
    }
}
