/// Displays the stored reviews newest first, or a placeholder when there are none.
/// Usernames and comments arrive pre-escaped from the renderer and are inserted as markup.
use leptos::*;
use crate::models::review::Review;
use crate::render::render_reviews;

#[component]
pub fn ReviewsList(
    reviews: ReadSignal<Vec<Review>>,
    #[prop(into)] empty_message: String,
    // Marks the list as a polite live region once a review has been added.
    #[prop(into)] announce: Signal<bool>,
) -> impl IntoView {
    let cards = create_memo(move |_| render_reviews(&reviews.get()));

    let placeholder_style = move || {
        if cards.with(|view| view.is_empty()) {
            "display: block"
        } else {
            "display: none"
        }
    };

    view! {
        <section class="reviews">
            <h2>{ "Reviews" }</h2>
            <p id="noReviews" class="no-reviews" style=placeholder_style>{ empty_message }</p>
            <div
                id="reviewsList"
                class="reviews-list"
                aria-live=move || announce.get().then_some("polite")
            >
                {move || cards.get().cards().iter().map(|card| view! {
                    <article class="review-card" data-id=card.key.clone()>
                        <div class="review-meta">
                            <div>
                                <div class="username" inner_html=card.username.clone()></div>
                                <div class="time">{ card.time.clone() }</div>
                            </div>
                            <div>
                                <span class="stars" aria-hidden="true">{ card.stars() }</span>
                            </div>
                        </div>
                        <div class="comment-text" inner_html=card.comment.clone()></div>
                    </article>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
