use leptos::*;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use crate::error::SubmitError;
use crate::models::review::{FormField, Review, ReviewInput, MAX_RATING, MIN_RATING};
use crate::render::render_stars;

#[component]
pub fn ReviewForm(on_submit: Callback<ReviewInput, Result<Review, SubmitError>>) -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (comment, set_comment) = create_signal(String::new());
    let (rating, set_rating) = create_signal(0u8); // 0 = nothing selected
    let username_ref = create_node_ref::<html::Input>();
    let comment_ref = create_node_ref::<html::Textarea>();

    let focus_field = move |field: FormField| {
        let focused = match field {
            FormField::Username => username_ref.get().map(|input| input.focus()),
            FormField::Comment => comment_ref.get().map(|textarea| textarea.focus()),
        };
        if let Some(Err(err)) = focused {
            log!("[FORM] Could not focus {:?}: {:?}", field, err);
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let input = ReviewInput::new(
            username.get_untracked(),
            comment.get_untracked(),
            rating.get_untracked(),
        );

        match on_submit.call(input) {
            Ok(_) => {
                // Reset values
                set_username.set(String::new());
                set_comment.set(String::new());
                set_rating.set(0);
            }
            Err(SubmitError::Invalid(err)) => {
                if let Some(field) = err.field() {
                    focus_field(field);
                }
            }
            // Already reported; keep what the visitor typed.
            Err(SubmitError::Store(_)) => {}
        }
    };

    view! {
        <form id="reviewForm" class="review-form" on:submit=handle_submit>
            <h2>{ "Leave a Review" }</h2>
            <label for="username">{ "Name" }</label>
            <input
                id="username"
                type="text"
                placeholder="Your name"
                node_ref=username_ref
                prop:value=move || username.get()
                on:input=move |e| set_username.set(event_target_value(&e))
            />
            <label for="comment">{ "Comment" }</label>
            <textarea
                id="comment"
                placeholder="Write your review here"
                node_ref=comment_ref
                prop:value=move || comment.get()
                on:input=move |e| set_comment.set(event_target_value(&e))
            />
            <fieldset class="rating-group">
                <legend>{ "Rating (1-5)" }</legend>
                {(MIN_RATING..=MAX_RATING).map(|value| view! {
                    <label class="rating-option" title=format!("{} of {}", value, MAX_RATING)>
                        <input
                            type="radio"
                            name="rating"
                            value=value.to_string()
                            prop:checked=move || rating.get() == value
                            on:change=move |_| set_rating.set(value)
                        />
                        <span class="stars" aria-hidden="true">{ render_stars(value) }</span>
                    </label>
                }).collect::<Vec<_>>()}
            </fieldset>
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
