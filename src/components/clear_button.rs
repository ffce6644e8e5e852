use leptos::*;

#[component]
pub fn ClearButton(on_clear: Callback<()>) -> impl IntoView {
    view! {
        <button id="clearBtn" type="button" class="clear-btn" on:click=move |_| on_clear.call(())>
            { "Clear all reviews" }
        </button>
    }
}
