#[cfg(feature = "csr")]
pub fn main() {
    // to run: `trunk serve --open`
    use guestbook::app::App;

    guestbook::utils::panic_hook::init();
    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // the review board only renders in the browser; build with the `csr` feature
}
