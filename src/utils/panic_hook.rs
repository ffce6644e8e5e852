use std::any::Any;
use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that forwards panics to the browser console and adds
/// context for panics raised by review components after they were unmounted.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        if message.contains("OwnerDisposed") {
            log!("[PANIC] A review component was used after it was unmounted.");
            log!("[PANIC] Stored reviews are unaffected; reload the page to render them again.");
        }
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Call once from main before mounting the app
pub fn init() {
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up");
}
