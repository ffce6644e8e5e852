use wasm_bindgen::prelude::*;

// Replaces `window.alert` and `window.confirm` with recording stubs so the
// review page can be driven without blocking dialogs.
#[wasm_bindgen(inline_js = r#"
export function setup_dialog_mock(confirmReply) {
    window.__dialogMock = { alerts: [], confirms: [], confirmReply: confirmReply };
    window.alert = function (message) {
        console.log("[MOCK DIALOG] alert:", message);
        window.__dialogMock.alerts.push(String(message));
    };
    window.confirm = function (message) {
        console.log("[MOCK DIALOG] confirm:", message, "->", window.__dialogMock.confirmReply);
        window.__dialogMock.confirms.push(String(message));
        return window.__dialogMock.confirmReply;
    };
    return true;
}

export function alert_count() {
    return window.__dialogMock ? window.__dialogMock.alerts.length : 0;
}

export function last_alert() {
    const mock = window.__dialogMock;
    return mock && mock.alerts.length ? mock.alerts[mock.alerts.length - 1] : "";
}

export function confirm_count() {
    return window.__dialogMock ? window.__dialogMock.confirms.length : 0;
}
"#)]
extern "C" {
    /// Installs the stubs; `confirm` answers with `confirm_reply`.
    pub fn setup_dialog_mock(confirm_reply: bool) -> bool;
    pub fn alert_count() -> u32;
    pub fn last_alert() -> String;
    pub fn confirm_count() -> u32;
}
