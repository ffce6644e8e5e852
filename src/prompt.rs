use std::cell::RefCell;

use leptos::logging::error;

/// Blocking dialogs shown to the visitor.
pub trait Prompter {
    fn alert(&self, message: &str);

    /// Returns `true` when the visitor accepts.
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` and `window.confirm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
    fn alert(&self, message: &str) {
        if let Err(err) = gloo_utils::window().alert_with_message(message) {
            error!("[PROMPT] alert failed: {:?}", err);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        gloo_utils::window()
            .confirm_with_message(message)
            .unwrap_or_else(|err| {
                error!("[PROMPT] confirm failed: {:?}", err);
                false
            })
    }
}

/// Records every dialog and answers confirmations with a fixed reply.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    confirm_reply: bool,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn accepting() -> Self {
        Self {
            confirm_reply: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_reply
    }
}
