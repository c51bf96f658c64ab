use leptos::html::Input;
use leptos::prelude::*;

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Current value of an input, or empty if it is not mounted.
pub fn input_value(node: NodeRef<Input>) -> String {
    node.get_untracked().map(|el| el.value()).unwrap_or_default()
}

pub fn log_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

pub fn log_info(message: &str) {
    web_sys::console::log_1(&message.into());
}
