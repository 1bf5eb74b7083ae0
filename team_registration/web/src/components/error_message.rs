use dioxus::prelude::*;

/// Inline error panel shown inside forms
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div {
            class: "mb-4 bg-red-50 border border-red-200 rounded-lg px-4 py-3",
            role: "alert",
            p { class: "text-red-600 text-sm", "{message}" }
        }
    }
}
