use dioxus::prelude::*;

/// Inline busy indicator announced to screen readers as a status update
#[component]
pub fn LoadingSpinner(message: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center gap-3 py-12 text-gray-600",
            role: "status",
            span { class: "h-5 w-5 animate-spin rounded-full border-2 border-indigo-200 border-t-indigo-600" }
            span { "{message}" }
        }
    }
}
