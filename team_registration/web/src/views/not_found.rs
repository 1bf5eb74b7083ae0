use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-gray-100",
            div {
                class: "text-center px-6",
                h1 {
                    class: "text-9xl font-bold text-gray-300 mb-4",
                    "404"
                }
                p {
                    class: "text-xl text-gray-600 mb-8",
                    "There is nothing at /{path}."
                }
                Link {
                    to: "/",
                    class: "inline-block bg-indigo-600 hover:bg-indigo-700 text-white font-bold py-3 px-6 rounded-lg transition-colors duration-200",
                    "Back to registration"
                }
            }
        }
    }
}
