use dioxus::prelude::*;

mod components;
#[cfg(feature = "server")]
mod server;
mod views;

use views::{NotFound, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Register {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    #[cfg(feature = "web")]
    // Hydrate the application on the client
    dioxus::launch(App);

    // Launch axum on the server
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Failed to start the tokio runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(server::launch_server(App)) {
            tracing::error!("Server stopped: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Root component: loads styling and renders the active route.
#[component]
fn App() -> Element {
    rsx! {
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}
