use dioxus::prelude::*;

mod catalog;
mod components;
mod error;
mod playback;
mod settings;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "GitTube" }
        document::Meta { name: "theme-color", content: "#0f0f0f" }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1",
        }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
