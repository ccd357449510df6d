use dioxus::prelude::*;

mod auction;
mod auth;
mod components;
mod format_helpers;
mod routes;

use auction::AuctionState;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    use_context_provider(AuctionState::seeded);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
