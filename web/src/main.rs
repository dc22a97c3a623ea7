use dioxus::logger::tracing::{error, info, Level};
use dioxus::prelude::*;

use ui::page::{build_page, Document};
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[logger] init failed ({err}); continuing without structured logs");
    }

    // Build the whole page up front: a bad configuration aborts before the
    // server starts listening.
    let page = match build_page() {
        Ok(page) => page,
        Err(err) => {
            error!("dashboard build failed: {err}");
            std::process::exit(1);
        }
    };
    info!(locale = %page.locale, "dashboard ready");

    LaunchBuilder::new().with_context(page).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    let page = use_context::<Document>();

    rsx! {
        Dashboard { page }
    }
}
