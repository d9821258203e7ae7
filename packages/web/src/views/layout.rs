use dioxus::prelude::*;
use ui::{Footer, Navbar};

use crate::Route;

/// Navbar and footer around every public page.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Navbar {}
        main { class: "page",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
