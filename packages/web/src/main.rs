use dioxus::prelude::*;

use ui::views::ForgotPassword;
use ui::{AuthProvider, ThemeProvider};
use views::{
    About, AdminDashboard, AdminLogin, AppLayout, Clusters, ComingSoon, Events, Home,
    Leaderboard, Login, MasterDashboard, MasterLogin, Members, NotFound, Signup, Timeline,
    Unauthorized, UserProfile,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/events")]
        Events {},
        #[route("/event-timeline")]
        Timeline {},
        #[route("/about")]
        About {},
        #[route("/members")]
        Members {},
        #[route("/clusters")]
        Clusters {},
        #[route("/leaderboard")]
        Leaderboard {},
        #[route("/coming-soon")]
        ComingSoon {},
        #[route("/user/profile")]
        UserProfile {},
        #[route("/admin/dashboard")]
        AdminDashboard {},
        #[route("/master/dashboard")]
        MasterDashboard {},
        #[route("/unauthorized")]
        Unauthorized {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/admin")]
    AdminLogin {},
    #[route("/master")]
    MasterLogin {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Title { "ArcStack Coding Club" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ThemeProvider {
                Router::<Route> {}
            }
        }
    }
}
