use dioxus::prelude::*;
use store::Role;

use crate::auth::{use_auth, LogoutButton};
use crate::components::Avatar;
use crate::icons::{FaBars, FaMoon, FaSun, FaXmark};
use crate::theme::{use_theme, Theme};
use crate::Icon;

/// Primary navigation, in display order.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Events", "/events"),
    ("About Us", "/about"),
    ("Members", "/members"),
    ("Clusters", "/clusters"),
    ("Leaderboard", "/leaderboard"),
];

/// Landing page for a signed-in role.
pub fn dashboard_path(role: Role) -> Option<&'static str> {
    match role {
        Role::User => Some("/user/profile"),
        Role::Admin => Some("/admin/dashboard"),
        Role::Master => Some("/master/dashboard"),
        Role::None => None,
    }
}

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let mut theme = use_theme();
    let mut open = use_signal(|| false);

    let session = auth.read().session().clone();
    let dashboard = session
        .is_authenticated
        .then(|| dashboard_path(session.role))
        .flatten();
    let account = if session.loading {
        rsx! { span { class: "navbar__placeholder" } }
    } else if let Some(path) = dashboard {
        rsx! {
            Link { class: "navbar__account", to: path,
                Avatar {
                    name: session.display_name().to_string(),
                    image: session.user_data.as_ref().and_then(|p| p.avatar_url.clone()),
                    class: "avatar--sm",
                }
                span { "{session.display_name()}" }
            }
            LogoutButton { class: "btn btn--ghost" }
        }
    } else {
        rsx! { Link { class: "btn btn--primary", to: "/login", "Login" } }
    };
    let menu_class = if open() { "navbar__menu navbar__menu--open" } else { "navbar__menu" };

    rsx! {
        nav { class: "navbar",
            Link { class: "navbar__brand", to: "/",
                span { class: "navbar__logo", "CC" }
                span { class: "navbar__title", "Coding Club" }
            }
            button {
                class: "navbar__toggle",
                aria_label: "Toggle menu",
                onclick: move |_| open.toggle(),
                if open() {
                    Icon { icon: FaXmark, width: 18, height: 18 }
                } else {
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
            }
            div { class: "{menu_class}",
                for (name, path) in NAV_LINKS {
                    Link {
                        key: "{path}",
                        class: "navbar__link",
                        to: path,
                        onclick: move |_| open.set(false),
                        "{name}"
                    }
                }
                button {
                    class: "navbar__theme",
                    title: "Switch theme",
                    onclick: move |_| {
                        let next = theme().toggled();
                        theme.set(next);
                    },
                    if theme() == Theme::Light {
                        Icon { icon: FaMoon, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaSun, width: 16, height: 16 }
                    }
                }
                {account}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_paths() {
        assert_eq!(dashboard_path(Role::User), Some("/user/profile"));
        assert_eq!(dashboard_path(Role::Admin), Some("/admin/dashboard"));
        assert_eq!(dashboard_path(Role::Master), Some("/master/dashboard"));
        assert_eq!(dashboard_path(Role::None), None);
    }
}
