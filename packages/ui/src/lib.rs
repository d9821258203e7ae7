//! This crate contains all shared UI for the workspace.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | `AuthProvider`, `use_auth`, `use_api`, sign-in helpers |
//! | [`guard`] | Route guard decision and `ProtectedRoute` |
//! | [`recovery`] | Password-recovery state machine |
//! | [`theme`] | Light/dark theme persisted in storage |
//! | [`components`] | Buttons, inputs, notices, spinner, avatar |
//! | [`views`] | Shared page views |

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaInstagram, FaLinkedin};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod auth;
pub use auth::{
    failure_message, redirect, sign_in, sleep, use_api, use_auth, use_config, AuthProvider,
    LogoutButton,
};

pub mod guard;
pub use guard::{evaluate, GuardOutcome, ProtectedRoute};

pub mod recovery;
pub use recovery::{
    format_countdown, DemoOtpIssuer, OtpChallenge, OtpIssuer, PasswordRecovery, RecoveryError,
    RecoveryStep,
};

pub mod theme;
pub use theme::{use_theme, Theme, ThemeProvider, ThemeSignal};

pub mod format;

mod counter;
pub use counter::{counter_value, AnimatedCounter};

mod navbar;
pub use navbar::{dashboard_path, Navbar, NAV_LINKS};

mod footer;
pub use footer::Footer;

mod event_card;
pub use event_card::EventCard;

mod event_timeline;
pub use event_timeline::EventTimeline;

mod member_card;
pub use member_card::MemberCard;

mod cluster_card;
pub use cluster_card::ClusterCard;

mod leaderboard_table;
pub use leaderboard_table::{GroupLeaderboard, StudentLeaderboard};

pub mod views;
