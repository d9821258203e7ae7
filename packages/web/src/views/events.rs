use dioxus::prelude::*;
use store::catalog::events::{self, EventWindow};
use ui::format::today_iso;
use ui::{EventCard, EventTimeline};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Layout {
    Grid,
    Timeline,
}

#[component]
pub fn Events() -> Element {
    let mut window = use_signal(EventWindow::default);
    let mut layout = use_signal(|| Layout::Grid);
    let today = use_hook(today_iso);

    let shown: Vec<_> = events::in_window(window(), &today)
        .into_iter()
        .cloned()
        .collect();
    let count = shown.len();
    let plural = if count == 1 { "" } else { "s" };

    rsx! {
        section { class: "page-header",
            h1 { "Events" }
            p { "Workshops, contests and talks run by the club." }
        }
        div { class: "toolbar",
            div { class: "tabs",
                for option in EventWindow::ALL {
                    button {
                        key: "{option.label()}",
                        class: if window() == option { "tab tab--active" } else { "tab" },
                        onclick: move |_| window.set(option),
                        "{option.label()} ({events::in_window(option, &today).len()})"
                    }
                }
            }
            div { class: "tabs",
                button {
                    class: if layout() == Layout::Grid { "tab tab--active" } else { "tab" },
                    onclick: move |_| layout.set(Layout::Grid),
                    "Grid"
                }
                button {
                    class: if layout() == Layout::Timeline { "tab tab--active" } else { "tab" },
                    onclick: move |_| layout.set(Layout::Timeline),
                    "Timeline"
                }
            }
        }
        p { class: "toolbar__count", "Showing {count} event{plural}" }

        if shown.is_empty() {
            div { class: "empty-state",
                p { "No events found." }
                p { "Try changing the filter or check back later." }
            }
        } else if layout() == Layout::Grid {
            div { class: "grid grid--3",
                for event in shown {
                    EventCard { key: "{event.id}", event }
                }
            }
        } else {
            EventTimeline { events: shown }
        }
    }
}

/// Every event on one chronological timeline.
#[component]
pub fn Timeline() -> Element {
    let all: Vec<_> = events::timeline().into_iter().cloned().collect();

    rsx! {
        section { class: "page-header",
            h1 { "Event Timeline" }
            p { "Everything the club has run, in order." }
        }
        EventTimeline { events: all }
    }
}
