use dioxus::prelude::*;

/// Row of filter controls shown between a page header and its table.
///
/// Lays the controls out left to right and wraps on narrow screens; the
/// controls themselves (selects, inputs, buttons) come in as children.
#[component]
pub fn FilterBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "filter-bar", role: "group",
            {children}
        }
    }
}
