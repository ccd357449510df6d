use dioxus::prelude::*;

/// Which edge the sheet panel slides in from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl SheetSide {
    fn as_class(&self) -> &'static str {
        match self {
            SheetSide::Top => "top",
            SheetSide::Right => "right",
            SheetSide::Bottom => "bottom",
            SheetSide::Left => "left",
        }
    }
}

/// Slide-over panel with a dimmed backdrop. Clicking the backdrop closes
/// the sheet; clicks inside the panel do not propagate.
#[component]
pub fn Sheet(
    open: bool,
    on_close: EventHandler<()>,
    #[props(default)] side: SheetSide,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sheet-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "sheet-panel",
                "data-side": side.as_class(),
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn SheetContent(children: Element) -> Element {
    rsx! {
        div { class: "sheet-content", {children} }
    }
}

#[component]
pub fn SheetHeader(children: Element) -> Element {
    rsx! {
        div { class: "sheet-header", {children} }
    }
}

#[component]
pub fn SheetFooter(children: Element) -> Element {
    rsx! {
        div { class: "sheet-footer", {children} }
    }
}

#[component]
pub fn SheetTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "sheet-title", {children} }
    }
}

#[component]
pub fn SheetDescription(children: Element) -> Element {
    rsx! {
        p { class: "sheet-description", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn side_classes() {
        assert_eq!(SheetSide::Top.as_class(), "top");
        assert_eq!(SheetSide::Right.as_class(), "right");
        assert_eq!(SheetSide::Bottom.as_class(), "bottom");
        assert_eq!(SheetSide::Left.as_class(), "left");
    }

    #[test]
    fn default_side_is_right() {
        assert_eq!(SheetSide::default(), SheetSide::Right);
    }

    #[test]
    fn closed_sheet_renders_nothing() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                Sheet { open: false, on_close: |_| {}, "hidden" }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("hidden"), "html: {html}");
    }
}
