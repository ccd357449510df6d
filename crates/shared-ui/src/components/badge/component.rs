use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline badge for labels and statuses.
#[component]
pub fn Badge(#[props(default)] variant: BadgeVariant, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            class: "badge",
            "data-style": variant.class(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn badge_variant_classes() {
        assert_eq!(BadgeVariant::Primary.class(), "primary");
        assert_eq!(BadgeVariant::Secondary.class(), "secondary");
        assert_eq!(BadgeVariant::Destructive.class(), "destructive");
        assert_eq!(BadgeVariant::Outline.class(), "outline");
    }

    #[test]
    fn badge_default_is_primary() {
        assert_eq!(BadgeVariant::default(), BadgeVariant::Primary);
    }

    #[test]
    fn badge_renders_variant_and_children() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                Badge { variant: BadgeVariant::Destructive, "Closed" }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("data-style=\"destructive\""), "html: {html}");
        assert!(html.contains("Closed"), "html: {html}");
    }
}
