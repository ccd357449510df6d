use dioxus::prelude::*;
use shared_types::RequirementStatus;
use shared_ui::{Badge, BadgeVariant};

fn status_badge_variant(status: RequirementStatus) -> BadgeVariant {
    match status {
        RequirementStatus::Open => BadgeVariant::Primary,
        RequirementStatus::Upcoming => BadgeVariant::Secondary,
        RequirementStatus::Closed => BadgeVariant::Outline,
    }
}

/// Requirement status badge used by every dashboard table.
pub fn status_badge(status: RequirementStatus) -> Element {
    rsx! {
        Badge { variant: status_badge_variant(status), "{status.as_str()}" }
    }
}
