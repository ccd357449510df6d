use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{accounts::DEMO_ACCOUNTS, RequirementStatus};
use shared_ui::{
    Card, CardContent, CardHeader, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, FilterBar, FormSelect, PageHeader, PageSubtitle, PageTitle,
};

use crate::auction::use_auction;
use crate::components::status_badge;
use crate::format_helpers::{format_amount, format_date_human};

fn buyer_name(buyer_id: i64) -> &'static str {
    DEMO_ACCOUNTS
        .iter()
        .find(|a| a.id == buyer_id)
        .map(|a| a.display_name)
        .unwrap_or("Unknown")
}

/// Platform-wide view over every requirement and its bidding activity.
#[component]
pub fn AdminDashboard() -> Element {
    let auction = use_auction();
    let mut status_filter = use_signal(|| "all".to_string());

    let now = Utc::now();
    let requirements = auction.requirements.read().clone();
    let total_bids = auction.bids.read().len();

    let count_with = |status: RequirementStatus| {
        requirements
            .iter()
            .filter(|r| r.status_at(now) == status)
            .count()
    };
    let upcoming_count = count_with(RequirementStatus::Upcoming);
    let open_count = count_with(RequirementStatus::Open);
    let closed_count = count_with(RequirementStatus::Closed);

    let filter = status_filter.read().clone();
    let filtered: Vec<_> = requirements
        .iter()
        .filter(|r| filter == "all" || r.status_at(now).as_str() == filter)
        .cloned()
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        PageHeader {
            PageTitle { "Admin Dashboard" }
            PageSubtitle { "All requirements across the platform" }
        }

        div { class: "admin-stats-grid",
            Card {
                CardHeader { "Requirements" }
                CardContent {
                    span { class: "stat-value", "{requirements.len()}" }
                    span { class: "stat-label", "Total Posted" }
                }
            }
            Card {
                CardHeader { "Open Now" }
                CardContent {
                    span { class: "stat-value", "{open_count}" }
                    span { class: "stat-label", "Accepting Bids" }
                }
            }
            Card {
                CardHeader { "Upcoming" }
                CardContent {
                    span { class: "stat-value", "{upcoming_count}" }
                    span { class: "stat-label", "Not Yet Open" }
                }
            }
            Card {
                CardHeader { "Closed" }
                CardContent {
                    span { class: "stat-value", "{closed_count}" }
                    span { class: "stat-label", "Window Ended" }
                }
            }
            Card {
                CardHeader { "Bids" }
                CardContent {
                    span { class: "stat-value", "{total_bids}" }
                    span { class: "stat-label", "Placed Overall" }
                }
            }
        }

        FilterBar {
            FormSelect {
                label: "Status",
                value: "{status_filter}",
                onchange: move |evt: Event<FormData>| status_filter.set(evt.value()),
                option { value: "all", "All" }
                option { value: "upcoming", "Upcoming" }
                option { value: "open", "Open" }
                option { value: "closed", "Closed" }
            }
        }

        DataTable {
            DataTableHeader {
                DataTableColumn { "Product" }
                DataTableColumn { "HS Code" }
                DataTableColumn { "Buyer" }
                DataTableColumn { "MOQ" }
                DataTableColumn { "Timeline" }
                DataTableColumn { "Status" }
                DataTableColumn { "Bids" }
                DataTableColumn { "Lowest Bid" }
            }
            DataTableBody {
                if filtered.is_empty() {
                    DataTableRow {
                        DataTableCell {
                            span { class: "admin-empty", "No requirements match this filter." }
                        }
                    }
                }
                for req in filtered {
                    DataTableRow {
                        DataTableCell { "{req.product_name}" }
                        DataTableCell { code { "{req.hs_code}" } }
                        DataTableCell { "{buyer_name(req.created_by)}" }
                        DataTableCell { "{req.moq}" }
                        DataTableCell {
                            "{format_date_human(&req.start_time)} \u{2013} {format_date_human(&req.end_time)}"
                        }
                        DataTableCell { {status_badge(req.status_at(now))} }
                        DataTableCell { "{auction.requirement_bids(req.id).len()}" }
                        DataTableCell {
                            match auction.lowest_bid(req.id) {
                                Some(bid) => rsx! {
                                    span { class: "admin-lowest",
                                        "{format_amount(bid.amount)} ({bid.supplier_name})"
                                    }
                                },
                                None => rsx! {
                                    span { class: "admin-empty", "\u{2014}" }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
