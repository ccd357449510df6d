use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{PlaceBidRequest, RequirementStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, Form, Input, PageHeader, PageSubtitle,
    PageTitle, Separator, Sheet, SheetContent, SheetDescription, SheetFooter, SheetHeader,
    SheetTitle,
};
use uuid::Uuid;

use crate::auction::use_auction;
use crate::auth::use_auth;
use crate::components::status_badge;
use crate::format_helpers::{format_amount, format_date_human, format_datetime_human};

/// Supplier view: browse every requirement, bid on open ones, and track
/// bids already placed.
#[component]
pub fn SupplierDashboard() -> Element {
    let auth = use_auth();
    let mut auction = use_auction();

    let mut bid_target = use_signal(|| Option::<Uuid>::None);
    let mut amount = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let user = auth.current_user.read().clone();
    let now = Utc::now();
    let requirements = auction.requirements.read().clone();
    let my_bids = user
        .as_ref()
        .map(|u| auction.bids_by_supplier(u.id))
        .unwrap_or_default();

    let close_sheet = move |_| {
        bid_target.set(None);
        amount.set(String::new());
        form_error.set(None);
    };

    let target = (*bid_target.read()).and_then(|id| auction.requirement(id));

    let handle_submit = move |_: FormEvent| {
        form_error.set(None);

        let Some(requirement_id) = *bid_target.read() else {
            return;
        };
        let Some(user) = auth.current_user.read().clone() else {
            return;
        };

        let parsed: f64 = match amount.read().trim().parse() {
            Ok(v) => v,
            Err(_) => {
                form_error.set(Some("Enter a valid bid amount".to_string()));
                return;
            }
        };

        let request = PlaceBidRequest {
            requirement_id,
            amount: parsed,
        };
        match auction.place_bid(request, &user) {
            Ok(_) => {
                bid_target.set(None);
                amount.set(String::new());
            }
            Err(e) => {
                let msg = e
                    .field_errors
                    .get("amount")
                    .cloned()
                    .unwrap_or(e.message);
                form_error.set(Some(msg));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./supplier.css") }

        PageHeader {
            PageTitle { "Supplier Dashboard" }
            PageSubtitle { "Bid on open requirements" }
        }

        DataTable {
            DataTableHeader {
                DataTableColumn { "Product" }
                DataTableColumn { "HS Code" }
                DataTableColumn { "MOQ" }
                DataTableColumn { "Timeline" }
                DataTableColumn { "Status" }
                DataTableColumn { "Lowest Bid" }
                DataTableColumn { "" }
            }
            DataTableBody {
                for req in requirements {
                    DataTableRow {
                        DataTableCell { "{req.product_name}" }
                        DataTableCell { code { "{req.hs_code}" } }
                        DataTableCell { "{req.moq}" }
                        DataTableCell {
                            "{format_date_human(&req.start_time)} \u{2013} {format_date_human(&req.end_time)}"
                        }
                        DataTableCell { {status_badge(req.status_at(now))} }
                        DataTableCell {
                            match auction.lowest_bid(req.id) {
                                Some(bid) => rsx! {
                                    span { class: "supplier-lowest", "{format_amount(bid.amount)}" }
                                },
                                None => rsx! {
                                    span { class: "supplier-empty", "No bids yet" }
                                },
                            }
                        }
                        DataTableCell {
                            if req.status_at(now) == RequirementStatus::Open {
                                Button {
                                    variant: ButtonVariant::Primary,
                                    onclick: move |_| {
                                        bid_target.set(Some(req.id));
                                        amount.set(String::new());
                                        form_error.set(None);
                                    },
                                    "Place Bid"
                                }
                            }
                        }
                    }
                }
            }
        }

        Separator {}

        h2 { class: "supplier-section-title", "My Bids" }
        if my_bids.is_empty() {
            p { class: "supplier-empty", "You have not placed any bids yet." }
        } else {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Product" }
                    DataTableColumn { "Amount" }
                    DataTableColumn { "Placed" }
                    DataTableColumn { "Standing" }
                }
                DataTableBody {
                    for bid in my_bids {
                        DataTableRow {
                            DataTableCell {
                                {
                                    auction
                                        .requirement(bid.requirement_id)
                                        .map(|r| r.product_name)
                                        .unwrap_or_else(|| "Unknown".to_string())
                                }
                            }
                            DataTableCell { "{format_amount(bid.amount)}" }
                            DataTableCell { "{format_datetime_human(&bid.created_at)}" }
                            DataTableCell {
                                if auction.lowest_bid(bid.requirement_id).map(|b| b.id) == Some(bid.id) {
                                    Badge { variant: BadgeVariant::Primary, "Lowest" }
                                } else {
                                    Badge { variant: BadgeVariant::Outline, "Outbid" }
                                }
                            }
                        }
                    }
                }
            }
        }

        Sheet {
            open: bid_target.read().is_some(),
            on_close: close_sheet,
            SheetContent {
                SheetHeader {
                    SheetTitle { "Place a Bid" }
                    if let Some(req) = target {
                        SheetDescription {
                            "{req.product_name} \u{00b7} MOQ {req.moq} \u{00b7} closes {format_date_human(&req.end_time)}"
                        }
                    }
                }

                if let Some(err) = form_error() {
                    div { class: "supplier-form-error", "{err}" }
                }

                Form {
                    onsubmit: handle_submit,
                    Input {
                        label: "Total Bid Amount (USD)",
                        id: "bid-amount",
                        input_type: "number",
                        placeholder: "e.g. 19850.00",
                        value: "{amount}",
                        on_input: move |evt: FormEvent| amount.set(evt.value()),
                    }
                    SheetFooter {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| {
                                bid_target.set(None);
                                amount.set(String::new());
                                form_error.set(None);
                            },
                            "Cancel"
                        }
                        Button { button_type: "submit", "Submit Bid" }
                    }
                }
            }
        }
    }
}
