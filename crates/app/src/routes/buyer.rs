use chrono::{NaiveDateTime, TimeZone, Utc};
use dioxus::prelude::*;
use shared_types::CreateRequirementRequest;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, Form, Input, PageActions, PageHeader,
    PageSubtitle, PageTitle, Sheet, SheetContent, SheetDescription, SheetFooter, SheetHeader,
    SheetTitle,
};

use crate::auction::use_auction;
use crate::auth::use_auth;
use crate::components::status_badge;
use crate::format_helpers::{format_amount, format_date_human};

/// Parse a `datetime-local` input value ("2026-04-01T12:00") as UTC.
fn parse_local_datetime(value: &str) -> Option<chrono::DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Buyer view: the requirements this buyer posted, with bidding progress,
/// and a form to post new ones.
#[component]
pub fn BuyerDashboard() -> Element {
    let auth = use_auth();
    let mut auction = use_auction();

    let mut form_open = use_signal(|| false);
    let mut product_name = use_signal(String::new);
    let mut hs_code = use_signal(String::new);
    let mut moq = use_signal(String::new);
    let mut start_time = use_signal(String::new);
    let mut end_time = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let user = auth.current_user.read().clone();
    let now = Utc::now();
    let my_requirements = user
        .as_ref()
        .map(|u| auction.requirements_for(u.id))
        .unwrap_or_default();

    let mut reset_form = move || {
        product_name.set(String::new());
        hs_code.set(String::new());
        moq.set(String::new());
        start_time.set(String::new());
        end_time.set(String::new());
        form_error.set(None);
    };

    let handle_submit = move |_: FormEvent| {
        form_error.set(None);

        let Some(user) = auth.current_user.read().clone() else {
            return;
        };

        let parsed_moq: i64 = moq.read().trim().parse().unwrap_or(0);
        let Some(start) = parse_local_datetime(&start_time.read()) else {
            form_error.set(Some("Enter a valid start time".to_string()));
            return;
        };
        let Some(end) = parse_local_datetime(&end_time.read()) else {
            form_error.set(Some("Enter a valid end time".to_string()));
            return;
        };

        let request = CreateRequirementRequest {
            product_name: product_name.read().clone(),
            hs_code: hs_code.read().clone(),
            moq: parsed_moq,
            start_time: start,
            end_time: end,
        };
        match auction.add_requirement(request, &user) {
            Ok(_) => {
                form_open.set(false);
                reset_form();
            }
            Err(e) => {
                let msg = e
                    .field_errors
                    .values()
                    .next()
                    .cloned()
                    .unwrap_or(e.message);
                form_error.set(Some(msg));
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./buyer.css") }

        PageHeader {
            PageTitle { "Buyer Dashboard" }
            PageSubtitle { "Your posted requirements and their bids" }
            PageActions {
                Button {
                    onclick: move |_| {
                        reset_form();
                        form_open.set(true);
                    },
                    "Post Requirement"
                }
            }
        }

        if my_requirements.is_empty() {
            Card {
                CardContent {
                    div { class: "buyer-empty-state",
                        p { "You have not posted any requirements yet." }
                        Button {
                            onclick: move |_| {
                                reset_form();
                                form_open.set(true);
                            },
                            "Post Your First Requirement"
                        }
                    }
                }
            }
        } else {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Product" }
                    DataTableColumn { "Status" }
                    DataTableColumn { "Timeline" }
                    DataTableColumn { "MOQ" }
                    DataTableColumn { "Bids" }
                    DataTableColumn { "Lowest Bid" }
                }
                DataTableBody {
                    for req in my_requirements {
                        DataTableRow {
                            DataTableCell {
                                div { class: "buyer-product",
                                    "{req.product_name}"
                                    code { class: "buyer-hs-code", "{req.hs_code}" }
                                }
                            }
                            DataTableCell { {status_badge(req.status_at(now))} }
                            DataTableCell {
                                "{format_date_human(&req.start_time)} \u{2013} {format_date_human(&req.end_time)}"
                            }
                            DataTableCell { "{req.moq}" }
                            DataTableCell { "{auction.requirement_bids(req.id).len()}" }
                            DataTableCell {
                                match auction.lowest_bid(req.id) {
                                    Some(bid) => rsx! {
                                        span { class: "buyer-lowest",
                                            "{format_amount(bid.amount)} ({bid.supplier_name})"
                                        }
                                    },
                                    None => rsx! {
                                        span { class: "buyer-muted", "No bids yet" }
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }

        Sheet {
            open: *form_open.read(),
            on_close: move |_| form_open.set(false),
            SheetContent {
                SheetHeader {
                    SheetTitle { "Post a Requirement" }
                    SheetDescription {
                        "Suppliers can bid from the start time until the end time."
                    }
                }

                if let Some(err) = form_error() {
                    div { class: "buyer-form-error", "{err}" }
                }

                Form {
                    onsubmit: handle_submit,
                    Input {
                        label: "Product Name",
                        id: "req-product",
                        placeholder: "e.g. Glazed ceramic floor tiles 60x60",
                        value: "{product_name}",
                        on_input: move |evt: FormEvent| product_name.set(evt.value()),
                    }
                    Input {
                        label: "HS Code",
                        id: "req-hs-code",
                        placeholder: "e.g. 6907.21",
                        value: "{hs_code}",
                        on_input: move |evt: FormEvent| hs_code.set(evt.value()),
                    }
                    Input {
                        label: "Minimum Order Quantity",
                        id: "req-moq",
                        input_type: "number",
                        placeholder: "e.g. 10000",
                        value: "{moq}",
                        on_input: move |evt: FormEvent| moq.set(evt.value()),
                    }
                    Input {
                        label: "Bidding Opens",
                        id: "req-start",
                        input_type: "datetime-local",
                        value: "{start_time}",
                        on_input: move |evt: FormEvent| start_time.set(evt.value()),
                    }
                    Input {
                        label: "Bidding Closes",
                        id: "req-end",
                        input_type: "datetime-local",
                        value: "{end_time}",
                        on_input: move |evt: FormEvent| end_time.set(evt.value()),
                    }
                    SheetFooter {
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| form_open.set(false),
                            "Cancel"
                        }
                        Button { button_type: "submit", "Post Requirement" }
                    }
                }
            }
        }
    }
}
