use dioxus::prelude::*;

/// Table family behind every dashboard listing.
///
/// `DataTable` owns the bordered scroll shell and stylesheet; the header,
/// body, row, and cell wrappers keep call sites free of raw
/// `thead`/`tbody`/`tr` nesting. Rows are plain display rows, so row-level
/// actions belong in a trailing cell (a button, a link) rather than on the
/// row itself.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "table-shell",
            table { class: "data-table",
                {children}
            }
        }
    }
}

#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column label cell for the header row.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { scope: "col", {children} }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}
