use super::notifications::{ErrorModal, SuccessBanner};
use super::pagination::PaginationControls;
use super::record_form::CreateRecordForm;
use super::record_search::SearchRecordsForm;
use super::record_table::RecordsTable;
use dioxus::prelude::*;

/// The whole app on one page: create form on top, search and results
/// below, notifications over everything.
#[component]
pub fn RecordsPage() -> Element {
    rsx! {
        div { class: "container mx-auto max-w-4xl p-6",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Accounting Info Manager" }

            SuccessBanner {}

            CreateRecordForm {}

            div { class: "bg-white rounded-lg shadow-lg p-6 mt-8",
                h2 { class: "text-xl font-bold text-gray-900 mb-4", "Search Accounting Info" }
                SearchRecordsForm {}
                RecordsTable {}
                PaginationControls {}
            }

            ErrorModal {}
        }
    }
}
