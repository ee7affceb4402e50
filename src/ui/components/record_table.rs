use crate::api::AccountRecord;
use crate::ui::records_context::RecordsContext;
use dioxus::prelude::*;

/// Results table. An empty result set renders a single "No records found"
/// row, which is also what a page past the end of the data looks like.
#[component]
pub fn RecordsTable() -> Element {
    let ctx = use_context::<RecordsContext>();
    let records = ctx.records;

    rsx! {
        div { class: "overflow-x-auto mt-4",
            table { class: "w-full border-collapse text-left",
                thead {
                    tr { class: "bg-gray-50",
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "Account Number"
                        }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "Account Name"
                        }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "IBAN"
                        }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "Address"
                        }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "Amount"
                        }
                        th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                            "Type"
                        }
                    }
                }
                tbody { class: "divide-y divide-gray-200",
                    if records.read().is_empty() {
                        tr {
                            td {
                                class: "px-4 py-3 text-sm text-gray-500 text-center",
                                colspan: "6",
                                "No records found"
                            }
                        }
                    } else {
                        for record in records.read().iter() {
                            RecordRow { record: record.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct RecordRowProps {
    pub record: AccountRecord,
}

#[component]
pub fn RecordRow(props: RecordRowProps) -> Element {
    rsx! {
        tr { class: "hover:bg-gray-50",
            td { class: "px-4 py-3 text-sm font-medium text-gray-900",
                "{props.record.account_number}"
            }
            td { class: "px-4 py-3 text-sm text-gray-500",
                "{props.record.account_name}"
            }
            td { class: "px-4 py-3 text-sm text-gray-500",
                "{props.record.iban}"
            }
            td { class: "px-4 py-3 text-sm text-gray-500",
                "{props.record.address}"
            }
            td { class: "px-4 py-3 text-sm text-gray-500",
                "{props.record.amount}"
            }
            td { class: "px-4 py-3 text-sm text-gray-500",
                "{props.record.record_type}"
            }
        }
    }
}
