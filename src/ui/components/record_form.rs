use crate::api::RecordType;
use crate::ui::records_context::RecordsContext;
use dioxus::prelude::*;

/// Create form. Every keystroke lands in the shared draft, so the form
/// survives re-renders and only resets after a successful create.
#[component]
pub fn CreateRecordForm() -> Element {
    let ctx = use_context::<RecordsContext>();
    let mut draft = ctx.draft;

    rsx! {
        div { class: "bg-white rounded-lg shadow-lg p-6",
            h2 { class: "text-xl font-bold text-gray-900 mb-4", "Create Accounting Info" }
            div { class: "space-y-4",
                input {
                    class: "w-full p-3 border border-gray-300 rounded-lg",
                    placeholder: "Account Number",
                    value: "{draft.read().account_number}",
                    oninput: move |event: FormEvent| {
                        draft.write().account_number = event.value();
                    },
                }
                input {
                    class: "w-full p-3 border border-gray-300 rounded-lg",
                    placeholder: "Account Name",
                    value: "{draft.read().account_name}",
                    oninput: move |event: FormEvent| {
                        draft.write().account_name = event.value();
                    },
                }
                input {
                    class: "w-full p-3 border border-gray-300 rounded-lg",
                    placeholder: "IBAN",
                    value: "{draft.read().iban}",
                    oninput: move |event: FormEvent| {
                        draft.write().iban = event.value();
                    },
                }
                input {
                    class: "w-full p-3 border border-gray-300 rounded-lg",
                    placeholder: "Address",
                    value: "{draft.read().address}",
                    oninput: move |event: FormEvent| {
                        draft.write().address = event.value();
                    },
                }
                input {
                    class: "w-full p-3 border border-gray-300 rounded-lg",
                    r#type: "number",
                    placeholder: "Amount",
                    value: "{draft.read().amount}",
                    oninput: move |event: FormEvent| {
                        draft.write().amount = event.value();
                    },
                }
                select {
                    class: "w-full p-3 border border-gray-300 rounded-lg bg-white",
                    onchange: move |event: FormEvent| {
                        draft.write().record_type = match event.value().as_str() {
                            "sending" => RecordType::Sending,
                            _ => RecordType::Receiving,
                        };
                    },
                    option {
                        value: "receiving",
                        selected: draft.read().record_type == RecordType::Receiving,
                        "Receiving"
                    }
                    option {
                        value: "sending",
                        selected: draft.read().record_type == RecordType::Sending,
                        "Sending"
                    }
                }
                button {
                    class: "w-full px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium",
                    onclick: move |_| ctx.create_record(),
                    "Create Record"
                }
            }
        }
    }
}
