use crate::ui::records_context::RecordsContext;
use dioxus::prelude::*;

/// Search input with its explicit trigger. Enter in the field and the
/// button do exactly the same thing.
#[component]
pub fn SearchRecordsForm() -> Element {
    let ctx = use_context::<RecordsContext>();
    let mut search = ctx.search;

    rsx! {
        div { class: "flex gap-2",
            input {
                class: "flex-1 p-3 border border-gray-300 rounded-lg",
                placeholder: "Search by Account Name",
                value: "{search.read().query}",
                oninput: move |event: FormEvent| {
                    search.write().query = event.value();
                },
                onkeydown: {
                    let ctx = ctx.clone();

                    move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            ctx.submit_search();
                        }
                    }
                },
            }
            button {
                class: "px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium",
                onclick: move |_| ctx.submit_search(),
                "Search"
            }
        }
    }
}
