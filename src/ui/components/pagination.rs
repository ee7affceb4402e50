use crate::ui::records_context::RecordsContext;
use dioxus::prelude::*;

/// Previous / page indicator / Next.
///
/// The backend never reports a total count, so Next stays enabled no
/// matter what the last page looked like; walking past the end just
/// shows the empty table.
#[component]
pub fn PaginationControls() -> Element {
    let ctx = use_context::<RecordsContext>();
    let search = ctx.search;

    rsx! {
        div { class: "flex items-center justify-between mt-4",
            button {
                class: "px-4 py-2 bg-gray-600 text-white rounded-lg hover:bg-gray-700 font-medium disabled:opacity-50",
                disabled: search.read().page <= 1,
                onclick: {
                    let ctx = ctx.clone();
                    move |_| ctx.previous_page()
                },
                "Previous"
            }
            span { class: "text-sm text-gray-600", "Page {search.read().page}" }
            button {
                class: "px-4 py-2 bg-gray-600 text-white rounded-lg hover:bg-gray-700 font-medium",
                onclick: move |_| ctx.next_page(),
                "Next"
            }
        }
    }
}
