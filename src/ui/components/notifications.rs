use crate::ui::notification::Notification;
use crate::ui::records_context::RecordsContext;
use dioxus::prelude::*;

/// Success banner at the top of the page. It takes itself down: the
/// context arms an expiry timer when the create succeeds.
#[component]
pub fn SuccessBanner() -> Element {
    let ctx = use_context::<RecordsContext>();
    let notification = ctx.notification;

    rsx! {
        if let Notification::Success(message) = notification.read().current() {
            div { class: "bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded-lg mb-6",
                "{message}"
            }
        }
    }
}

/// Error modal over everything else. Errors are sticky: nothing clears
/// them except the Close button.
#[component]
pub fn ErrorModal() -> Element {
    let ctx = use_context::<RecordsContext>();
    let notification = ctx.notification;

    rsx! {
        if let Notification::Error(message) = notification.read().current() {
            div { class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50",
                div { class: "bg-white rounded-lg shadow-xl p-6 max-w-md w-full mx-4",
                    h3 { class: "text-lg font-bold text-red-700 mb-2", "Error" }
                    p { class: "text-gray-700 mb-6", "{message}" }
                    div { class: "flex justify-end",
                        button {
                            class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 font-medium",
                            onclick: move |_| ctx.dismiss_notification(),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
