use dioxus::prelude::*;
use tracing::warn;

use crate::api::{AccountRecord, ApiClient};
use crate::config::Config;
use crate::records::{ListQuery, RecordDraft, SearchState};
use crate::ui::notification::{NotificationState, SUCCESS_NOTICE_TTL};

/// Shared state behind the records page.
///
/// Components read the signals directly and go through the methods for
/// everything that talks to the backend. The client is built once from
/// the injected config.
#[derive(Clone)]
pub struct RecordsContext {
    pub draft: Signal<RecordDraft>,
    pub search: Signal<SearchState>,
    pub records: Signal<Vec<AccountRecord>>,
    pub notification: Signal<NotificationState>,
    client: ApiClient,
}

impl RecordsContext {
    pub fn new(config: &Config) -> Self {
        Self {
            draft: Signal::new(RecordDraft::default()),
            search: Signal::new(SearchState::default()),
            records: Signal::new(Vec::new()),
            notification: Signal::new(NotificationState::default()),
            client: ApiClient::new(config.api_base_url()),
        }
    }

    /// Search button, or Enter in the search field.
    pub fn submit_search(&self) {
        let mut search = self.search;
        let request = search.write().submit();
        if let Some(request) = request {
            self.fetch(request);
        }
    }

    pub fn previous_page(&self) {
        let mut search = self.search;
        let request = search.write().previous();
        if let Some(request) = request {
            self.fetch(request);
        }
    }

    pub fn next_page(&self) {
        let mut search = self.search;
        let request = search.write().next();
        if let Some(request) = request {
            self.fetch(request);
        }
    }

    /// Create button. A draft whose amount does not parse never leaves
    /// the app and the form keeps what the user typed; everything past
    /// that is the backend's call.
    pub fn create_record(&self) {
        let record = match self.draft.read().to_record() {
            Ok(record) => record,
            Err(err) => {
                let mut notification = self.notification;
                notification.write().error(err.to_string());
                return;
            }
        };

        let client = self.client.clone();
        let mut draft = self.draft;
        let mut notification = self.notification;

        spawn(async move {
            match client.create_record(&record).await {
                Ok(()) => {
                    draft.set(RecordDraft::default());
                    let epoch = notification.write().success("Record created successfully!");
                    tokio::time::sleep(SUCCESS_NOTICE_TTL).await;
                    notification.write().expire_success(epoch);
                }
                Err(err) => {
                    warn!("Create record failed: {}", err);
                    notification.write().error(err.to_string());
                }
            }
        });
    }

    /// Close button on the error modal.
    pub fn dismiss_notification(&self) {
        let mut notification = self.notification;
        notification.write().dismiss();
    }

    /// Issue one list request. Replies land whenever they land and the
    /// last one to arrive wins, which is fine for rapid pagination.
    fn fetch(&self, request: ListQuery) {
        let client = self.client.clone();
        let mut records = self.records;
        let mut notification = self.notification;

        spawn(async move {
            match client
                .list_records(&request.account_name, request.page, request.page_size)
                .await
            {
                Ok(rows) => {
                    records.set(rows);
                }
                Err(err) => {
                    warn!("Record search failed: {}", err);
                    notification.write().error(err.to_string());
                }
            }
        });
    }
}

/// Provides [`RecordsContext`] to every component on the page.
#[component]
pub fn RecordsContextProvider(children: Element) -> Element {
    let config = use_context::<Config>();

    use_context_provider(move || RecordsContext::new(&config));

    rsx! {
        {children}
    }
}
