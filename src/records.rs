use crate::api::models::{AccountRecord, RecordType};
use thiserror::Error;

/// Fixed number of rows per page; goes on the wire as `pageSize`.
pub const PAGE_SIZE: u32 = 10;

/// Everything needed to issue one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub account_name: String,
    pub page: u32,
    pub page_size: u32,
}

/// Search box and pagination state behind the records table.
///
/// The three triggers return the request to issue, if any; callers own
/// the actual fetch. `page` starts at 1 and only moves the way the
/// triggers allow, so it never goes below 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl SearchState {
    /// Explicit search trigger: back to page 1, then fetch.
    ///
    /// A blank query is a complete no-op, the page does not even reset.
    pub fn submit(&mut self) -> Option<ListQuery> {
        if self.is_blank() {
            return None;
        }
        self.page = 1;
        self.request()
    }

    /// Previous button. Nothing happens on the first page.
    pub fn previous(&mut self) -> Option<ListQuery> {
        if self.page <= 1 {
            return None;
        }
        self.page -= 1;
        self.request()
    }

    /// Next button. Always moves forward, even past the end of the data:
    /// there is no total count on the wire to check against, and an empty
    /// page renders as "No records found".
    pub fn next(&mut self) -> Option<ListQuery> {
        self.page = self.page.saturating_add(1);
        self.request()
    }

    fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// The request for the current state. `None` when the query is blank;
    /// pagination still moves the page, it just has nothing to fetch.
    fn request(&self) -> Option<ListQuery> {
        if self.is_blank() {
            return None;
        }
        Some(ListQuery {
            account_name: self.query.clone(),
            page: self.page,
            page_size: PAGE_SIZE,
        })
    }
}

/// The amount field holds text that is not a finite number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Amount must be a number")]
pub struct InvalidAmount;

/// In-progress record held by the create form.
///
/// Fields keep the raw text the user typed. The amount only becomes a
/// number at submit time, and text that does not parse as a finite
/// number stops the submit instead of going on the wire as garbage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordDraft {
    pub account_number: String,
    pub account_name: String,
    pub iban: String,
    pub address: String,
    pub amount: String,
    pub record_type: RecordType,
}

impl RecordDraft {
    /// Build the wire record for this draft.
    pub fn to_record(&self) -> Result<AccountRecord, InvalidAmount> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or(InvalidAmount)?;

        Ok(AccountRecord {
            account_number: self.account_number.clone(),
            account_name: self.account_name.clone(),
            iban: self.iban.clone(),
            address: self.address.clone(),
            amount,
            record_type: self.record_type,
        })
    }
}
