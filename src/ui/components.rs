pub mod notifications;
pub mod pagination;
pub mod record_form;
pub mod record_search;
pub mod record_table;
pub mod records_page;

pub use notifications::{ErrorModal, SuccessBanner};
pub use pagination::PaginationControls;
pub use record_form::CreateRecordForm;
pub use record_search::SearchRecordsForm;
pub use record_table::RecordsTable;
pub use records_page::RecordsPage;
