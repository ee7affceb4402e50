pub mod app;
pub mod components;
pub mod notification;
pub mod records_context;

pub use app::*;
pub use components::*;
