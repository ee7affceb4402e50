// Library exports for integration tests and reusable components

pub mod api;
pub mod config;
pub mod records;
pub mod ui;
