pub mod coordinator;
pub mod log;
pub mod picker;
pub mod presenter;
pub mod store;
