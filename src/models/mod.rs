pub mod field;
pub mod filter;
pub mod work_entry;
