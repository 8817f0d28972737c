pub mod add;
pub mod config;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
