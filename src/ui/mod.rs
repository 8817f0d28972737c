pub mod messages;
pub mod screen;
pub mod terminal;
