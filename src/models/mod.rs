pub mod chat;
pub mod lead;
