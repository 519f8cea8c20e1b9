pub mod openai;
pub mod webhook;
