pub mod chat_relay;
