//! Helpers for driving a real `web` server and a headless browser against it.

pub mod browser;
pub mod test_server;
