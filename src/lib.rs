pub mod cms;
pub mod config;
pub mod content;
pub mod error;
pub mod logger;
pub mod mail;
pub mod server;
pub mod view;
mod paginator;
mod query_string;
mod text_utils;
mod test_data;
