pub mod config;
pub mod config_manager;
pub mod error;
pub mod http_handler;
pub mod logging;
pub mod models;
pub mod request;
mod utils;

pub use error::SearchError;
pub use http_handler::{ResponseDump, SearchClient};
pub use models::{SearchBody, SearchResults};
pub use request::SearchRequest;
