pub mod http_client;
pub mod urls;
mod core;
mod fetch_utils;
mod news_api;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client;
// Re-export relay operations
pub use core::*;
pub use news_api::*;
