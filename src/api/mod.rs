pub mod client;
pub mod models;

pub use client::{SearchClient, SearchError};
pub use models::{ResultRow, SearchMatch, SearchQuery};
