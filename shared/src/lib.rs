//! Shared types for the ABService API
//!
//! Wire types used by every client surface: the response envelope, the
//! error body, pagination, query parameters and the domain models.

pub mod client;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use request::{BlogQuery, ListQuery, SortOrder};
pub use response::{ApiErrorBody, ApiResponse, PaginatedResponse};
