//! AB Client - typed HTTP client for the ABService backend
//!
//! One `ApiClient`, parameterized by surface (`Admin` or `Public`), serves
//! both the admin dashboard and the public site. Stores built on top of it
//! hold UI-facing state and publish changes through watch channels.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod store;
pub mod transport;
pub mod types;

pub use client::{AdminClient, ApiClient, PublicClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use store::{AuthState, AuthStore, CircleMembersState, CircleMembersStore, Store};
#[cfg(feature = "in-process")]
pub use transport::OneshotTransport;
pub use transport::{ApiRequest, NetworkTransport, RawResponse, Transport};
pub use types::{Admin, Public, Surface};

// Re-export shared types for convenience
pub use shared::models;
pub use shared::{ApiResponse, BlogQuery, ListQuery, PaginatedResponse, SortOrder};
