//! Endpoint groups
//!
//! Thin views over an `ApiClient` that name each backend resource and
//! unwrap the envelope's `data`. Which groups and which methods exist
//! depends on the client's surface.

mod auth;
mod circle_members;
mod content;
mod permissions;
mod roles;
mod system;
mod users;

pub use auth::AuthApi;
pub use circle_members::CircleMembersApi;
pub use content::{ContactApi, ContentApi, NewsletterApi};
pub use permissions::PermissionsApi;
pub use roles::RolesApi;
pub use system::SystemApi;
pub use users::UsersApi;
