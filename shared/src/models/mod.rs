//! Data models
//!
//! Wire shapes of the backend resources. JSON field names are camelCase,
//! timestamps are ISO-8601 strings as the backend emits them.

pub mod circle_member;
pub mod content;
pub mod permission;
pub mod role;
pub mod system;
pub mod user;

// Re-exports
pub use circle_member::*;
pub use content::*;
pub use permission::*;
pub use role::*;
pub use system::*;
pub use user::*;
