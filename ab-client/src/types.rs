//! Surface markers for `ApiClient`.
//!
//! A surface decides which endpoint groups and verbs a client can reach.
//! The admin dashboard gets full CRUD; the public site gets reads plus its
//! own form endpoints. The checks happen at compile time.

// ============================================================================
// Surface Markers
// ============================================================================

/// Admin surface - full CRUD over users, roles, permissions and members.
#[derive(Debug, Clone, Copy)]
pub struct Admin;

/// Public surface - read-only resources plus contact/newsletter forms.
#[derive(Debug, Clone, Copy)]
pub struct Public;

/// Sealed trait for client surfaces.
pub trait Surface: private::Sealed + Send + Sync + 'static {
    /// Label used in logs
    const NAME: &'static str;
}

impl Surface for Admin {
    const NAME: &'static str = "admin";
}

impl Surface for Public {
    const NAME: &'static str = "public";
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Admin {}
    impl Sealed for super::Public {}
}
