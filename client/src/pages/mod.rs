//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; session mutations go through
//! the `SessionStore` from context, never through page-local state.

pub mod home;
pub mod login;
