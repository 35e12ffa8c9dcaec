//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session itself is owned by `session::SessionStore`; state here is the
//! reactive projection of it that components read through Leptos context.

pub mod auth;
