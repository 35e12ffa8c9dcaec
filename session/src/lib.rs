//! Session and identity state for the login demo.
//!
//! This crate owns everything the browser client needs to answer "who is
//! logged in": the typed [`Identity`] record, the static
//! [`CredentialDirectory`] it is looked up in, the key-value [`Persistence`]
//! adapter that caches the session across reloads, and the [`SessionStore`]
//! that ties them together behind an observable value.
//!
//! Nothing here touches the DOM. The `client` crate supplies browser-backed
//! [`KeyValueStore`] and [`Navigator`] implementations; tests and native
//! hosts use [`MemoryStore`] and [`NoopNavigator`].

pub mod directory;
pub mod error;
pub mod identity;
pub mod navigator;
pub mod observable;
pub mod storage;
pub mod store;
pub mod token;

pub use directory::CredentialDirectory;
pub use error::{AuthError, IdentityError};
pub use identity::{Credentials, Identity};
pub use navigator::{HOME_ROUTE, LOGIN_ROUTE, Navigator, NoopNavigator};
pub use observable::{Observable, Subscription};
pub use storage::{ACCESS_TOKEN_KEY, CURRENT_USER_KEY, KeyValueStore, MemoryStore, NoopStore, Persistence};
pub use store::SessionStore;
