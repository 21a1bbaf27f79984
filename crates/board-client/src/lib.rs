//! HTTP boundary for the job board.
//!
//! [`ApiClient`] fetches collections and single records, and sends the create,
//! update, delete, apply and authentication requests. Every failure comes
//! back as a [`FetchError`] that can be turned into display text with
//! [`FetchError::display_message`]. [`loader`] runs fetches off the owning
//! thread and feeds results into a [`board_query::CollectionStore`].

pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod resource;
pub mod response;
pub mod retry;
pub mod session;
pub mod team;

pub use client::ApiClient;
pub use config::{ClientSettings, ConfigError, RetrySettings};
pub use error::{FetchError, Result};
pub use loader::{PendingLoad, spawn_load};
pub use resource::{Action, Api, Resource};
pub use retry::RetryPolicy;
pub use session::{Session, SessionError, SessionStore};
