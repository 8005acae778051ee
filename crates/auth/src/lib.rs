//! `licensedesk-auth` — identity boundary (sign-in, session, sign-out).
//!
//! This crate is intentionally decoupled from HTTP and from any hosted auth
//! provider: the [`Identity`] trait is the seam, and [`InMemoryIdentity`] backs
//! tests and local runs.

pub mod credentials;
pub mod error;
pub mod identity;
pub mod session;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use identity::{Identity, InMemoryIdentity};
pub use session::Session;
