use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password blank after trimming.
    #[error("email and password are required")]
    MissingCredentials,

    /// Unknown email or wrong password (deliberately indistinguishable).
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The identity provider could not be reached or is in a bad state.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}
