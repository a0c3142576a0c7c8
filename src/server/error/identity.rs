use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentityError {
    /// An identity with this email already exists.
    ///
    /// Occurs when a panel user's email matches a local login that has no profile
    /// row. The sync records the user as a failure instead of reusing the login.
    #[error("An authentication identity already exists for {0}")]
    EmailTaken(String),
}
