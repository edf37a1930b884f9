use thiserror::Error;

/// Failures of the password cipher.
///
/// Both variants render the same text, a caller must not be able to tell a
/// wrong password from a damaged blob by the message alone.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// The blob is no valid base64, too short to carry IV and tag, or the
    /// authentic plaintext is not UTF-8
    #[error("Wrong password or corrupted data")]
    Malformed,

    /// The authentication tag did not verify, either the password is wrong or the data was altered
    #[error("Wrong password or corrupted data")]
    AuthenticationFailed,
}
