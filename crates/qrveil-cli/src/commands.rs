pub mod decrypt;
pub mod encrypt;
pub mod hide;
pub mod inspect;
pub mod unveil;

use qrveil_core::QrveilError;

use crate::cli::ask_for_password;
use crate::CliResult;

/// the given password, or one typed at the prompt
pub(crate) fn resolve_password(password: Option<String>, confirm: bool) -> CliResult<String> {
    password
        .or_else(|| ask_for_password(confirm))
        .ok_or_else(|| QrveilError::MissingPassword.into())
}
