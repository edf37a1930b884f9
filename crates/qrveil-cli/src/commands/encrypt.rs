use clap::Args;
use qrveil_core::{CipherConfig, PasswordCipher};

use super::resolve_password;
use crate::CliResult;

/// Encrypts a message and prints the base64 blob
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// Password used to encrypt the message
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// The text message to encrypt
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl EncryptArgs {
    pub fn run(self, config: CipherConfig) -> CliResult<()> {
        println!("{}", self.encrypt(config)?);

        Ok(())
    }

    fn encrypt(self, config: CipherConfig) -> CliResult<String> {
        let password = resolve_password(self.password, true)?;

        Ok(PasswordCipher::new(config).encrypt(&self.message, &password))
    }
}
