use clap::Args;
use qrveil_core::{CipherConfig, PasswordCipher};

use super::resolve_password;
use crate::CliResult;

/// Decrypts a base64 blob and prints the message
#[derive(Args, Debug)]
pub struct DecryptArgs {
    /// Password the blob was encrypted with
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// The base64 blob, as printed by `encrypt`
    #[arg(short = 'd', long = "data", value_name = "base64 blob", required = true)]
    pub blob: String,
}

impl DecryptArgs {
    pub fn run(self, config: CipherConfig) -> CliResult<()> {
        println!("{}", self.decrypt(config)?);

        Ok(())
    }

    fn decrypt(self, config: CipherConfig) -> CliResult<String> {
        let password = resolve_password(self.password, false)?;

        Ok(PasswordCipher::new(config).decrypt(&self.blob, &password)?)
    }
}
