use std::path::PathBuf;

use clap::Args;
use qrveil_core::CipherConfig;

use super::resolve_password;
use crate::cli::LayoutArgs;
use crate::media::load_raster;
use crate::CliResult;

/// Unveils and decrypts a message from a PNG image
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the message
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source image that contains the secret
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Print the embedded blob as it is, without decrypting it
    #[arg(long, conflicts_with = "password")]
    pub raw: bool,

    /// Number of embedded bytes, needed by the legacy format
    #[arg(long, value_name = "bytes")]
    pub length: Option<usize>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

impl UnveilArgs {
    pub fn run(self, config: CipherConfig) -> CliResult<()> {
        println!("{}", self.unveil(config)?);

        Ok(())
    }

    fn unveil(self, config: CipherConfig) -> CliResult<String> {
        let raster = load_raster(&self.media)?;
        let options = self.layout.codec_options();

        if self.raw {
            let mut api = qrveil_core::api::unveil_raw::prepare()
                .from_raster(&raster)
                .with_options(options);
            if let Some(length) = self.length {
                api = api.with_length(length);
            }

            return Ok(String::from_utf8_lossy(&api.execute()?).into_owned());
        }

        let password = resolve_password(self.password, false)?;
        let mut api = qrveil_core::api::unveil::prepare()
            .from_raster(&raster)
            .using_password(password)
            .with_cipher_config(config)
            .with_options(options);
        if let Some(length) = self.length {
            api = api.with_length(length);
        }

        Ok(api.execute()?)
    }
}
