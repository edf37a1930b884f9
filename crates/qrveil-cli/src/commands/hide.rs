use std::path::PathBuf;

use clap::Args;
use log::info;
use qrveil_core::CipherConfig;

use super::resolve_password;
use crate::cli::LayoutArgs;
use crate::media::{load_raster, save_png};
use crate::CliResult;

/// Encrypts a message and hides it in a PNG image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the message
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Carrier image, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Final image will be stored as PNG file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

impl HideArgs {
    pub fn run(self, config: CipherConfig) -> CliResult<()> {
        let password = resolve_password(self.password, true)?;
        let raster = load_raster(&self.media)?;

        let secret = qrveil_core::api::hide::prepare()
            .with_message(&self.message)
            .with_password(&password)
            .with_cipher_config(config)
            .with_options(self.layout.codec_options())
            .with_raster(raster)
            .execute()?;

        save_png(secret, &self.write_to_file)?;
        info!("secret hidden in {}", self.write_to_file.display());

        Ok(())
    }
}
