use clap::{Args, Parser, Subcommand, ValueEnum};
use qrveil_core::{Channel, CipherConfig, CodecOptions, Layout, StartPixel};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Salt of the password key derivation, hide and unveil need the same
    #[arg(
        long,
        global = true,
        env = "SECRET_SALT",
        default_value = qrveil_cipher::DEFAULT_SALT,
        hide_env_values = true
    )]
    pub salt: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn cipher_config(&self) -> CipherConfig {
        CipherConfig::with_salt(&self.salt)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encrypt(encrypt::EncryptArgs),
    Decrypt(decrypt::DecryptArgs),
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Inspect(inspect::InspectArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelArg {
    Red,
    Green,
    Blue,
    Alpha,
}

impl From<ChannelArg> for Channel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Red => Channel::Red,
            ChannelArg::Green => Channel::Green,
            ChannelArg::Blue => Channel::Blue,
            ChannelArg::Alpha => Channel::Alpha,
        }
    }
}

/// Where in the pixels the secret lives
#[derive(Args, Debug, Default, Clone)]
pub struct LayoutArgs {
    /// Legacy format: no length header, alpha channel from a quarter of the pixels on
    #[arg(long)]
    pub legacy: bool,

    /// Color channel carrying the secret [default: blue, alpha with --legacy]
    #[arg(long, value_enum)]
    pub channel: Option<ChannelArg>,

    /// Pixel index of the first secret bit [default: first pixel of row one]
    #[arg(long, value_name = "index")]
    pub start_pixel: Option<u32>,
}

impl LayoutArgs {
    pub fn codec_options(&self) -> CodecOptions {
        let mut options = if self.legacy {
            CodecOptions::legacy()
        } else {
            CodecOptions::framed(Layout::default())
        };
        if let Some(channel) = self.channel {
            options.layout.channel = channel.into();
        }
        if let Some(index) = self.start_pixel {
            options.layout.start = StartPixel::Index(index);
        }

        options
    }
}

pub fn ask_for_password(confirm: bool) -> Option<String> {
    let mut prompt = dialoguer::Password::new().with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Error: the passwords don't match.");
    }

    prompt.interact().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use qrveil_core::ProtocolVariant;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn layout_flags_override_the_defaults() {
        let args = LayoutArgs::default();
        assert_eq!(args.codec_options(), CodecOptions::default());

        let args = LayoutArgs {
            legacy: true,
            channel: Some(ChannelArg::Blue),
            start_pixel: None,
        };
        let options = args.codec_options();
        assert_eq!(options.variant, ProtocolVariant::Unframed);
        assert_eq!(options.layout.channel, Channel::Blue);
        assert_eq!(options.layout.start, StartPixel::QuarterBuffer);

        let args = LayoutArgs {
            start_pixel: Some(9),
            ..LayoutArgs::default()
        };
        assert_eq!(args.codec_options().layout.start, StartPixel::Index(9));
    }

    #[test]
    fn salt_is_a_global_option() {
        let args = CliArgs::try_parse_from(["qrveil", "--salt", "pepper", "encrypt", "-m", "x", "-p", "y"])
            .unwrap();
        assert_eq!(args.cipher_config().salt(), b"pepper");

        let args =
            CliArgs::try_parse_from(["qrveil", "inspect", "-i", "a.png", "--salt", "late"]).unwrap();
        assert_eq!(args.salt, "late");
    }
}
