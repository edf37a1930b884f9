use std::path::PathBuf;

use clap::Args;
use qrveil_core::media::payload::legacy::unframed_capacity;
use qrveil_core::{capacity, ProtocolVariant, RasterBuffer};
use tabled::{Table, Tabled};

use crate::cli::LayoutArgs;
use crate::media::load_raster;
use crate::CliResult;

/// Shows the size, the first pixels and the secret capacity of an image
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Image file to inspect
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Number of pixels to print
    #[arg(short = 'n', long, value_name = "count", default_value_t = 10)]
    pub pixels: usize,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(Tabled)]
struct PixelRow {
    #[tabled(rename = "Pixel")]
    index: usize,
    #[tabled(rename = "R")]
    r: u8,
    #[tabled(rename = "G")]
    g: u8,
    #[tabled(rename = "B")]
    b: u8,
    #[tabled(rename = "A")]
    a: u8,
}

impl InspectArgs {
    pub fn run(self) -> CliResult<()> {
        let raster = load_raster(&self.media)?;
        print!("{}", self.report(&raster));

        Ok(())
    }

    fn report(&self, raster: &RasterBuffer) -> String {
        let options = self.layout.codec_options();
        let layout = options.layout;
        let rows = (0..self.pixels).map_while(|index| {
            raster.pixel(index).map(|[r, g, b, a]| PixelRow { index, r, g, b, a })
        });

        let bytes = match options.variant {
            ProtocolVariant::Framed => capacity(raster, &layout),
            ProtocolVariant::Unframed => unframed_capacity(raster, &layout),
        };

        format!(
            "Image size: {}x{}\nFirst {} pixels (RGBA):\n{}\nCapacity: {bytes} bytes ({:?}, {} channel from pixel {} on)\n",
            raster.width(),
            raster.height(),
            self.pixels,
            Table::new(rows),
            options.variant,
            layout.channel,
            layout.start_pixel(raster)
        )
    }
}
