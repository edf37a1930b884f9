use std::path::Path;

use image::ImageFormat;
use log::debug;
use qrveil_core::RasterBuffer;

use crate::error::CliError;
use crate::CliResult;

/// Decodes any image the `image` crate understands into an RGBA raster.
pub fn load_raster(path: &Path) -> CliResult<RasterBuffer> {
    let image = image::open(path).map_err(|source| CliError::InvalidImageMedia {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {}x{} image {}", image.width(), image.height(), path.display());

    Ok(image.to_rgba8().into())
}

/// Writes the raster as PNG, whatever the file extension says. Lossy formats would destroy the secret.
pub fn save_png(raster: RasterBuffer, path: &Path) -> CliResult<()> {
    let image = raster.into_image()?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| CliError::ImageEncodingError {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("saved {}x{} PNG {}", image.width(), image.height(), path.display());

    Ok(())
}
