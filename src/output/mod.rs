//! Writing frame buffers to disk.
//!
//! Binary PPM (`P6`) is written by hand; any other format the `image` crate
//! can encode is selected by file extension in [`save_image`].

mod ppm;

pub use ppm::{encode_ppm, save_ppm, write_ppm, PPM_MAGIC};

use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::ExportError;
use crate::render::FrameBuffer;

/// Save `buffer` to `path`, choosing the encoding from the extension.
pub fn save_image<P: AsRef<Path>>(buffer: &FrameBuffer, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).map_err(|_| ExportError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    // `image` maps .pbm/.pgm/.pnm to Pnm too; only .ppm may carry P6 data.
    if format == ImageFormat::Pnm {
        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));
        if !is_ppm {
            return Err(ExportError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
        return save_ppm(buffer, path);
    }

    let image = RgbImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgb_bytes())
        .ok_or_else(|| ExportError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
    image.save_with_format(path, format)?;
    tracing::info!(path = %path.display(), ?format, "wrote image");
    Ok(())
}
