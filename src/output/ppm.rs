use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::colors::Color;
use crate::error::ExportError;
use crate::render::FrameBuffer;

/// Magic token of binary RGB PPM.
pub const PPM_MAGIC: &str = "P6";

const MAX_CHANNEL_VALUE: u8 = 255;

/// Write `buffer` as binary PPM.
///
/// Layout: `P6\n<width> <height>\n255\n` followed by `width * height` RGB
/// triples, row-major, top row first. Nothing follows the pixel data.
pub fn write_ppm<W: Write>(buffer: &FrameBuffer, mut writer: W) -> std::io::Result<()> {
    writer.write_all(ppm_header(buffer).as_bytes())?;

    for row in buffer.rows() {
        for &packed in row {
            let (r, g, b) = Color::unpack(packed).channels();
            writer.write_all(&[r, g, b])?;
        }
    }
    writer.flush()
}

/// Encode `buffer` as binary PPM in memory.
pub fn encode_ppm(buffer: &FrameBuffer) -> Vec<u8> {
    let mut bytes = ppm_header(buffer).into_bytes();
    bytes.extend(buffer.to_rgb_bytes());
    bytes
}

fn ppm_header(buffer: &FrameBuffer) -> String {
    format!(
        "{PPM_MAGIC}\n{} {}\n{MAX_CHANNEL_VALUE}\n",
        buffer.width(),
        buffer.height()
    )
}

/// Write `buffer` as binary PPM to `path`, replacing any existing file.
pub fn save_ppm<P: AsRef<Path>>(buffer: &FrameBuffer, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_ppm(buffer, BufWriter::new(file))?;
    tracing::info!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        "wrote PPM"
    );
    Ok(())
}
