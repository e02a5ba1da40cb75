//! Netpbm pixel-map family: P3/P6 color images (read and write), P2/P5
//! grayscale (write only).

mod decode;
mod encode;

use enough::Stop;
use log::debug;

use crate::error::Error;
use crate::limits::Limits;
use crate::raster::PixelBuffer;

/// Which pixel-map variant a file uses.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PnmFormat {
    /// P3 — RGB, decimal ASCII samples.
    AsciiPpm,
    /// P6 — RGB, raw binary samples.
    BinaryPpm,
    /// P2 — grayscale ASCII (write only).
    AsciiPgm,
    /// P5 — grayscale binary (write only).
    BinaryPgm,
}

impl PnmFormat {
    /// The magic token at the start of the header.
    pub fn magic(self) -> &'static str {
        match self {
            PnmFormat::AsciiPpm => "P3",
            PnmFormat::BinaryPpm => "P6",
            PnmFormat::AsciiPgm => "P2",
            PnmFormat::BinaryPgm => "P5",
        }
    }

    /// Whether the decoder accepts this variant.
    pub fn readable(self) -> bool {
        matches!(self, PnmFormat::AsciiPpm | PnmFormat::BinaryPpm)
    }

    pub(crate) fn from_magic(token: &str) -> Option<Self> {
        match token {
            "P3" => Some(PnmFormat::AsciiPpm),
            "P6" => Some(PnmFormat::BinaryPpm),
            "P2" => Some(PnmFormat::AsciiPgm),
            "P5" => Some(PnmFormat::BinaryPgm),
            _ => None,
        }
    }
}

/// Header fields that ride along with the pixel planes.
#[derive(Clone, Debug)]
pub struct PnmMeta {
    /// Variant the file was read with; selects the writer branch on
    /// write-back.
    pub format: PnmFormat,
    /// Verbatim `#` comment block: each line keeps its leading `#` and
    /// trailing newline. Empty when the file has none.
    pub comments: String,
}

/// A decoded image: header metadata plus the channel planes.
#[derive(Clone, Debug)]
pub struct PnmImage {
    pub meta: PnmMeta,
    pub pixels: PixelBuffer,
}

/// Decode a P3 or P6 file.
pub fn decode(data: &[u8], limits: Option<&Limits>, stop: &dyn Stop) -> Result<PnmImage, Error> {
    let header = decode::parse_header(data)?;
    let (rows, cols) = (header.rows, header.cols);

    let pixel_count = rows
        .checked_mul(cols)
        .ok_or(Error::DimensionsTooLarge { cols, rows })?;
    let byte_len = pixel_count
        .checked_mul(3)
        .ok_or(Error::DimensionsTooLarge { cols, rows })?;
    if let Some(limits) = limits {
        limits.check(rows, cols)?;
        limits.check_memory(byte_len)?;
    }

    stop.check()?;

    let pixel_data = data.get(header.data_offset..).ok_or(Error::UnexpectedEof)?;
    let pixels = match header.format {
        PnmFormat::BinaryPpm => {
            if pixel_data.len() < byte_len {
                return Err(Error::UnexpectedEof);
            }
            decode::interleaved_bytes(&pixel_data[..byte_len], rows, cols, stop)?
        }
        PnmFormat::AsciiPpm => decode::ascii_samples(pixel_data, rows, cols, stop)?,
        other => {
            return Err(Error::UnsupportedVariant(format!(
                "cannot decode {} (write-only variant)",
                other.magic()
            )));
        }
    };

    debug!(
        "decoded {} image: {cols}x{rows}, {} comment bytes",
        header.format.magic(),
        header.comments.len()
    );

    Ok(PnmImage {
        meta: PnmMeta {
            format: header.format,
            comments: header.comments,
        },
        pixels,
    })
}

/// Encode an image under its own format tag.
pub fn encode(image: &PnmImage, stop: &dyn Stop) -> Result<Vec<u8>, Error> {
    encode::encode_pnm(image, stop)
}
