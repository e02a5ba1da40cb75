//! Writers for all four variants: P3/P6 color, P2/P5 grayscale.

use enough::Stop;

use super::{PnmFormat, PnmImage};
use crate::error::Error;
use crate::raster::PixelBuffer;

/// Encode an image under its own format tag.
///
/// Every variant shares the header shape `<magic>\n<comments><cols>
/// <rows>\n255\n`, with the comment block re-emitted byte for byte. The
/// grayscale variants write the first channel plane, where gray samples
/// live.
pub(crate) fn encode_pnm(image: &PnmImage, stop: &dyn Stop) -> Result<Vec<u8>, Error> {
    let pixels = &image.pixels;
    let header = format!(
        "{}\n{}{} {}\n255\n",
        image.meta.format.magic(),
        image.meta.comments,
        pixels.cols(),
        pixels.rows()
    );

    stop.check()?;

    match image.meta.format {
        PnmFormat::BinaryPpm => binary_color(header, pixels, stop),
        PnmFormat::AsciiPpm => ascii_color(header, pixels, stop),
        PnmFormat::BinaryPgm => binary_gray(header, pixels),
        PnmFormat::AsciiPgm => ascii_gray(header, pixels, stop),
    }
}

fn binary_color(header: String, pixels: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, Error> {
    let body = pixels.rows().saturating_mul(pixels.cols()).saturating_mul(3);
    let mut out = Vec::with_capacity(header.len().saturating_add(body));
    out.extend_from_slice(header.as_bytes());

    for row in 0..pixels.rows() {
        if row % 16 == 0 {
            stop.check()?;
        }
        for col in 0..pixels.cols() {
            let c = pixels.color_at(row, col);
            out.push(c.r);
            out.push(c.g);
            out.push(c.b);
        }
    }

    Ok(out)
}

// One "r g b" triple per line.
fn ascii_color(header: String, pixels: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, Error> {
    let body = pixels.rows().saturating_mul(pixels.cols()).saturating_mul(12);
    let mut out = String::with_capacity(header.len().saturating_add(body));
    out.push_str(&header);

    for row in 0..pixels.rows() {
        if row % 16 == 0 {
            stop.check()?;
        }
        for col in 0..pixels.cols() {
            let c = pixels.color_at(row, col);
            out.push_str(&format!("{} {} {}\n", c.r, c.g, c.b));
        }
    }

    Ok(out.into_bytes())
}

fn binary_gray(header: String, pixels: &PixelBuffer) -> Result<Vec<u8>, Error> {
    let plane = pixels.gray_plane();
    let mut out = Vec::with_capacity(header.len().saturating_add(plane.len()));
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(plane);
    Ok(out)
}

fn ascii_gray(header: String, pixels: &PixelBuffer, stop: &dyn Stop) -> Result<Vec<u8>, Error> {
    let body = pixels.rows().saturating_mul(pixels.cols()).saturating_mul(4);
    let mut out = String::with_capacity(header.len().saturating_add(body));
    out.push_str(&header);

    for (i, sample) in pixels.gray_plane().iter().enumerate() {
        if i % 4096 == 0 {
            stop.check()?;
        }
        out.push_str(&format!("{sample} "));
    }

    Ok(out.into_bytes())
}
