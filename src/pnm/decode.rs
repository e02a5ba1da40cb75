//! Header parse and P3/P6 pixel readers.

use enough::Stop;
use rgb::RGB8;

use super::PnmFormat;
use crate::error::Error;
use crate::raster::PixelBuffer;

/// Parsed header (internal). `data_offset` is the first pixel byte,
/// immediately after the maxval line's newline.
pub(crate) struct PnmHeader {
    pub format: PnmFormat,
    pub rows: usize,
    pub cols: usize,
    pub comments: String,
    pub data_offset: usize,
}

pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, Error> {
    let (magic_line, mut offset) = take_line(data, 0)?;
    let format =
        PnmFormat::from_magic(magic_line.trim()).ok_or(Error::UnrecognizedFormat)?;
    if !format.readable() {
        return Err(Error::UnsupportedVariant(format!(
            "cannot decode {} (write-only variant)",
            format.magic()
        )));
    }

    // Comment lines sit between the magic token and the dimensions,
    // each carried over to the output verbatim.
    let mut comments = String::new();
    while data.get(offset) == Some(&b'#') {
        let (line, next) = take_line(data, offset)?;
        comments.push_str(line);
        comments.push('\n');
        offset = next;
    }

    let (dims_line, next) = take_line(data, offset)?;
    offset = next;
    let mut tokens = dims_line.split_ascii_whitespace();
    let cols = parse_dim(tokens.next(), dims_line)?;
    let rows = parse_dim(tokens.next(), dims_line)?;
    if tokens.next().is_some() {
        return Err(Error::InvalidHeader(format!(
            "bad dimension line {dims_line:?}"
        )));
    }
    if rows == 0 || cols == 0 {
        return Err(Error::EmptyDimensions { cols, rows });
    }

    let (maxval_line, next) = take_line(data, offset)?;
    offset = next;
    let maxval: u32 = maxval_line
        .trim()
        .parse()
        .map_err(|_| Error::InvalidHeader(format!("bad maxval line {maxval_line:?}")))?;
    if maxval != 255 {
        return Err(Error::UnsupportedVariant(format!(
            "maxval {maxval} (only 255 is supported)"
        )));
    }

    Ok(PnmHeader {
        format,
        rows,
        cols,
        comments,
        data_offset: offset,
    })
}

/// Read `rows * cols` interleaved R,G,B byte triples into planes.
/// The caller has already sized `data` to exactly the pixel payload.
pub(crate) fn interleaved_bytes(
    data: &[u8],
    rows: usize,
    cols: usize,
    stop: &dyn Stop,
) -> Result<PixelBuffer, Error> {
    let mut pixels = PixelBuffer::new(rows, cols)?;
    let mut triples = data.chunks_exact(3);
    for row in 0..rows {
        if row % 16 == 0 {
            stop.check()?;
        }
        for col in 0..cols {
            let t = triples.next().ok_or(Error::UnexpectedEof)?;
            pixels.set_color(
                row,
                col,
                RGB8 {
                    r: t[0],
                    g: t[1],
                    b: t[2],
                },
            );
        }
    }
    Ok(pixels)
}

/// Read `rows * cols` whitespace-separated decimal triples into planes.
/// Samples are truncated to 8 bits, like every integer entering storage.
pub(crate) fn ascii_samples(
    data: &[u8],
    rows: usize,
    cols: usize,
    stop: &dyn Stop,
) -> Result<PixelBuffer, Error> {
    let text = core::str::from_utf8(data)
        .map_err(|_| Error::InvalidData("ASCII pixel data is not valid UTF-8".into()))?;
    let mut samples = text.split_ascii_whitespace();

    let mut pixels = PixelBuffer::new(rows, cols)?;
    for row in 0..rows {
        if row % 16 == 0 {
            stop.check()?;
        }
        for col in 0..cols {
            pixels.set_color(
                row,
                col,
                RGB8 {
                    r: next_sample(&mut samples)?,
                    g: next_sample(&mut samples)?,
                    b: next_sample(&mut samples)?,
                },
            );
        }
    }
    Ok(pixels)
}

/// Split off one newline-terminated header line, returning the line
/// without its newline and the offset just past it.
fn take_line(data: &[u8], start: usize) -> Result<(&str, usize), Error> {
    let rest = data.get(start..).ok_or(Error::UnexpectedEof)?;
    let end = rest
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(Error::UnexpectedEof)?;
    let line = core::str::from_utf8(&rest[..end])
        .map_err(|_| Error::InvalidHeader("header is not valid ASCII".into()))?;
    Ok((line, start + end + 1))
}

fn parse_dim(token: Option<&str>, line: &str) -> Result<usize, Error> {
    token
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| Error::InvalidHeader(format!("bad dimension line {line:?}")))
}

fn next_sample<'a>(samples: &mut impl Iterator<Item = &'a str>) -> Result<u8, Error> {
    let token = samples.next().ok_or(Error::UnexpectedEof)?;
    let value: i64 = token
        .parse()
        .map_err(|_| Error::InvalidData(format!("bad pixel sample {token:?}")))?;
    Ok(value as u8)
}
