//! Connected-region color replacement ("bucket fill") for netpbm images.
//!
//! Reads P3 (ASCII) and P6 (binary) pixel maps into three same-shaped
//! channel planes, repaints the 4-connected region of exactly matching
//! color around a seed pixel, and encodes the result back under the
//! format tag the file was read with. Grayscale P2/P5 output is supported
//! by the encoder.
//!
//! The fill runs on an explicit heap worklist, so traversal depth is
//! bounded by the image size alone — a solid-color image spanning the
//! whole grid never touches the call stack.
//!
//! ## Usage
//!
//! ```
//! use enough::Unstoppable;
//! use ppmfill::{flood_fill, pnm, RGB8, VisitedMask};
//!
//! let data = b"P6\n2 1\n255\n\xff\x00\x00\xff\x00\x00";
//!
//! let mut image = pnm::decode(data, None, &Unstoppable)?;
//! let target = image.pixels.color_at(0, 0);
//! let mut mask = VisitedMask::new(image.pixels.rows(), image.pixels.cols())?;
//! flood_fill(
//!     &mut image.pixels,
//!     &mut mask,
//!     (0, 0),
//!     target,
//!     RGB8 { r: 0, g: 255, b: 0 },
//!     &Unstoppable,
//! )?;
//!
//! let encoded = pnm::encode(&image, &Unstoppable)?;
//! assert_eq!(&encoded, b"P6\n2 1\n255\n\x00\xff\x00\x00\xff\x00");
//! # Ok::<(), ppmfill::Error>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod fill;
mod limits;
mod raster;

pub mod pnm;

// Re-exports
pub use enough::{Stop, Unstoppable};
pub use error::Error;
pub use fill::{FillReport, flood_fill};
pub use limits::Limits;
pub use raster::{PixelBuffer, VisitedMask};
pub use rgb::RGB8;
