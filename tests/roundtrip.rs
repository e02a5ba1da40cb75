//! Codec round trips and error paths on in-memory buffers.

use enough::Unstoppable;
use ppmfill::pnm::{self, PnmFormat, PnmImage, PnmMeta};
use ppmfill::{Error, Limits, PixelBuffer, RGB8};

const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

fn checkerboard(rows: usize, cols: usize, a: RGB8, b: RGB8) -> PixelBuffer {
    let mut pixels = PixelBuffer::new(rows, cols).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            pixels.set_color(row, col, if (row + col) % 2 == 0 { a } else { b });
        }
    }
    pixels
}

fn image(format: PnmFormat, comments: &str, pixels: PixelBuffer) -> PnmImage {
    PnmImage {
        meta: PnmMeta {
            format,
            comments: comments.into(),
        },
        pixels,
    }
}

// ── P6 ───────────────────────────────────────────────────────────────

#[test]
fn p6_decode() {
    let mut data = b"P6\n# hand made\n3 2\n255\n".to_vec();
    data.extend_from_slice(&[
        255, 0, 0, 0, 255, 0, 0, 0, 255, // row 0
        1, 2, 3, 4, 5, 6, 7, 8, 9, // row 1
    ]);

    let image = pnm::decode(&data, None, &Unstoppable).unwrap();
    assert_eq!(image.meta.format, PnmFormat::BinaryPpm);
    assert_eq!(image.meta.comments, "# hand made\n");
    assert_eq!(image.pixels.rows(), 2);
    assert_eq!(image.pixels.cols(), 3);
    assert_eq!(image.pixels.color_at(0, 0), RED);
    assert_eq!(image.pixels.color_at(0, 1), GREEN);
    assert_eq!(image.pixels.color_at(0, 2), BLUE);
    assert_eq!(image.pixels.color_at(1, 2), RGB8 { r: 7, g: 8, b: 9 });
}

#[test]
fn p6_roundtrip_byte_identical() {
    let mut data = b"P6\n# one\n# two\n2 2\n255\n".to_vec();
    data.extend_from_slice(&[9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 255, 128]);

    let image = pnm::decode(&data, None, &Unstoppable).unwrap();
    let encoded = pnm::encode(&image, &Unstoppable).unwrap();
    assert_eq!(encoded, data);
}

#[test]
fn p6_trailing_bytes_ignored() {
    let mut data = b"P6\n1 1\n255\n".to_vec();
    data.extend_from_slice(&[10, 20, 30, 99, 99]);

    let image = pnm::decode(&data, None, &Unstoppable).unwrap();
    assert_eq!(image.pixels.color_at(0, 0), RGB8 { r: 10, g: 20, b: 30 });
}

#[test]
fn p6_truncated_body() {
    let mut data = b"P6\n2 2\n255\n".to_vec();
    data.extend_from_slice(&[1, 2, 3, 4, 5]);

    match pnm::decode(&data, None, &Unstoppable).unwrap_err() {
        Error::UnexpectedEof => {}
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }
}

// ── P3 ───────────────────────────────────────────────────────────────

#[test]
fn p3_decode_and_canonical_roundtrip() {
    let data = b"P3\n2 2\n255\n255 0 0\n0 255 0\n0 0 255\n255 255 255\n";

    let image = pnm::decode(data, None, &Unstoppable).unwrap();
    assert_eq!(image.meta.format, PnmFormat::AsciiPpm);
    assert_eq!(image.pixels.color_at(0, 0), RED);
    assert_eq!(image.pixels.color_at(0, 1), GREEN);
    assert_eq!(image.pixels.color_at(1, 0), BLUE);
    assert_eq!(image.pixels.color_at(1, 1), WHITE);

    let encoded = pnm::encode(&image, &Unstoppable).unwrap();
    assert_eq!(encoded, data.to_vec());
}

#[test]
fn p3_whitespace_tolerant() {
    let canonical = pnm::decode(b"P3\n2 1\n255\n1 2 3\n4 5 6\n", None, &Unstoppable).unwrap();
    let sprawling = pnm::decode(
        b"P3\n2 1\n255\n  1\t2 3\n\n 4   5\t\t6 \n",
        None,
        &Unstoppable,
    )
    .unwrap();
    for col in 0..2 {
        assert_eq!(
            canonical.pixels.color_at(0, col),
            sprawling.pixels.color_at(0, col)
        );
    }
}

#[test]
fn p3_emits_one_triple_per_line() {
    let img = image(PnmFormat::AsciiPpm, "", checkerboard(2, 2, RED, GREEN));
    let encoded = pnm::encode(&img, &Unstoppable).unwrap();
    let text = String::from_utf8(encoded).unwrap();
    assert_eq!(text, "P3\n2 2\n255\n255 0 0\n0 255 0\n0 255 0\n255 0 0\n");
}

#[test]
fn p3_samples_truncate_to_eight_bits() {
    let image = pnm::decode(b"P3\n1 1\n255\n300 -1 256\n", None, &Unstoppable).unwrap();
    assert_eq!(image.pixels.color_at(0, 0), RGB8 { r: 44, g: 255, b: 0 });
}

#[test]
fn p3_bad_sample() {
    match pnm::decode(b"P3\n1 1\n255\nred 0 0\n", None, &Unstoppable).unwrap_err() {
        Error::InvalidData(_) => {}
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn p3_too_few_samples() {
    match pnm::decode(b"P3\n2 1\n255\n1 2 3\n", None, &Unstoppable).unwrap_err() {
        Error::UnexpectedEof => {}
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }
}

// ── header errors ────────────────────────────────────────────────────

#[test]
fn unrecognized_magic() {
    match pnm::decode(b"P9\n1 1\n255\n\x00\x00\x00", None, &Unstoppable).unwrap_err() {
        Error::UnrecognizedFormat => {}
        other => panic!("expected UnrecognizedFormat, got {other:?}"),
    }
}

#[test]
fn gray_variants_are_write_only() {
    match pnm::decode(b"P5\n1 1\n255\n\x00", None, &Unstoppable).unwrap_err() {
        Error::UnsupportedVariant(_) => {}
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

#[test]
fn maxval_must_be_255() {
    match pnm::decode(b"P6\n1 1\n65535\n\x00\x00\x00\x00\x00\x00", None, &Unstoppable).unwrap_err()
    {
        Error::UnsupportedVariant(_) => {}
        other => panic!("expected UnsupportedVariant, got {other:?}"),
    }
}

#[test]
fn zero_dimensions_rejected() {
    match pnm::decode(b"P6\n0 3\n255\n", None, &Unstoppable).unwrap_err() {
        Error::EmptyDimensions { cols: 0, rows: 3 } => {}
        other => panic!("expected EmptyDimensions, got {other:?}"),
    }
}

#[test]
fn bad_dimension_line() {
    match pnm::decode(b"P6\nwide tall\n255\n", None, &Unstoppable).unwrap_err() {
        Error::InvalidHeader(_) => {}
        other => panic!("expected InvalidHeader, got {other:?}"),
    }
}

#[test]
fn missing_maxval_line() {
    match pnm::decode(b"P6\n2 2\n", None, &Unstoppable).unwrap_err() {
        Error::UnexpectedEof => {}
        other => panic!("expected UnexpectedEof, got {other:?}"),
    }
}

#[test]
fn limits_reject_large() {
    let mut data = b"P6\n2 2\n255\n".to_vec();
    data.extend_from_slice(&[0; 12]);

    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };
    match pnm::decode(&data, Some(&limits), &Unstoppable).unwrap_err() {
        Error::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }
}

// ── grayscale writers ────────────────────────────────────────────────

#[test]
fn p5_writes_gray_plane() {
    let mut pixels = PixelBuffer::new(1, 3).unwrap();
    for (col, v) in [0u8, 128, 255].into_iter().enumerate() {
        pixels.set_color(0, col, RGB8 { r: v, g: 1, b: 2 });
    }

    let encoded = pnm::encode(&image(PnmFormat::BinaryPgm, "", pixels), &Unstoppable).unwrap();
    assert_eq!(encoded, b"P5\n3 1\n255\n\x00\x80\xff");
}

#[test]
fn p2_writes_decimal_gray_plane() {
    let mut pixels = PixelBuffer::new(1, 3).unwrap();
    for (col, v) in [12u8, 34, 56].into_iter().enumerate() {
        pixels.set_color(0, col, RGB8 { r: v, g: 0, b: 0 });
    }

    let encoded = pnm::encode(&image(PnmFormat::AsciiPgm, "", pixels), &Unstoppable).unwrap();
    assert_eq!(encoded, b"P2\n3 1\n255\n12 34 56 ");
}

#[test]
fn comments_reemitted_verbatim() {
    let img = image(
        PnmFormat::AsciiPpm,
        "# alpha\n#beta\n",
        checkerboard(1, 2, RED, GREEN),
    );
    let encoded = pnm::encode(&img, &Unstoppable).unwrap();
    assert!(encoded.starts_with(b"P3\n# alpha\n#beta\n2 1\n255\n"));
}
