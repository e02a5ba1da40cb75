use crate::error::Error;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). Limits are checked between
/// header parse and plane allocation, so an oversized file is rejected
/// before any pixel memory exists.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (rows * cols).
    pub max_pixels: Option<u64>,
    /// Maximum bytes allocated for the channel planes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check decoded geometry against the configured caps.
    pub(crate) fn check(&self, rows: usize, cols: usize) -> Result<(), Error> {
        let checks = [
            (self.max_width, cols as u64, "width"),
            (self.max_height, rows as u64, "height"),
            (
                self.max_pixels,
                (rows as u64).saturating_mul(cols as u64),
                "pixel count",
            ),
        ];
        for (cap, actual, what) in checks {
            if let Some(cap) = cap {
                if actual > cap {
                    return Err(Error::LimitExceeded(format!(
                        "{what} {actual} exceeds limit {cap}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Check that a planned allocation fits the memory cap.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), Error> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(Error::LimitExceeded(format!(
                    "allocation {bytes} bytes exceeds memory limit {max_mem}"
                )));
            }
        }
        Ok(())
    }
}
