use thiserror::Error;

/// Arguments rejected at the entry of a partial sort.
///
/// Validation happens once, before the buffer is touched. A rejected call leaves the buffer
/// exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The requested range selects no element, `end` is exclusive.
    #[error("sort range {start}..{end} is empty")]
    EmptyRange { start: usize, end: usize },

    /// The requested range reaches past the last element, `end` is exclusive.
    #[error("sort range {start}..{end} is out of bounds for {len} elements")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// Byte records need a width of at least one byte.
    #[error("element width must be at least one byte")]
    ZeroWidth,

    /// The byte buffer does not hold a whole number of records.
    #[error("buffer of {len} bytes is not a multiple of the element width {width}")]
    UnalignedBuffer { len: usize, width: usize },
}
