//! Block boundary discovery for the sl2 container.
//!
//! An sl2 file is a 10-byte header followed by back-to-back variable-size
//! blocks. Each block begins with a 26-byte header whose first two bytes are
//! the block's total length, little-endian; there is no block count anywhere
//! in the file, so boundaries are found by walking the lengths.

use crate::{Result, Sl2Error};

/// Size of the fixed file header preceding the first block.
pub const FILE_HEADER_LEN: usize = 10;

/// Minimum size of a block header. Only the leading length field is read
/// during scanning.
pub const BLOCK_HEADER_LEN: usize = 26;

/// Iterator over decodable block start offsets in an sl2 byte stream.
///
/// Offsets are produced lazily, in increasing order, one pass. Each emitted
/// offset is the start of a block that is followed by at least one more
/// block boundary; the final boundary, which sits at or past the end of the
/// stream, marks no decodable data and is never emitted.
///
/// # Example
///
/// ```
/// use sl2_rs::BlockScanner;
///
/// // Header + one 20-byte block: the sole boundary is end-of-stream,
/// // so there are no decodable starts.
/// let mut data = vec![0u8; 10];
/// data.extend_from_slice(&20u16.to_le_bytes());
/// data.extend_from_slice(&[0u8; 18]);
///
/// let offsets: Vec<_> = BlockScanner::new(&data).unwrap().collect();
/// assert!(offsets.is_empty());
/// ```
#[derive(Debug)]
pub struct BlockScanner<'a> {
    data: &'a [u8],
    cursor: usize,
    failed: bool,
}

impl<'a> BlockScanner<'a> {
    /// Create a scanner over a complete sl2 byte stream.
    ///
    /// Errors with [`Sl2Error::HeaderTooShort`] if the stream cannot hold
    /// the 10-byte file header.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        if data.len() < FILE_HEADER_LEN {
            return Err(Sl2Error::HeaderTooShort { actual: data.len() });
        }
        Ok(Self {
            data,
            cursor: FILE_HEADER_LEN,
            failed: false,
        })
    }

    /// Read the block length declared at `offset`.
    fn block_len(&self, offset: usize) -> Result<usize> {
        if offset + 2 > self.data.len() {
            return Err(Sl2Error::TruncatedBlock {
                offset,
                needed: 2,
                actual: self.data.len() - offset,
            });
        }
        let len = u16::from_le_bytes([self.data[offset], self.data[offset + 1]]) as usize;
        if len == 0 {
            return Err(Sl2Error::ZeroLengthBlock { offset });
        }
        Ok(len)
    }
}

impl Iterator for BlockScanner<'_> {
    type Item = Result<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.data.len() {
            return None;
        }

        let len = match self.block_len(self.cursor) {
            Ok(len) => len,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };

        let candidate = self.cursor + len;
        self.cursor = candidate;

        // A boundary at or past end-of-stream closes the final block; no
        // data follows it, so it is not a decodable start.
        if candidate >= self.data.len() {
            return None;
        }
        Some(Ok(candidate))
    }
}
