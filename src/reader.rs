//! Iterator-based reader producing filtered [`GeoRecord`]s from sl2 bytes.
//!
//! Use [`Sl2Reader`] to stream records lazily, or [`decode`] / [`decode_file`]
//! to materialize the whole track at once.

use std::path::Path;

use crate::filter::RecordFilter;
use crate::record::{GeoRecord, RawFields};
use crate::scanner::BlockScanner;
use crate::{Result, Sl2Error};

/// Iterator over decoded, filtered sonar records in an sl2 byte slice.
///
/// Each call to `next()` advances to the next decodable block, reads its
/// fields, and either converts it or skips it as degenerate. Iteration
/// stops at the final block boundary or on the first error.
///
/// # Example
///
/// ```
/// use sl2_rs::Sl2Reader;
///
/// // Header + two blocks. The first block's payload is never decoded
/// // (scanning starts from its boundary), so the sounding goes in the
/// // second.
/// let mut data = vec![0u8; 10];
/// for _ in 0..2 {
///     let start = data.len();
///     data.resize(start + 120, 0);
///     data[start..start + 2].copy_from_slice(&120u16.to_le_bytes());
/// }
/// data[130 + 62..130 + 66].copy_from_slice(&10.0f32.to_le_bytes());
/// data[130 + 106..130 + 110].copy_from_slice(&1_000_000u32.to_le_bytes());
/// data[130 + 110..130 + 114].copy_from_slice(&2_000_000u32.to_le_bytes());
///
/// let records: Vec<_> = Sl2Reader::new(&data)
///     .unwrap()
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(records.len(), 1);
/// ```
pub struct Sl2Reader<'a> {
    data: &'a [u8],
    scanner: BlockScanner<'a>,
    filter: RecordFilter,
    failed: bool,
}

impl<'a> Sl2Reader<'a> {
    /// Create a reader over a complete sl2 byte stream.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Ok(Self {
            data,
            scanner: BlockScanner::new(data)?,
            filter: RecordFilter::new(),
            failed: false,
        })
    }
}

impl Iterator for Sl2Reader<'_> {
    type Item = Result<GeoRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let offset = match self.scanner.next()? {
                Ok(offset) => offset,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            let fields = match RawFields::read_at(self.data, offset) {
                Ok(fields) => fields,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            if self.filter.accept(&fields) {
                return Some(Ok(fields.to_geo()));
            }
        }
    }
}

/// Decode an sl2 byte stream into the full filtered track.
///
/// Errors with [`Sl2Error::NoRecords`] if the scan completes but every
/// block was filtered out; downstream consumers cannot do anything useful
/// with an empty track.
pub fn decode(data: &[u8]) -> Result<Vec<GeoRecord>> {
    let records = Sl2Reader::new(data)?.collect::<Result<Vec<_>>>()?;
    if records.is_empty() {
        return Err(Sl2Error::NoRecords);
    }
    Ok(records)
}

/// Read an sl2 file from disk and decode it.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Vec<GeoRecord>> {
    let data = std::fs::read(path)?;
    decode(&data)
}
