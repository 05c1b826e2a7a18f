//! Suppression of degenerate sonar records.
//!
//! Two kinds of block are noise rather than soundings: blocks with a zero
//! depth (no bottom lock) and runs of blocks sharing the same raw latitude
//! (the transducer pinging faster than the GPS updates). Both are dropped
//! before conversion.

use crate::record::RawFields;

/// Stateful accept/reject decision over raw fields, in scan order.
///
/// Rejects a record when its depth is zero or its raw latitude equals the
/// raw latitude of the immediately preceding record. This is a
/// consecutive-duplicate check, not global deduplication: a latitude seen
/// again after an intervening different value passes.
#[derive(Debug, Default)]
pub struct RecordFilter {
    prev_lat: Option<u32>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one record. The previous-latitude state advances whether or
    /// not the record is accepted.
    pub fn accept(&mut self, fields: &RawFields) -> bool {
        let duplicate = self.prev_lat == Some(fields.lat_raw);
        self.prev_lat = Some(fields.lat_raw);
        fields.depth_raw != 0.0 && !duplicate
    }
}
