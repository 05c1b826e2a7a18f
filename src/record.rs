//! Record types: raw per-block fields and the decoded [`GeoRecord`].

use std::fmt;

use crate::transform;
use crate::{Result, Sl2Error};

/// Block-relative offset of the depth field (f32, little-endian).
pub const DEPTH_OFFSET: usize = 62;
/// Block-relative offset of the raw longitude field (u32, little-endian).
pub const LONGITUDE_OFFSET: usize = 106;
/// Block-relative offset of the raw latitude field (u32, little-endian).
pub const LATITUDE_OFFSET: usize = 110;
/// Bytes a block must span past its start for all three fields to be read.
pub const FIELDS_SPAN: usize = LATITUDE_OFFSET + 4;

/// Raw field values read from one block, before any conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawFields {
    /// Depth in feet, as stored.
    pub depth_raw: f32,
    /// Spherical-Mercator easting.
    pub lon_raw: u32,
    /// Spherical-Mercator northing.
    pub lat_raw: u32,
}

impl RawFields {
    /// Read the three fixed-offset fields of the block starting at `offset`.
    ///
    /// Errors with [`Sl2Error::TruncatedBlock`] if the field span crosses the
    /// end of the stream.
    pub fn read_at(data: &[u8], offset: usize) -> Result<Self> {
        if offset + FIELDS_SPAN > data.len() {
            return Err(Sl2Error::TruncatedBlock {
                offset,
                needed: FIELDS_SPAN,
                actual: data.len() - offset.min(data.len()),
            });
        }
        Ok(Self {
            depth_raw: f32::from_le_bytes(read4(data, offset + DEPTH_OFFSET)),
            lon_raw: u32::from_le_bytes(read4(data, offset + LONGITUDE_OFFSET)),
            lat_raw: u32::from_le_bytes(read4(data, offset + LATITUDE_OFFSET)),
        })
    }

    /// Convert to a [`GeoRecord`] in decimal degrees and meters.
    pub fn to_geo(self) -> GeoRecord {
        GeoRecord {
            latitude: transform::latitude_degrees(self.lat_raw),
            longitude: transform::longitude_degrees(self.lon_raw),
            water_depth_m: transform::depth_to_meters(self.depth_raw),
        }
    }
}

fn read4(data: &[u8], offset: usize) -> [u8; 4] {
    [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]
}

/// One geolocated depth reading.
///
/// Depth keeps the container's sign convention: the stored feet value
/// converted to meters and negated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoRecord {
    /// Geodetic latitude, decimal degrees.
    pub latitude: f64,
    /// Geodetic longitude, decimal degrees.
    pub longitude: f64,
    /// Water depth in meters, negated (see module docs).
    pub water_depth_m: f64,
}

impl fmt::Display for GeoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6}, {:.6} @ {:.2} m",
            self.latitude, self.longitude, self.water_depth_m
        )
    }
}
