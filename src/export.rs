//! Export of decoded tracks: CSV rows and parallel plot series.

use std::io::Write;

use crate::record::GeoRecord;
use crate::Result;

/// Write records as CSV with a header row.
///
/// Column order is fixed: `latitude, longitude, waterDepthM`. One row per
/// record, no rows for anything that was filtered out upstream.
pub fn write_csv<W: Write>(records: &[GeoRecord], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["latitude", "longitude", "waterDepthM"])?;
    for record in records {
        out.write_record([
            record.latitude.to_string(),
            record.longitude.to_string(),
            record.water_depth_m.to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Equal-length coordinate and depth vectors for scatter-style plotting.
///
/// Order matches the record sequence; entry `i` of every vector belongs to
/// the same record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSeries {
    pub longitude: Vec<f64>,
    pub latitude: Vec<f64>,
    pub depth: Vec<f64>,
}

impl PlotSeries {
    pub fn from_records(records: &[GeoRecord]) -> Self {
        let mut series = Self {
            longitude: Vec::with_capacity(records.len()),
            latitude: Vec::with_capacity(records.len()),
            depth: Vec::with_capacity(records.len()),
        };
        for r in records {
            series.longitude.push(r.longitude);
            series.latitude.push(r.latitude);
            series.depth.push(r.water_depth_m);
        }
        series
    }

    pub fn len(&self) -> usize {
        self.latitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latitude.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Vec<GeoRecord> {
        vec![
            GeoRecord {
                latitude: 59.1,
                longitude: 17.5,
                water_depth_m: -2.25,
            },
            GeoRecord {
                latitude: 59.2,
                longitude: 17.6,
                water_depth_m: -3.5,
            },
        ]
    }

    #[test]
    fn test_csv_header_and_column_order() {
        let mut buf = Vec::new();
        write_csv(&track(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "latitude,longitude,waterDepthM");
        assert_eq!(lines.next().unwrap(), "59.1,17.5,-2.25");
        assert_eq!(lines.next().unwrap(), "59.2,17.6,-3.5");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_plot_series_parallel() {
        let series = PlotSeries::from_records(&track());
        assert_eq!(series.len(), 2);
        assert_eq!(series.longitude, vec![17.5, 17.6]);
        assert_eq!(series.latitude, vec![59.1, 59.2]);
        assert_eq!(series.depth, vec![-2.25, -3.5]);
    }
}
