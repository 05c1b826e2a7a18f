//! Pure Rust decoder for Lowrance `.sl2` sonar log files.
//!
//! Zero `unsafe`, zero C dependencies. Walks the length-delimited block
//! stream, reads the fixed-offset depth and coordinate fields of each block,
//! converts the raw spherical-Mercator values to decimal degrees and the
//! depth to meters, and drops degenerate records (zero depth, repeated GPS
//! fixes).
//!
//! # Decoding a stream
//!
//! ```
//! use sl2_rs::decode;
//!
//! // A 10-byte header and two 120-byte blocks. The first block only
//! // anchors scanning; the second holds a sounding at the fixed offsets.
//! let mut data = vec![0u8; 10];
//! for _ in 0..2 {
//!     let start = data.len();
//!     data.resize(start + 120, 0);
//!     data[start..start + 2].copy_from_slice(&120u16.to_le_bytes());
//! }
//! data[130 + 62..130 + 66].copy_from_slice(&6.5f32.to_le_bytes());
//! data[130 + 106..130 + 110].copy_from_slice(&1_500_000u32.to_le_bytes());
//! data[130 + 110..130 + 114].copy_from_slice(&7_200_000u32.to_le_bytes());
//!
//! let track = decode(&data).unwrap();
//! assert_eq!(track.len(), 1);
//! assert!(track[0].water_depth_m < 0.0);
//! ```
//!
//! # Streaming records lazily
//!
//! ```
//! use sl2_rs::Sl2Reader;
//!
//! # let mut data = vec![0u8; 10];
//! # for _ in 0..2 {
//! #     let start = data.len();
//! #     data.resize(start + 120, 0);
//! #     data[start..start + 2].copy_from_slice(&120u16.to_le_bytes());
//! # }
//! # data[130 + 62..130 + 66].copy_from_slice(&6.5f32.to_le_bytes());
//! for record in Sl2Reader::new(&data).unwrap() {
//!     let record = record.unwrap();
//!     println!("{record}");
//! }
//! ```
//!
//! # Exporting
//!
//! ```
//! use sl2_rs::{GeoRecord, PlotSeries, write_csv};
//!
//! let track = vec![GeoRecord {
//!     latitude: 59.32,
//!     longitude: 18.07,
//!     water_depth_m: -4.2,
//! }];
//!
//! let mut csv = Vec::new();
//! write_csv(&track, &mut csv).unwrap();
//! assert!(csv.starts_with(b"latitude,longitude,waterDepthM"));
//!
//! let series = PlotSeries::from_records(&track);
//! assert_eq!(series.len(), 1);
//! ```

pub mod error;
pub mod export;
pub mod filter;
pub mod reader;
pub mod record;
pub mod scanner;
pub mod transform;

pub use error::{Result, Sl2Error};
pub use export::{write_csv, PlotSeries};
pub use filter::RecordFilter;
pub use reader::{decode, decode_file, Sl2Reader};
pub use record::{GeoRecord, RawFields};
pub use scanner::BlockScanner;
