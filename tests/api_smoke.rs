//! Compile-time smoke test: verify top-level re-exports work.

use sl2_rs::{
    decode, decode_file, write_csv, BlockScanner, GeoRecord, PlotSeries, RawFields, RecordFilter,
    Result, Sl2Error, Sl2Reader,
};

#[test]
fn top_level_imports_compile() {
    // Just verify the types are usable from the crate root
    let _: fn(&[u8]) -> Result<Vec<GeoRecord>> = decode;
    let _: fn(std::path::PathBuf) -> Result<Vec<GeoRecord>> = decode_file;
    let _ = write_csv::<Vec<u8>>;

    let _scanner: Result<BlockScanner> = BlockScanner::new(&[0u8; 10]);
    let _reader: Result<Sl2Reader> = Sl2Reader::new(&[0u8; 10]);
    let _filter = RecordFilter::new();
    let _series = PlotSeries::default();

    let _raw = RawFields {
        depth_raw: 1.0,
        lon_raw: 2,
        lat_raw: 3,
    };
    let _geo: GeoRecord = _raw.to_geo();

    // Sl2Error is accessible
    let _e: Option<Sl2Error> = None;
}
