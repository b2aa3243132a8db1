use approx::assert_relative_eq;
use owlwing::dataset::ChordInterval;

/// Assert that an interval matches `(start, end)` in chord fractions
#[track_caller]
pub fn assert_interval_eq(interval: Option<ChordInterval>, start: f64, end: f64) {
    let interval = interval.expect("expected a separation interval");
    assert_relative_eq!(interval.start, start);
    assert_relative_eq!(interval.end, end);
}

/// Assert that `png` is a PNG stream of the given pixel size
#[track_caller]
pub fn assert_png_dimensions(png: &[u8], width: u32, height: u32) {
    let pixmap = tiny_skia::Pixmap::decode_png(png).expect("frame is not a valid PNG");
    assert_eq!((pixmap.width(), pixmap.height()), (width, height));
}
