//! Fuzz target for the crop solver.
//!
//! Any point list that parses — including NaN and infinite
//! coordinates, duplicates, or the wrong count — must produce a clean
//! error or a result, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quadcrop::io_points::points_from_json_slice;
use quadcrop::solver::compute_crop;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }
    if let Ok(points) = points_from_json_slice(data) {
        let _ = compute_crop(&points, "tl", true);
        let _ = compute_crop(&points, "br", false);
    }
});
